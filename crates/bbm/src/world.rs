//! The simulated world: padded grid plus ball set.

use std::collections::HashSet;
use std::ops::AddAssign;

use crate::ball::BallSet;
use crate::error::InvariantViolation;
use crate::phases;
use crate::tile::Tile;
use crate::Grid;

/// Balls created and removed during one tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TickReport {
    /// Copies spawned by duplicators.
    pub duplicated: usize,
    /// Balls stopped by a charged ball they would have passed.
    pub absorbed: usize,
    /// Balls with no free cell to land on.
    pub crushed: usize,
}

impl TickReport {
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.duplicated == 0 && self.absorbed == 0 && self.crushed == 0
    }
}

impl AddAssign for TickReport {
    fn add_assign(&mut self, rhs: Self) {
        self.duplicated += rhs.duplicated;
        self.absorbed += rhs.absorbed;
        self.crushed += rhs.crushed;
    }
}

/// Owned simulation state. Callers hold it exclusively and advance it with
/// [`World::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    grid: Grid,
    balls: BallSet,
    ticks: u64,
}

impl World {
    pub fn new(grid: Grid, balls: impl Into<BallSet>) -> Self {
        Self {
            grid,
            balls: balls.into(),
            ticks: 0,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[must_use]
    pub fn balls(&self) -> &BallSet {
        &self.balls
    }

    /// Ticks advanced since this world was built.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance by exactly one tick.
    pub fn step(&mut self) -> TickReport {
        let balls = self.balls.take();
        let (balls, report) = phases::advance(&mut self.grid, balls);
        self.balls.replace(balls);
        self.ticks += 1;

        if !report.is_quiet() {
            log::debug!(
                "tick {}: +{} duplicated, -{} absorbed, -{} crushed, {} balls",
                self.ticks,
                report.duplicated,
                report.absorbed,
                report.crushed,
                self.balls.len()
            );
        }
        debug_assert_eq!(self.check_invariants(), Ok(()));
        report
    }

    /// Every ball on its own air cell inside the ring, and the ring all wall.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let grid = &self.grid;
        for (position, &tile) in grid.tiles().iter().enumerate() {
            if grid.is_border(position) && tile != Tile::Wall {
                return Err(InvariantViolation::Border { position, tile });
            }
        }

        let mut seen = HashSet::with_capacity(self.balls.len());
        for ball in &self.balls {
            let half = ball.half_position();
            if !ball.is_on_cell() {
                return Err(InvariantViolation::OffCell { half });
            }
            let position = half / 2;
            if position >= grid.tiles().len() || grid.is_border(position) {
                return Err(InvariantViolation::OutOfGrid { half });
            }
            let tile = grid.get(position);
            if tile != Tile::Air {
                return Err(InvariantViolation::NotAir { position, tile });
            }
            if !seen.insert(position) {
                return Err(InvariantViolation::Shared { position });
            }
        }
        Ok(())
    }
}
