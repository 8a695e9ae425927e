//! Ball records and the ball set.

use std::fmt;

/// A moving point actor.
///
/// Positions are kept in half-cell units so the two half-steps of a tick
/// stay exact. Between ticks the half position is always even.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Ball {
    half: usize,
    pub facing_right: bool,
    pub charged: bool,
}

impl Ball {
    #[must_use]
    pub fn new(position: usize, facing_right: bool, charged: bool) -> Self {
        Self {
            half: position * 2,
            facing_right,
            charged,
        }
    }

    /// Build from the 2-bit palette code: bit 0 = facing right, bit 1 = charged.
    #[must_use]
    pub fn from_code(position: usize, code: usize) -> Self {
        Self::new(position, code & 1 != 0, code & 2 != 0)
    }

    #[must_use]
    pub fn code(&self) -> usize {
        usize::from(self.facing_right) | usize::from(self.charged) << 1
    }

    /// Cell index. Only meaningful between half-steps.
    #[must_use]
    pub fn position(&self) -> usize {
        debug_assert!(self.is_on_cell(), "ball read mid half-step: {self}");
        self.half / 2
    }

    #[must_use]
    pub fn half_position(&self) -> usize {
        self.half
    }

    #[must_use]
    pub fn is_on_cell(&self) -> bool {
        self.half % 2 == 0
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.half = position * 2;
    }

    /// Cell just outside on the left, `ceil(position - 1)`.
    pub(crate) fn left_cell(&self) -> usize {
        self.half.saturating_sub(1) / 2
    }

    /// Cell just outside on the right, `floor(position + 1)`.
    pub(crate) fn right_cell(&self) -> usize {
        (self.half + 2) / 2
    }

    /// Move half a cell in the facing direction.
    pub(crate) fn half_step(&mut self) {
        if self.facing_right {
            self.half += 1;
        } else {
            self.half -= 1;
        }
    }

    pub(crate) fn sort_key(&self) -> (usize, bool) {
        (self.half, self.facing_right)
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match (self.facing_right, self.charged) {
            (false, false) => '<',
            (true, false) => '>',
            (false, true) => '{',
            (true, true) => '}',
        };
        if self.is_on_cell() {
            write!(f, "{arrow}@{}", self.half / 2)
        } else {
            write!(f, "{arrow}@{}.5", self.half / 2)
        }
    }
}

/// Stable sort by (position, facing right), left-facing first on ties.
pub(crate) fn sort_by_position(balls: &mut [Ball]) {
    balls.sort_by_key(Ball::sort_key);
}

/// The dynamic ball collection of a world.
///
/// Order carries no meaning; equality compares the balls as a multiset.
#[derive(Clone, Debug, Default)]
pub struct BallSet {
    balls: Vec<Ball>,
}

impl BallSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ball> {
        self.balls.iter()
    }

    pub fn push(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    /// The ball sitting on `position`, if any.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&Ball> {
        self.balls.iter().find(|b| b.half_position() == position * 2)
    }

    /// Copy of the balls in (position, facing right) order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Ball> {
        let mut balls = self.balls.clone();
        sort_by_position(&mut balls);
        balls
    }

    pub(crate) fn take(&mut self) -> Vec<Ball> {
        std::mem::take(&mut self.balls)
    }

    pub(crate) fn replace(&mut self, balls: Vec<Ball>) {
        self.balls = balls;
    }
}

impl PartialEq for BallSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.sorted() == other.sorted()
    }
}

impl Eq for BallSet {}

impl From<Vec<Ball>> for BallSet {
    fn from(balls: Vec<Ball>) -> Self {
        Self { balls }
    }
}

impl FromIterator<Ball> for BallSet {
    fn from_iter<I: IntoIterator<Item = Ball>>(iter: I) -> Self {
        Self {
            balls: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BallSet {
    type Item = &'a Ball;
    type IntoIter = std::slice::Iter<'a, Ball>;

    fn into_iter(self) -> Self::IntoIter {
        self.balls.iter()
    }
}
