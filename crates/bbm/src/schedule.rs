//! Play mode: run many ticks back to back in time slices so a host event
//! loop can render and handle input between slices.
//!
//! The stop predicate and the deadline are only checked between ticks; a
//! tick always runs to completion.

use serde::{Deserialize, Serialize};

use crate::world::{TickReport, World};

/// Millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// `Instant` is unavailable in the browser; use the JS clock there.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

#[cfg(target_arch = "wasm32")]
impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "wasm32")]
impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Play-mode tuning, deserialized from host JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Wall-clock length of one slice before yielding to the host.
    pub slice_ms: f64,
    /// Optional hard cap on ticks per slice.
    pub max_ticks_per_slice: Option<u32>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            slice_ms: 20.0,
            max_ticks_per_slice: None,
        }
    }
}

impl PlayConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SliceOutcome {
    /// Deadline or tick cap reached; call again after yielding.
    Yielded,
    /// The predicate asked to stop.
    Stopped,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Slice {
    pub ticks: u32,
    pub outcome: SliceOutcome,
    /// Sum of the reports of every tick in the slice.
    pub report: TickReport,
}

/// Tick `world` until the slice deadline passes, the tick cap is hit, or
/// `should_continue` returns false after a tick.
pub fn run_slice(
    world: &mut World,
    clock: &impl Clock,
    config: &PlayConfig,
    mut should_continue: impl FnMut(&World) -> bool,
) -> Slice {
    let deadline = clock.now_ms() + config.slice_ms;
    let mut ticks = 0u32;
    let mut report = TickReport::default();

    let outcome = loop {
        if config.max_ticks_per_slice.is_some_and(|cap| ticks >= cap) || clock.now_ms() >= deadline {
            break SliceOutcome::Yielded;
        }
        report += world.step();
        ticks += 1;
        if !should_continue(world) {
            break SliceOutcome::Stopped;
        }
    };

    log::trace!("slice ran {ticks} ticks ({outcome:?}), world at tick {}", world.ticks());
    Slice {
        ticks,
        outcome,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::world_from_rows;
    use std::cell::Cell;

    /// Advances by a fixed amount on every read.
    struct StepClock {
        now: Cell<f64>,
        step: f64,
    }

    impl StepClock {
        fn new(step: f64) -> Self {
            Self {
                now: Cell::new(0.0),
                step,
            }
        }
    }

    impl Clock for StepClock {
        fn now_ms(&self) -> f64 {
            let now = self.now.get();
            self.now.set(now + self.step);
            now
        }
    }

    fn corridor() -> World {
        world_from_rows(&[">.......<"])
    }

    #[test]
    fn slice_yields_at_deadline() {
        let mut world = corridor();
        let clock = StepClock::new(1.0);
        let config = PlayConfig {
            slice_ms: 5.0,
            max_ticks_per_slice: None,
        };
        let slice = run_slice(&mut world, &clock, &config, |_| true);
        // Deadline read at t=0, then ticks start at t=1..=4.
        assert_eq!(slice.ticks, 4);
        assert_eq!(slice.outcome, SliceOutcome::Yielded);
        assert_eq!(world.ticks(), 4);
    }

    #[test]
    fn slice_stops_when_predicate_fails() {
        let mut world = corridor();
        let clock = StepClock::new(0.0);
        let slice = run_slice(&mut world, &clock, &PlayConfig::default(), |w| w.ticks() < 3);
        assert_eq!(slice.ticks, 3);
        assert_eq!(slice.outcome, SliceOutcome::Stopped);
    }

    #[test]
    fn slice_respects_tick_cap() {
        let mut world = corridor();
        let clock = StepClock::new(0.0);
        let config = PlayConfig {
            slice_ms: 20.0,
            max_ticks_per_slice: Some(7),
        };
        let slice = run_slice(&mut world, &clock, &config, |_| true);
        assert_eq!(slice.ticks, 7);
        assert_eq!(slice.outcome, SliceOutcome::Yielded);
        assert_eq!(world.ticks(), 7);
    }

    #[test]
    fn empty_slice_runs_nothing() {
        let mut world = corridor();
        let before = world.clone();
        let config = PlayConfig {
            slice_ms: 0.0,
            max_ticks_per_slice: None,
        };
        let slice = run_slice(&mut world, &StepClock::new(0.0), &config, |_| true);
        assert_eq!(slice.ticks, 0);
        assert_eq!(world, before);
    }

    #[test]
    fn slice_report_sums_ticks() {
        let mut world = world_from_rows(&[".>.D..", "######"]);
        let config = PlayConfig {
            slice_ms: 1000.0,
            max_ticks_per_slice: Some(2),
        };
        let slice = run_slice(&mut world, &StepClock::new(0.0), &config, |_| true);
        assert_eq!(slice.report.duplicated, 1);
        assert_eq!(world.balls().len(), 2);
    }

    #[test]
    fn sliced_play_matches_single_steps() {
        let mut sliced = corridor();
        let mut stepped = corridor();
        let config = PlayConfig {
            slice_ms: 1000.0,
            max_ticks_per_slice: Some(4),
        };
        for _ in 0..5 {
            run_slice(&mut sliced, &StepClock::new(0.0), &config, |_| true);
        }
        for _ in 0..20 {
            stepped.step();
        }
        assert_eq!(sliced, stepped);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn config_from_json() {
        assert_eq!(PlayConfig::from_json("{}").unwrap(), PlayConfig::default());
        let config = PlayConfig::from_json(r#"{"slice_ms": 50, "max_ticks_per_slice": 100}"#).unwrap();
        assert_eq!(config.slice_ms, 50.0);
        assert_eq!(config.max_ticks_per_slice, Some(100));
        assert!(PlayConfig::from_json(r#"{"slice_ms": "fast"}"#).is_err());
    }
}
