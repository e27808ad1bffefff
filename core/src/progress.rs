//! Progress sources for the simulated transfer.
//!
//! The controller asks its [`ProgressSource`] for one increment per tick.
//! Production code uses [`RandomProgress`]; tests plug in a deterministic one.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::MAX_TICK_DELTA;
use crate::entry::FileEntry;

/// Supplies the progress increment applied on each tick.
///
/// Returned values are clamped into `(0, MAX_TICK_DELTA]` by the controller.
pub trait ProgressSource {
    fn next_tick(&mut self, entry: &EntryView<'_>) -> f64;
}

/// Read-only view of the entry being advanced.
#[derive(Clone, Copy, Debug)]
pub struct EntryView<'a> {
    pub name: &'a str,
    pub size_bytes: u64,
    pub progress: f64,
}

impl<'a> EntryView<'a> {
    pub(crate) fn of<F>(entry: &'a FileEntry<F>) -> Self {
        Self {
            name: entry.name(),
            size_bytes: entry.size_bytes(),
            progress: entry.progress(),
        }
    }
}

/// Unseeded random increments in `(0, 10]`.
pub struct RandomProgress {
    rng: StdRng,
}

impl RandomProgress {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for RandomProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSource for RandomProgress {
    fn next_tick(&mut self, _entry: &EntryView<'_>) -> f64 {
        // gen() is in [0, 1), flip it so zero is excluded and the max included
        MAX_TICK_DELTA * (1.0 - self.rng.gen::<f64>())
    }
}

/// Same increment on every tick.
#[derive(Clone, Copy, Debug)]
pub struct FixedProgress(pub f64);

impl ProgressSource for FixedProgress {
    fn next_tick(&mut self, _entry: &EntryView<'_>) -> f64 {
        self.0
    }
}

/// Replays a fixed list of increments, then repeats the last one.
#[derive(Clone, Debug)]
pub struct ScriptedProgress {
    steps: VecDeque<f64>,
    last: f64,
}

impl ScriptedProgress {
    pub fn new(steps: impl IntoIterator<Item = f64>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            last: MAX_TICK_DELTA,
        }
    }
}

impl ProgressSource for ScriptedProgress {
    fn next_tick(&mut self, _entry: &EntryView<'_>) -> f64 {
        if let Some(step) = self.steps.pop_front() {
            self.last = step;
        }
        self.last
    }
}

/// Keep a raw increment inside `(0, MAX_TICK_DELTA]`.
pub(crate) fn clamp_delta(delta: f64) -> f64 {
    if delta.is_nan() || delta <= 0.0 {
        f64::MIN_POSITIVE
    } else {
        delta.min(MAX_TICK_DELTA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> EntryView<'static> {
        EntryView {
            name: "a.txt",
            size_bytes: 1,
            progress: 0.0,
        }
    }

    #[test]
    fn test_random_progress_range() {
        let mut source = RandomProgress::new();
        for _ in 0..1_000 {
            let delta = source.next_tick(&view());
            assert!(delta > 0.0 && delta <= MAX_TICK_DELTA, "delta {delta}");
        }
    }

    #[test]
    fn test_scripted_progress_repeats_last() {
        let mut source = ScriptedProgress::new([3.0, 7.5]);
        assert_eq!(source.next_tick(&view()), 3.0);
        assert_eq!(source.next_tick(&view()), 7.5);
        assert_eq!(source.next_tick(&view()), 7.5);
    }

    #[test]
    fn test_clamp_delta() {
        assert_eq!(clamp_delta(25.0), MAX_TICK_DELTA);
        assert_eq!(clamp_delta(4.0), 4.0);
        assert!(clamp_delta(0.0) > 0.0);
        assert!(clamp_delta(-1.0) > 0.0);
        assert!(clamp_delta(f64::NAN) > 0.0);
    }
}
