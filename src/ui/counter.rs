// SPDX-License-Identifier: MPL-2.0
//! Animated statistic counters.
//!
//! Each `.stat-number` element ramps from 0 to its `data-target` value the
//! first time it is at least half visible. The ramp uses a fixed increment of
//! `target / (duration / frame)` per animation frame, so its real duration
//! depends on the display's frame rate. The final frame always shows the
//! exact target.

use crate::config::CounterConfig;
use crate::domain::VisibilityThreshold;
use crate::error::{Error, Result};
use crate::render::{Node, Surface};
use crate::watch::OnceWatcher;

/// Parses a counter target the way HTML authors write them.
///
/// Leading whitespace and an optional sign are accepted; parsing stops at the
/// first non-digit, so `"500+"` yields 500.
///
/// # Errors
///
/// Returns [`Error::InvalidCounterTarget`] if no digits precede the first
/// other character.
pub fn parse_target(raw: &str) -> Result<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return Err(Error::InvalidCounterTarget(raw.to_string()));
    }
    let magnitude: i64 = digits[..end]
        .parse()
        .map_err(|_| Error::InvalidCounterTarget(raw.to_string()))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// A single running ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    current: f64,
    step: f64,
    finished: bool,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: i64, config: &CounterConfig) -> Self {
        Self {
            target,
            current: 0.0,
            step: target as f64 / config.frame_count(),
            finished: false,
        }
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one frame and returns the value to display.
    ///
    /// Once the ramp reaches the target it snaps to it and stays there.
    pub fn step(&mut self) -> i64 {
        if self.finished {
            return self.target;
        }
        self.current += self.step;
        if self.current < self.target as f64 {
            self.current.ceil() as i64
        } else {
            self.finished = true;
            self.target
        }
    }
}

/// All counters on the page.
#[derive(Debug, Clone)]
pub struct Counters {
    watcher: OnceWatcher<usize>,
    targets: Vec<Option<i64>>,
    running: Vec<(usize, CounterAnimation)>,
    config: CounterConfig,
}

impl Counters {
    /// Registers counters from their raw `data-target` attributes, in document
    /// order. Counters with unparsable targets are left untouched.
    #[must_use]
    pub fn new<S: AsRef<str>>(raw_targets: &[S], config: &CounterConfig) -> Self {
        let mut watcher = OnceWatcher::new();
        let targets = raw_targets
            .iter()
            .enumerate()
            .map(|(index, raw)| match parse_target(raw.as_ref()) {
                Ok(target) => {
                    watcher.observe(index);
                    Some(target)
                }
                Err(err) => {
                    tracing::warn!(index, %err, "counter will not animate");
                    None
                }
            })
            .collect();
        Self {
            watcher,
            targets,
            running: Vec::new(),
            config: config.clone(),
        }
    }

    #[must_use]
    pub fn threshold(&self) -> VisibilityThreshold {
        self.config.threshold
    }

    /// Whether the counter at `index` will animate when seen.
    #[must_use]
    pub fn is_observed(&self, index: usize) -> bool {
        self.watcher.is_pending(&index)
    }

    /// Handles an observer report for counter `index`.
    ///
    /// Starting a ramp renders its first frame immediately. Returns whether
    /// another animation frame is needed.
    pub fn on_intersection(
        &mut self,
        index: usize,
        intersecting: bool,
        surface: &mut impl Surface,
    ) -> bool {
        let targets = &self.targets;
        let config = &self.config;
        let mut started = None;
        self.watcher.notify(&index, intersecting, |&index| {
            surface.release(Node::Counter(index));
            if let Some(target) = targets.get(index).copied().flatten() {
                started = Some(CounterAnimation::new(target, config));
            }
        });
        if let Some(mut animation) = started {
            tracing::debug!(index, target = animation.target(), "counter started");
            surface.set_text(Node::Counter(index), &animation.step().to_string());
            if animation.is_finished() {
                tracing::debug!(index, "counter finished");
            } else {
                self.running.push((index, animation));
            }
        }
        self.is_animating()
    }

    /// Advances every running ramp by one frame. Returns whether another
    /// frame is needed.
    pub fn on_frame(&mut self, surface: &mut impl Surface) -> bool {
        self.running.retain_mut(|(index, animation)| {
            let value = animation.step();
            surface.set_text(Node::Counter(*index), &value.to_string());
            if animation.is_finished() {
                tracing::debug!(index = *index, "counter finished");
            }
            !animation.is_finished()
        });
        self.is_animating()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;

    fn run_to_completion(counters: &mut Counters, surface: &mut RecordingSurface) -> usize {
        let mut frames = 0;
        while counters.on_frame(surface) {
            frames += 1;
            assert!(frames < 10_000, "counter never finished");
        }
        frames
    }

    #[test]
    fn parse_target_follows_leading_integer_rules() {
        assert_eq!(parse_target("500").unwrap(), 500);
        assert_eq!(parse_target("  98%").unwrap(), 98);
        assert_eq!(parse_target("1,200").unwrap(), 1);
        assert_eq!(parse_target("-15").unwrap(), -15);
        assert!(parse_target("").is_err());
        assert!(parse_target("abc").is_err());
        assert!(parse_target("-").is_err());
    }

    #[test]
    fn animation_ends_exactly_on_target() {
        let config = CounterConfig::default();
        for target in [1, 7, 99, 125, 1000, 2500, 12_345] {
            let mut animation = CounterAnimation::new(target, &config);
            let mut last = 0;
            while !animation.is_finished() {
                let value = animation.step();
                assert!(value >= last, "ramp must not go backwards");
                last = value;
            }
            assert_eq!(last, target);
        }
    }

    #[test]
    fn zero_target_finishes_on_first_frame() {
        let mut animation = CounterAnimation::new(0, &CounterConfig::default());
        assert_eq!(animation.step(), 0);
        assert!(animation.is_finished());
    }

    #[test]
    fn negative_target_snaps_on_first_frame() {
        let mut animation = CounterAnimation::new(-15, &CounterConfig::default());
        assert_eq!(animation.step(), -15);
        assert!(animation.is_finished());
        assert_eq!(animation.step(), -15);
    }

    #[test]
    fn default_ramp_uses_125_increments() {
        let mut animation = CounterAnimation::new(500, &CounterConfig::default());
        assert_eq!(animation.step(), 4);
        assert_eq!(animation.step(), 8);
    }

    #[test]
    fn intersection_starts_ramp_and_releases_counter() {
        let mut surface = RecordingSurface::new();
        let mut counters = Counters::new(&["250"], &CounterConfig::default());

        assert!(counters.on_intersection(0, true, &mut surface));
        assert_eq!(surface.text(Node::Counter(0)), Some("2"));
        assert!(surface.is_released(Node::Counter(0)));

        run_to_completion(&mut counters, &mut surface);
        assert_eq!(surface.text(Node::Counter(0)), Some("250"));
    }

    #[test]
    fn counter_animates_only_once() {
        let mut surface = RecordingSurface::new();
        let mut counters = Counters::new(&["40"], &CounterConfig::default());

        counters.on_intersection(0, true, &mut surface);
        run_to_completion(&mut counters, &mut surface);
        let writes = surface.text_history(Node::Counter(0)).len();

        assert!(!counters.on_intersection(0, true, &mut surface));
        assert_eq!(surface.text_history(Node::Counter(0)).len(), writes);
    }

    #[test]
    fn invalid_targets_are_never_observed() {
        let mut surface = RecordingSurface::new();
        let mut counters = Counters::new(&["n/a", "12"], &CounterConfig::default());

        assert!(!counters.is_observed(0));
        assert!(counters.is_observed(1));
        assert!(!counters.on_intersection(0, true, &mut surface));
        assert_eq!(surface.text(Node::Counter(0)), None);
    }

    #[test]
    fn several_counters_share_frames() {
        let mut surface = RecordingSurface::new();
        let mut counters = Counters::new(&["10", "20000"], &CounterConfig::default());

        counters.on_intersection(0, true, &mut surface);
        counters.on_intersection(1, true, &mut surface);
        run_to_completion(&mut counters, &mut surface);

        assert_eq!(surface.text(Node::Counter(0)), Some("10"));
        assert_eq!(surface.text(Node::Counter(1)), Some("20000"));
    }
}
