// SPDX-License-Identifier: MPL-2.0
//! Interaction newtypes.
//!
//! This module provides type-safe wrappers for values crossing the boundary
//! between the browser and the widgets, ensuring they are always within
//! valid ranges.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// Timestamp
// =============================================================================

/// Milliseconds elapsed since the page started.
///
/// Widgets never read a clock themselves; the host stamps every timed event
/// with one of these (the browser binding uses `performance.now()`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The moment the page started.
    pub const ZERO: Self = Self(0);

    /// Creates a timestamp from whole milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Creates a timestamp from a fractional millisecond reading, flooring it.
    ///
    /// Negative and non-finite readings collapse to [`Timestamp::ZERO`].
    #[must_use]
    pub fn from_millis_f64(millis: f64) -> Self {
        if millis.is_finite() && millis > 0.0 {
            Self(millis.floor() as u64)
        } else {
            Self::ZERO
        }
    }

    /// Returns the raw millisecond value.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the timestamp shifted forward by `duration`, saturating.
    #[must_use]
    pub fn after(self, duration: Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self(self.0.saturating_add(millis))
    }

    /// Returns the time elapsed since `earlier`, or zero if `earlier` is later.
    #[must_use]
    pub fn since(self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }
}

// =============================================================================
// ScrollOffset
// =============================================================================

/// Vertical scroll offset of the viewport, never negative.
///
/// Elastic overscroll on some platforms reports negative offsets; those are
/// treated as the top of the page.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollOffset(f64);

impl ScrollOffset {
    /// Creates a new offset, clamping negative and non-finite values to zero.
    #[must_use]
    pub fn new(offset: f64) -> Self {
        if offset.is_finite() && offset > 0.0 {
            Self(offset)
        } else {
            Self(0.0)
        }
    }

    /// Returns the raw offset.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns whether the offset is strictly past `threshold`.
    #[must_use]
    pub fn is_past(self, threshold: f64) -> bool {
        self.0 > threshold
    }
}

// =============================================================================
// Opacity
// =============================================================================

/// CSS opacity, guaranteed to be within 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Opacity(f32);

impl Opacity {
    /// Creates a new opacity, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(1.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Formats the value for an inline `opacity` style.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("{}", self.0)
    }
}

impl From<f32> for Opacity {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Opacity> for f32 {
    fn from(value: Opacity) -> Self {
        value.0
    }
}

// =============================================================================
// VisibilityThreshold
// =============================================================================

/// Intersection ratio required before an observer reports a subject.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct VisibilityThreshold(f32);

impl VisibilityThreshold {
    /// Creates a new threshold, clamping the value to 0.0–1.0.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw ratio.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for VisibilityThreshold {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<VisibilityThreshold> for f32 {
    fn from(value: VisibilityThreshold) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn timestamp_floors_fractional_readings() {
        assert_eq!(Timestamp::from_millis_f64(1234.9).as_millis(), 1234);
        assert_eq!(Timestamp::from_millis_f64(-5.0), Timestamp::ZERO);
        assert_eq!(Timestamp::from_millis_f64(f64::NAN), Timestamp::ZERO);
    }

    #[test]
    fn timestamp_arithmetic_saturates() {
        let t = Timestamp::from_millis(1000);
        assert_eq!(t.after(Duration::from_millis(500)).as_millis(), 1500);
        assert_eq!(t.since(Timestamp::from_millis(400)), Duration::from_millis(600));
        assert_eq!(Timestamp::ZERO.since(t), Duration::ZERO);
        assert_eq!(
            Timestamp::from_millis(u64::MAX).after(Duration::from_secs(1)),
            Timestamp::from_millis(u64::MAX)
        );
    }

    #[test]
    fn scroll_offset_clamps_overscroll() {
        assert_relative_eq!(ScrollOffset::new(-30.0).value(), 0.0);
        assert_relative_eq!(ScrollOffset::new(250.5).value(), 250.5);
    }

    #[test]
    fn scroll_offset_threshold_is_strict() {
        assert!(!ScrollOffset::new(500.0).is_past(500.0));
        assert!(ScrollOffset::new(500.1).is_past(500.0));
    }

    #[test]
    fn opacity_clamps_and_formats() {
        assert_relative_eq!(Opacity::new(1.5).value(), 1.0);
        assert_relative_eq!(Opacity::new(-0.5).value(), 0.0);
        assert_eq!(Opacity::new(0.7).to_css(), "0.7");
        assert_eq!(Opacity::new(0.0).to_css(), "0");
    }

    #[test]
    fn threshold_clamps_to_unit_range() {
        assert_relative_eq!(VisibilityThreshold::new(2.0).value(), 1.0);
        assert_relative_eq!(VisibilityThreshold::new(0.1).value(), 0.1);
        assert_relative_eq!(VisibilityThreshold::new(f32::NAN).value(), 0.0);
    }
}
