// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for thresholds and
//! durations used across the widgets. Distances are CSS pixels, durations are
//! milliseconds.

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Viewports at or below this width close the mobile nav when a link is used.
pub const NARROW_VIEWPORT_MAX_WIDTH: f64 = 768.0;

// ==========================================================================
// Observer Defaults
// ==========================================================================

/// Fraction of a reveal target that must be visible to trigger it.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Bottom inset applied to the viewport when observing reveal targets.
pub const REVEAL_BOTTOM_MARGIN: f64 = 50.0;

/// Fraction of a counter that must be visible to start its animation.
pub const COUNTER_THRESHOLD: f32 = 0.5;

/// Lazy images use the observer's default threshold.
pub const LAZY_IMAGE_THRESHOLD: f32 = 0.0;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Scroll offset past which the scroll-to-top button is shown.
pub const SCROLL_TOP_VISIBLE_AFTER: f64 = 500.0;

/// Scroll offset past which the header enters its "scrolled" state.
pub const HEADER_SCROLLED_AFTER: f64 = 100.0;

/// Extra space left above an anchor target, below the fixed header.
pub const ANCHOR_HEADER_GAP: f64 = 20.0;

/// Scroll offset past which the scroll indicator fades out.
pub const INDICATOR_HIDE_AFTER: f64 = 200.0;

/// Indicator opacity while near the top of the page.
pub const INDICATOR_VISIBLE_OPACITY: f32 = 0.7;

/// Indicator opacity once the page has been scrolled.
pub const INDICATOR_HIDDEN_OPACITY: f32 = 0.0;

/// Section the scroll indicator points at.
pub const INDICATOR_TARGET_SECTION: &str = "services";

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Nominal duration of a counter ramp.
pub const COUNTER_DURATION_MS: u64 = 2000;

/// Nominal frame length used to size counter increments.
pub const COUNTER_FRAME_MS: u64 = 16;

/// Delay between autonomous testimonial advances.
pub const SLIDER_INTERVAL_MS: u64 = 8000;

/// How long a notification stays on screen before leaving.
pub const NOTIFICATION_DISPLAY_MS: u64 = 5000;

/// Length of the notification exit transition.
pub const NOTIFICATION_EXIT_MS: u64 = 500;

/// Maximum number of notifications visible at once.
pub const NOTIFICATION_MAX_VISIBLE: usize = 3;

/// Period of the host tick driving timers.
pub const PAGE_TICK_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(REVEAL_THRESHOLD >= 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(COUNTER_THRESHOLD >= 0.0 && COUNTER_THRESHOLD <= 1.0);
    assert!(LAZY_IMAGE_THRESHOLD >= 0.0 && LAZY_IMAGE_THRESHOLD <= 1.0);

    assert!(HEADER_SCROLLED_AFTER < SCROLL_TOP_VISIBLE_AFTER);
    assert!(INDICATOR_HIDDEN_OPACITY < INDICATOR_VISIBLE_OPACITY);

    assert!(COUNTER_FRAME_MS > 0);
    assert!(COUNTER_DURATION_MS >= COUNTER_FRAME_MS);
    assert!(PAGE_TICK_MS > 0);
    assert!(SLIDER_INTERVAL_MS > PAGE_TICK_MS);
    assert!(NOTIFICATION_MAX_VISIBLE > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_runs_about_125_frames() {
        assert_eq!(COUNTER_DURATION_MS / COUNTER_FRAME_MS, 125);
    }

    #[test]
    fn notification_lifetime_is_display_plus_exit() {
        assert_eq!(NOTIFICATION_DISPLAY_MS + NOTIFICATION_EXIT_MS, 5500);
    }

    #[test]
    fn indicator_points_at_services() {
        assert_eq!(INDICATOR_TARGET_SECTION, "services");
    }
}
