// SPDX-License-Identifier: MPL-2.0
//! Timers the host has to keep running for the page.

use super::Page;
use std::time::Duration;

/// Returns the tick period the page currently needs, if any.
///
/// Ticks drive slider auto-advance and notification expiry; a page with
/// neither a slider nor a contact form can skip them entirely.
#[must_use]
pub fn tick_interval(page: &Page) -> Option<Duration> {
    if page.has_slider() || page.has_form() || page.has_notifications() {
        Some(Duration::from_millis(page.config().page.tick_ms.max(1)))
    } else {
        None
    }
}
