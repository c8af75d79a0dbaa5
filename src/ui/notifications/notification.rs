// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::domain::Timestamp;
use std::time::Duration;

/// Unique identifier for a notification, assigned by its manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Where a notification is in its on-screen lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for room on screen.
    #[default]
    Queued,
    /// On screen, playing or done with its enter animation.
    Visible,
    /// Playing its exit animation; removed once it completes.
    Leaving,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    message: String,
    created_at: Timestamp,
    /// When the notification actually appeared; queued ones appear later.
    shown_at: Option<Timestamp>,
    phase: Phase,
}

impl Notification {
    pub fn new(id: NotificationId, message: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id,
            message: message.into(),
            created_at,
            shown_at: None,
            phase: Phase::Queued,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Marks the notification as on screen from `now`.
    pub(super) fn show(&mut self, now: Timestamp) {
        self.shown_at = Some(now);
        self.phase = Phase::Visible;
    }

    pub(super) fn start_leaving(&mut self) {
        self.phase = Phase::Leaving;
    }

    /// How long the notification has been on screen; zero while queued.
    #[must_use]
    pub fn on_screen_for(&self, now: Timestamp) -> Duration {
        self.shown_at.map_or(Duration::ZERO, |shown| now.since(shown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notifications_start_queued() {
        let n = Notification::new(NotificationId::new(1), "hi", Timestamp::from_millis(10));
        assert_eq!(n.phase(), Phase::Queued);
        assert_eq!(n.on_screen_for(Timestamp::from_millis(9_000)), Duration::ZERO);
    }

    #[test]
    fn on_screen_time_counts_from_show() {
        let mut n = Notification::new(NotificationId::new(2), "hi", Timestamp::ZERO);
        n.show(Timestamp::from_millis(1_000));
        assert_eq!(n.phase(), Phase::Visible);
        assert_eq!(
            n.on_screen_for(Timestamp::from_millis(3_500)),
            Duration::from_millis(2_500)
        );
        assert_eq!(n.created_at(), Timestamp::ZERO);
    }

    #[test]
    fn ids_compare_by_value() {
        assert_ne!(NotificationId::new(1), NotificationId::new(2));
        assert_eq!(NotificationId::new(3).value(), 3);
    }
}
