// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and removal of
//! notifications. It limits the number of visible toasts; each visible toast
//! stays for the display time, then plays its exit animation and is removed.

use super::notification::{Notification, NotificationId, Phase};
use crate::config::NotificationConfig;
use crate::domain::Timestamp;
use crate::render::{Node, Surface};
use std::collections::VecDeque;
use std::time::Duration;

const ENTER_ANIMATION: &str = "slideInRight 0.5s ease";

/// Exit animation lasting exactly as long as the notification stays mounted.
fn exit_animation(exit: Duration) -> String {
    format!("slideOutRight {}ms ease forwards", exit.as_millis())
}

/// Manages the notification queue and visible notifications.
#[derive(Debug)]
pub struct Manager {
    /// Currently visible notifications, oldest first.
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
    next_id: u64,
    max_visible: usize,
    display: Duration,
    exit: Duration,
}

impl Manager {
    #[must_use]
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            next_id: 0,
            max_visible: config.max_visible.max(1),
            display: config.display(),
            exit: config.exit(),
        }
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than the maximum are showing, it appears immediately.
    /// Otherwise it is queued and shown when space becomes available.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        now: Timestamp,
        surface: &mut impl Surface,
    ) -> NotificationId {
        let id = NotificationId::new(self.next_id);
        self.next_id += 1;
        let notification = Notification::new(id, message, now);

        if self.visible.len() < self.max_visible {
            self.show(notification, now, surface);
        } else {
            tracing::debug!(id = id.value(), "notification queued");
            self.queue.push_back(notification);
        }
        id
    }

    /// Processes a tick, advancing every visible notification's lifecycle.
    ///
    /// Should be called periodically (the page tick) to expire notifications.
    pub fn tick(&mut self, now: Timestamp, surface: &mut impl Surface) {
        let display = self.display;
        let lifetime = self.display + self.exit;
        let exit_animation = exit_animation(self.exit);

        for notification in &mut self.visible {
            let age = notification.on_screen_for(now);
            if notification.phase() == Phase::Visible && age >= display && age < lifetime {
                notification.start_leaving();
                surface.set_style(
                    Node::Notification(notification.id()),
                    "animation",
                    &exit_animation,
                );
                tracing::debug!(id = notification.id().value(), "notification leaving");
            }
        }

        let before = self.visible.len();
        self.visible.retain(|notification| {
            let expired = notification.on_screen_for(now) >= lifetime;
            if expired {
                surface.unmount_notification(notification.id());
                tracing::debug!(id = notification.id().value(), "notification removed");
            }
            !expired
        });

        if self.visible.len() < before {
            self.promote_from_queue(now, surface);
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn show(&mut self, mut notification: Notification, now: Timestamp, surface: &mut impl Surface) {
        notification.show(now);
        let id = notification.id();
        surface.mount_notification(id, notification.message());
        surface.set_style(Node::Notification(id), "animation", ENTER_ANIMATION);
        tracing::debug!(id = id.value(), "notification shown");
        self.visible.push_back(notification);
    }

    /// Promotes notifications from the queue while there is space.
    fn promote_from_queue(&mut self, now: Timestamp, surface: &mut impl Surface) {
        while self.visible.len() < self.max_visible {
            if let Some(notification) = self.queue.pop_front() {
                self.show(notification, now, surface);
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;

    fn at(millis: u64) -> Timestamp {
        Timestamp::from_millis(millis)
    }

    fn manager() -> Manager {
        Manager::new(&NotificationConfig::default())
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = manager();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_mounts_with_enter_animation() {
        let mut surface = RecordingSurface::new();
        let mut manager = manager();
        let id = manager.push("saved", at(0), &mut surface);

        assert_eq!(surface.notification(id), Some("saved"));
        assert_eq!(
            surface.style(Node::Notification(id), "animation"),
            Some(ENTER_ANIMATION)
        );
    }

    #[test]
    fn notification_leaves_after_display_time_then_is_removed() {
        let mut surface = RecordingSurface::new();
        let mut manager = manager();
        let id = manager.push("sent", at(1_000), &mut surface);

        manager.tick(at(5_999), &mut surface);
        assert_eq!(manager.visible().next().map(Notification::phase), Some(Phase::Visible));

        manager.tick(at(6_000), &mut surface);
        assert_eq!(manager.visible().next().map(Notification::phase), Some(Phase::Leaving));
        assert_eq!(
            surface.style(Node::Notification(id), "animation"),
            Some("slideOutRight 500ms ease forwards")
        );

        manager.tick(at(6_499), &mut surface);
        assert_eq!(surface.notification_count(), 1);

        manager.tick(at(6_500), &mut surface);
        assert_eq!(surface.notification_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn exit_animation_follows_configured_exit_time() {
        let config = NotificationConfig {
            exit_ms: 800,
            ..NotificationConfig::default()
        };
        let mut surface = RecordingSurface::new();
        let mut manager = Manager::new(&config);
        let id = manager.push("sent", at(0), &mut surface);

        manager.tick(at(5_000), &mut surface);
        assert_eq!(
            surface.style(Node::Notification(id), "animation"),
            Some("slideOutRight 800ms ease forwards")
        );

        manager.tick(at(5_799), &mut surface);
        assert_eq!(surface.notification_count(), 1);
        manager.tick(at(5_800), &mut surface);
        assert_eq!(surface.notification_count(), 0);
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut surface = RecordingSurface::new();
        let mut manager = manager();

        for i in 0..NotificationConfig::default().max_visible {
            manager.push(format!("test-{i}"), at(0), &mut surface);
        }
        manager.push("queued", at(0), &mut surface);

        assert_eq!(manager.visible_count(), 3);
        assert_eq!(manager.queued_count(), 1);
        assert_eq!(surface.notification_count(), 3);
    }

    #[test]
    fn queued_notification_gets_full_display_time_after_promotion() {
        let mut surface = RecordingSurface::new();
        let mut manager = manager();
        for i in 0..3 {
            manager.push(format!("visible-{i}"), at(0), &mut surface);
        }
        let queued = manager.push("queued", at(100), &mut surface);

        manager.tick(at(5_500), &mut surface);
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(surface.notification(queued), Some("queued"));

        manager.tick(at(10_499), &mut surface);
        assert_eq!(surface.notification_count(), 1);
        manager.tick(at(11_000), &mut surface);
        assert_eq!(surface.notification_count(), 0);
    }
}
