// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications slide in at the top-right corner, stay for a fixed time,
//! then slide out and are removed from the page. They never block
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct and its lifecycle phase
//! - [`manager`] - `Manager` for queuing and timed expiry
//!
//! # Usage
//!
//! ```
//! use site_interactions::config::NotificationConfig;
//! use site_interactions::domain::Timestamp;
//! use site_interactions::render::RecordingSurface;
//! use site_interactions::ui::notifications::Manager;
//!
//! let mut surface = RecordingSurface::new();
//! let mut manager = Manager::new(&NotificationConfig::default());
//!
//! manager.push("Message sent", Timestamp::ZERO, &mut surface);
//! assert_eq!(surface.notification_count(), 1);
//!
//! // Driven by the page tick.
//! manager.tick(Timestamp::from_millis(5_500), &mut surface);
//! assert_eq!(surface.notification_count(), 0);
//! ```

mod manager;
mod notification;

pub use manager::Manager;
pub use notification::{Notification, NotificationId, Phase};

/// Keyframes used by the notification enter and exit animations.
pub const KEYFRAMES_CSS: &str = "
    @keyframes slideInRight {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes slideOutRight {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(100%); opacity: 0; }
    }
";

/// Shown after a contact form passes validation.
pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. We'll get back to you soon.";
