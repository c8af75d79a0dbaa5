// SPDX-License-Identifier: MPL-2.0
//! Rendering capability used by every widget.
//!
//! Widgets own their state and never touch the DOM directly. Whenever their
//! state changes they describe the visual consequence through [`Surface`],
//! addressing elements by [`Node`]. The browser binding implements the trait
//! over real elements; [`RecordingSurface`] keeps everything in memory so the
//! widgets can be driven from tests and non-browser hosts.

mod recording;

pub use recording::RecordingSurface;

use crate::ui::contact_form::Field;
use crate::ui::notifications::NotificationId;

/// Class toggled on the nav panel, its toggle, slides and dots.
pub const CLASS_ACTIVE: &str = "active";
/// Class added to revealed elements and the scroll-to-top button.
pub const CLASS_VISIBLE: &str = "visible";
/// Class added to the header once the page is scrolled.
pub const CLASS_SCROLLED: &str = "scrolled";

/// An element of the page contract, addressed independently of the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    Body,
    Header,
    NavPanel,
    NavToggle,
    ScrollTopButton,
    ScrollIndicator,
    /// The n-th testimonial slide.
    Slide(usize),
    /// The indicator dot generated for the n-th slide.
    Dot(usize),
    /// The n-th `.reveal-fade` / `.reveal-slide` element.
    Reveal(usize),
    /// The n-th `.stat-number` element.
    Counter(usize),
    /// The n-th `img[data-src]` element.
    LazyImage(usize),
    /// An input of the contact form.
    Field(Field),
    Notification(NotificationId),
}

/// Side effects a widget may request from its host.
pub trait Surface {
    /// Adds or removes `class` on `node`.
    fn set_class(&mut self, node: Node, class: &str, enabled: bool);

    /// Sets an inline style property; an empty `value` clears it.
    fn set_style(&mut self, node: Node, property: &str, value: &str);

    /// Replaces the text content of `node`.
    fn set_text(&mut self, node: Node, text: &str);

    fn set_attribute(&mut self, node: Node, name: &str, value: &str);

    fn remove_attribute(&mut self, node: Node, name: &str);

    /// Smoothly scrolls the window to the vertical offset `top`.
    fn scroll_window_to(&mut self, top: f64);

    /// Smoothly scrolls the element with id `section` into view.
    ///
    /// Returns `false` when no such element exists.
    fn scroll_into_view(&mut self, section: &str) -> bool;

    /// Shows `message` beneath `field`, or removes its annotation on `None`.
    fn set_field_error(&mut self, field: Field, message: Option<&str>);

    /// Empties every contact form input.
    fn reset_form(&mut self);

    /// Appends a fixed-position notification to the page.
    fn mount_notification(&mut self, id: NotificationId, message: &str);

    /// Removes a notification from the page.
    fn unmount_notification(&mut self, id: NotificationId);

    /// Stops observing `node` for visibility changes.
    fn release(&mut self, node: Node);

    /// Appends a stylesheet to the document head.
    fn inject_stylesheet(&mut self, css: &str);
}
