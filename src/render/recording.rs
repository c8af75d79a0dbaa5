// SPDX-License-Identifier: MPL-2.0
//! In-memory surface that records what widgets render.

use super::{Node, Surface};
use crate::ui::contact_form::Field;
use crate::ui::notifications::NotificationId;
use std::collections::{BTreeMap, BTreeSet};

/// A [`Surface`] that keeps the rendered state in plain collections.
///
/// Sections that [`Surface::scroll_into_view`] can find must be declared with
/// [`RecordingSurface::with_section`].
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    classes: BTreeSet<(Node, String)>,
    class_writes: usize,
    styles: BTreeMap<(Node, String), String>,
    texts: BTreeMap<Node, String>,
    text_history: Vec<(Node, String)>,
    attributes: BTreeMap<(Node, String), String>,
    scrolls: Vec<f64>,
    sections: BTreeSet<String>,
    scrolled_into: Vec<String>,
    field_errors: BTreeMap<Field, String>,
    form_resets: usize,
    notifications: BTreeMap<NotificationId, String>,
    released: BTreeSet<Node>,
    stylesheets: Vec<String>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an element id that [`Surface::scroll_into_view`] can resolve.
    #[must_use]
    pub fn with_section(mut self, id: impl Into<String>) -> Self {
        self.sections.insert(id.into());
        self
    }

    /// Pre-populates an attribute, as markup would.
    #[must_use]
    pub fn with_attribute(mut self, node: Node, name: &str, value: &str) -> Self {
        self.attributes
            .insert((node, name.to_string()), value.to_string());
        self
    }

    #[must_use]
    pub fn has_class(&self, node: Node, class: &str) -> bool {
        self.classes.contains(&(node, class.to_string()))
    }

    /// Nodes currently carrying `class`, in [`Node`] order.
    pub fn nodes_with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = Node> + 'a {
        self.classes
            .iter()
            .filter(move |(_, c)| c == class)
            .map(|(node, _)| *node)
    }

    /// Number of `set_class` calls received so far.
    #[must_use]
    pub fn class_writes(&self) -> usize {
        self.class_writes
    }

    #[must_use]
    pub fn style(&self, node: Node, property: &str) -> Option<&str> {
        self.styles
            .get(&(node, property.to_string()))
            .map(String::as_str)
    }

    #[must_use]
    pub fn text(&self, node: Node) -> Option<&str> {
        self.texts.get(&node).map(String::as_str)
    }

    /// Every text written to `node`, oldest first.
    #[must_use]
    pub fn text_history(&self, node: Node) -> Vec<&str> {
        self.text_history
            .iter()
            .filter(|(n, _)| *n == node)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    #[must_use]
    pub fn attribute(&self, node: Node, name: &str) -> Option<&str> {
        self.attributes
            .get(&(node, name.to_string()))
            .map(String::as_str)
    }

    /// Window scroll targets, oldest first.
    #[must_use]
    pub fn scrolls(&self) -> &[f64] {
        &self.scrolls
    }

    /// Sections scrolled into view, oldest first.
    #[must_use]
    pub fn scrolled_into(&self) -> &[String] {
        &self.scrolled_into
    }

    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn field_error_count(&self) -> usize {
        self.field_errors.len()
    }

    #[must_use]
    pub fn form_resets(&self) -> usize {
        self.form_resets
    }

    #[must_use]
    pub fn notification(&self, id: NotificationId) -> Option<&str> {
        self.notifications.get(&id).map(String::as_str)
    }

    #[must_use]
    pub fn notification_count(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_released(&self, node: Node) -> bool {
        self.released.contains(&node)
    }

    #[must_use]
    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }
}

impl Surface for RecordingSurface {
    fn set_class(&mut self, node: Node, class: &str, enabled: bool) {
        self.class_writes += 1;
        if enabled {
            self.classes.insert((node, class.to_string()));
        } else {
            self.classes.remove(&(node, class.to_string()));
        }
    }

    fn set_style(&mut self, node: Node, property: &str, value: &str) {
        if value.is_empty() {
            self.styles.remove(&(node, property.to_string()));
        } else {
            self.styles
                .insert((node, property.to_string()), value.to_string());
        }
    }

    fn set_text(&mut self, node: Node, text: &str) {
        self.texts.insert(node, text.to_string());
        self.text_history.push((node, text.to_string()));
    }

    fn set_attribute(&mut self, node: Node, name: &str, value: &str) {
        self.attributes
            .insert((node, name.to_string()), value.to_string());
    }

    fn remove_attribute(&mut self, node: Node, name: &str) {
        self.attributes.remove(&(node, name.to_string()));
    }

    fn scroll_window_to(&mut self, top: f64) {
        self.scrolls.push(top);
    }

    fn scroll_into_view(&mut self, section: &str) -> bool {
        if self.sections.contains(section) {
            self.scrolled_into.push(section.to_string());
            true
        } else {
            false
        }
    }

    fn set_field_error(&mut self, field: Field, message: Option<&str>) {
        match message {
            Some(message) => {
                self.field_errors.insert(field, message.to_string());
            }
            None => {
                self.field_errors.remove(&field);
            }
        }
    }

    fn reset_form(&mut self) {
        self.form_resets += 1;
    }

    fn mount_notification(&mut self, id: NotificationId, message: &str) {
        self.notifications.insert(id, message.to_string());
    }

    fn unmount_notification(&mut self, id: NotificationId) {
        self.notifications.remove(&id);
        self.styles.retain(|(node, _), _| *node != Node::Notification(id));
    }

    fn release(&mut self, node: Node) {
        self.released.insert(node);
    }

    fn inject_stylesheet(&mut self, css: &str) {
        self.stylesheets.push(css.to_string());
    }
}
