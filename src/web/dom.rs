// SPDX-License-Identifier: MPL-2.0
//! [`Surface`] implementation writing straight to the live document.

use super::selectors::{
    ERROR_MESSAGE_CLASS, ERROR_MESSAGE_STYLE, NOTIFICATION_CLASS, NOTIFICATION_STYLE,
};
use crate::error::{Error, Result};
use crate::render::{Node, Surface};
use crate::ui::notifications::NotificationId;
use crate::ui::Field;
use std::collections::HashMap;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, IntersectionObserver, ScrollBehavior,
    ScrollIntoViewOptions, ScrollToOptions, Window,
};

/// Which observer watches a node, so `release` can stop watching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObserverKind {
    Reveal,
    Counter,
    LazyImage,
}

impl ObserverKind {
    fn of(node: Node) -> Option<Self> {
        match node {
            Node::Reveal(_) => Some(Self::Reveal),
            Node::Counter(_) => Some(Self::Counter),
            Node::LazyImage(_) => Some(Self::LazyImage),
            _ => None,
        }
    }
}

/// Converts a thrown JavaScript value into a crate error.
pub fn js_error(value: JsValue) -> Error {
    Error::Dom(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

/// Logs a failed DOM write; surface calls are fire-and-forget.
fn report(result: Result<()>, operation: &str) {
    if let Err(err) = result {
        tracing::warn!(operation, %err, "DOM write failed");
    }
}

pub struct DomSurface {
    window: Window,
    document: Document,
    elements: HashMap<Node, Element>,
    form: Option<HtmlFormElement>,
    notifications: HashMap<NotificationId, Element>,
    observers: HashMap<ObserverKind, IntersectionObserver>,
}

impl DomSurface {
    pub fn new(window: Window, document: Document) -> Self {
        Self {
            window,
            document,
            elements: HashMap::new(),
            form: None,
            notifications: HashMap::new(),
            observers: HashMap::new(),
        }
    }

    /// Binds `node` to a concrete element. Unbound nodes are ignored on write.
    pub fn register(&mut self, node: Node, element: Element) {
        self.elements.insert(node, element);
    }

    pub fn set_form(&mut self, form: HtmlFormElement) {
        self.form = Some(form);
    }

    pub fn set_observer(&mut self, kind: ObserverKind, observer: IntersectionObserver) {
        self.observers.insert(kind, observer);
    }

    pub fn element(&self, node: Node) -> Option<&Element> {
        match node {
            Node::Notification(id) => self.notifications.get(&id),
            _ => self.elements.get(&node),
        }
    }

    fn html(&self, node: Node) -> Option<&HtmlElement> {
        self.element(node)?.dyn_ref::<HtmlElement>()
    }

    fn write_class(&self, node: Node, class: &str, enabled: bool) -> Result<()> {
        let Some(element) = self.element(node) else {
            return Ok(());
        };
        let classes = element.class_list();
        if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        }
        .map_err(js_error)
    }

    fn write_style(&self, node: Node, property: &str, value: &str) -> Result<()> {
        let Some(element) = self.html(node) else {
            return Ok(());
        };
        let style = element.style();
        if value.is_empty() {
            style.remove_property(property).map(drop).map_err(js_error)
        } else {
            style.set_property(property, value).map_err(js_error)
        }
    }

    fn write_field_error(&self, field: Field, message: Option<&str>) -> Result<()> {
        let Some(group) = self
            .element(Node::Field(field))
            .and_then(Element::parent_element)
        else {
            return Ok(());
        };
        let existing = group
            .query_selector(&format!(".{ERROR_MESSAGE_CLASS}"))
            .map_err(js_error)?;

        match (message, existing) {
            (None, Some(span)) => span.remove(),
            (None, None) => {}
            (Some(text), Some(span)) => span.set_text_content(Some(text)),
            (Some(text), None) => {
                let span = self.document.create_element("span").map_err(js_error)?;
                span.set_class_name(ERROR_MESSAGE_CLASS);
                span.set_attribute("style", ERROR_MESSAGE_STYLE)
                    .map_err(js_error)?;
                span.set_text_content(Some(text));
                group.append_child(&span).map_err(js_error)?;
            }
        }
        Ok(())
    }

    fn build_notification(&self, message: &str) -> Result<Element> {
        let container = self.document.create_element("div").map_err(js_error)?;
        container.set_class_name(NOTIFICATION_CLASS);
        container
            .set_attribute("style", NOTIFICATION_STYLE)
            .map_err(js_error)?;

        let icon = self.document.create_element("i").map_err(js_error)?;
        icon.set_class_name("fas fa-check-circle");
        let text = self.document.create_element("p").map_err(js_error)?;
        text.set_text_content(Some(message));
        container.append_child(&icon).map_err(js_error)?;
        container.append_child(&text).map_err(js_error)?;

        let body = self
            .document
            .body()
            .ok_or_else(|| Error::Dom("document has no body".into()))?;
        body.append_child(&container).map_err(js_error)?;
        Ok(container)
    }

    fn append_stylesheet(&self, css: &str) -> Result<()> {
        let head = self
            .document
            .head()
            .ok_or_else(|| Error::Dom("document has no head".into()))?;
        let style = self.document.create_element("style").map_err(js_error)?;
        style.set_text_content(Some(css));
        head.append_child(&style).map_err(js_error)?;
        Ok(())
    }
}

impl Surface for DomSurface {
    fn set_class(&mut self, node: Node, class: &str, enabled: bool) {
        report(self.write_class(node, class, enabled), "set_class");
    }

    fn set_style(&mut self, node: Node, property: &str, value: &str) {
        report(self.write_style(node, property, value), "set_style");
    }

    fn set_text(&mut self, node: Node, text: &str) {
        if let Some(element) = self.element(node) {
            element.set_text_content(Some(text));
        }
    }

    fn set_attribute(&mut self, node: Node, name: &str, value: &str) {
        if let Some(element) = self.element(node) {
            report(
                element.set_attribute(name, value).map_err(js_error),
                "set_attribute",
            );
        }
    }

    fn remove_attribute(&mut self, node: Node, name: &str) {
        if let Some(element) = self.element(node) {
            report(
                element.remove_attribute(name).map_err(js_error),
                "remove_attribute",
            );
        }
    }

    fn scroll_window_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&mut self, section: &str) -> bool {
        let Some(target) = self.document.get_element_by_id(section) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn set_field_error(&mut self, field: Field, message: Option<&str>) {
        report(self.write_field_error(field, message), "set_field_error");
    }

    fn reset_form(&mut self) {
        if let Some(form) = &self.form {
            form.reset();
        }
    }

    fn mount_notification(&mut self, id: NotificationId, message: &str) {
        match self.build_notification(message) {
            Ok(element) => {
                self.notifications.insert(id, element);
            }
            Err(err) => tracing::warn!(id = id.value(), %err, "could not mount notification"),
        }
    }

    fn unmount_notification(&mut self, id: NotificationId) {
        if let Some(element) = self.notifications.remove(&id) {
            element.remove();
        }
    }

    fn release(&mut self, node: Node) {
        let observer = ObserverKind::of(node).and_then(|kind| self.observers.get(&kind));
        if let (Some(observer), Some(element)) = (observer, self.elements.get(&node)) {
            observer.unobserve(element);
        }
    }

    fn inject_stylesheet(&mut self, css: &str) {
        report(self.append_stylesheet(css), "inject_stylesheet");
    }
}
