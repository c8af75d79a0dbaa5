// SPDX-License-Identifier: MPL-2.0
//! Scans the document for the widgets' markup.

use super::dom::{js_error, DomSurface};
use super::selectors::*;
use crate::app::{Capabilities, PageLayout};
use crate::error::Result;
use crate::render::Node;
use crate::ui::Field;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlFormElement, Window};

/// Elements the listeners attach to, alongside what the surface writes to.
#[derive(Default)]
pub struct Markup {
    pub nav_toggle: Option<Element>,
    pub nav_panel: Option<Element>,
    pub nav_links: Vec<Element>,
    pub scroll_top: Option<Element>,
    pub header: Option<Element>,
    pub anchors: Vec<Element>,
    pub indicator: Option<Element>,
    pub reveal: Vec<Element>,
    pub counters: Vec<Element>,
    pub lazy_images: Vec<Element>,
    pub prev_button: Option<Element>,
    pub next_button: Option<Element>,
    pub dots: Vec<Element>,
    pub form: Option<HtmlFormElement>,
    pub fields: Vec<(Field, Element)>,
}

fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>> {
    let list = root.query_selector_all(selector).map_err(js_error)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn query_document(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let root = document
        .document_element()
        .ok_or_else(|| crate::error::Error::Dom("document has no root element".into()))?;
    query_all(&root, selector)
}

pub fn has_intersection_observer(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Finds every widget's elements, registers them on `surface` and describes
/// what was found.
pub fn discover(
    window: &Window,
    document: &Document,
    surface: &mut DomSurface,
) -> Result<(PageLayout, Markup)> {
    let mut markup = Markup::default();
    let mut layout = PageLayout {
        capabilities: Capabilities {
            intersection_observer: has_intersection_observer(window),
        },
        ..PageLayout::default()
    };

    if let Some(body) = document.body() {
        surface.register(Node::Body, body.into());
    }

    let toggle = document.get_element_by_id(MOBILE_TOGGLE_ID);
    let panel = document.get_element_by_id(MAIN_NAV_ID);
    if let (Some(toggle), Some(panel)) = (toggle, panel) {
        layout.has_nav = true;
        markup.nav_links = query_all(&panel, NAV_LINK_SELECTOR)?;
        surface.register(Node::NavToggle, toggle.clone());
        surface.register(Node::NavPanel, panel.clone());
        markup.nav_toggle = Some(toggle);
        markup.nav_panel = Some(panel);
    }

    if let Some(button) = document.get_element_by_id(SCROLL_TOP_ID) {
        layout.has_scroll_top = true;
        surface.register(Node::ScrollTopButton, button.clone());
        markup.scroll_top = Some(button);
    }

    if let Some(header) = document.query_selector(HEADER_SELECTOR).map_err(js_error)? {
        layout.has_header = true;
        surface.register(Node::Header, header.clone());
        markup.header = Some(header);
    }

    markup.anchors = query_document(document, ANCHOR_SELECTOR)?;

    if let Some(indicator) = document.get_element_by_id(SCROLL_INDICATOR_ID) {
        layout.has_scroll_indicator = true;
        surface.register(Node::ScrollIndicator, indicator.clone());
        markup.indicator = Some(indicator);
    }

    markup.reveal = query_document(document, REVEAL_SELECTOR)?;
    layout.reveal_targets = markup.reveal.len();
    for (index, element) in markup.reveal.iter().enumerate() {
        surface.register(Node::Reveal(index), element.clone());
    }

    markup.counters = query_document(document, COUNTER_SELECTOR)?;
    for (index, element) in markup.counters.iter().enumerate() {
        layout.counter_targets.push(
            element
                .get_attribute(COUNTER_TARGET_ATTRIBUTE)
                .unwrap_or_default(),
        );
        surface.register(Node::Counter(index), element.clone());
    }

    markup.lazy_images = query_document(document, LAZY_IMAGE_SELECTOR)?;
    for (index, element) in markup.lazy_images.iter().enumerate() {
        layout
            .lazy_images
            .push(element.get_attribute("data-src").unwrap_or_default());
        surface.register(Node::LazyImage(index), element.clone());
    }

    if let Some(slider) = document.get_element_by_id(SLIDER_ID) {
        discover_slider(document, &slider, &mut layout, &mut markup, surface)?;
    }

    if let Some(form) = document
        .query_selector(CONTACT_FORM_SELECTOR)
        .map_err(js_error)?
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    {
        for field in Field::ALL {
            let selector = format!("[name=\"{}\"]", field.name());
            if let Some(input) = form.query_selector(&selector).map_err(js_error)? {
                surface.register(Node::Field(field), input.clone());
                markup.fields.push((field, input));
            }
        }
        layout.form_fields = Some(markup.fields.iter().map(|(field, _)| *field).collect());
        surface.set_form(form.clone());
        markup.form = Some(form);
    }

    Ok((layout, markup))
}

/// Registers the slides and builds one dot per slide.
fn discover_slider(
    document: &Document,
    slider: &Element,
    layout: &mut PageLayout,
    markup: &mut Markup,
    surface: &mut DomSurface,
) -> Result<()> {
    let slides = query_all(slider, SLIDE_SELECTOR)?;
    layout.slides = slides.len();
    for (index, slide) in slides.into_iter().enumerate() {
        surface.register(Node::Slide(index), slide);
    }

    if let Some(container) = document.get_element_by_id(DOTS_CONTAINER_ID) {
        for index in 0..layout.slides {
            let dot = document.create_element("div").map_err(js_error)?;
            dot.set_class_name(DOT_CLASS);
            container.append_child(&dot).map_err(js_error)?;
            surface.register(Node::Dot(index), dot.clone());
            markup.dots.push(dot);
        }
    }

    markup.prev_button = document.get_element_by_id(PREV_BUTTON_ID);
    markup.next_button = document.get_element_by_id(NEXT_BUTTON_ID);
    Ok(())
}

/// Reads the optional inline TOML configuration block.
pub fn embedded_config(document: &Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
}
