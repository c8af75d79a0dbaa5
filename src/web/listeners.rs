// SPDX-License-Identifier: MPL-2.0
//! Event listeners, intersection observers and the page tick.
//!
//! Callbacks live as long as the page, so their closures are leaked with
//! `forget` once registered.

use super::discover::Markup;
use super::dom::{js_error, ObserverKind};
use super::Host;
use crate::app::Message;
use crate::domain::{ScrollOffset, VisibilityThreshold};
use crate::error::Result;
use crate::render::Node;
use crate::ui::FormSnapshot;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

/// Dispatches `message` on every click of `element`.
fn on_click(
    host: &Rc<Host>,
    element: &Element,
    message: impl Fn() -> Message + 'static,
) -> Result<()> {
    let host = Rc::clone(host);
    listen(element, "click", move |_| {
        let _ = host.dispatch(message());
    })
}

/// Starts one observer per deferred widget kind over its elements.
pub(super) fn observe(host: &Rc<Host>, markup: &Markup) -> Result<()> {
    let (reveal, counters, lazy) = {
        let runtime = host.runtime.borrow();
        let page = &runtime.page;
        (
            page.reveal().map(|reveal| reveal.options()),
            page.counters().map(|counters| {
                let observed: Vec<usize> = (0..markup.counters.len())
                    .filter(|&index| counters.is_observed(index))
                    .collect();
                (counters.threshold(), observed)
            }),
            page.lazy_images().map(|images| images.threshold()),
        )
    };

    if let Some(options) = reveal {
        let targets = indexed(&markup.reveal, Node::Reveal);
        let margin = options.root_margin();
        let observer = start_observer(host, targets, options.threshold, Some(&margin))?;
        host.runtime
            .borrow_mut()
            .surface
            .set_observer(ObserverKind::Reveal, observer);
    }

    if let Some((threshold, observed)) = counters {
        let targets = observed
            .into_iter()
            .filter_map(|index| {
                markup
                    .counters
                    .get(index)
                    .map(|element| (element.clone(), Node::Counter(index)))
            })
            .collect();
        let observer = start_observer(host, targets, threshold, None)?;
        host.runtime
            .borrow_mut()
            .surface
            .set_observer(ObserverKind::Counter, observer);
    }

    if let Some(threshold) = lazy {
        let targets = indexed(&markup.lazy_images, Node::LazyImage);
        let observer = start_observer(host, targets, threshold, None)?;
        host.runtime
            .borrow_mut()
            .surface
            .set_observer(ObserverKind::LazyImage, observer);
    }
    Ok(())
}

fn indexed(elements: &[Element], node: fn(usize) -> Node) -> Vec<(Element, Node)> {
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| (element.clone(), node(index)))
        .collect()
}

fn start_observer(
    host: &Rc<Host>,
    targets: Vec<(Element, Node)>,
    threshold: VisibilityThreshold,
    root_margin: Option<&str>,
) -> Result<IntersectionObserver> {
    let watched: Vec<Element> = targets.iter().map(|(element, _)| element.clone()).collect();
    let weak = Rc::downgrade(host);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let Some(host) = weak.upgrade() else {
                return;
            };
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                if let Some((_, node)) = targets.iter().find(|(element, _)| *element == target) {
                    let _ = host.dispatch(Message::Intersection {
                        node: *node,
                        intersecting: entry.is_intersecting(),
                    });
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(f64::from(threshold.value())));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_error)?;
    callback.forget();

    for element in &watched {
        observer.observe(element);
    }
    Ok(observer)
}

/// Registers every DOM event listener the page needs.
pub(super) fn attach(host: &Rc<Host>, document: &Document, markup: &Markup) -> Result<()> {
    attach_navigation(host, document, markup)?;
    attach_scrolling(host, markup)?;
    attach_slider(host, markup)?;
    attach_form(host, markup)
}

fn attach_navigation(host: &Rc<Host>, document: &Document, markup: &Markup) -> Result<()> {
    let (Some(toggle), Some(panel)) = (&markup.nav_toggle, &markup.nav_panel) else {
        return Ok(());
    };
    on_click(host, toggle, || Message::NavToggleClicked)?;

    for link in &markup.nav_links {
        let host = Rc::clone(host);
        listen(link, "click", move |_| {
            let viewport_width = host
                .window
                .inner_width()
                .ok()
                .and_then(|width| width.as_f64())
                .unwrap_or(0.0);
            let _ = host.dispatch(Message::NavLinkClicked { viewport_width });
        })?;
    }

    let host = Rc::clone(host);
    let toggle = toggle.clone();
    let panel = panel.clone();
    listen(document, "click", move |event| {
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        let target = target.as_ref();
        let _ = host.dispatch(Message::DocumentClicked {
            inside_nav: panel.contains(target),
            inside_toggle: toggle.contains(target),
        });
    })
}

fn attach_scrolling(host: &Rc<Host>, markup: &Markup) -> Result<()> {
    {
        let scrolled = Rc::clone(host);
        listen(&host.window, "scroll", move |_| {
            let offset = scrolled.window.scroll_y().unwrap_or(0.0);
            let _ = scrolled.dispatch(Message::Scrolled(ScrollOffset::new(offset)));
        })?;
    }

    if let Some(button) = &markup.scroll_top {
        on_click(host, button, || Message::ScrollTopClicked)?;
    }
    if let Some(indicator) = &markup.indicator {
        on_click(host, indicator, || Message::ScrollIndicatorClicked)?;
    }

    for anchor in &markup.anchors {
        let host = Rc::clone(host);
        let link = anchor.clone();
        let header = markup.header.clone();
        listen(anchor, "click", move |event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let response = host.dispatch(Message::AnchorClicked {
                target_top: anchor_target_top(&href),
                header_height: header
                    .as_ref()
                    .and_then(|header| header.dyn_ref::<HtmlElement>())
                    .map_or(0.0, |header| f64::from(header.offset_height())),
                href,
            });
            if response.prevent_default {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}

/// Document offset of the element an in-page link points at, if any.
fn anchor_target_top(href: &str) -> Option<f64> {
    if href.is_empty() || href == "#" {
        return None;
    }
    let document = web_sys::window()?.document()?;
    let target = document.query_selector(href).ok().flatten()?;
    target
        .dyn_ref::<HtmlElement>()
        .map(|element| f64::from(element.offset_top()))
}

fn attach_slider(host: &Rc<Host>, markup: &Markup) -> Result<()> {
    if let Some(prev) = &markup.prev_button {
        let at = Rc::clone(host);
        on_click(host, prev, move || Message::SliderPrev(at.now()))?;
    }
    if let Some(next) = &markup.next_button {
        let at = Rc::clone(host);
        on_click(host, next, move || Message::SliderNext(at.now()))?;
    }
    for (index, dot) in markup.dots.iter().enumerate() {
        let at = Rc::clone(host);
        on_click(host, dot, move || Message::SliderDot {
            index,
            at: at.now(),
        })?;
    }
    Ok(())
}

fn attach_form(host: &Rc<Host>, markup: &Markup) -> Result<()> {
    let Some(form) = &markup.form else {
        return Ok(());
    };
    let host = Rc::clone(host);
    let fields = markup.fields.clone();
    listen(form, "submit", move |event| {
        let snapshot = fields
            .iter()
            .fold(FormSnapshot::new(), |snapshot, (field, element)| {
                snapshot.with(*field, field_value(element))
            });
        let response = host.dispatch(Message::FormSubmitted {
            snapshot,
            at: host.now(),
        });
        if response.prevent_default {
            event.prevent_default();
        }
    })
}

fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Drives the slider and notification timers.
pub(super) fn start_ticking(host: &Rc<Host>, period: Duration) -> Result<()> {
    let weak = Rc::downgrade(host);
    let tick = Closure::<dyn FnMut()>::new(move || {
        if let Some(host) = weak.upgrade() {
            let now = host.now();
            let _ = host.dispatch(Message::Tick(now));
        }
    });
    let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
    host.window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            millis,
        )
        .map_err(js_error)?;
    tick.forget();
    Ok(())
}
