// SPDX-License-Identifier: MPL-2.0
//! Browser binding: wires the live document to a [`Page`].
//!
//! Everything here is glue. DOM events become [`Message`]s, the page updates
//! through a [`DomSurface`], and the returned [`Response`] tells us whether
//! to cancel the event or schedule another animation frame.

mod discover;
mod dom;
mod listeners;
mod selectors;

pub use dom::DomSurface;

use crate::app::{tick_interval, Message, Page, Response};
use crate::config::{self, Config};
use crate::domain::Timestamp;
use crate::error::{Error, Result};
use dom::js_error;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

struct Runtime {
    page: Page,
    surface: DomSurface,
}

/// Shared state behind every registered callback.
struct Host {
    window: Window,
    runtime: RefCell<Runtime>,
    frame_callback: RefCell<Option<Closure<dyn FnMut()>>>,
    frame_pending: Cell<bool>,
}

impl Host {
    fn now(&self) -> Timestamp {
        let millis = self.window.performance().map_or(0.0, |p| p.now());
        Timestamp::from_millis_f64(millis)
    }

    fn dispatch(&self, message: Message) -> Response {
        let response = {
            let mut runtime = self.runtime.borrow_mut();
            let Runtime { page, surface } = &mut *runtime;
            page.update(message, surface)
        };
        if response.request_frame {
            self.request_frame();
        }
        response
    }

    fn request_frame(&self) {
        if self.frame_pending.replace(true) {
            return;
        }
        let callback = self.frame_callback.borrow();
        let Some(callback) = callback.as_ref() else {
            self.frame_pending.set(false);
            return;
        };
        if let Err(err) = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            self.frame_pending.set(false);
            tracing::warn!(err = %js_error(err), "could not schedule animation frame");
        }
    }
}

/// Module entry point.
#[wasm_bindgen(start)]
pub fn start() {
    if let Err(err) = start_when_ready() {
        tracing::error!(%err, "site interactions failed to start");
    }
}

fn start_when_ready() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| Error::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| Error::Dom("no document".into()))?;

    if document.ready_state() != "loading" {
        return boot(window, document);
    }

    let target = document.clone();
    let ready: Closure<dyn FnMut()> = Closure::once(move || {
        if let Err(err) = boot(window, document) {
            tracing::error!(%err, "site interactions failed to start");
        }
    });
    target
        .add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())
        .map_err(js_error)?;
    ready.forget();
    Ok(())
}

fn load_config(document: &Document) -> Config {
    let Some(source) = discover::embedded_config(document) else {
        return Config::default();
    };
    match config::from_toml_str(&source) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "ignoring malformed embedded configuration");
            Config::default()
        }
    }
}

fn boot(window: Window, document: Document) -> Result<()> {
    let config = load_config(&document);
    let mut surface = DomSurface::new(window.clone(), document.clone());
    let (layout, markup) = discover::discover(&window, &document, &mut surface)?;

    let now = Timestamp::from_millis_f64(window.performance().map_or(0.0, |p| p.now()));
    let page = Page::mount(&layout, config, now, &mut surface);
    let tick = tick_interval(&page);

    let host = Rc::new(Host {
        window,
        runtime: RefCell::new(Runtime { page, surface }),
        frame_callback: RefCell::new(None),
        frame_pending: Cell::new(false),
    });

    let weak = Rc::downgrade(&host);
    *host.frame_callback.borrow_mut() = Some(Closure::new(move || {
        if let Some(host) = weak.upgrade() {
            host.frame_pending.set(false);
            let _ = host.dispatch(Message::AnimationFrame);
        }
    }));

    listeners::observe(&host, &markup)?;
    listeners::attach(&host, &document, &markup)?;
    if let Some(period) = tick {
        listeners::start_ticking(&host, period)?;
    }
    tracing::info!("site interactions ready");
    Ok(())
}
