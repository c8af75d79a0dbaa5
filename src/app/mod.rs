// SPDX-License-Identifier: MPL-2.0
//! Page root state and orchestration between the widgets.
//!
//! The `Page` owns one instance of every widget whose markup exists and
//! translates [`Message`]s into widget calls. Widgets never talk to each
//! other; the only cross-widget flow is the contact form handing a success
//! to the notification manager.

mod layout;
mod message;
mod subscription;
mod update;

pub use layout::{Capabilities, PageLayout};
pub use message::{Message, Response};
pub use subscription::tick_interval;

use crate::config::Config;
use crate::domain::Timestamp;
use crate::render::Surface;
use crate::ui::notifications::{self, KEYFRAMES_CSS};
use crate::ui::{
    AnchorScroll, ContactForm, Counters, HeaderState, LazyImages, NavToggle, Reveal,
    ScrollIndicator, ScrollTop, Slider,
};
use std::fmt;

/// Root state of the interaction layer for one page load.
pub struct Page {
    config: Config,
    nav: Option<NavToggle>,
    reveal: Option<Reveal>,
    scroll_top: Option<ScrollTop>,
    anchors: AnchorScroll,
    header: Option<HeaderState>,
    counters: Option<Counters>,
    slider: Option<Slider>,
    indicator: Option<ScrollIndicator>,
    lazy_images: Option<LazyImages>,
    form: Option<ContactForm>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("nav_open", &self.nav.as_ref().map(NavToggle::is_open))
            .field("slide", &self.slider.as_ref().map(Slider::active_index))
            .field("notifications", &self.notifications.visible_count())
            .finish_non_exhaustive()
    }
}

impl Page {
    /// Builds the widgets present in `layout` and renders their initial state.
    pub fn mount(
        layout: &PageLayout,
        config: Config,
        now: Timestamp,
        surface: &mut impl Surface,
    ) -> Self {
        let observers = layout.capabilities.intersection_observer;
        if !observers {
            tracing::debug!("intersection observers unavailable, skipping deferred widgets");
        }

        let mut slider = Slider::new(layout.slides, now, &config.slider);
        if let Some(slider) = slider.as_mut() {
            slider.mount(surface);
        }

        surface.inject_stylesheet(KEYFRAMES_CSS);

        let page = Self {
            nav: layout.has_nav.then(|| NavToggle::new(&config.navigation)),
            reveal: (observers && layout.reveal_targets > 0)
                .then(|| Reveal::new(layout.reveal_targets, &config.reveal)),
            scroll_top: layout
                .has_scroll_top
                .then(|| ScrollTop::new(&config.scroll_top)),
            anchors: AnchorScroll::new(&config.anchor),
            header: layout.has_header.then(|| HeaderState::new(&config.header)),
            counters: (observers && !layout.counter_targets.is_empty())
                .then(|| Counters::new(layout.counter_targets.as_slice(), &config.counter)),
            slider,
            indicator: layout
                .has_scroll_indicator
                .then(|| ScrollIndicator::new(&config.indicator)),
            lazy_images: (observers && !layout.lazy_images.is_empty())
                .then(|| LazyImages::new(layout.lazy_images.clone(), &config.lazy_images)),
            form: layout
                .form_fields
                .as_ref()
                .map(|fields| ContactForm::new(fields.iter().copied())),
            notifications: notifications::Manager::new(&config.notifications),
            config,
        };
        tracing::debug!(?page, "page mounted");
        page
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn nav(&self) -> Option<&NavToggle> {
        self.nav.as_ref()
    }

    #[must_use]
    pub fn reveal(&self) -> Option<&Reveal> {
        self.reveal.as_ref()
    }

    #[must_use]
    pub fn counters(&self) -> Option<&Counters> {
        self.counters.as_ref()
    }

    #[must_use]
    pub fn slider(&self) -> Option<&Slider> {
        self.slider.as_ref()
    }

    #[must_use]
    pub fn lazy_images(&self) -> Option<&LazyImages> {
        self.lazy_images.as_ref()
    }

    #[must_use]
    pub fn form(&self) -> Option<&ContactForm> {
        self.form.as_ref()
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn has_slider(&self) -> bool {
        self.slider.is_some()
    }

    #[must_use]
    pub fn has_form(&self) -> bool {
        self.form.is_some()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.notifications.has_notifications()
    }
}
