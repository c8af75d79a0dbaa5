// SPDX-License-Identifier: MPL-2.0
//! Description of the markup a page actually contains.
//!
//! Not every page includes every widget. The host inspects the document once
//! at startup and fills in a `PageLayout`; widgets whose markup is absent are
//! never constructed.

use crate::ui::Field;

/// Runtime features the widgets depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether `IntersectionObserver` exists. Without it, reveal targets,
    /// counters and lazy images stay in their static state.
    pub intersection_observer: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            intersection_observer: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    /// Both the mobile toggle and the main nav exist.
    pub has_nav: bool,
    pub has_scroll_top: bool,
    pub has_header: bool,
    pub has_scroll_indicator: bool,
    pub reveal_targets: usize,
    /// Raw `data-target` values of `.stat-number` elements.
    pub counter_targets: Vec<String>,
    /// Slides inside the testimonial slider, zero without a slider.
    pub slides: usize,
    /// `data-src` values of deferred images.
    pub lazy_images: Vec<String>,
    /// Fields of the contact form, `None` without a form.
    pub form_fields: Option<Vec<Field>>,
    pub capabilities: Capabilities,
}

impl PageLayout {
    /// A layout with every widget present, the shape of the home page.
    #[must_use]
    pub fn full(slides: usize) -> Self {
        Self {
            has_nav: true,
            has_scroll_top: true,
            has_header: true,
            has_scroll_indicator: true,
            reveal_targets: 0,
            counter_targets: Vec::new(),
            slides,
            lazy_images: Vec::new(),
            form_fields: Some(Field::ALL.to_vec()),
            capabilities: Capabilities::default(),
        }
    }
}
