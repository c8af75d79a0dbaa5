// SPDX-License-Identifier: MPL-2.0
//! Mobile navigation toggle.
//!
//! The nav panel opens and closes from its toggle button. While open, the
//! page body stops scrolling. Link activation on narrow viewports and clicks
//! outside both the panel and the toggle close it again.

use crate::config::NavigationConfig;
use crate::render::{Node, Surface, CLASS_ACTIVE};

#[derive(Debug, Clone)]
pub struct NavToggle {
    is_open: bool,
    narrow_viewport_max_width: f64,
}

impl NavToggle {
    #[must_use]
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            is_open: false,
            narrow_viewport_max_width: config.narrow_viewport_max_width,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Flips the panel open or closed.
    pub fn toggle(&mut self, surface: &mut impl Surface) {
        self.is_open = !self.is_open;
        tracing::debug!(open = self.is_open, "nav toggled");
        self.render(surface);
    }

    /// Handles activation of a link inside the panel.
    ///
    /// Only closes on narrow viewports; on desktop the panel is not an overlay.
    pub fn link_activated(&mut self, viewport_width: f64, surface: &mut impl Surface) {
        if viewport_width <= self.narrow_viewport_max_width {
            self.close(surface);
        }
    }

    /// Handles a click anywhere on the document.
    pub fn document_clicked(
        &mut self,
        inside_panel: bool,
        inside_toggle: bool,
        surface: &mut impl Surface,
    ) {
        if self.is_open && !inside_panel && !inside_toggle {
            self.close(surface);
        }
    }

    /// Closes the panel. Closing a closed panel renders the same state again.
    pub fn close(&mut self, surface: &mut impl Surface) {
        if self.is_open {
            tracing::debug!("nav closed");
        }
        self.is_open = false;
        self.render(surface);
    }

    fn render(&self, surface: &mut impl Surface) {
        surface.set_class(Node::NavPanel, CLASS_ACTIVE, self.is_open);
        surface.set_class(Node::NavToggle, CLASS_ACTIVE, self.is_open);
        surface.set_style(
            Node::Body,
            "overflow",
            if self.is_open { "hidden" } else { "" },
        );
    }
}
