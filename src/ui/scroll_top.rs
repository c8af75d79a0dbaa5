// SPDX-License-Identifier: MPL-2.0
//! Floating scroll-to-top button.

use crate::config::ScrollTopConfig;
use crate::domain::ScrollOffset;
use crate::render::{Node, Surface, CLASS_VISIBLE};

#[derive(Debug, Clone)]
pub struct ScrollTop {
    visible_after: f64,
}

impl ScrollTop {
    #[must_use]
    pub fn new(config: &ScrollTopConfig) -> Self {
        Self {
            visible_after: config.visible_after,
        }
    }

    /// Shows the button past the threshold and hides it otherwise.
    ///
    /// The class is written on every scroll event; nothing is cached.
    pub fn on_scroll(&self, offset: ScrollOffset, surface: &mut impl Surface) {
        surface.set_class(
            Node::ScrollTopButton,
            CLASS_VISIBLE,
            offset.is_past(self.visible_after),
        );
    }

    pub fn activate(&self, surface: &mut impl Surface) {
        surface.scroll_window_to(0.0);
    }
}
