// SPDX-License-Identifier: MPL-2.0
//! Smooth scrolling for same-page anchor links.
//!
//! The fixed header would otherwise cover the top of the target, so the
//! scroll stops short of it by the header height plus a small gap.

use crate::config::AnchorConfig;
use crate::render::Surface;

/// What the browser should do with the click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorOutcome {
    /// Let the browser follow the link normally.
    Default,
    /// The scroll was handled; suppress default navigation.
    Handled,
}

#[derive(Debug, Clone)]
pub struct AnchorScroll {
    header_gap: f64,
}

impl AnchorScroll {
    #[must_use]
    pub fn new(config: &AnchorConfig) -> Self {
        Self {
            header_gap: config.header_gap,
        }
    }

    /// Handles activation of a link whose `href` starts with `#`.
    ///
    /// `target_top` is the document offset of the element the fragment
    /// resolves to, `None` when nothing matches. `header_height` is zero when
    /// the page has no fixed header.
    pub fn activate(
        &self,
        href: &str,
        target_top: Option<f64>,
        header_height: f64,
        surface: &mut impl Surface,
    ) -> AnchorOutcome {
        if href.is_empty() || href == "#" {
            return AnchorOutcome::Default;
        }
        let Some(target_top) = target_top else {
            return AnchorOutcome::Default;
        };
        surface.scroll_window_to(self.scroll_position(target_top, header_height));
        AnchorOutcome::Handled
    }

    #[must_use]
    pub fn scroll_position(&self, target_top: f64, header_height: f64) -> f64 {
        target_top - header_height - self.header_gap
    }
}
