// SPDX-License-Identifier: MPL-2.0
//! Hero scroll indicator.
//!
//! Points visitors at the services section and fades out once the page has
//! been scrolled.

use crate::config::IndicatorConfig;
use crate::domain::{Opacity, ScrollOffset};
use crate::render::{Node, Surface};

#[derive(Debug, Clone)]
pub struct ScrollIndicator {
    hide_after: f64,
    visible_opacity: Opacity,
    hidden_opacity: Opacity,
    target_section: String,
}

impl ScrollIndicator {
    #[must_use]
    pub fn new(config: &IndicatorConfig) -> Self {
        Self {
            hide_after: config.hide_after,
            visible_opacity: config.visible_opacity,
            hidden_opacity: config.hidden_opacity,
            target_section: config.target_section.clone(),
        }
    }

    #[must_use]
    pub fn opacity_at(&self, offset: ScrollOffset) -> Opacity {
        if offset.is_past(self.hide_after) {
            self.hidden_opacity
        } else {
            self.visible_opacity
        }
    }

    pub fn on_scroll(&self, offset: ScrollOffset, surface: &mut impl Surface) {
        surface.set_style(
            Node::ScrollIndicator,
            "opacity",
            &self.opacity_at(offset).to_css(),
        );
    }

    /// Scrolls the target section into view; does nothing if it is absent.
    pub fn activate(&self, surface: &mut impl Surface) {
        if !surface.scroll_into_view(&self.target_section) {
            tracing::debug!(section = %self.target_section, "indicator target missing");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;
    use approx::assert_relative_eq;

    #[test]
    fn opacity_drops_past_threshold() {
        let indicator = ScrollIndicator::new(&IndicatorConfig::default());
        assert_relative_eq!(indicator.opacity_at(ScrollOffset::new(0.0)).value(), 0.7);
        assert_relative_eq!(indicator.opacity_at(ScrollOffset::new(200.0)).value(), 0.7);
        assert_relative_eq!(indicator.opacity_at(ScrollOffset::new(201.0)).value(), 0.0);
    }

    #[test]
    fn opacity_is_recomputed_when_scrolling_back() {
        let mut surface = RecordingSurface::new();
        let indicator = ScrollIndicator::new(&IndicatorConfig::default());

        indicator.on_scroll(ScrollOffset::new(600.0), &mut surface);
        assert_eq!(surface.style(Node::ScrollIndicator, "opacity"), Some("0"));
        indicator.on_scroll(ScrollOffset::new(50.0), &mut surface);
        assert_eq!(surface.style(Node::ScrollIndicator, "opacity"), Some("0.7"));
    }

    #[test]
    fn activation_scrolls_to_services_when_present() {
        let indicator = ScrollIndicator::new(&IndicatorConfig::default());

        let mut with_services = RecordingSurface::new().with_section("services");
        indicator.activate(&mut with_services);
        assert_eq!(with_services.scrolled_into(), ["services".to_string()]);

        let mut without = RecordingSurface::new();
        indicator.activate(&mut without);
        assert!(without.scrolled_into().is_empty());
    }
}
