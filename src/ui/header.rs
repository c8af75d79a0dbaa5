// SPDX-License-Identifier: MPL-2.0
//! Header "scrolled" state.
//!
//! The header switches to its compact style once the page leaves the top.
//! Only the current offset matters: there is no hysteresis and the scroll
//! direction is ignored.

use crate::config::HeaderConfig;
use crate::domain::ScrollOffset;
use crate::render::{Node, Surface, CLASS_SCROLLED};

#[derive(Debug, Clone)]
pub struct HeaderState {
    scrolled_after: f64,
    scrolled: bool,
}

impl HeaderState {
    #[must_use]
    pub fn new(config: &HeaderConfig) -> Self {
        Self {
            scrolled_after: config.scrolled_after,
            scrolled: false,
        }
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn on_scroll(&mut self, offset: ScrollOffset, surface: &mut impl Surface) {
        self.scrolled = offset.is_past(self.scrolled_after);
        surface.set_class(Node::Header, CLASS_SCROLLED, self.scrolled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;

    #[test]
    fn scrolled_past_threshold() {
        let mut surface = RecordingSurface::new();
        let mut header = HeaderState::new(&HeaderConfig::default());

        header.on_scroll(ScrollOffset::new(101.0), &mut surface);
        assert!(header.is_scrolled());
        assert!(surface.has_class(Node::Header, CLASS_SCROLLED));

        header.on_scroll(ScrollOffset::new(100.0), &mut surface);
        assert!(!header.is_scrolled());
        assert!(!surface.has_class(Node::Header, CLASS_SCROLLED));
    }

    #[test]
    fn direction_does_not_matter() {
        let mut surface = RecordingSurface::new();
        let mut header = HeaderState::new(&HeaderConfig::default());

        header.on_scroll(ScrollOffset::new(900.0), &mut surface);
        header.on_scroll(ScrollOffset::new(400.0), &mut surface);
        assert!(header.is_scrolled(), "scrolling up but still past 100");
    }
}
