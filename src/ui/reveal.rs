// SPDX-License-Identifier: MPL-2.0
//! Reveal-on-scroll animations.
//!
//! Elements tagged `reveal-fade` or `reveal-slide` start hidden; the first
//! time one scrolls into view it receives the `visible` class and is released
//! from observation, so scrolling back out never hides it again.

use crate::config::RevealConfig;
use crate::domain::VisibilityThreshold;
use crate::render::{Node, Surface, CLASS_VISIBLE};
use crate::watch::OnceWatcher;

/// Observer options for reveal targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: VisibilityThreshold,
    /// Inset subtracted from the bottom of the viewport.
    pub bottom_margin: f64,
}

impl ObserverOptions {
    /// Formats the options as an `IntersectionObserver` root margin.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin)
    }
}

#[derive(Debug, Clone)]
pub struct Reveal {
    watcher: OnceWatcher<usize>,
    options: ObserverOptions,
}

impl Reveal {
    /// Watches `count` reveal targets, indexed in document order.
    #[must_use]
    pub fn new(count: usize, config: &RevealConfig) -> Self {
        let mut watcher = OnceWatcher::new();
        for index in 0..count {
            watcher.observe(index);
        }
        Self {
            watcher,
            options: ObserverOptions {
                threshold: config.threshold,
                bottom_margin: config.bottom_margin,
            },
        }
    }

    #[must_use]
    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    /// Handles an observer report for target `index`.
    pub fn on_intersection(&mut self, index: usize, intersecting: bool, surface: &mut impl Surface) {
        self.watcher.notify(&index, intersecting, |&index| {
            surface.set_class(Node::Reveal(index), CLASS_VISIBLE, true);
            surface.release(Node::Reveal(index));
        });
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.watcher.pending_count()
    }
}
