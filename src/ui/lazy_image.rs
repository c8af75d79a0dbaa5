// SPDX-License-Identifier: MPL-2.0
//! Deferred image loading.
//!
//! Images carrying a `data-src` attribute keep a placeholder until they are
//! first seen; the deferred source is then moved into `src`.

use crate::config::LazyImageConfig;
use crate::domain::VisibilityThreshold;
use crate::render::{Node, Surface};
use crate::watch::OnceWatcher;

/// Attribute holding the deferred source.
pub const DEFERRED_SOURCE_ATTRIBUTE: &str = "data-src";

#[derive(Debug, Clone)]
pub struct LazyImages {
    sources: Vec<String>,
    watcher: OnceWatcher<usize>,
    threshold: VisibilityThreshold,
}

impl LazyImages {
    /// Watches images with the given deferred sources, in document order.
    #[must_use]
    pub fn new(sources: Vec<String>, config: &LazyImageConfig) -> Self {
        let mut watcher = OnceWatcher::new();
        for index in 0..sources.len() {
            watcher.observe(index);
        }
        Self {
            sources,
            watcher,
            threshold: config.threshold,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> VisibilityThreshold {
        self.threshold
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.watcher.pending_count()
    }

    pub fn on_intersection(&mut self, index: usize, intersecting: bool, surface: &mut impl Surface) {
        let sources = &self.sources;
        self.watcher.notify(&index, intersecting, |&index| {
            let node = Node::LazyImage(index);
            if let Some(source) = sources.get(index).filter(|s| !s.is_empty()) {
                surface.set_attribute(node, "src", source);
                surface.remove_attribute(node, DEFERRED_SOURCE_ATTRIBUTE);
                tracing::debug!(index, %source, "lazy image loaded");
            }
            surface.release(node);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;

    fn surface_with_placeholders(sources: &[&str]) -> RecordingSurface {
        sources
            .iter()
            .enumerate()
            .fold(RecordingSurface::new(), |surface, (i, source)| {
                surface
                    .with_attribute(Node::LazyImage(i), "src", "placeholder.svg")
                    .with_attribute(Node::LazyImage(i), DEFERRED_SOURCE_ATTRIBUTE, source)
            })
    }

    #[test]
    fn intersection_swaps_in_real_source() {
        let sources = ["team.jpg", "office.jpg"];
        let mut surface = surface_with_placeholders(&sources);
        let mut images = LazyImages::new(
            sources.iter().map(ToString::to_string).collect(),
            &LazyImageConfig::default(),
        );

        images.on_intersection(1, true, &mut surface);

        assert_eq!(surface.attribute(Node::LazyImage(1), "src"), Some("office.jpg"));
        assert_eq!(surface.attribute(Node::LazyImage(1), DEFERRED_SOURCE_ATTRIBUTE), None);
        assert!(surface.is_released(Node::LazyImage(1)));
        assert_eq!(surface.attribute(Node::LazyImage(0), "src"), Some("placeholder.svg"));
        assert_eq!(images.pending_count(), 1);
    }

    #[test]
    fn image_loads_at_most_once() {
        let mut surface = surface_with_placeholders(&["a.png"]);
        let mut images = LazyImages::new(vec!["a.png".into()], &LazyImageConfig::default());

        images.on_intersection(0, true, &mut surface);
        surface.set_attribute(Node::LazyImage(0), "src", "swapped-by-someone-else.png");
        images.on_intersection(0, true, &mut surface);

        assert_eq!(
            surface.attribute(Node::LazyImage(0), "src"),
            Some("swapped-by-someone-else.png")
        );
    }

    #[test]
    fn empty_deferred_source_only_releases() {
        let mut surface = surface_with_placeholders(&[""]);
        let mut images = LazyImages::new(vec![String::new()], &LazyImageConfig::default());

        images.on_intersection(0, true, &mut surface);

        assert_eq!(surface.attribute(Node::LazyImage(0), "src"), Some("placeholder.svg"));
        assert!(surface.is_released(Node::LazyImage(0)));
    }
}
