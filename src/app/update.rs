// SPDX-License-Identifier: MPL-2.0
//! Update logic: routes each message to the widgets it concerns.

use super::{Message, Page, Response};
use crate::domain::{ScrollOffset, Timestamp};
use crate::render::{Node, Surface};
use crate::ui::notifications::CONTACT_SUCCESS_MESSAGE;
use crate::ui::{AnchorOutcome, FormSnapshot, Submission};

impl Page {
    /// Handles one event and returns what the host must do next.
    pub fn update(&mut self, message: Message, surface: &mut impl Surface) -> Response {
        match message {
            Message::Scrolled(offset) => {
                self.handle_scroll(offset, surface);
                Response::NONE
            }
            Message::NavToggleClicked => {
                if let Some(nav) = self.nav.as_mut() {
                    nav.toggle(surface);
                }
                Response::NONE
            }
            Message::NavLinkClicked { viewport_width } => {
                if let Some(nav) = self.nav.as_mut() {
                    nav.link_activated(viewport_width, surface);
                }
                Response::NONE
            }
            Message::DocumentClicked {
                inside_nav,
                inside_toggle,
            } => {
                if let Some(nav) = self.nav.as_mut() {
                    nav.document_clicked(inside_nav, inside_toggle, surface);
                }
                Response::NONE
            }
            Message::ScrollTopClicked => {
                if let Some(button) = &self.scroll_top {
                    button.activate(surface);
                }
                Response::NONE
            }
            Message::AnchorClicked {
                href,
                target_top,
                header_height,
            } => match self
                .anchors
                .activate(&href, target_top, header_height, surface)
            {
                AnchorOutcome::Handled => Response::prevent_default(),
                AnchorOutcome::Default => Response::NONE,
            },
            Message::ScrollIndicatorClicked => {
                if let Some(indicator) = &self.indicator {
                    indicator.activate(surface);
                }
                Response::NONE
            }
            Message::Intersection { node, intersecting } => {
                self.handle_intersection(node, intersecting, surface)
            }
            Message::AnimationFrame => {
                let animating = self
                    .counters
                    .as_mut()
                    .is_some_and(|counters| counters.on_frame(surface));
                Response::request_frame(animating)
            }
            Message::SliderPrev(at) => {
                if let Some(slider) = self.slider.as_mut() {
                    slider.prev(at, surface);
                }
                Response::NONE
            }
            Message::SliderNext(at) => {
                if let Some(slider) = self.slider.as_mut() {
                    slider.next(at, surface);
                }
                Response::NONE
            }
            Message::SliderDot { index, at } => {
                if let Some(slider) = self.slider.as_mut() {
                    slider.go_to(index, at, surface);
                }
                Response::NONE
            }
            Message::Tick(now) => {
                if let Some(slider) = self.slider.as_mut() {
                    slider.tick(now, surface);
                }
                self.notifications.tick(now, surface);
                Response::NONE
            }
            Message::FormSubmitted { snapshot, at } => self.handle_submit(&snapshot, at, surface),
        }
    }

    fn handle_scroll(&mut self, offset: ScrollOffset, surface: &mut impl Surface) {
        if let Some(button) = &self.scroll_top {
            button.on_scroll(offset, surface);
        }
        if let Some(header) = self.header.as_mut() {
            header.on_scroll(offset, surface);
        }
        if let Some(indicator) = &self.indicator {
            indicator.on_scroll(offset, surface);
        }
    }

    fn handle_intersection(
        &mut self,
        node: Node,
        intersecting: bool,
        surface: &mut impl Surface,
    ) -> Response {
        match node {
            Node::Reveal(index) => {
                if let Some(reveal) = self.reveal.as_mut() {
                    reveal.on_intersection(index, intersecting, surface);
                }
                Response::NONE
            }
            Node::Counter(index) => {
                let animating = self
                    .counters
                    .as_mut()
                    .is_some_and(|counters| counters.on_intersection(index, intersecting, surface));
                Response::request_frame(animating)
            }
            Node::LazyImage(index) => {
                if let Some(images) = self.lazy_images.as_mut() {
                    images.on_intersection(index, intersecting, surface);
                }
                Response::NONE
            }
            other => {
                tracing::debug!(?other, "intersection for unobserved node");
                Response::NONE
            }
        }
    }

    /// Submission is always intercepted: there is no backend to post to.
    fn handle_submit(
        &mut self,
        snapshot: &FormSnapshot,
        at: Timestamp,
        surface: &mut impl Surface,
    ) -> Response {
        let Some(form) = self.form.as_mut() else {
            return Response::NONE;
        };
        if form.submit(snapshot, surface) == Submission::Accepted {
            self.notifications.push(CONTACT_SUCCESS_MESSAGE, at, surface);
        }
        Response::prevent_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{tick_interval, Capabilities, PageLayout};
    use crate::config::Config;
    use crate::render::{RecordingSurface, CLASS_ACTIVE, CLASS_SCROLLED, CLASS_VISIBLE};
    use crate::ui::Field;
    use std::time::Duration;

    fn mount(layout: PageLayout) -> (Page, RecordingSurface) {
        let mut surface = RecordingSurface::new().with_section("services");
        let page = Page::mount(&layout, Config::default(), Timestamp::ZERO, &mut surface);
        (page, surface)
    }

    #[test]
    fn mount_renders_first_slide_and_injects_keyframes() {
        let (page, surface) = mount(PageLayout::full(3));
        assert_eq!(page.slider().map(|s| s.active_index()), Some(0));
        assert!(surface.has_class(Node::Slide(0), CLASS_ACTIVE));
        assert!(surface.has_class(Node::Dot(0), CLASS_ACTIVE));
        assert_eq!(surface.stylesheets().len(), 1);
        assert!(surface.stylesheets()[0].contains("slideOutRight"));
    }

    #[test]
    fn scroll_updates_every_scroll_widget() {
        let (mut page, mut surface) = mount(PageLayout::full(0));
        let _ = page.update(Message::Scrolled(ScrollOffset::new(600.0)), &mut surface);

        assert!(surface.has_class(Node::ScrollTopButton, CLASS_VISIBLE));
        assert!(surface.has_class(Node::Header, CLASS_SCROLLED));
        assert_eq!(surface.style(Node::ScrollIndicator, "opacity"), Some("0"));
    }

    #[test]
    fn empty_page_ignores_every_event() {
        let (mut page, mut surface) = mount(PageLayout::default());
        let events = [
            Message::Scrolled(ScrollOffset::new(900.0)),
            Message::NavToggleClicked,
            Message::ScrollTopClicked,
            Message::ScrollIndicatorClicked,
            Message::SliderNext(Timestamp::ZERO),
            Message::Tick(Timestamp::from_millis(9_000)),
            Message::AnimationFrame,
        ];
        for event in events {
            assert_eq!(page.update(event, &mut surface), Response::NONE);
        }
        assert_eq!(surface.class_writes(), 0);
        assert!(surface.scrolls().is_empty());
        assert_eq!(tick_interval(&page), None);
    }

    #[test]
    fn anchor_click_prevents_default_only_when_handled() {
        let (mut page, mut surface) = mount(PageLayout::default());
        let handled = page.update(
            Message::AnchorClicked {
                href: "#contact".into(),
                target_top: Some(2_000.0),
                header_height: 90.0,
            },
            &mut surface,
        );
        assert!(handled.prevent_default);
        assert_eq!(surface.scrolls(), [1_890.0]);

        let deferred = page.update(
            Message::AnchorClicked {
                href: "#".into(),
                target_top: Some(0.0),
                header_height: 90.0,
            },
            &mut surface,
        );
        assert!(!deferred.prevent_default);
    }

    #[test]
    fn counter_intersection_requests_frames_until_done() {
        let layout = PageLayout {
            counter_targets: vec!["500".into()],
            ..PageLayout::default()
        };
        let (mut page, mut surface) = mount(layout);

        let mut response = page.update(
            Message::Intersection {
                node: Node::Counter(0),
                intersecting: true,
            },
            &mut surface,
        );
        let mut frames = 0;
        while response.request_frame {
            response = page.update(Message::AnimationFrame, &mut surface);
            frames += 1;
        }
        assert_eq!(frames, 124);
        assert_eq!(surface.text(Node::Counter(0)), Some("500"));
    }

    #[test]
    fn missing_observer_capability_skips_deferred_widgets() {
        let layout = PageLayout {
            reveal_targets: 2,
            counter_targets: vec!["10".into()],
            lazy_images: vec!["a.jpg".into()],
            capabilities: Capabilities {
                intersection_observer: false,
            },
            ..PageLayout::default()
        };
        let (mut page, mut surface) = mount(layout);
        assert!(page.reveal().is_none());
        assert!(page.counters().is_none());
        assert!(page.lazy_images().is_none());

        let _ = page.update(
            Message::Intersection {
                node: Node::LazyImage(0),
                intersecting: true,
            },
            &mut surface,
        );
        assert_eq!(surface.attribute(Node::LazyImage(0), "src"), None);
    }

    #[test]
    fn successful_submission_shows_notification_and_needs_ticks() {
        let (mut page, mut surface) = mount(PageLayout::full(0));
        let snapshot = FormSnapshot::new()
            .with(Field::Name, "Ana")
            .with(Field::Email, "ana@example.com")
            .with(Field::Phone, "555")
            .with(Field::Message, "Hello");

        let response = page.update(
            Message::FormSubmitted {
                snapshot,
                at: Timestamp::from_millis(100),
            },
            &mut surface,
        );

        assert!(response.prevent_default);
        assert_eq!(surface.notification_count(), 1);
        assert_eq!(tick_interval(&page), Some(Duration::from_millis(100)));

        let _ = page.update(Message::Tick(Timestamp::from_millis(5_600)), &mut surface);
        assert_eq!(surface.notification_count(), 0);
    }
}
