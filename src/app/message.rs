// SPDX-License-Identifier: MPL-2.0
//! Page events and the host-facing response.

use crate::domain::{ScrollOffset, Timestamp};
use crate::render::Node;
use crate::ui::FormSnapshot;

/// Events consumed by `Page::update`. The host translates browser events into
/// these; every timed event carries the moment it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The window scrolled to a new vertical offset.
    Scrolled(ScrollOffset),
    NavToggleClicked,
    /// A link inside the nav panel was activated.
    NavLinkClicked { viewport_width: f64 },
    /// A click landed somewhere on the document.
    DocumentClicked { inside_nav: bool, inside_toggle: bool },
    ScrollTopClicked,
    /// A same-page `#` link was activated. `target_top` is `None` when the
    /// fragment matches nothing; `header_height` is zero without a header.
    AnchorClicked {
        href: String,
        target_top: Option<f64>,
        header_height: f64,
    },
    ScrollIndicatorClicked,
    /// An observer reported a visibility change for `node`.
    Intersection { node: Node, intersecting: bool },
    /// The browser is about to paint a frame.
    AnimationFrame,
    SliderPrev(Timestamp),
    SliderNext(Timestamp),
    SliderDot { index: usize, at: Timestamp },
    /// Periodic tick for slider auto-advance and notification expiry.
    Tick(Timestamp),
    FormSubmitted { snapshot: FormSnapshot, at: Timestamp },
}

/// What the host must do after dispatching a message.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Response {
    /// Suppress the browser's default action for the triggering event.
    pub prevent_default: bool,
    /// Schedule an animation frame and dispatch [`Message::AnimationFrame`].
    pub request_frame: bool,
}

impl Response {
    pub const NONE: Self = Self {
        prevent_default: false,
        request_frame: false,
    };

    pub fn prevent_default() -> Self {
        Self {
            prevent_default: true,
            ..Self::NONE
        }
    }

    pub fn request_frame(request: bool) -> Self {
        Self {
            request_frame: request,
            ..Self::NONE
        }
    }
}
