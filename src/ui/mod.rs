// SPDX-License-Identifier: MPL-2.0
//! Page widgets.
//!
//! Each widget owns its state and renders through [`Surface`](crate::render::Surface).
//! Widgets are independent of each other; the [`Page`](crate::app::Page)
//! constructs the ones whose markup exists and routes events to them.

pub mod anchor_scroll;
pub mod contact_form;
pub mod counter;
pub mod header;
pub mod lazy_image;
pub mod navigation;
pub mod notifications;
pub mod reveal;
pub mod scroll_indicator;
pub mod scroll_top;
pub mod slider;

pub use anchor_scroll::{AnchorOutcome, AnchorScroll};
pub use contact_form::{ContactForm, Field, FormSnapshot, Submission};
pub use counter::Counters;
pub use header::HeaderState;
pub use lazy_image::LazyImages;
pub use navigation::NavToggle;
pub use reveal::Reveal;
pub use scroll_indicator::ScrollIndicator;
pub use scroll_top::ScrollTop;
pub use slider::Slider;
