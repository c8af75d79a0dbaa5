// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects shared by every widget.
//!
//! Apart from `serde` derives these types have no external dependencies, so
//! the widgets built on them can be tested without a browser.
//!
//! # Modules
//!
//! - [`newtypes`]: clamped values ([`Timestamp`](newtypes::Timestamp),
//!   [`ScrollOffset`](newtypes::ScrollOffset), [`Opacity`](newtypes::Opacity),
//!   [`VisibilityThreshold`](newtypes::VisibilityThreshold))

pub mod newtypes;

pub use newtypes::{Opacity, ScrollOffset, Timestamp, VisibilityThreshold};
