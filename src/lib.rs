// SPDX-License-Identifier: MPL-2.0
//! `site_interactions` is the client-side interaction layer of the
//! HygienExperts marketing site.
//!
//! It drives mobile navigation, reveal-on-scroll animations, the testimonial
//! carousel, statistic counters, smooth anchor scrolling, lazy images and the
//! contact form. Widgets are plain state machines rendering through
//! [`render::Surface`], so everything except the thin `web` binding (built
//! for `wasm32` only) runs and is tested natively.

#![doc(html_root_url = "https://docs.rs/site_interactions/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod ui;
pub mod watch;

#[cfg(target_arch = "wasm32")]
pub mod web;
