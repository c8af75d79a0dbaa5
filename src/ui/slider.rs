// SPDX-License-Identifier: MPL-2.0
//! Testimonial carousel.
//!
//! The slider cycles through a fixed set of slides, each paired with an
//! indicator dot. Exactly one slide and its dot are active at any time.
//! Visitors navigate with the prev/next controls or by clicking a dot, and a
//! timer advances the carousel on its own.
//!
//! # Timer and manual navigation
//!
//! With [`AdvancePolicy::Free`] the timer keeps a fixed schedule regardless of
//! manual navigation, so a click shortly before a scheduled advance is
//! followed almost immediately by another transition. With
//! [`AdvancePolicy::ResetOnManual`] each manual transition restarts the full
//! interval.

use crate::config::{AdvancePolicy, SliderConfig};
use crate::domain::Timestamp;
use crate::render::{Node, Surface, CLASS_ACTIVE};
use std::time::Duration;

/// How a transition was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Manual,
    Timer,
}

#[derive(Debug, Clone)]
pub struct Slider {
    len: usize,
    active: usize,
    interval: Duration,
    policy: AdvancePolicy,
    next_advance: Timestamp,
}

impl Slider {
    /// Creates a slider over `len` slides, started at `now`.
    ///
    /// Returns `None` when there are no slides; the carousel is then skipped.
    #[must_use]
    pub fn new(len: usize, now: Timestamp, config: &SliderConfig) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let interval = config.interval();
        Some(Self {
            len,
            active: 0,
            interval,
            policy: config.advance,
            next_advance: now.after(interval),
        })
    }

    /// Renders the initial state: first slide and first dot active.
    pub fn mount(&mut self, surface: &mut impl Surface) {
        self.show(0, surface);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// When the timer will next advance the carousel.
    #[must_use]
    pub fn next_advance(&self) -> Timestamp {
        self.next_advance
    }

    pub fn next(&mut self, now: Timestamp, surface: &mut impl Surface) {
        let index = (self.active + 1) % self.len;
        self.transition(index, Trigger::Manual, now, surface);
    }

    pub fn prev(&mut self, now: Timestamp, surface: &mut impl Surface) {
        let index = (self.active + self.len - 1) % self.len;
        self.transition(index, Trigger::Manual, now, surface);
    }

    /// Jumps to slide `index`. Indexes outside the slide set are ignored.
    pub fn go_to(&mut self, index: usize, now: Timestamp, surface: &mut impl Surface) {
        if index >= self.len {
            tracing::warn!(index, len = self.len, "ignoring out-of-range slide");
            return;
        }
        self.transition(index, Trigger::Manual, now, surface);
    }

    /// Advances the carousel if the timer is due.
    ///
    /// At most one advance happens per tick; if the host fell far behind
    /// (a background tab), the schedule restarts from `now`.
    pub fn tick(&mut self, now: Timestamp, surface: &mut impl Surface) {
        if now < self.next_advance {
            return;
        }
        self.next_advance = self.next_advance.after(self.interval);
        if self.next_advance <= now {
            self.next_advance = now.after(self.interval);
        }
        let index = (self.active + 1) % self.len;
        self.transition(index, Trigger::Timer, now, surface);
    }

    fn transition(
        &mut self,
        index: usize,
        trigger: Trigger,
        now: Timestamp,
        surface: &mut impl Surface,
    ) {
        if trigger == Trigger::Manual && self.policy == AdvancePolicy::ResetOnManual {
            self.next_advance = now.after(self.interval);
        }
        tracing::debug!(from = self.active, to = index, ?trigger, "slide transition");
        self.show(index, surface);
    }

    /// Deactivates every slide and dot, then activates the pair at `index`.
    fn show(&mut self, index: usize, surface: &mut impl Surface) {
        for i in 0..self.len {
            surface.set_class(Node::Slide(i), CLASS_ACTIVE, false);
            surface.set_class(Node::Dot(i), CLASS_ACTIVE, false);
        }
        surface.set_class(Node::Slide(index), CLASS_ACTIVE, true);
        surface.set_class(Node::Dot(index), CLASS_ACTIVE, true);
        self.active = index;
    }
}
