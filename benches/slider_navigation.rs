// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for page event handling.
//!
//! Measures the performance of:
//! - Carousel navigation (next/previous/dot)
//! - Scroll dispatch across every scroll-driven widget
//! - A full counter animation

use criterion::{criterion_group, criterion_main, Criterion};
use site_interactions::app::{Message, Page, PageLayout};
use site_interactions::config::{Config, SliderConfig};
use site_interactions::domain::{ScrollOffset, Timestamp};
use site_interactions::render::{Node, RecordingSurface};
use site_interactions::ui::Slider;
use std::hint::black_box;

/// Benchmark carousel navigation without the page around it.
fn bench_slider(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider_navigation");
    let config = SliderConfig::default();

    group.bench_function("next_prev", |b| {
        let mut surface = RecordingSurface::new();
        let mut slider = Slider::new(6, Timestamp::ZERO, &config).unwrap();
        b.iter(|| {
            slider.next(Timestamp::ZERO, &mut surface);
            slider.prev(Timestamp::ZERO, &mut surface);
            black_box(slider.active_index());
        });
    });

    group.bench_function("go_to", |b| {
        let mut surface = RecordingSurface::new();
        let mut slider = Slider::new(6, Timestamp::ZERO, &config).unwrap();
        let mut index = 0;
        b.iter(|| {
            index = (index + 1) % 6;
            slider.go_to(black_box(index), Timestamp::ZERO, &mut surface);
        });
    });

    group.finish();
}

/// Benchmark a scroll event reaching the scroll-top button, header and
/// indicator.
fn bench_scroll_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_events");

    group.bench_function("scroll", |b| {
        let mut surface = RecordingSurface::new();
        let mut page = Page::mount(
            &PageLayout::full(4),
            Config::default(),
            Timestamp::ZERO,
            &mut surface,
        );
        let mut offset = 0.0;
        b.iter(|| {
            offset = (offset + 37.0) % 1_200.0;
            let response = page.update(Message::Scrolled(ScrollOffset::new(offset)), &mut surface);
            black_box(response);
        });
    });

    group.bench_function("counter_animation", |b| {
        let layout = PageLayout {
            counter_targets: vec!["2500".into()],
            ..PageLayout::default()
        };
        b.iter(|| {
            let mut surface = RecordingSurface::new();
            let mut page = Page::mount(&layout, Config::default(), Timestamp::ZERO, &mut surface);
            let mut response = page.update(
                Message::Intersection {
                    node: Node::Counter(0),
                    intersecting: true,
                },
                &mut surface,
            );
            while response.request_frame {
                response = page.update(Message::AnimationFrame, &mut surface);
            }
            black_box(surface.text(Node::Counter(0)).map(str::len));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_slider, bench_scroll_dispatch);
criterion_main!(benches);
