// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated host scrolling a recycled list of messages.
//!
//! The "scene" here is a map from instance slot to the text a row shows. After
//! each update the host walks `children()` to lay rows out top to bottom, which
//! is what a real toolkit would do with its own widgets.
//!
//! Run:
//! - `RUST_LOG=understory_recycler=trace cargo run -p understory_demos --example recycled_list`

use std::collections::HashMap;

use kurbo::{Insets, Size, Vec2};
use tracing_subscriber::EnvFilter;
use understory_recycler::{
    Axis, Child, Filler, LayoutDescriptor, LinearStrategy, Poolable, RecyclerConfig,
    RecyclingList, TracingSink, VisualItem,
};

#[derive(Debug)]
struct Message {
    author: &'static str,
    body: String,
}

/// A row widget. Rows never learn which message they showed before.
#[derive(Debug, Default)]
struct MessageRow {
    visible: bool,
    label: String,
}

impl Poolable for MessageRow {
    fn set_active(&mut self, active: bool) {
        self.visible = active;
    }
}

impl VisualItem<Message> for MessageRow {
    fn bind(&mut self, index: usize, record: &Message) {
        self.label = format!("#{index:<4} {}: {}", record.author, record.body);
    }
}

/// The leading spacer: an empty box of some height.
#[derive(Debug, Default)]
struct Strut {
    height: f64,
    collapsed: bool,
}

impl Poolable for Strut {
    fn set_active(&mut self, _active: bool) {}
}

impl Filler for Strut {
    fn set_ignore_layout(&mut self, ignore: bool) {
        self.collapsed = ignore;
    }

    fn set_main_extent(&mut self, _axis: Axis, extent: f64) {
        self.height = extent;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    tracing::info!("starting recycled list demo");

    let authors = ["ada", "grace", "linus", "barbara"];
    let messages: Vec<Message> = (0..5_000)
        .map(|i| Message {
            author: authors[i % authors.len()],
            body: format!("message body {i}"),
        })
        .collect();

    let config = RecyclerConfig::new(Axis::Vertical, 22.0).with_prewarm_items(12);
    let mut list = RecyclingList::new(
        config,
        LinearStrategy::new(Strut::default),
        MessageRow::default,
    )
    .with_diagnostics(TracingSink);
    let descriptor = LayoutDescriptor::new()
        .with_spacing(Vec2::new(0.0, 2.0))
        .with_padding(Insets::uniform(8.0));
    if let Err(err) = list.setup(Some(&descriptor)) {
        eprintln!("setup failed: {err}");
        return;
    }

    let viewport = Size::new(320.0, 240.0);
    let content = list.content_extent_for(messages.len()).unwrap_or_default();
    println!("content extent: {content:.0} for {} messages", messages.len());

    // Scroll by pixel offsets the way a scroll bar would report them.
    for offset in [0.0, 24.0, 48.0, 60_000.0, 119_000.0, 48.0] {
        let scroll = list.normalized_for_offset(messages.len(), offset, viewport.height);
        let changes = list.update_with_viewport(&messages, viewport, scroll);
        println!("\noffset {offset:>8.0} -> scroll {scroll:.4}, changes {changes:?}");
        render(&list);
    }

    let stats = list.pool_stats();
    println!(
        "\nrows created: {}, acquired: {}, released: {}",
        stats.created, stats.acquired, stats.released
    );
}

fn render(list: &RecyclingList<MessageRow, LinearStrategy<Strut>>) {
    // Slots are stable per row widget, so a toolkit can key its scene on them.
    let mut scene: HashMap<usize, &str> = HashMap::new();
    for child in list.children().iter() {
        match child {
            Child::Filler(id) => {
                if let Some(strut) = list.filler(id)
                    && !strut.collapsed
                {
                    println!("  [spacer {:.0}]", strut.height);
                }
            }
            Child::Item(id) => {
                if let Some(row) = list.item(id) {
                    scene.insert(id.slot(), &row.label);
                    println!("  slot {:>2} | {}", id.slot(), row.label);
                }
            }
        }
    }
    println!("  ({} rows on screen)", scene.len());
}
