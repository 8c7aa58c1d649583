// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A gear row: arrow paging, a flick with momentum, and restoring the offset.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p vitrine_demos --example gear_row`

use kurbo::Vec2;
use vitrine_scroll::{
    CardLayout, DragScroll, FocusRow, MomentumConfig, ScrollMemory, ScrollStrip, StripDirection,
};

const PAGE_KEY: &str = "/shop/keyboards";

fn arrows(strip: &ScrollStrip) -> String {
    format!(
        "[{}] offset {:>7.1} [{}]",
        if strip.can_scroll_back() { '<' } else { ' ' },
        strip.offset(),
        if strip.can_scroll_forward() { '>' } else { ' ' },
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    vitrine_demos::init_tracing();

    let layout = CardLayout::GEAR_ROW;
    let mut memory = ScrollMemory::new();

    // Desktop: page with the arrows.
    let mut strip = ScrollStrip::for_cards(1_100.0, 14, &layout);
    println!("desktop   {}", arrows(&strip));
    while strip.can_scroll_forward() {
        strip.page(StripDirection::Forward, &layout);
        println!("  page -> {}", arrows(&strip));
    }
    strip.wheel(Vec2::new(-90.0, 3.0), false);
    println!("  wheel -> {}", arrows(&strip));
    memory.unmount(PAGE_KEY, strip.offset());

    // Phone: drag, fling, and watch the focused card change.
    let row = FocusRow::for_viewport(390.0);
    let mut strip = ScrollStrip::for_cards(390.0, 14, &layout);
    let mut drag = DragScroll::new(MomentumConfig::default())?;
    drag.begin(320.0, 0, &strip);
    for frame in 1..=6_u64 {
        drag.drag(320.0 - 30.0 * frame as f64, frame * 16, &mut strip);
    }
    println!("phone     {} v={:.2}px/ms", arrows(&strip), drag.velocity());
    if let Some(mut fling) = drag.end() {
        let mut frames = 0;
        while fling.step(&mut strip) {
            frames += 1;
        }
        println!("  fling {frames} frames -> {}", arrows(&strip));
    }
    if let Some(index) = row.focused(14, strip.offset()) {
        let metrics = row.metrics(index, strip.offset());
        println!(
            "  focused card {index}: scale {:.2}, parallax {:+.1}",
            metrics.scale, metrics.parallax
        );
    }

    // Back on desktop: restore where we left off.
    let mut strip = ScrollStrip::for_cards(1_100.0, 14, &layout);
    if let Some(offset) = memory.mount(PAGE_KEY) {
        strip.set_offset(offset);
    }
    println!("restored  {}", arrows(&strip));
    Ok(())
}
