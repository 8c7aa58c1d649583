// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted swipes and taps over a product carousel.
//!
//! Loads a carousel configuration and media list from JSON, then replays a
//! fixed pointer script through a `SwipeSurface`, printing each outcome and a
//! few transition frames.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p vitrine_demos --example carousel_swipe`

use kurbo::{Point, Rect};
use vitrine_carousel::{Carousel, CarouselConfig, MediaItem};
use vitrine_gesture::config::GestureConfig;
use vitrine_gesture::listeners::ListenerHost;
use vitrine_gesture::surface::SwipeSurface;

const CONFIG: &str = r#"{ "cooldown_ms": 300, "aspect_ratio": "tall", "show_dots": true }"#;

const MEDIA: &str = r#"[
    { "id": "1", "kind": "video", "src": "/media/keycadets/launch.mp4" },
    { "id": "2", "kind": "image", "src": "/media/keycadets/tray.png", "alt": "Metal tray" },
    { "id": "3", "kind": "image", "src": "/media/keycadets/side.png", "aspect_ratio": "wide" },
    { "id": "4", "kind": "image", "src": "/media/keycadets/box.png" }
]"#;

/// Stands in for a document that counts attached listeners.
#[derive(Debug, Default)]
struct Document {
    next_id: u32,
}

impl ListenerHost for Document {
    type Registration = u32;

    fn attach(&mut self) -> u32 {
        self.next_id += 1;
        tracing::info!(id = self.next_id, "listeners attached");
        self.next_id
    }

    fn detach(&mut self, registration: u32) {
        tracing::info!(id = registration, "listeners detached");
    }
}

/// One scripted pointer gesture: press, moves, release, all at `start + dt`.
struct Script {
    label: &'static str,
    start: u64,
    points: &'static [(f64, f64, u64)],
}

const SCRIPT: &[Script] = &[
    Script {
        label: "swipe left",
        start: 0,
        points: &[(320.0, 250.0, 0), (295.0, 252.0, 16), (220.0, 254.0, 48)],
    },
    Script {
        label: "swipe left again, too soon",
        start: 60,
        points: &[(320.0, 250.0, 0), (295.0, 252.0, 16), (220.0, 254.0, 48)],
    },
    Script {
        label: "page scroll",
        start: 500,
        points: &[(200.0, 300.0, 0), (204.0, 260.0, 16), (230.0, 120.0, 64)],
    },
    Script {
        label: "tap right",
        start: 800,
        points: &[(340.0, 250.0, 0), (340.0, 250.0, 30)],
    },
    Script {
        label: "tap left",
        start: 1200,
        points: &[(40.0, 250.0, 0), (42.0, 251.0, 30)],
    },
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    vitrine_demos::init_tracing();

    let config: CarouselConfig = serde_json::from_str(CONFIG)?;
    let media: Vec<MediaItem> = serde_json::from_str(MEDIA)?;
    let mut carousel = Carousel::new(media, config)?;

    let bounds = Rect::new(0.0, 0.0, 400.0, 500.0);
    let mut surface = SwipeSurface::new(Document::default(), GestureConfig::default(), bounds)?;

    for step in SCRIPT {
        let Some((&(x, y, _), rest)) = step.points.split_first() else {
            continue;
        };
        surface.press(Point::new(x, y), step.start);
        let mut gesture = None;
        for (i, &(x, y, dt)) in rest.iter().enumerate() {
            let at = Point::new(x, y);
            if i + 1 == rest.len() {
                gesture = Some(surface.release(at, step.start + dt));
            } else {
                let suppress = surface.motion(at, step.start + dt);
                println!("  move ({x}, {y}) suppress={suppress:?}");
            }
        }
        let Some(gesture) = gesture else {
            continue;
        };
        let now = step.start + rest.last().map_or(0, |p| p.2);
        let outcome = carousel.apply(gesture, now);
        let slide = carousel.current();
        println!(
            "{:<28} {gesture:?} -> {outcome:?}, showing #{} {:?} ({})",
            step.label,
            slide.id,
            slide.kind,
            slide.alt_or("no alt"),
        );

        for t in [0, 100, 200, 300] {
            let frame = carousel.frame(now + t);
            println!(
                "    +{t:>3}ms progress={:.2} incoming={:+.2} outgoing={:?}",
                frame.progress,
                frame.incoming.translation(bounds).x,
                frame.outgoing.map(|pose| pose.translation(bounds).x),
            );
        }
        let dots: String = carousel
            .dots()
            .map(|dot| if dot.active { '●' } else { '○' })
            .collect();
        println!("    {dots}");
    }

    Ok(())
}
