// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vitrine_scroll --heading-base-level=0

//! Vitrine Scroll: horizontal card strips.
//!
//! This crate models a row of fixed-width cards that scrolls sideways:
//! - [`ScrollStrip`]: the clamped offset, edge-arrow visibility with a small
//!   tolerance, wheel handling, and paging by a [`CardLayout`].
//! - [`DragScroll`] and [`Fling`]: touch dragging with a smoothed velocity and
//!   friction-decayed momentum after release.
//! - [`FocusRow`]: per-card scale and parallax around the viewport centre in
//!   [`LayoutMode::Compact`] layouts.
//! - [`ScrollMemory`]: offsets saved when a strip unmounts and restored when
//!   it mounts again.
//!
//! Like the other Vitrine crates it draws nothing. Hosts own the frame loop,
//! feed positions and millisecond timestamps, and read offsets back.
//!
//! ## Paging a strip
//!
//! ```rust
//! use vitrine_scroll::{CardLayout, ScrollStrip, StripDirection};
//!
//! let layout = CardLayout::GEAR_ROW;
//! let mut strip = ScrollStrip::for_cards(1_000.0, 10, &layout);
//! assert!(!strip.can_scroll_back());
//!
//! // Three cards of 224px plus 16px gaps per page.
//! assert_eq!(strip.page(StripDirection::Forward, &layout), 720.0);
//! // The next page clamps to the end.
//! assert_eq!(strip.page(StripDirection::Forward, &layout), 1_400.0);
//! assert!(!strip.can_scroll_forward());
//! ```
//!
//! ## Features
//!
//! - `std` (default): Build Kurbo with `std`.
//! - `libm`: Build Kurbo with `libm` for `no_std` targets.
//! - `tracing`: Emit `tracing` events for flings and scroll memory.
//! - `serde`: Derive `Serialize`/`Deserialize` for tuning and layout types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod focus;
mod layout;
mod logging;
mod memory;
mod momentum;
mod strip;

pub use error::ConfigError;
pub use focus::{FocusMetrics, FocusRow};
pub use layout::LayoutMode;
pub use memory::ScrollMemory;
pub use momentum::{DragScroll, Fling, MomentumConfig};
pub use strip::{CardLayout, ScrollStrip, StripDebugInfo, StripDirection};
