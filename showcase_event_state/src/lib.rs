// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=showcase_event_state --heading-base-level=0

//! Showcase Event State: interaction state machines for the showcase canvas.
//!
//! Each module handles one interaction pattern that needs state across
//! several input events:
//!
//! - [`drag`]: drag-to-pan from a press anchor, with click-vs-drag
//!   classification on release.
//! - [`touch`]: single-finger touch panning from incremental deltas.
//! - [`click`]: press and release on the same item.
//! - [`hover`]: the hovered item and pointer position for tooltips.
//!
//! ## Design Philosophy
//!
//! Each state manager is:
//!
//! - **Small and `Copy`**: cheap to snapshot inside an immutable UI state.
//! - **Geometry-agnostic**: none of them clamp. They produce raw targets and
//!   deltas; the viewport decides what is legal.
//! - **Generic over keys**: item identifiers are application types.
//!
//! ## Drag example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use showcase_event_state::drag::{CLICK_SLOP, PanDrag, Release};
//!
//! let mut drag = PanDrag::default();
//! drag.press(Point::new(300.0, 200.0), Vec2::ZERO);
//!
//! // Released on the spot: a background click, not a pan.
//! assert_eq!(drag.release(Point::new(300.0, 200.0), CLICK_SLOP), Some(Release::Click));
//! ```
//!
//! ## Hover example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use showcase_event_state::hover::{HoverEvent, HoverState};
//!
//! let mut hover = HoverState::new();
//! hover.pointer_moved(Point::new(40.0, 40.0));
//! assert_eq!(hover.enter("3_12"), Some(HoverEvent::Enter("3_12")));
//! assert_eq!(
//!     hover.tooltip(Vec2::new(15.0, 15.0)),
//!     Some(("3_12", Point::new(55.0, 55.0)))
//! );
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod click;
pub mod drag;
pub mod hover;
pub mod touch;
