// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=showcase_canvas --heading-base-level=0

//! Showcase Canvas: the pan/zoom controller of the experience canvas.
//!
//! The controller is an explicit, immutable [`CanvasState`] plus a reducer,
//! [`CanvasState::update`], that maps one [`CanvasEvent`] to the next state and
//! a short list of [`CanvasAction`]s. It needs no rendering surface, so every
//! gesture can be exercised directly in tests.
//!
//! Two modes exist: idle and dragging. A press on the background starts a
//! drag; release or leaving the canvas ends it, and leaving counts as a release
//! at the last pointer position. While dragging, the pan follows the pointer
//! from the press anchor and is clamped to the bounds for the current scale. A
//! press-release that barely moved is a background click and produces
//! [`CanvasAction::Dismiss`] instead of a pan.
//!
//! Other inputs:
//! - Single-finger touch pans by successive deltas.
//! - Wheel without modifiers pans, inverted; with Ctrl/Meta it zooms by a
//!   small step: out for a downward scroll, in otherwise.
//! - Zoom controls step the scale by `0.2`.
//!
//! Every zoom clamps the scale into `[min_scale, 2.0]` first and then
//! re-clamps the previous pan against the new scale's bounds.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use showcase_canvas::{CanvasAction, CanvasEvent, CanvasScene, CanvasState, ControllerConfig};
//!
//! let scene = CanvasScene::default();
//! let state = CanvasState::new(&scene, Size::new(1200.0, 800.0), ControllerConfig::default());
//!
//! // Press and release on the same spot of the background: a dismiss, no pan.
//! let pos = Point::new(40.0, 40.0);
//! let t = state.update(&scene, CanvasEvent::PointerDown { pos, target: None });
//! let t = t.state.update(&scene, CanvasEvent::PointerUp { pos, target: None });
//! assert_eq!(t.actions.as_slice(), &[CanvasAction::Dismiss]);
//!
//! // Zoom in.
//! let t = t.state.update(&scene, CanvasEvent::ZoomIn);
//! assert!((t.state.scale() - 1.2).abs() < 1e-12);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod event;
mod scene;
mod state;

pub use config::ControllerConfig;
pub use event::{Actions, CanvasAction, CanvasEvent, Modifiers};
pub use scene::{CanvasScene, ItemKey};
pub use state::{CanvasState, Transition};
