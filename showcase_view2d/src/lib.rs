// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=showcase_view2d --heading-base-level=0

//! Showcase View 2D: the canvas viewport.
//!
//! This crate provides a small, headless model of the showcase canvas's
//! camera. It focuses on:
//! - Scale limits derived from the view size ([`min_scale_for`]).
//! - The legal pan range for a scale ([`PanBounds`]).
//! - Saturating pan/zoom updates in the right order ([`CanvasViewport`]).
//! - Projection between world and view space.
//! - Visibility culling with an inset margin ([`cull`]).
//!
//! It does **not** interpret input events; see `showcase_canvas` for the
//! controller built on top of it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use showcase_view2d::CanvasViewport;
//!
//! // 1200x800 window over a 2100x1620 grid anchored at (300, 200).
//! let mut view = CanvasViewport::new(
//!     Size::new(1200.0, 800.0),
//!     Size::new(2100.0, 1620.0),
//!     Vec2::new(300.0, 200.0),
//! );
//! assert!((view.min_scale() - 0.571).abs() < 1e-3);
//!
//! // Panning saturates at the bounds for the current scale.
//! view.set_pan(Vec2::new(10_000.0, 0.0));
//! assert_eq!(view.pan().x, view.bounds().max.x);
//!
//! // Zooming clamps the scale first, then re-clamps pan for the new scale.
//! view.set_scale(5.0);
//! assert_eq!(view.scale(), 2.0);
//! assert!(view.bounds().contains(view.pan()));
//! ```
//!
//! ## Culling example
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use showcase_view2d::CanvasViewport;
//! use showcase_view2d::cull::{CullParams, VisibilitySet};
//!
//! let view = CanvasViewport::new(
//!     Size::new(1200.0, 800.0),
//!     Size::new(2100.0, 1620.0),
//!     Vec2::new(300.0, 200.0),
//! );
//! let items = [
//!     ("near", Rect::new(400.0, 300.0, 540.0, 440.0)),
//!     ("far", Rect::new(3_000.0, 3_000.0, 3_140.0, 3_140.0)),
//! ];
//! let visible = VisibilitySet::compute(&view, items, CullParams::default());
//! assert!(visible.contains(&"near"));
//! assert!(!visible.contains(&"far"));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod cull;
mod limits;
mod viewport;

pub use limits::{PanBounds, ViewLimits, min_scale_for};
pub use viewport::{CanvasViewport, CanvasViewportDebugInfo};
