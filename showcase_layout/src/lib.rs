// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=showcase_layout --heading-base-level=0

//! Showcase Layout: deterministic staggered-grid placement.
//!
//! Items on the showcase canvas sit on a brick-like grid: odd rows shift by
//! half a column, every cell gets a small jitter, and item sizes cycle through
//! a fixed list of multipliers. None of this uses runtime randomness. The
//! jitter comes from [`seeded_random`], a pure function of the cell index, so
//! the arrangement is identical on every run and on every machine.
//!
//! For cell `i` at (`row`, `col`):
//!
//! ```text
//! x = col × spacing.x + (row odd ? spacing.x / 2 : 0) + (f(2i)     − 0.5) × jitter.x − offset.x
//! y = row × spacing.y                                 + (f(2i + 1) − 0.5) × jitter.y − offset.y
//! size_factor = sizes[i mod sizes.len()]
//! ```
//!
//! ## Minimal example
//!
//! ```rust
//! use showcase_layout::{GridSpec, Layout};
//!
//! let layout = Layout::generate(GridSpec::default());
//! assert_eq!(layout.len(), 42);
//!
//! // Generating again gives the same slots.
//! assert_eq!(layout, Layout::generate(GridSpec::default()));
//!
//! let extent = layout.extent();
//! assert_eq!((extent.width, extent.height), (2100.0, 1620.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod grid;
mod slots;

pub use grid::{GridSpec, SIZE_VARIATIONS};
pub use slots::{Layout, LayoutSlot, seeded_random, slot_at};
