// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Repeating the catalog across grid cells.
//!
//! The canvas grid usually has more cells than the catalog has records. Cell
//! `i` shows record `i mod len`. Each cell gets its own id so that the host can
//! key per-cell state (visibility, hover) without collisions:
//!
//! - cell 0 keeps the record id verbatim (`"1"`),
//! - every other cell appends its index (`"1_9"`, `"2_10"`, ...).
//!
//! [`base_id`] maps a tiled id back to the record id.

use core::fmt;

use crate::CatalogItem;

/// Id of one tiled grid cell.
///
/// Formats as the record id for cell 0 and `"{id}_{cell}"` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TiledId {
    /// Record id of the underlying catalog item.
    pub base: &'static str,
    /// Grid cell index.
    pub cell: usize,
}

impl fmt::Display for TiledId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cell == 0 {
            f.write_str(self.base)
        } else {
            write!(f, "{}_{}", self.base, self.cell)
        }
    }
}

/// A catalog record placed in a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TiledEntry {
    /// Cell-unique id.
    pub id: TiledId,
    /// The record shown in this cell.
    pub item: &'static CatalogItem,
}

/// Strips a trailing `_<digits>` cell suffix from a tiled id.
///
/// Ids without such a suffix are returned unchanged.
#[must_use]
pub fn base_id(id: &str) -> &str {
    match id.rsplit_once('_') {
        Some((head, tail)) if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) => head,
        _ => id,
    }
}
