// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=showcase_catalog --heading-base-level=0

//! Showcase Catalog: the static product catalog.
//!
//! The catalog is a fixed list of immutable [`CatalogItem`] records, loaded
//! once and never mutated. This crate also owns the small amount of logic
//! that sits directly on top of the records:
//!
//! - Color swatches keyed by the record's color name ([`swatch`]).
//! - Tiling the catalog over a larger grid of cells, with per-cell ids
//!   ([`Catalog::tiled_entry`], [`TiledId`]).
//! - Resolving a tiled id back to its record ([`Catalog::resolve`]).
//!
//! Lookups that miss return `None`; callers are expected to skip the item
//! rather than fail.
//!
//! ## Minimal example
//!
//! ```rust
//! use showcase_catalog::Catalog;
//!
//! let catalog = Catalog::watches();
//! assert_eq!(catalog.len(), 9);
//!
//! // Cell 10 of the canvas grid shows the second record again.
//! let entry = catalog.tiled_entry(10).unwrap();
//! assert_eq!(entry.id.to_string(), "2_10");
//!
//! // ...and resolves back to it.
//! let item = catalog.resolve("2_10").unwrap();
//! assert_eq!(item.id, "2");
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod items;
pub mod swatch;
mod tiling;

pub use items::CatalogItem;
pub use swatch::Swatch;
pub use tiling::{TiledEntry, TiledId, base_id};

/// A borrowed view over a static list of records.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    items: &'static [CatalogItem],
}

impl Catalog {
    /// Creates a catalog over the given records.
    #[must_use]
    pub const fn new(items: &'static [CatalogItem]) -> Self {
        Self { items }
    }

    /// The watch collection shipped with the showcase.
    #[must_use]
    pub fn watches() -> Self {
        Self::new(&items::WATCHES)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the catalog has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All records in catalog order.
    #[must_use]
    pub fn items(&self) -> &'static [CatalogItem] {
        self.items
    }

    /// Record at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'static CatalogItem> {
        self.items.get(index)
    }

    /// Record with the exact id `id`, if any.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&'static CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Resolves a record id or a tiled cell id to its record.
    #[must_use]
    pub fn resolve(&self, id: &str) -> Option<&'static CatalogItem> {
        self.find(base_id(id))
    }

    /// The entry shown in grid cell `cell`.
    ///
    /// Returns `None` only when the catalog is empty.
    #[must_use]
    pub fn tiled_entry(&self, cell: usize) -> Option<TiledEntry> {
        if self.items.is_empty() {
            return None;
        }
        let item = &self.items[cell % self.items.len()];
        Some(TiledEntry {
            id: TiledId {
                base: item.id,
                cell,
            },
            item,
        })
    }

    /// Entries for cells `0..cells`, in cell order.
    ///
    /// Yields nothing when the catalog is empty.
    pub fn tile(&self, cells: usize) -> impl Iterator<Item = TiledEntry> + '_ {
        (0..cells).filter_map(move |cell| self.tiled_entry(cell))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::watches()
    }
}
