// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use showcase_catalog::{Catalog, CatalogItem};

/// One row of the list view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListEntry {
    /// Record id, suitable for [`crate::Shell::select_listed`].
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Price label.
    pub price: &'static str,
    /// Image reference.
    pub image: &'static str,
}

impl From<&'static CatalogItem> for ListEntry {
    fn from(item: &'static CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            image: item.image,
        }
    }
}

/// List rows in catalog order. Unlike the canvas, the list shows each record once.
pub fn list_entries(catalog: Catalog) -> impl Iterator<Item = ListEntry> {
    catalog.items().iter().map(ListEntry::from)
}
