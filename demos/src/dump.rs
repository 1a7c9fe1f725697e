// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::Serialize;
use showcase_shell::Shell;

/// One grid cell as written by the layout dump.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SlotRecord {
    /// Grid cell index.
    pub cell: usize,
    /// Tiled cell id, if the catalog has records.
    pub id: Option<String>,
    /// Display name of the record shown.
    pub name: Option<&'static str>,
    /// Nominal x of the top-left corner.
    pub x: f64,
    /// Nominal y of the top-left corner.
    pub y: f64,
    /// Nominal side length.
    pub size: f64,
    /// Whether the cell is visible in the shell's current viewport.
    pub visible: bool,
}

/// Records for every cell of the shell's canvas, in cell order.
pub fn layout_records(shell: &Shell) -> Vec<SlotRecord> {
    let catalog = shell.catalog();
    shell
        .scene()
        .items()
        .map(|(key, rect)| {
            let entry = catalog.tiled_entry(key.0);
            SlotRecord {
                cell: key.0,
                id: entry.map(|e| e.id.to_string()),
                name: entry.map(|e| e.item.name),
                x: rect.x0,
                y: rect.y0,
                size: rect.width(),
                visible: shell.canvas().is_visible(key),
            }
        })
        .collect()
}
