// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Size multipliers cycled through by cell index.
pub const SIZE_VARIATIONS: [f64; 9] = [0.7, 0.85, 1.0, 1.15, 0.9, 1.1, 0.8, 1.05, 0.95];

/// Fixed inputs of the layout generator.
///
/// The [`Default`] value is the showcase canvas: a 7 × 6 grid with 300 × 270
/// spacing, shifted by (300, 200) so that cell (0, 0) sits just above and to
/// the left of the view origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    /// Number of columns.
    pub columns: usize,
    /// Number of rows.
    pub rows: usize,
    /// Distance between neighbouring cells on each axis.
    pub spacing: Vec2,
    /// Centering offset subtracted from every slot position.
    pub offset: Vec2,
    /// Peak-to-peak jitter amplitude on each axis.
    pub jitter: Vec2,
    /// Edge length of an item with size factor `1.0`, in world units.
    pub base_size: f64,
    /// Size multipliers, indexed by `cell % len`.
    pub sizes: &'static [f64],
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: 7,
            rows: 6,
            spacing: Vec2::new(300.0, 270.0),
            offset: Vec2::new(300.0, 200.0),
            jitter: Vec2::new(50.0, 40.0),
            base_size: 140.0,
            sizes: &SIZE_VARIATIONS,
        }
    }
}

impl GridSpec {
    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Nominal grid extent: `columns × spacing.x` by `rows × spacing.y`.
    ///
    /// Stagger and jitter are not included.
    #[must_use]
    pub fn extent(&self) -> Size {
        Size::new(
            self.columns as f64 * self.spacing.x,
            self.rows as f64 * self.spacing.y,
        )
    }

    /// Size factor for a cell; `1.0` when no variations are configured.
    #[must_use]
    pub fn size_factor(&self, cell: usize) -> f64 {
        if self.sizes.is_empty() {
            1.0
        } else {
            self.sizes[cell % self.sizes.len()]
        }
    }
}
