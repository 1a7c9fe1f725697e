// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};

use crate::GridSpec;

/// Deterministic pseudo-random value in `[0, 1)` for `seed`.
///
/// Computes `frac(sin(seed × 9999) × 10000)`. The result depends only on
/// `seed` and standard floating-point trig, so it is identical across runs.
/// Values that would land outside `[0, 1)` after rounding (or non-finite
/// seeds) map to `0.0`.
#[must_use]
pub fn seeded_random(seed: f64) -> f64 {
    let x = (seed * 9999.0).sin() * 10000.0;
    let r = x - x.floor();
    if (0.0..1.0).contains(&r) { r } else { 0.0 }
}

/// Position and size factor computed for one grid cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSlot {
    /// Top-left corner of the item in world space.
    pub position: Point,
    /// Multiplier applied to [`GridSpec::base_size`].
    pub size_factor: f64,
}

impl LayoutSlot {
    /// Nominal (unscaled) square occupied by the item.
    #[must_use]
    pub fn rect(&self, base_size: f64) -> Rect {
        let side = base_size * self.size_factor;
        Rect::from_origin_size(self.position, Size::new(side, side))
    }
}

/// Slot for cell (`row`, `col`) of `grid`.
#[must_use]
pub fn slot_at(grid: &GridSpec, row: usize, col: usize) -> LayoutSlot {
    let index = row * grid.columns + col;
    let stagger = if row % 2 == 1 { grid.spacing.x / 2.0 } else { 0.0 };
    let jitter = Vec2::new(
        (seeded_random((index * 2) as f64) - 0.5) * grid.jitter.x,
        (seeded_random((index * 2 + 1) as f64) - 0.5) * grid.jitter.y,
    );
    let base = Point::new(
        col as f64 * grid.spacing.x + stagger,
        row as f64 * grid.spacing.y,
    );
    LayoutSlot {
        position: base + jitter - grid.offset,
        size_factor: grid.size_factor(index),
    }
}

/// The computed slots of a grid, in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    grid: GridSpec,
    slots: Vec<LayoutSlot>,
}

impl Layout {
    /// Generates one slot per cell of `grid`.
    ///
    /// Produces exactly `columns × rows` slots; an empty grid yields an empty layout.
    #[must_use]
    pub fn generate(grid: GridSpec) -> Self {
        let mut slots = Vec::with_capacity(grid.cell_count());
        for row in 0..grid.rows {
            for col in 0..grid.columns {
                slots.push(slot_at(&grid, row, col));
            }
        }
        Self { grid, slots }
    }

    /// The grid this layout was generated from.
    #[must_use]
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// All slots, row-major.
    #[must_use]
    pub fn slots(&self) -> &[LayoutSlot] {
        &self.slots
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the layout has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot for cell `index`, if it exists.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&LayoutSlot> {
        self.slots.get(index)
    }

    /// Nominal world-space rect of cell `index`, if it exists.
    #[must_use]
    pub fn item_rect(&self, index: usize) -> Option<Rect> {
        self.slot(index).map(|s| s.rect(self.grid.base_size))
    }

    /// Nominal grid extent; see [`GridSpec::extent`].
    #[must_use]
    pub fn extent(&self) -> Size {
        self.grid.extent()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::generate(GridSpec::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{Layout, seeded_random, slot_at};
    use crate::GridSpec;

    #[test]
    fn seeded_random_is_in_unit_interval() {
        for seed in 0..10_000 {
            let r = seeded_random(seed as f64);
            assert!((0.0..1.0).contains(&r), "seed {seed} gave {r}");
        }
        for seed in [-1.5, 0.25, 1e9, -1e12, f64::MAX, f64::NAN, f64::INFINITY] {
            let r = seeded_random(seed);
            assert!((0.0..1.0).contains(&r), "seed {seed} gave {r}");
        }
    }

    #[test]
    fn seeded_random_is_deterministic() {
        for seed in 0..100 {
            let s = seed as f64;
            assert_eq!(seeded_random(s).to_bits(), seeded_random(s).to_bits());
        }
    }

    #[test]
    fn seed_zero_has_no_jitter_bias() {
        // sin(0) == 0 exactly, so cell 0 gets the full negative half-amplitude on x.
        assert_eq!(seeded_random(0.0), 0.0);
        let grid = GridSpec::default();
        let slot = slot_at(&grid, 0, 0);
        assert_eq!(slot.position.x, -25.0 - 300.0);
    }

    #[test]
    fn odd_rows_are_staggered_by_half_spacing() {
        let grid = GridSpec {
            jitter: kurbo::Vec2::ZERO,
            ..GridSpec::default()
        };
        let even = slot_at(&grid, 0, 2);
        let odd = slot_at(&grid, 1, 2);
        assert_eq!(odd.position.x - even.position.x, 150.0);
        assert_eq!(odd.position.y - even.position.y, 270.0);
    }

    #[test]
    fn jitter_stays_within_amplitude() {
        let grid = GridSpec::default();
        let layout = Layout::generate(grid);
        for (index, slot) in layout.slots().iter().enumerate() {
            let row = index / grid.columns;
            let col = index % grid.columns;
            let stagger = if row % 2 == 1 { 150.0 } else { 0.0 };
            let dx = slot.position.x - (col as f64 * 300.0 + stagger - 300.0);
            let dy = slot.position.y - (row as f64 * 270.0 - 200.0);
            assert!(dx.abs() <= 25.0 + 1e-9, "cell {index} dx {dx}");
            assert!(dy.abs() <= 20.0 + 1e-9, "cell {index} dy {dy}");
        }
    }

    #[test]
    fn size_factor_cycles_through_variations() {
        let layout = Layout::default();
        let sizes: alloc::vec::Vec<f64> = layout.slots().iter().map(|s| s.size_factor).collect();
        assert_eq!(sizes[0], 0.7);
        assert_eq!(sizes[3], 1.15);
        assert_eq!(sizes[9], 0.7);
        assert_eq!(sizes[41], sizes[41 % 9]);
    }

    #[test]
    fn item_rect_uses_base_size() {
        let layout = Layout::default();
        let rect = layout.item_rect(2).unwrap();
        assert!((rect.width() - 140.0).abs() < 1e-9);
        assert!((rect.height() - 140.0).abs() < 1e-9);
        assert_eq!(layout.item_rect(42), None);
    }
}
