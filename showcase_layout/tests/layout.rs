// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `showcase_layout` crate.

use kurbo::Vec2;
use showcase_layout::{GridSpec, Layout, slot_at};

#[test]
fn produces_one_slot_per_cell_in_row_major_order() {
    let grid = GridSpec {
        columns: 4,
        rows: 3,
        ..GridSpec::default()
    };
    let layout = Layout::generate(grid);
    assert_eq!(layout.len(), 12);

    for row in 0..3 {
        for col in 0..4 {
            assert_eq!(layout.slot(row * 4 + col), Some(&slot_at(&grid, row, col)));
        }
    }
}

#[test]
fn generation_is_reproducible() {
    let a = Layout::generate(GridSpec::default());
    let b = Layout::generate(GridSpec::default());
    assert_eq!(a.len(), b.len());
    for (sa, sb) in a.slots().iter().zip(b.slots()) {
        assert_eq!(sa.position.x.to_bits(), sb.position.x.to_bits());
        assert_eq!(sa.position.y.to_bits(), sb.position.y.to_bits());
        assert_eq!(sa.size_factor.to_bits(), sb.size_factor.to_bits());
    }
}

#[test]
fn default_grid_extent() {
    let grid = GridSpec::default();
    assert_eq!(grid.cell_count(), 42);
    let extent = grid.extent();
    assert_eq!(extent.width, 2100.0);
    assert_eq!(extent.height, 1620.0);
}

#[test]
fn degenerate_grids_are_empty() {
    for (columns, rows) in [(0, 6), (7, 0), (0, 0)] {
        let layout = Layout::generate(GridSpec {
            columns,
            rows,
            ..GridSpec::default()
        });
        assert!(layout.is_empty());
        assert_eq!(layout.slot(0), None);
    }
}

#[test]
fn empty_size_list_means_unit_factor() {
    let layout = Layout::generate(GridSpec {
        sizes: &[],
        ..GridSpec::default()
    });
    assert!(layout.slots().iter().all(|s| s.size_factor == 1.0));
}

#[test]
fn first_cell_sits_near_the_view_origin() {
    let layout = Layout::default();
    let first = layout.slot(0).unwrap().position;
    // Offset (300, 200) shifted by at most half the jitter amplitude.
    assert!((first.x + 300.0).abs() <= 25.0);
    assert!((first.y + 200.0).abs() <= 20.0);
}

#[test]
fn zero_jitter_gives_exact_grid() {
    let grid = GridSpec {
        jitter: Vec2::ZERO,
        offset: Vec2::ZERO,
        ..GridSpec::default()
    };
    let layout = Layout::generate(grid);
    let p = layout.slot(7 * 3 + 2).unwrap().position;
    assert_eq!((p.x, p.y), (2.0 * 300.0 + 150.0, 3.0 * 270.0));
}
