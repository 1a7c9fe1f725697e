// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use showcase_layout::{GridSpec, Layout};
use showcase_view2d::CanvasViewport;
use showcase_view2d::cull::{CullParams, VisibilitySet};

fn bench_cull(c: &mut Criterion) {
    let mut group = c.benchmark_group("showcase_view2d");

    // A full rescan is O(items); the larger grids show where that stops being cheap.
    for (columns, rows) in [(7, 6), (70, 60), (700, 60)] {
        let grid = GridSpec {
            columns,
            rows,
            ..GridSpec::default()
        };
        let layout = Layout::generate(grid);
        let rects: Vec<_> = (0..layout.len())
            .filter_map(|i| layout.item_rect(i).map(|r| (i, r)))
            .collect();
        let mut viewport = CanvasViewport::new(Size::new(1200.0, 800.0), layout.extent(), grid.offset);
        viewport.pan_by(Vec2::new(-400.0, -300.0));

        group.bench_function(format!("visibility({columns}x{rows})"), |b| {
            b.iter(|| {
                VisibilitySet::compute(
                    black_box(&viewport),
                    rects.iter().copied(),
                    CullParams::default(),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cull);
criterion_main!(benches);
