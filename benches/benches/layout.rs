// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use showcase_layout::{GridSpec, Layout, seeded_random};

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("showcase_layout");

    group.bench_function("seeded_random(1024)", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for seed in 0..1024_u32 {
                acc += seeded_random(black_box(f64::from(seed)));
            }
            acc
        });
    });

    for (columns, rows) in [(7, 6), (70, 60), (700, 60)] {
        let grid = GridSpec {
            columns,
            rows,
            ..GridSpec::default()
        };
        group.bench_function(format!("generate({columns}x{rows})"), |b| {
            b.iter(|| Layout::generate(black_box(grid)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
