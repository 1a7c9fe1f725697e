// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use showcase_canvas::{CanvasEvent, CanvasScene, CanvasState, ControllerConfig};

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("showcase_canvas");
    let scene = CanvasScene::default();
    let state = CanvasState::new(&scene, Size::new(1200.0, 800.0), ControllerConfig::default());

    group.bench_function("drag(60 moves)", |b| {
        b.iter_batched(
            || state.clone(),
            |mut s| {
                s = s
                    .update(&scene, CanvasEvent::PointerDown {
                        pos: Point::new(600.0, 400.0),
                        target: None,
                    })
                    .state;
                for i in 0..60_u32 {
                    let pos = Point::new(600.0 - f64::from(i) * 5.0, 400.0 - f64::from(i) * 3.0);
                    s = s.update(&scene, CanvasEvent::PointerMove { pos }).state;
                }
                black_box(s)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("zoom_in_out", |b| {
        b.iter_batched(
            || state.clone(),
            |s| {
                let s = s.update(&scene, CanvasEvent::ZoomIn).state;
                black_box(s.update(&scene, CanvasEvent::ZoomOut).state)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_controller);
criterion_main!(benches);
