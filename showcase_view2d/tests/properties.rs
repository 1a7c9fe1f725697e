// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-style checks for `showcase_view2d`, swept over fixed grids of inputs.

use kurbo::{Rect, Size, Vec2};
use showcase_view2d::cull::{CullParams, VisibilitySet};
use showcase_view2d::{CanvasViewport, PanBounds, min_scale_for};

const GRID: Size = Size::new(2100.0, 1620.0);
const ANCHOR: Vec2 = Vec2::new(300.0, 200.0);

fn view_sizes() -> impl Iterator<Item = Size> {
    [0.0, 1.0, 320.0, 800.0, 1200.0, 1920.0, 2560.0, 5000.0]
        .into_iter()
        .flat_map(|w| [0.0, 240.0, 800.0, 1080.0, 1620.0, 4000.0].map(|h| Size::new(w, h)))
}

fn pan_candidates() -> impl Iterator<Item = Vec2> {
    [-1e7, -2500.0, -600.0, -1.0, 0.0, 49.5, 350.0, 1e7]
        .into_iter()
        .flat_map(|x| [-1e7, -620.0, 0.0, 250.0, 1e7].map(|y| Vec2::new(x, y)))
}

fn scales(min: f64, max: f64) -> impl Iterator<Item = f64> {
    (0..=20_u32).map(move |i| min + (max - min) * f64::from(i) / 20.0)
}

#[test]
fn min_scale_never_below_floor() {
    for view in view_sizes() {
        let s = min_scale_for(view, GRID, 0.4);
        assert!(s >= 0.4, "min scale {s} for {view:?}");
    }
}

#[test]
fn reference_scenario_min_scale() {
    let vp = CanvasViewport::new(Size::new(1200.0, 800.0), GRID, ANCHOR);
    let expected = (1200.0_f64 / 2100.0).max(800.0 / 1620.0).max(0.4);
    assert_eq!(vp.min_scale(), expected);
    assert!((vp.min_scale() - 0.5714).abs() < 1e-4);
}

#[test]
fn clamp_is_idempotent_over_scale_range() {
    for view in view_sizes() {
        let min = min_scale_for(view, GRID, 0.4).min(2.0);
        for scale in scales(min, 2.0) {
            let bounds = PanBounds::compute(scale, view, GRID, ANCHOR, 50.0);
            assert!(bounds.min.x <= bounds.max.x && bounds.min.y <= bounds.max.y);
            for p in pan_candidates() {
                let once = bounds.clamp(p);
                assert_eq!(bounds.clamp(once), once, "scale {scale} view {view:?} pan {p:?}");
            }
        }
    }
}

#[test]
fn zoom_then_clamp_stays_in_new_bounds() {
    for view in view_sizes() {
        let mut base = CanvasViewport::new(view, GRID, ANCHOR);
        let min = base.min_scale().min(2.0);
        for s1 in scales(min, 2.0) {
            base.set_scale(s1);
            for p in pan_candidates() {
                let mut vp = base;
                vp.set_pan(p);
                for s2 in scales(min, 2.0) {
                    let mut zoomed = vp;
                    zoomed.set_scale(s2);
                    assert!(
                        zoomed.bounds().contains(zoomed.pan()),
                        "{s1} -> {s2} left pan {:?} outside {:?}",
                        zoomed.pan(),
                        zoomed.bounds()
                    );
                }
            }
        }
    }
}

#[test]
fn zoom_steps_saturate_at_max() {
    let mut vp = CanvasViewport::new(Size::new(1200.0, 800.0), GRID, ANCHOR);
    for _ in 0..10 {
        vp.zoom_by(0.2);
    }
    assert_eq!(vp.scale(), 2.0);
    let before = (vp.scale(), vp.pan());
    assert!(!vp.zoom_by(0.2));
    assert_eq!((vp.scale(), vp.pan()), before);
}

#[test]
fn culling_is_monotonic_in_inset() {
    let items: Vec<(usize, Rect)> = (0..42)
        .map(|i| {
            let x = (i % 7) as f64 * 300.0 - 300.0;
            let y = (i / 7) as f64 * 270.0 - 200.0;
            (i, Rect::new(x, y, x + 140.0, y + 140.0))
        })
        .collect();

    for view in [Size::new(1200.0, 800.0), Size::new(390.0, 844.0)] {
        let mut vp = CanvasViewport::new(view, GRID, ANCHOR);
        for scale in [0.6, 1.0, 1.7] {
            vp.set_scale(scale);
            for pan in [Vec2::ZERO, Vec2::new(-400.0, -300.0)] {
                vp.set_pan(pan);
                let mut previous: Option<VisibilitySet<usize>> = None;
                for inset in [-200.0, -150.0, 0.0, 75.0, 150.0, 300.0, 600.0] {
                    let set = VisibilitySet::compute(&vp, items.iter().copied(), CullParams { inset });
                    if let Some(prev) = &previous {
                        assert!(set.is_subset(prev), "inset {inset} grew the visible set");
                    }
                    previous = Some(set);
                }
            }
        }
    }
}
