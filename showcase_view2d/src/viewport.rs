// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::limits::{PanBounds, ViewLimits, min_scale_for};

/// Pan + uniform scale over a fixed-size content plane.
///
/// The view is anchored at the device origin and has size `view_size`. World
/// points map to the view as `view = world × scale + pan`. Content has a
/// nominal `extent` and an `anchor` (its centering offset), which together with
/// [`ViewLimits`] determine:
///
/// - the scale range `[min_scale, max_scale]`, where `min_scale` keeps the
///   content covering the whole view, and
/// - the pan range for the current scale ([`PanBounds`]).
///
/// Every mutator saturates: scale is clamped first, then pan is clamped against
/// the bounds for the *new* scale. Pan is clamped from its previous value, not
/// recentered.
#[derive(Clone, Copy, Debug)]
pub struct CanvasViewport {
    view_size: Size,
    extent: Size,
    anchor: Vec2,
    limits: ViewLimits,
    scale: f64,
    pan: Vec2,
    world_to_view: Affine,
}

impl CanvasViewport {
    /// Creates a viewport with scale `1.0` and zero pan, then saturates both.
    #[must_use]
    pub fn new(view_size: Size, extent: Size, anchor: Vec2) -> Self {
        Self::with_limits(view_size, extent, anchor, ViewLimits::default())
    }

    /// Like [`CanvasViewport::new`] with explicit limits.
    #[must_use]
    pub fn with_limits(view_size: Size, extent: Size, anchor: Vec2, limits: ViewLimits) -> Self {
        let mut vp = Self {
            view_size,
            extent,
            anchor,
            limits,
            scale: 1.0,
            pan: Vec2::ZERO,
            world_to_view: Affine::IDENTITY,
        };
        vp.scale = vp.clamp_scale(vp.scale);
        vp.pan = vp.clamp_pan(vp.pan);
        vp.rebuild_transform();
        vp
    }

    /// Current view size in device pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Nominal content extent in world units.
    #[must_use]
    pub fn extent(&self) -> Size {
        self.extent
    }

    /// Limits in effect.
    #[must_use]
    pub fn limits(&self) -> ViewLimits {
        self.limits
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current pan offset in view pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Smallest scale at which the content still covers the view.
    ///
    /// Never below [`ViewLimits::min_scale_floor`]. May exceed
    /// [`ViewLimits::max_scale`] for very large views; in that case the maximum
    /// wins when clamping.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        min_scale_for(self.view_size, self.extent, self.limits.min_scale_floor)
    }

    /// Largest allowed scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.limits.max_scale
    }

    /// Saturates `scale` into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_scale()).min(self.limits.max_scale)
    }

    /// Pan bounds for an arbitrary scale at the current view size.
    #[must_use]
    pub fn bounds_at(&self, scale: f64) -> PanBounds {
        PanBounds::compute(
            scale,
            self.view_size,
            self.extent,
            self.anchor,
            self.limits.edge_slack,
        )
    }

    /// Pan bounds for the current scale.
    #[must_use]
    pub fn bounds(&self) -> PanBounds {
        self.bounds_at(self.scale)
    }

    /// Saturates `pan` into the bounds for the current scale.
    #[must_use]
    pub fn clamp_pan(&self, pan: Vec2) -> Vec2 {
        self.bounds().clamp(pan)
    }

    /// Returns `true` while zooming in can still change the scale.
    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.scale < self.limits.max_scale
    }

    /// Returns `true` while zooming out can still change the scale.
    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.scale > self.min_scale()
    }

    /// Sets the scale, then re-clamps pan against the new scale's bounds.
    ///
    /// Returns `true` if scale or pan changed.
    pub fn set_scale(&mut self, scale: f64) -> bool {
        let scale = self.clamp_scale(scale);
        let changed_scale = scale != self.scale;
        self.scale = scale;
        let pan = self.clamp_pan(self.pan);
        let changed_pan = pan != self.pan;
        self.pan = pan;
        if changed_scale || changed_pan {
            self.rebuild_transform();
        }
        changed_scale || changed_pan
    }

    /// Adds `delta` to the scale; see [`CanvasViewport::set_scale`].
    pub fn zoom_by(&mut self, delta: f64) -> bool {
        self.set_scale(self.scale + delta)
    }

    /// Moves to `pan`, clamped. Returns `true` if the pan changed.
    pub fn set_pan(&mut self, pan: Vec2) -> bool {
        let pan = self.clamp_pan(pan);
        if pan == self.pan {
            return false;
        }
        self.pan = pan;
        self.rebuild_transform();
        true
    }

    /// Moves by `delta` from the current pan, clamped.
    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        self.set_pan(self.pan + delta)
    }

    /// Changes the view size, then saturates scale and pan for it.
    ///
    /// Returns `true` if the size, scale, or pan changed.
    pub fn set_view_size(&mut self, size: Size) -> bool {
        if size == self.view_size {
            return false;
        }
        self.view_size = size;
        self.set_scale(self.scale);
        true
    }

    /// Converts a world-space point into view coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a view-space point into world coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.world_to_view.inverse() * pt
    }

    /// Projects a world-space rect into view coordinates.
    ///
    /// The transform is a positive uniform scale plus translation, so corners
    /// keep their order.
    #[must_use]
    pub fn world_to_view_rect(&self, rect: Rect) -> Rect {
        let p0 = self.world_to_view * Point::new(rect.x0, rect.y0);
        let p1 = self.world_to_view * Point::new(rect.x1, rect.y1);
        Rect::from_points(p0, p1)
    }

    /// The view rectangle in device coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_size.to_rect()
    }

    /// World-space rectangle currently visible.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let inv = self.world_to_view.inverse();
        let r = self.view_rect();
        Rect::from_points(inv * Point::new(r.x0, r.y0), inv * Point::new(r.x1, r.y1))
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CanvasViewportDebugInfo {
        CanvasViewportDebugInfo {
            view_size: self.view_size,
            extent: self.extent,
            scale: self.scale,
            pan: self.pan,
            min_scale: self.min_scale(),
            max_scale: self.limits.max_scale,
            bounds: self.bounds(),
            visible_world_rect: self.visible_world_rect(),
        }
    }

    fn rebuild_transform(&mut self) {
        // World → view: scale, then translate by pan.
        self.world_to_view = Affine::translate(self.pan) * Affine::scale(self.scale);
    }
}

/// Debug snapshot of a [`CanvasViewport`].
#[derive(Clone, Copy, Debug)]
pub struct CanvasViewportDebugInfo {
    /// View size in device pixels.
    pub view_size: Size,
    /// Content extent in world units.
    pub extent: Size,
    /// Current scale.
    pub scale: f64,
    /// Current pan.
    pub pan: Vec2,
    /// Derived minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
    /// Pan bounds at the current scale.
    pub bounds: PanBounds,
    /// World-space rectangle currently visible.
    pub visible_world_rect: Rect,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::CanvasViewport;

    fn showcase(view: Size) -> CanvasViewport {
        CanvasViewport::new(view, Size::new(2100.0, 1620.0), Vec2::new(300.0, 200.0))
    }

    #[test]
    fn starts_at_unit_scale_and_origin() {
        let vp = showcase(Size::new(1200.0, 800.0));
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.pan(), Vec2::ZERO);
    }

    #[test]
    fn initial_scale_saturates_for_huge_views() {
        // 2520 / 2100 = 1.2 > 1.0.
        let vp = showcase(Size::new(2520.0, 800.0));
        assert!((vp.scale() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn world_view_roundtrip() {
        let mut vp = showcase(Size::new(1200.0, 800.0));
        vp.set_scale(1.5);
        vp.set_pan(Vec2::new(-120.0, 40.0));
        let world = Point::new(10.0, -5.0);
        let back = vp.view_to_world_point(vp.world_to_view_point(world));
        assert!((back.x - world.x).abs() < 1e-9);
        assert!((back.y - world.y).abs() < 1e-9);
    }

    #[test]
    fn projection_is_scale_then_pan() {
        let mut vp = showcase(Size::new(1200.0, 800.0));
        vp.set_scale(1.5);
        vp.set_pan(Vec2::new(-100.0, 50.0));
        let r = vp.world_to_view_rect(Rect::new(100.0, 100.0, 240.0, 240.0));
        assert!((r.x0 - 50.0).abs() < 1e-9);
        assert!((r.y0 - 200.0).abs() < 1e-9);
        assert!((r.width() - 210.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_reclamps_pan_against_new_scale() {
        let mut vp = showcase(Size::new(1200.0, 800.0));
        vp.set_scale(2.0);
        // Far bottom-right corner at 2x.
        vp.set_pan(Vec2::new(-1e6, -1e6));
        let at_two = vp.pan();
        assert_eq!(at_two, vp.bounds().min);

        vp.set_scale(1.0);
        assert!(vp.bounds().contains(vp.pan()));
        assert_ne!(vp.pan(), at_two);
    }

    #[test]
    fn resize_reclamps_scale() {
        let mut vp = showcase(Size::new(1200.0, 800.0));
        vp.set_scale(0.6);
        assert!(vp.set_view_size(Size::new(1680.0, 800.0)));
        // 1680 / 2100 = 0.8.
        assert!((vp.scale() - 0.8).abs() < 1e-12);
        assert!(vp.bounds().contains(vp.pan()));
        assert!(!vp.set_view_size(Size::new(1680.0, 800.0)));
    }

    #[test]
    fn zoom_controls_availability() {
        let mut vp = showcase(Size::new(1200.0, 800.0));
        assert!(vp.can_zoom_in());
        assert!(vp.can_zoom_out());
        vp.set_scale(10.0);
        assert!(!vp.can_zoom_in());
        vp.set_scale(0.0);
        assert!(!vp.can_zoom_out());
        assert_eq!(vp.scale(), vp.min_scale());
    }

    #[test]
    fn visible_world_rect_inverts_projection() {
        let mut vp = showcase(Size::new(1200.0, 800.0));
        vp.set_scale(2.0);
        vp.set_pan(Vec2::new(-200.0, -100.0));
        let w = vp.visible_world_rect();
        assert!((w.x0 - 100.0).abs() < 1e-9);
        assert!((w.y0 - 50.0).abs() < 1e-9);
        assert!((w.width() - 600.0).abs() < 1e-9);
        assert!((w.height() - 400.0).abs() < 1e-9);
    }

    #[test]
    fn debug_info_reflects_state() {
        let vp = showcase(Size::new(1200.0, 800.0));
        let info = vp.debug_info();
        assert_eq!(info.scale, 1.0);
        assert!(info.min_scale <= info.max_scale);
        assert_eq!(info.bounds, vp.bounds());
    }
}
