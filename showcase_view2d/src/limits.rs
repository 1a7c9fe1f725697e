// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Scale range and pan slack shared by every [`crate::CanvasViewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewLimits {
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Absolute lower bound on the derived minimum scale.
    pub min_scale_floor: f64,
    /// Extra room past the anchor on the upper pan bound, in view pixels.
    pub edge_slack: f64,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            max_scale: 2.0,
            min_scale_floor: 0.4,
            edge_slack: 50.0,
        }
    }
}

/// Smallest scale at which content of size `extent` still covers `view`.
///
/// Computes `max(view.w / extent.w, view.h / extent.h, floor)`. Axes with a
/// non-positive extent are ignored, so the result is always at least `floor`.
#[must_use]
pub fn min_scale_for(view: Size, extent: Size, floor: f64) -> f64 {
    let fit = |v: f64, e: f64| if e > 0.0 { v / e } else { 0.0 };
    fit(view.width, extent.width)
        .max(fit(view.height, extent.height))
        .max(floor)
}

/// Legal pan range for one scale and view size.
///
/// Bounds are asymmetric. The upper bound keeps the anchor (the content's
/// centering offset) near the view origin; the lower bound allows panning far
/// enough to reach the opposite edge of the scaled content. `min <= max` holds
/// on both axes for any finite input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    /// Lowest allowed pan on each axis.
    pub min: Vec2,
    /// Highest allowed pan on each axis.
    pub max: Vec2,
}

impl PanBounds {
    /// Computes the pan range.
    ///
    /// - `max_pan = max(0, extent × scale − view)` per axis.
    /// - `min = anchor × scale − max_pan`.
    /// - `max = anchor × scale + slack`.
    #[must_use]
    pub fn compute(scale: f64, view: Size, extent: Size, anchor: Vec2, slack: f64) -> Self {
        let max_pan = Vec2::new(
            (extent.width * scale - view.width).max(0.0),
            (extent.height * scale - view.height).max(0.0),
        );
        let anchored = anchor * scale;
        Self {
            min: anchored - max_pan,
            max: anchored + Vec2::new(slack, slack),
        }
    }

    /// Saturates `pan` into the bounds.
    ///
    /// Never panics. A NaN component saturates to the lower bound.
    #[must_use]
    pub fn clamp(&self, pan: Vec2) -> Vec2 {
        Vec2::new(
            pan.x.max(self.min.x).min(self.max.x),
            pan.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Returns `true` if `pan` lies within the bounds (inclusive).
    #[must_use]
    pub fn contains(&self, pan: Vec2) -> bool {
        (self.min.x..=self.max.x).contains(&pan.x) && (self.min.y..=self.max.y).contains(&pan.y)
    }
}
