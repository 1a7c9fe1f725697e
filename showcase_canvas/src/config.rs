// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use showcase_event_state::drag::CLICK_SLOP;
use showcase_view2d::ViewLimits;
use showcase_view2d::cull::CullParams;

/// Tunables of the canvas controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerConfig {
    /// Scale change per zoom-control activation.
    pub zoom_step: f64,
    /// Scale change per modified wheel event.
    pub wheel_zoom_step: f64,
    /// Manhattan travel below which a background press-release is a click.
    pub click_slop: f64,
    /// Offset of the hover tooltip from the pointer.
    pub tooltip_offset: Vec2,
    /// Scale range and pan slack.
    pub limits: ViewLimits,
    /// Visibility culling parameters.
    pub cull: CullParams,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            zoom_step: 0.2,
            wheel_zoom_step: 0.05,
            click_slop: CLICK_SLOP,
            tooltip_offset: Vec2::new(15.0, 15.0),
            limits: ViewLimits::default(),
            cull: CullParams::default(),
        }
    }
}
