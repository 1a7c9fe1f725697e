// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan state: absolute pan targets from a press anchor, and click vs. drag on release.
//!
//! ## Usage
//!
//! 1) On pointer-down over the background, call [`PanDrag::press`] with the pointer
//!    position and the pan offset at that moment.
//! 2) On each move, call [`PanDrag::target_pan`] to get the unclamped pan that keeps the
//!    grabbed point under the pointer. Clamp it with your viewport.
//! 3) On pointer-up, call [`PanDrag::release`]: a press that travelled less than the
//!    click threshold is reported as [`Release::Click`].
//! 4) On pointer-leave, call [`PanDrag::release`] with the last known pointer
//!    position; leaving is classified like a release.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use showcase_event_state::drag::{PanDrag, Release};
//!
//! let mut drag = PanDrag::default();
//!
//! // Grab at (100, 100) while the canvas is panned by (-20, 0).
//! drag.press(Point::new(100.0, 100.0), Vec2::new(-20.0, 0.0));
//!
//! // Pointer moves 30px right: the canvas follows.
//! let pan = drag.target_pan(Point::new(130.0, 100.0)).unwrap();
//! assert_eq!(pan, Vec2::new(10.0, 0.0));
//!
//! // Released far from the press point: it was a drag.
//! assert_eq!(drag.release(Point::new(130.0, 100.0), 5.0), Some(Release::Drag));
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Manhattan travel below which a press-release counts as a click.
pub const CLICK_SLOP: f64 = 5.0;

/// How a drag ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// The pointer travelled less than the threshold.
    Click,
    /// The pointer travelled at least the threshold.
    Drag,
}

/// Tracks one background drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanDrag {
    press: Option<Press>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Press {
    pointer: Point,
    pan: Vec2,
}

impl PanDrag {
    /// Starts a drag at `pointer` with the canvas currently panned by `pan`.
    ///
    /// Replaces any drag already in progress.
    pub fn press(&mut self, pointer: Point, pan: Vec2) {
        self.press = Some(Press { pointer, pan });
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.press.is_some()
    }

    /// Pan offset that keeps the grabbed point under `pointer`.
    ///
    /// This is `pointer − (press_pointer − press_pan)`, unclamped. `None` when idle.
    #[must_use]
    pub fn target_pan(&self, pointer: Point) -> Option<Vec2> {
        self.press.map(|p| pan_target(p, pointer))
    }

    /// Manhattan distance between the press point and `pointer`. `None` when idle.
    #[must_use]
    pub fn travel(&self, pointer: Point) -> Option<f64> {
        self.press.map(|p| {
            let d = pointer - p.pointer;
            d.x.abs() + d.y.abs()
        })
    }

    /// Ends the drag at `pointer`, classifying it against `threshold`.
    ///
    /// Returns `None` if no drag was in progress.
    pub fn release(&mut self, pointer: Point, threshold: f64) -> Option<Release> {
        let travel = self.travel(pointer)?;
        self.press = None;
        Some(if travel < threshold {
            Release::Click
        } else {
            Release::Drag
        })
    }
}

fn pan_target(press: Press, pointer: Point) -> Vec2 {
    pointer.to_vec2() - (press.pointer.to_vec2() - press.pan)
}
