// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-finger touch panning from successive touch-point deltas.
//!
//! Unlike [`crate::drag::PanDrag`], touch panning is incremental: each move
//! yields the delta since the previous touch point, which the caller adds to
//! the current (already clamped) pan. Gestures with more than one finger are
//! ignored.

use kurbo::{Point, Vec2};

/// Tracks the last single-finger touch point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchPan {
    last: Option<Point>,
}

impl TouchPan {
    /// Records the start of a touch with `touches` active fingers.
    ///
    /// Only single-finger touches are tracked; anything else leaves the state
    /// untouched.
    pub fn begin(&mut self, touches: usize, pos: Point) {
        if touches == 1 {
            self.last = Some(pos);
        }
    }

    /// Advances a single-finger touch to `pos`, returning the delta since the
    /// last touch point.
    ///
    /// Returns `None` for multi-finger moves. A move without a recorded start
    /// just records `pos`.
    pub fn advance(&mut self, touches: usize, pos: Point) -> Option<Vec2> {
        if touches != 1 {
            return None;
        }
        let delta = self.last.map(|last| pos - last);
        self.last = Some(pos);
        delta
    }

    /// Forgets the last touch point.
    pub fn end(&mut self) {
        self.last = None;
    }

    /// Last recorded touch point, if any.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::TouchPan;

    #[test]
    fn successive_moves_yield_incremental_deltas() {
        let mut touch = TouchPan::default();
        touch.begin(1, Point::new(0.0, 0.0));
        assert_eq!(touch.advance(1, Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(touch.advance(1, Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(touch.advance(1, Point::new(8.0, 7.0)), Some(Vec2::ZERO));
    }

    #[test]
    fn multi_finger_is_ignored() {
        let mut touch = TouchPan::default();
        touch.begin(2, Point::new(0.0, 0.0));
        assert_eq!(touch.last(), None);

        touch.begin(1, Point::new(0.0, 0.0));
        assert_eq!(touch.advance(2, Point::new(50.0, 50.0)), None);
        // The pinch did not move the tracked point.
        assert_eq!(touch.advance(1, Point::new(1.0, 0.0)), Some(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn move_without_start_only_records() {
        let mut touch = TouchPan::default();
        assert_eq!(touch.advance(1, Point::new(3.0, 3.0)), None);
        assert_eq!(touch.last(), Some(Point::new(3.0, 3.0)));
    }

    #[test]
    fn end_forgets_last_point() {
        let mut touch = TouchPan::default();
        touch.begin(1, Point::new(1.0, 1.0));
        touch.end();
        assert_eq!(touch.last(), None);
    }
}
