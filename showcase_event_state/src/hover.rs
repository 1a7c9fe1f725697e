// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking for a flat set of items, plus the pointer position for tooltips.

use kurbo::{Point, Vec2};

/// A hover transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer entered the item.
    Enter(K),
    /// The pointer left the item.
    Leave(K),
}

/// Tracks which item (if any) is hovered and where the pointer is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverState<K> {
    hovered: Option<K>,
    pointer: Point,
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self {
            hovered: None,
            pointer: Point::ORIGIN,
        }
    }
}

impl<K: Copy + PartialEq> HoverState<K> {
    /// Creates a state with nothing hovered and the pointer at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The hovered item.
    #[must_use]
    pub fn hovered(&self) -> Option<K> {
        self.hovered
    }

    /// Last recorded pointer position.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Records a pointer move.
    pub fn pointer_moved(&mut self, pos: Point) {
        self.pointer = pos;
    }

    /// Pointer entered `key`.
    ///
    /// Entering a new item implicitly leaves the previous one; only the enter is
    /// reported, as hosts re-render the single tooltip either way.
    pub fn enter(&mut self, key: K) -> Option<HoverEvent<K>> {
        if self.hovered == Some(key) {
            return None;
        }
        self.hovered = Some(key);
        Some(HoverEvent::Enter(key))
    }

    /// Pointer left `key`. Ignored unless `key` is the hovered item.
    pub fn leave(&mut self, key: K) -> Option<HoverEvent<K>> {
        if self.hovered != Some(key) {
            return None;
        }
        self.hovered = None;
        Some(HoverEvent::Leave(key))
    }

    /// Clears the hover, e.g. when the pointer leaves the canvas.
    pub fn clear(&mut self) -> Option<HoverEvent<K>> {
        self.hovered.take().map(HoverEvent::Leave)
    }

    /// Tooltip anchor: the pointer shifted by `offset`, while something is hovered.
    #[must_use]
    pub fn tooltip(&self, offset: Vec2) -> Option<(K, Point)> {
        self.hovered.map(|key| (key, self.pointer + offset))
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{HoverEvent, HoverState};

    #[test]
    fn enter_and_leave() {
        let mut hover = HoverState::new();
        assert_eq!(hover.enter(3), Some(HoverEvent::Enter(3)));
        assert_eq!(hover.enter(3), None);
        assert_eq!(hover.leave(4), None);
        assert_eq!(hover.hovered(), Some(3));
        assert_eq!(hover.leave(3), Some(HoverEvent::Leave(3)));
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn entering_another_item_replaces_hover() {
        let mut hover = HoverState::new();
        hover.enter(1);
        assert_eq!(hover.enter(2), Some(HoverEvent::Enter(2)));
        // A late leave for the old item is ignored.
        assert_eq!(hover.leave(1), None);
        assert_eq!(hover.hovered(), Some(2));
    }

    #[test]
    fn tooltip_follows_pointer() {
        let mut hover = HoverState::new();
        hover.pointer_moved(Point::new(100.0, 40.0));
        assert_eq!(hover.tooltip(Vec2::new(15.0, 15.0)), None);
        hover.enter(7);
        assert_eq!(
            hover.tooltip(Vec2::new(15.0, 15.0)),
            Some((7, Point::new(115.0, 55.0)))
        );
        assert_eq!(hover.clear(), Some(HoverEvent::Leave(7)));
        assert_eq!(hover.clear(), None);
    }
}
