// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};
use showcase_layout::{GridSpec, Layout, LayoutSlot};

/// Identifies one item on the canvas: its grid cell index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemKey(pub usize);

/// The fixed content of the canvas: the layout and each item's nominal rect.
///
/// Built once; the controller only reads from it.
#[derive(Clone, Debug)]
pub struct CanvasScene {
    layout: Layout,
    rects: Vec<Rect>,
}

impl CanvasScene {
    /// Builds a scene from a generated layout.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        let base = layout.grid().base_size;
        let rects = layout.slots().iter().map(|s| s.rect(base)).collect();
        Self { layout, rects }
    }

    /// Generates the layout for `grid` and builds a scene from it.
    #[must_use]
    pub fn from_grid(grid: GridSpec) -> Self {
        Self::new(Layout::generate(grid))
    }

    /// The underlying layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Returns `true` if the scene has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Returns `true` if `key` names an item of this scene.
    #[must_use]
    pub fn contains(&self, key: ItemKey) -> bool {
        key.0 < self.rects.len()
    }

    /// Layout slot of `key`, if it exists.
    #[must_use]
    pub fn slot(&self, key: ItemKey) -> Option<&LayoutSlot> {
        self.layout.slot(key.0)
    }

    /// Nominal world-space rect of `key`, if it exists.
    #[must_use]
    pub fn item_rect(&self, key: ItemKey) -> Option<Rect> {
        self.rects.get(key.0).copied()
    }

    /// All items with their nominal rects, in cell order.
    pub fn items(&self) -> impl Iterator<Item = (ItemKey, Rect)> + '_ {
        self.rects.iter().enumerate().map(|(i, r)| (ItemKey(i), *r))
    }

    /// Nominal grid extent used for scale and pan limits.
    #[must_use]
    pub fn extent(&self) -> Size {
        self.layout.extent()
    }

    /// Centering offset of the grid; the pan anchor.
    #[must_use]
    pub fn anchor(&self) -> Vec2 {
        self.layout.grid().offset
    }
}

impl Default for CanvasScene {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}
