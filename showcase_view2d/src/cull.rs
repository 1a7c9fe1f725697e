// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility culling with a reveal-on-approach margin.
//!
//! An item counts as visible once its projected box crosses well into the
//! view, not when it first touches an edge. The view is shrunk by
//! [`CullParams::inset`] on every side and the projected box must strictly
//! overlap what remains. Growing the inset can only shrink the visible set.
//!
//! Culling is a full rescan of the items every time it runs. At the showcase's
//! item count that is cheaper than maintaining an index; a bucketed grid would
//! be the next step if counts grew by orders of magnitude.

use core::hash::Hash;

use hashbrown::HashSet;
use kurbo::{Rect, Size};

use crate::CanvasViewport;

/// Culling parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CullParams {
    /// Distance, in view pixels, by which the view is shrunk on every side.
    pub inset: f64,
}

impl Default for CullParams {
    fn default() -> Self {
        Self { inset: 150.0 }
    }
}

/// Returns `true` if the view-space rect `screen` strictly overlaps `view`
/// shrunk by `inset` on every side.
#[must_use]
pub fn overlaps_inset(screen: Rect, view: Size, inset: f64) -> bool {
    screen.x1 > inset
        && screen.x0 < view.width - inset
        && screen.y1 > inset
        && screen.y0 < view.height - inset
}

/// The set of item keys currently considered visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilitySet<K: Eq + Hash> {
    keys: HashSet<K>,
}

impl<K: Eq + Hash> Default for VisibilitySet<K> {
    fn default() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> VisibilitySet<K> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies every item and keeps the visible ones.
    ///
    /// `items` yields each key with its nominal world-space rect.
    #[must_use]
    pub fn compute<I>(viewport: &CanvasViewport, items: I, params: CullParams) -> Self
    where
        I: IntoIterator<Item = (K, Rect)>,
    {
        let view = viewport.view_size();
        let keys = items
            .into_iter()
            .filter(|(_, rect)| overlaps_inset(viewport.world_to_view_rect(*rect), view, params.inset))
            .map(|(key, _)| key)
            .collect();
        Self { keys }
    }

    /// Returns `true` if `key` is visible.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Number of visible keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns `true` if every key in `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.keys.is_subset(&other.keys)
    }

    /// Iterates the visible keys in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};

    use super::{CullParams, VisibilitySet, overlaps_inset};
    use crate::CanvasViewport;

    const VIEW: Size = Size::new(1200.0, 800.0);

    #[test]
    fn inset_requires_crossing_well_inside() {
        // Touches the left edge, but not past the 150px inset.
        assert!(!overlaps_inset(Rect::new(-50.0, 300.0, 100.0, 450.0), VIEW, 150.0));
        assert!(overlaps_inset(Rect::new(-50.0, 300.0, 151.0, 450.0), VIEW, 150.0));
        // Exactly on the inset line does not count.
        assert!(!overlaps_inset(Rect::new(1050.0, 300.0, 1200.0, 450.0), VIEW, 150.0));
        assert!(overlaps_inset(Rect::new(1049.0, 300.0, 1200.0, 450.0), VIEW, 150.0));
    }

    #[test]
    fn compute_projects_through_viewport() {
        let mut vp = CanvasViewport::new(VIEW, Size::new(2100.0, 1620.0), Vec2::new(300.0, 200.0));
        let items = [
            (0_usize, Rect::new(500.0, 300.0, 640.0, 440.0)),
            (1, Rect::new(-200.0, -100.0, -60.0, 40.0)),
        ];
        let set = VisibilitySet::compute(&vp, items, CullParams::default());
        assert!(set.contains(&0));
        assert!(!set.contains(&1));

        // Pan so the second item's box is fully inside.
        vp.set_pan(Vec2::new(300.0, 200.0));
        let set = VisibilitySet::compute(&vp, items, CullParams::default());
        assert!(set.contains(&1));
    }
}
