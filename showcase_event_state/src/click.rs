// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item click recognition: a press and release on the same item.

/// Remembers which item a press started on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemPress<K> {
    pressed: Option<K>,
}

impl<K> Default for ItemPress<K> {
    fn default() -> Self {
        Self { pressed: None }
    }
}

impl<K: Copy + PartialEq> ItemPress<K> {
    /// Records a press on `target`, or on the background when `None`.
    pub fn down(&mut self, target: Option<K>) {
        self.pressed = target;
    }

    /// Completes a press with a release over `target`.
    ///
    /// Returns the clicked item when press and release hit the same item.
    pub fn up(&mut self, target: Option<K>) -> Option<K> {
        let pressed = self.pressed.take()?;
        (target == Some(pressed)).then_some(pressed)
    }

    /// Drops any pending press.
    pub fn cancel(&mut self) {
        self.pressed = None;
    }

    /// The item a pending press started on.
    #[must_use]
    pub fn pressed(&self) -> Option<K> {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::ItemPress;

    #[test]
    fn same_item_is_a_click() {
        let mut press = ItemPress::default();
        press.down(Some(4));
        assert_eq!(press.up(Some(4)), Some(4));
        assert_eq!(press.pressed(), None);
    }

    #[test]
    fn release_elsewhere_is_not_a_click() {
        let mut press = ItemPress::default();
        press.down(Some(4));
        assert_eq!(press.up(Some(5)), None);
        press.down(Some(4));
        assert_eq!(press.up(None), None);
    }

    #[test]
    fn background_press_never_clicks_an_item() {
        let mut press = ItemPress::<u32>::default();
        press.down(None);
        assert_eq!(press.up(Some(1)), None);
    }

    #[test]
    fn cancel_drops_pending_press() {
        let mut press = ItemPress::default();
        press.down(Some(1));
        press.cancel();
        assert_eq!(press.up(Some(1)), None);
    }
}
