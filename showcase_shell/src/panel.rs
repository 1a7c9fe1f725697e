// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The detail panel and its delayed clear.
//!
//! Closing the panel hides it immediately but keeps the record around until a
//! deadline passes, so the host can animate the panel out with its content
//! still in place. Time is supplied by the caller in milliseconds; nothing here
//! reads a clock.

use showcase_catalog::CatalogItem;
use showcase_catalog::swatch::{Swatch, color_options};

/// Number of color options offered by the panel.
pub const COLOR_OPTION_COUNT: usize = 4;

/// Tunables of the detail panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelConfig {
    /// Delay between closing the panel and clearing its record.
    pub clear_delay_ms: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { clear_delay_ms: 300 }
    }
}

/// Selection shown in the detail panel.
///
/// A revision counter bumps on every observable change, so hosts can skip
/// redundant redraws.
#[derive(Clone, Debug, Default)]
pub struct DetailPanel {
    config: PanelConfig,
    selected: Option<&'static CatalogItem>,
    open: bool,
    clear_at: Option<u64>,
    revision: u64,
}

impl DetailPanel {
    /// A closed, empty panel.
    #[must_use]
    pub fn new(config: PanelConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The record shown, including while the panel is closing.
    #[must_use]
    pub fn selected(&self) -> Option<&'static CatalogItem> {
        self.selected
    }

    /// Returns `true` while the panel is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Timestamp at which the record will be cleared, if a clear is pending.
    #[must_use]
    pub fn pending_clear(&self) -> Option<u64> {
        self.clear_at
    }

    /// Change counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Opens the panel on `item`, cancelling any pending clear.
    pub fn open(&mut self, item: &'static CatalogItem) {
        let same = self.open && self.selected.is_some_and(|s| s.id == item.id);
        self.clear_at = None;
        if !same {
            self.selected = Some(item);
            self.open = true;
            self.bump_revision();
        }
    }

    /// Closes the panel at `now_ms` and schedules the clear.
    ///
    /// Returns `false` if the panel was already closed.
    pub fn close(&mut self, now_ms: u64) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.clear_at = Some(now_ms.saturating_add(self.config.clear_delay_ms));
        self.bump_revision();
        true
    }

    /// Advances time to `now_ms`. Returns `true` if the record was cleared.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.clear_at {
            Some(deadline) if now_ms >= deadline => {
                self.clear_at = None;
                self.selected = None;
                self.bump_revision();
                true
            }
            _ => false,
        }
    }

    /// What the host should render, if anything is selected.
    #[must_use]
    pub fn view(&self) -> Option<PanelView> {
        self.selected.map(|item| PanelView {
            item,
            open: self.open,
            swatch: item.swatch(),
        })
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Render-ready contents of the detail panel.
#[derive(Clone, Copy, Debug)]
pub struct PanelView {
    /// The record shown.
    pub item: &'static CatalogItem,
    /// `false` while the panel is closing.
    pub open: bool,
    /// Swatch for the record's color.
    pub swatch: Swatch,
}

impl PanelView {
    /// Color options offered beside the record.
    pub fn color_options(&self) -> impl Iterator<Item = Swatch> {
        color_options(COLOR_OPTION_COUNT)
    }

    /// Returns `true` if `option` is the record's own color, the one to
    /// highlight.
    #[must_use]
    pub fn is_current(&self, option: &Swatch) -> bool {
        option.name == Some(self.item.color)
    }

    /// The offered option matching the record's color, with its position.
    ///
    /// `None` when the record's color is not among the offered options.
    #[must_use]
    pub fn selected_option(&self) -> Option<(usize, Swatch)> {
        self.color_options()
            .enumerate()
            .find(|(_, option)| self.is_current(option))
    }
}
