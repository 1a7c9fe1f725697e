// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=showcase_shell --heading-base-level=0

//! Showcase Shell: page-level state around the canvas.
//!
//! [`Shell`] ties the pieces together the way the showcase page does:
//!
//! - a [`ViewMode`] switching between the experience canvas and the list,
//! - the canvas controller from `showcase_canvas`, fed with host events,
//! - a [`DetailPanel`] that opens on selection and clears its record a short
//!   while after being closed.
//!
//! Canvas actions are routed here: a `Select` resolves the clicked grid cell
//! through the catalog tiling and opens the panel on that record; a `Dismiss`
//! closes the panel. All other actions are passed back to the host untouched.
//!
//! Time never comes from a clock. Methods that care about time take a
//! millisecond timestamp, and [`Shell::tick`] performs the delayed clear.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use showcase_canvas::{CanvasEvent, ItemKey};
//! use showcase_shell::{Shell, ShellConfig};
//!
//! let mut shell = Shell::new(Size::new(1200.0, 800.0), ShellConfig::default());
//!
//! // Click grid cell 10, which shows the second record.
//! let pos = Point::new(500.0, 300.0);
//! let target = Some(ItemKey(10));
//! shell.handle(CanvasEvent::PointerDown { pos, target }, 0);
//! shell.handle(CanvasEvent::PointerUp { pos, target }, 0);
//! assert_eq!(shell.panel().selected().map(|item| item.id), Some("2"));
//!
//! // Click the background: the panel closes now and clears 300 ms later.
//! let pos = Point::new(20.0, 20.0);
//! shell.handle(CanvasEvent::PointerDown { pos, target: None }, 1_000);
//! shell.handle(CanvasEvent::PointerUp { pos, target: None }, 1_000);
//! assert!(!shell.panel().is_open());
//! assert!(shell.tick(1_300));
//! assert!(shell.panel().selected().is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod list;
mod mode;
pub mod panel;

pub use list::{ListEntry, list_entries};
pub use mode::ViewMode;
pub use panel::{DetailPanel, PanelConfig, PanelView};

use kurbo::{Point, Size};
use showcase_canvas::{
    Actions, CanvasAction, CanvasEvent, CanvasScene, CanvasState, ControllerConfig, ItemKey,
};
use showcase_catalog::{Catalog, TiledId};
use showcase_layout::GridSpec;
use tracing::debug;

/// Configuration of a [`Shell`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShellConfig {
    /// Canvas grid.
    pub grid: GridSpec,
    /// Canvas controller tunables.
    pub controller: ControllerConfig,
    /// Detail panel tunables.
    pub panel: PanelConfig,
}

/// Hover tooltip contents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tooltip {
    /// Cell id of the hovered item.
    pub id: TiledId,
    /// Display name of the hovered record.
    pub label: &'static str,
    /// View-space anchor of the tooltip.
    pub position: Point,
}

/// Page-level state: view mode, canvas, and detail panel.
#[derive(Clone, Debug)]
pub struct Shell {
    catalog: Catalog,
    scene: CanvasScene,
    canvas: CanvasState,
    panel: DetailPanel,
    mode: ViewMode,
}

impl Shell {
    /// A shell over the built-in watch catalog.
    #[must_use]
    pub fn new(view_size: Size, config: ShellConfig) -> Self {
        Self::with_catalog(Catalog::watches(), view_size, config)
    }

    /// A shell over `catalog`.
    #[must_use]
    pub fn with_catalog(catalog: Catalog, view_size: Size, config: ShellConfig) -> Self {
        let scene = CanvasScene::from_grid(config.grid);
        let canvas = CanvasState::new(&scene, view_size, config.controller);
        Self {
            catalog,
            scene,
            canvas,
            panel: DetailPanel::new(config.panel),
            mode: ViewMode::default(),
        }
    }

    /// The catalog shown.
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    /// The canvas content.
    #[must_use]
    pub fn scene(&self) -> &CanvasScene {
        &self.scene
    }

    /// The canvas controller state.
    #[must_use]
    pub fn canvas(&self) -> &CanvasState {
        &self.canvas
    }

    /// The detail panel.
    #[must_use]
    pub fn panel(&self) -> &DetailPanel {
        &self.panel
    }

    /// The active view mode.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switches between the canvas and the list. Returns the new mode.
    pub fn toggle_mode(&mut self) -> ViewMode {
        self.mode = self.mode.toggled();
        debug!(mode = ?self.mode, "view mode toggled");
        self.mode
    }

    /// Feeds a canvas event at time `now_ms` and routes the resulting actions.
    ///
    /// Returns the controller's actions unchanged so the host can update
    /// transforms and visibility.
    pub fn handle(&mut self, event: CanvasEvent, now_ms: u64) -> Actions {
        let actions = self.canvas.apply(&self.scene, event);
        for action in &actions {
            match *action {
                CanvasAction::Select(key) => {
                    self.select_cell(key);
                }
                CanvasAction::Dismiss => {
                    self.close_panel(now_ms);
                }
                _ => {}
            }
        }
        actions
    }

    /// Opens the panel on the record shown in cell `key`.
    ///
    /// Returns `false` (and changes nothing) if the cell has no record.
    pub fn select_cell(&mut self, key: ItemKey) -> bool {
        if !self.scene.contains(key) {
            return false;
        }
        let Some(entry) = self.catalog.tiled_entry(key.0) else {
            return false;
        };
        debug!(cell = key.0, id = entry.item.id, "item selected");
        self.panel.open(entry.item);
        true
    }

    /// Opens the panel on the record with id `id`, as clicked in the list.
    ///
    /// Tiled cell ids are accepted too. Returns `false` if nothing matches.
    pub fn select_listed(&mut self, id: &str) -> bool {
        let Some(item) = self.catalog.resolve(id) else {
            return false;
        };
        debug!(id = item.id, "list item selected");
        self.panel.open(item);
        true
    }

    /// Closes the detail panel at `now_ms`. Returns `false` if it was closed.
    pub fn close_panel(&mut self, now_ms: u64) -> bool {
        let closed = self.panel.close(now_ms);
        if closed {
            debug!(now_ms, "panel closed");
        }
        closed
    }

    /// Advances time to `now_ms`. Returns `true` if a pending clear ran.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let cleared = self.panel.tick(now_ms);
        if cleared {
            debug!(now_ms, "panel selection cleared");
        }
        cleared
    }

    /// Rows of the list view.
    pub fn list_entries(&self) -> impl Iterator<Item = ListEntry> {
        list_entries(self.catalog)
    }

    /// Cell id of `key`, if the cell has a record.
    #[must_use]
    pub fn cell_id(&self, key: ItemKey) -> Option<TiledId> {
        if !self.scene.contains(key) {
            return None;
        }
        self.catalog.tiled_entry(key.0).map(|entry| entry.id)
    }

    /// Tooltip for the hovered item, if any.
    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        let (key, position) = self.canvas.tooltip()?;
        let entry = self.catalog.tiled_entry(key.0)?;
        Some(Tooltip {
            id: entry.id,
            label: entry.item.name,
            position,
        })
    }
}
