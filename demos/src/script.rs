// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recorded gesture scripts.
//!
//! A script is a JSON document listing timestamped steps:
//!
//! ```json
//! { "steps": [
//!     { "at_ms": 0,   "event": { "type": "pointer_down", "x": 600, "y": 400 } },
//!     { "at_ms": 16,  "event": { "type": "pointer_move", "x": 520, "y": 360 } },
//!     { "at_ms": 32,  "event": { "type": "pointer_up",   "x": 520, "y": 360 } },
//!     { "at_ms": 40,  "event": { "type": "wheel", "dy": -120, "ctrl": true } }
//! ] }
//! ```
//!
//! Canvas gestures go through the controller; the remaining step types drive
//! the page shell directly (view mode, list selection, panel, clock).

use std::fs;
use std::path::Path;

use kurbo::{Point, Size, Vec2};
use serde::Deserialize;
use showcase_canvas::{CanvasAction, CanvasEvent, ItemKey, Modifiers};
use showcase_shell::Shell;
use tracing::{debug, info};

use crate::DemoError;

/// A gesture script shipped with the demos: drag, zoom, hover, select, dismiss.
pub const DEFAULT_SCRIPT: &str = include_str!("../scripts/tour.json");

/// A parsed gesture script.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Script {
    /// Steps in playback order.
    pub steps: Vec<Step>,
}

/// One timestamped step.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Step {
    /// Timestamp in milliseconds, passed to the shell as `now`.
    #[serde(default)]
    pub at_ms: u64,
    /// What happens.
    pub event: ScriptEvent,
}

/// A step's event, as written in the script.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Primary button pressed, optionally over grid cell `item`.
    PointerDown {
        /// View x.
        x: f64,
        /// View y.
        y: f64,
        /// Grid cell under the pointer.
        #[serde(default)]
        item: Option<usize>,
    },
    /// Pointer moved.
    PointerMove {
        /// View x.
        x: f64,
        /// View y.
        y: f64,
    },
    /// Primary button released, optionally over grid cell `item`.
    PointerUp {
        /// View x.
        x: f64,
        /// View y.
        y: f64,
        /// Grid cell under the pointer.
        #[serde(default)]
        item: Option<usize>,
    },
    /// Pointer left the canvas.
    PointerLeave,
    /// Pointer entered a grid cell.
    ItemEnter {
        /// Grid cell.
        item: usize,
    },
    /// Pointer left a grid cell.
    ItemLeave {
        /// Grid cell.
        item: usize,
    },
    /// Touch started.
    TouchStart {
        /// Active touch points.
        #[serde(default = "one")]
        touches: usize,
        /// View x of the first touch.
        x: f64,
        /// View y of the first touch.
        y: f64,
    },
    /// Touch moved.
    TouchMove {
        /// Active touch points.
        #[serde(default = "one")]
        touches: usize,
        /// View x of the first touch.
        x: f64,
        /// View y of the first touch.
        y: f64,
    },
    /// All touches lifted.
    TouchEnd,
    /// Scroll wheel.
    Wheel {
        /// Horizontal delta.
        #[serde(default)]
        dx: f64,
        /// Vertical delta.
        #[serde(default)]
        dy: f64,
        /// Control held.
        #[serde(default)]
        ctrl: bool,
        /// Meta held.
        #[serde(default)]
        meta: bool,
        /// Shift held.
        #[serde(default)]
        shift: bool,
    },
    /// Zoom-in control.
    ZoomIn,
    /// Zoom-out control.
    ZoomOut,
    /// View resized.
    Resize {
        /// New width.
        width: f64,
        /// New height.
        height: f64,
    },
    /// Toggle between canvas and list.
    ToggleMode,
    /// Click a list row.
    SelectListed {
        /// Record id.
        id: String,
    },
    /// Panel close button.
    ClosePanel,
    /// Only advance the clock.
    Tick,
}

fn one() -> usize {
    1
}

impl ScriptEvent {
    /// The controller event for canvas gestures; `None` for shell steps.
    #[must_use]
    pub fn canvas_event(&self) -> Option<CanvasEvent> {
        let event = match *self {
            Self::PointerDown { x, y, item } => CanvasEvent::PointerDown {
                pos: Point::new(x, y),
                target: item.map(ItemKey),
            },
            Self::PointerMove { x, y } => CanvasEvent::PointerMove {
                pos: Point::new(x, y),
            },
            Self::PointerUp { x, y, item } => CanvasEvent::PointerUp {
                pos: Point::new(x, y),
                target: item.map(ItemKey),
            },
            Self::PointerLeave => CanvasEvent::PointerLeave,
            Self::ItemEnter { item } => CanvasEvent::ItemEnter(ItemKey(item)),
            Self::ItemLeave { item } => CanvasEvent::ItemLeave(ItemKey(item)),
            Self::TouchStart { touches, x, y } => CanvasEvent::TouchStart {
                touches,
                pos: Point::new(x, y),
            },
            Self::TouchMove { touches, x, y } => CanvasEvent::TouchMove {
                touches,
                pos: Point::new(x, y),
            },
            Self::TouchEnd => CanvasEvent::TouchEnd,
            Self::Wheel {
                dx,
                dy,
                ctrl,
                meta,
                shift,
            } => {
                let mut modifiers = Modifiers::empty();
                modifiers.set(Modifiers::CTRL, ctrl);
                modifiers.set(Modifiers::META, meta);
                modifiers.set(Modifiers::SHIFT, shift);
                CanvasEvent::Wheel {
                    delta: Vec2::new(dx, dy),
                    modifiers,
                }
            }
            Self::ZoomIn => CanvasEvent::ZoomIn,
            Self::ZoomOut => CanvasEvent::ZoomOut,
            Self::Resize { width, height } => CanvasEvent::Resize(Size::new(width, height)),
            Self::ToggleMode | Self::SelectListed { .. } | Self::ClosePanel | Self::Tick => {
                return None;
            }
        };
        Some(event)
    }
}

impl Script {
    /// Parses a script from JSON text.
    pub fn from_json(text: &str) -> Result<Self, DemoError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses the script at `path`.
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let text = fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// The bundled tour script.
    pub fn tour() -> Result<Self, DemoError> {
        Self::from_json(DEFAULT_SCRIPT)
    }
}

/// What one replayed step did.
#[derive(Clone, Debug, PartialEq)]
pub struct StepReport {
    /// Step timestamp.
    pub at_ms: u64,
    /// Controller actions, empty for shell steps.
    pub actions: Vec<CanvasAction>,
    /// `true` if a delayed panel clear ran at this step.
    pub cleared: bool,
}

/// Plays one step against `shell`.
///
/// The shell clock is advanced to the step's timestamp first, so pending
/// panel clears run before the step's own event.
pub fn replay_step(shell: &mut Shell, step: &Step) -> StepReport {
    let cleared = shell.tick(step.at_ms);
    let actions = match step.event.canvas_event() {
        Some(event) => shell.handle(event, step.at_ms).into_vec(),
        None => {
            apply_shell_step(shell, &step.event, step.at_ms);
            Vec::new()
        }
    };
    debug!(at_ms = step.at_ms, event = ?step.event, ?actions, "step replayed");
    StepReport {
        at_ms: step.at_ms,
        actions,
        cleared,
    }
}

/// Plays `script` against `shell`, one report per step.
pub fn replay(shell: &mut Shell, script: &Script) -> Vec<StepReport> {
    script
        .steps
        .iter()
        .map(|step| replay_step(shell, step))
        .collect()
}

fn apply_shell_step(shell: &mut Shell, event: &ScriptEvent, now_ms: u64) {
    match event {
        ScriptEvent::ToggleMode => {
            let mode = shell.toggle_mode();
            info!(?mode, "view mode");
        }
        ScriptEvent::SelectListed { id } => {
            if !shell.select_listed(id) {
                info!(id = id.as_str(), "no record for list selection");
            }
        }
        ScriptEvent::ClosePanel => {
            shell.close_panel(now_ms);
        }
        _ => {}
    }
}
