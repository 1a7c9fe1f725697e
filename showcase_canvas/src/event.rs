// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use smallvec::SmallVec;

use crate::ItemKey;

bitflags::bitflags! {
    /// Keyboard modifiers held during a wheel gesture.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 1;
        /// Control. Trackpad pinch gestures arrive as Ctrl + wheel.
        const CTRL = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Meta / Command.
        const META = 1 << 3;
    }
}

impl Modifiers {
    /// Returns `true` if a wheel gesture with these modifiers means "zoom".
    #[must_use]
    pub fn zoom_intent(self) -> bool {
        self.intersects(Self::CTRL | Self::META)
    }
}

/// Input delivered to the canvas controller.
///
/// Positions are in view (device pixel) coordinates. `target` is the item under
/// the pointer as determined by the host's hit testing, or `None` for the
/// canvas background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasEvent {
    /// Primary button pressed.
    PointerDown {
        /// Pointer position.
        pos: Point,
        /// Item under the pointer.
        target: Option<ItemKey>,
    },
    /// Pointer moved.
    PointerMove {
        /// Pointer position.
        pos: Point,
    },
    /// Primary button released.
    PointerUp {
        /// Pointer position.
        pos: Point,
        /// Item under the pointer.
        target: Option<ItemKey>,
    },
    /// Pointer left the canvas.
    PointerLeave,
    /// Pointer entered an item.
    ItemEnter(ItemKey),
    /// Pointer left an item.
    ItemLeave(ItemKey),
    /// Touch started.
    TouchStart {
        /// Number of active touch points.
        touches: usize,
        /// Position of the first touch point.
        pos: Point,
    },
    /// Touch moved.
    TouchMove {
        /// Number of active touch points.
        touches: usize,
        /// Position of the first touch point.
        pos: Point,
    },
    /// All touches lifted.
    TouchEnd,
    /// Scroll wheel or trackpad scroll.
    Wheel {
        /// Scroll delta in pixels.
        delta: Vec2,
        /// Modifiers held during the gesture.
        modifiers: Modifiers,
    },
    /// Zoom-in control activated.
    ZoomIn,
    /// Zoom-out control activated.
    ZoomOut,
    /// The view was resized.
    Resize(Size),
}

/// Output of a transition, for the host to act on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasAction {
    /// Scale changed to the given value.
    ScaleChanged(f64),
    /// Pan changed to the given offset.
    PanChanged(Vec2),
    /// The visibility set changed.
    VisibilityChanged,
    /// An item was clicked.
    Select(ItemKey),
    /// The background was clicked without dragging.
    Dismiss,
    /// The hovered item changed.
    HoverChanged(Option<ItemKey>),
}

/// Actions produced by one transition.
pub type Actions = SmallVec<[CanvasAction; 4]>;
