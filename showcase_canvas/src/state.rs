// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use showcase_event_state::click::ItemPress;
use showcase_event_state::drag::{PanDrag, Release};
use showcase_event_state::hover::HoverState;
use showcase_event_state::touch::TouchPan;
use showcase_view2d::CanvasViewport;
use showcase_view2d::cull::VisibilitySet;
use tracing::{debug, trace};

use crate::{Actions, CanvasAction, CanvasEvent, CanvasScene, ControllerConfig, ItemKey};

/// Snapshot of the canvas controller.
///
/// Callers never reach into the state: [`CanvasState::update`] consumes it and
/// returns the next state together with the actions the transition produced,
/// and [`CanvasState::apply`] runs the same transition on a state held in
/// place.
#[derive(Clone, Debug)]
pub struct CanvasState {
    config: ControllerConfig,
    viewport: CanvasViewport,
    drag: PanDrag,
    press: ItemPress<ItemKey>,
    touch: TouchPan,
    hover: HoverState<ItemKey>,
    visible: VisibilitySet<ItemKey>,
}

/// Result of [`CanvasState::update`].
#[derive(Clone, Debug)]
pub struct Transition {
    /// The next state.
    pub state: CanvasState,
    /// What changed, in the order the host should apply it.
    pub actions: Actions,
}

impl CanvasState {
    /// Initial state for `scene` in a view of `view_size`: scale `1.0` and zero
    /// pan (both saturated), idle, with visibility computed.
    #[must_use]
    pub fn new(scene: &CanvasScene, view_size: Size, config: ControllerConfig) -> Self {
        let viewport =
            CanvasViewport::with_limits(view_size, scene.extent(), scene.anchor(), config.limits);
        let visible = VisibilitySet::compute(&viewport, scene.items(), config.cull);
        Self {
            config,
            viewport,
            drag: PanDrag::default(),
            press: ItemPress::default(),
            touch: TouchPan::default(),
            hover: HoverState::new(),
            visible,
        }
    }

    /// Controller configuration.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// The viewport (scale, pan, bounds).
    #[must_use]
    pub fn viewport(&self) -> &CanvasViewport {
        &self.viewport
    }

    /// Current pan offset.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.viewport.pan()
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.viewport.scale()
    }

    /// Returns `true` while a background drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` while the zoom-in control can still change the scale.
    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.viewport.can_zoom_in()
    }

    /// Returns `true` while the zoom-out control can still change the scale.
    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.viewport.can_zoom_out()
    }

    /// Items currently considered visible.
    #[must_use]
    pub fn visible(&self) -> &VisibilitySet<ItemKey> {
        &self.visible
    }

    /// Returns `true` if `key` is visible.
    #[must_use]
    pub fn is_visible(&self, key: ItemKey) -> bool {
        self.visible.contains(&key)
    }

    /// The hovered item.
    #[must_use]
    pub fn hovered(&self) -> Option<ItemKey> {
        self.hover.hovered()
    }

    /// Hovered item and the view-space point where its tooltip goes.
    #[must_use]
    pub fn tooltip(&self) -> Option<(ItemKey, Point)> {
        self.hover.tooltip(self.config.tooltip_offset)
    }

    /// Applies `event` and returns the next state with the resulting actions.
    ///
    /// Pan and scale always end inside their limits. When scale changes, pan is
    /// re-clamped against the bounds for the new scale before anything is
    /// reported. Visibility is recomputed whenever pan, scale, or view size
    /// changed.
    #[must_use]
    pub fn update(mut self, scene: &CanvasScene, event: CanvasEvent) -> Transition {
        let actions = self.apply(scene, event);
        Transition {
            state: self,
            actions,
        }
    }

    /// Applies `event` in place and returns the resulting actions.
    ///
    /// Same transition as [`CanvasState::update`], for owners that keep the
    /// state in a field and do not want to move it out on every event.
    pub fn apply(&mut self, scene: &CanvasScene, event: CanvasEvent) -> Actions {
        let before = self.viewport;
        let mut actions = Actions::new();

        match event {
            CanvasEvent::PointerDown { pos, target } => {
                self.hover.pointer_moved(pos);
                let target = target.filter(|k| scene.contains(*k));
                self.press.down(target);
                if target.is_none() {
                    self.drag.press(pos, self.viewport.pan());
                    trace!(x = pos.x, y = pos.y, "drag started");
                }
            }
            CanvasEvent::PointerMove { pos } => {
                self.hover.pointer_moved(pos);
                if let Some(pan) = self.drag.target_pan(pos) {
                    self.viewport.set_pan(pan);
                }
            }
            CanvasEvent::PointerUp { pos, target } => {
                self.hover.pointer_moved(pos);
                let target = target.filter(|k| scene.contains(*k));
                if let Some(key) = self.press.up(target) {
                    debug!(item = key.0, "item selected");
                    actions.push(CanvasAction::Select(key));
                }
                match self.drag.release(pos, self.config.click_slop) {
                    Some(Release::Click) if target.is_none() => {
                        debug!("background click");
                        actions.push(CanvasAction::Dismiss);
                    }
                    Some(_) => trace!("drag ended"),
                    None => {}
                }
            }
            CanvasEvent::PointerLeave => {
                // Leaving ends a drag like a background release at the last
                // known pointer position.
                let pos = self.hover.pointer();
                match self.drag.release(pos, self.config.click_slop) {
                    Some(Release::Click) => {
                        debug!("background click on pointer leave");
                        actions.push(CanvasAction::Dismiss);
                    }
                    Some(Release::Drag) => trace!("drag ended by pointer leave"),
                    None => {}
                }
                self.press.cancel();
                if self.hover.clear().is_some() {
                    actions.push(CanvasAction::HoverChanged(None));
                }
            }
            CanvasEvent::ItemEnter(key) => {
                if scene.contains(key) && self.hover.enter(key).is_some() {
                    actions.push(CanvasAction::HoverChanged(Some(key)));
                }
            }
            CanvasEvent::ItemLeave(key) => {
                if self.hover.leave(key).is_some() {
                    actions.push(CanvasAction::HoverChanged(None));
                }
            }
            CanvasEvent::TouchStart { touches, pos } => self.touch.begin(touches, pos),
            CanvasEvent::TouchMove { touches, pos } => {
                if let Some(delta) = self.touch.advance(touches, pos) {
                    self.viewport.pan_by(delta);
                }
            }
            CanvasEvent::TouchEnd => self.touch.end(),
            CanvasEvent::Wheel { delta, modifiers } => {
                if modifiers.zoom_intent() {
                    let step = self.config.wheel_zoom_step;
                    // Anything but a downward scroll zooms in.
                    if delta.y > 0.0 {
                        self.zoom_by(-step);
                    } else {
                        self.zoom_by(step);
                    }
                } else {
                    // Content moves against the scroll direction.
                    self.viewport.pan_by(-delta);
                }
            }
            CanvasEvent::ZoomIn => self.zoom_by(self.config.zoom_step),
            CanvasEvent::ZoomOut => self.zoom_by(-self.config.zoom_step),
            CanvasEvent::Resize(size) => {
                if self.viewport.set_view_size(size) {
                    debug!(width = size.width, height = size.height, "canvas resized");
                }
            }
        }

        let after = self.viewport;
        let scale_changed = after.scale() != before.scale();
        let pan_changed = after.pan() != before.pan();
        if scale_changed {
            actions.push(CanvasAction::ScaleChanged(after.scale()));
        }
        if pan_changed {
            actions.push(CanvasAction::PanChanged(after.pan()));
        }
        if scale_changed || pan_changed || after.view_size() != before.view_size() {
            let visible = VisibilitySet::compute(&self.viewport, scene.items(), self.config.cull);
            if visible != self.visible {
                self.visible = visible;
                actions.push(CanvasAction::VisibilityChanged);
            }
        }

        actions
    }

    fn zoom_by(&mut self, delta: f64) {
        let from = self.viewport.scale();
        if !self.viewport.zoom_by(delta) {
            debug!(scale = from, delta, "zoom saturated");
        }
    }
}
