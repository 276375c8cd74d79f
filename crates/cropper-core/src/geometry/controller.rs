//! Pointer-driven crop rectangle state machine.
//!
//! The controller owns the crop rectangle and the active gesture. Every
//! mutation goes through `clamp_to_viewport` so callers never observe a
//! rectangle that is negative, off the viewport or smaller than the floor.
//!
//! # Gestures
//!
//! ```text
//!            pointer_down on handle
//!    Idle ──────────────────────────► Resizing(handle)
//!     │  ▲                                   │
//!     │  └──── end_gesture (up / leave) ◄────┘
//!     │  ▲
//!     │  └──── end_gesture (up / leave) ◄────┐
//!     └─────────────────────────────────► Dragging
//!            pointer_down on body
//! ```

use serde::{Deserialize, Serialize};

use super::{CropRectangle, Handle, Point, Size};
use crate::config::{CropperConfig, PresetSizing};
use crate::error::{CropError, Result};

/// How the next pointer move is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "handle", rename_all = "lowercase")]
pub enum InteractionMode {
    Idle,
    Dragging,
    Resizing(Handle),
}

/// Pointer state captured when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragAnchor {
    /// Pointer position minus rectangle origin, for drags.
    Offset { offset_x: f64, offset_y: f64 },
    /// Pointer position and rectangle at the start of a resize.
    Pointer {
        start_x: f64,
        start_y: f64,
        start_rect: CropRectangle,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    Dragging {
        offset: Point,
    },
    Resizing {
        handle: Handle,
        start: Point,
        start_rect: CropRectangle,
    },
}

/// Owner of the display-space crop rectangle.
#[derive(Debug, Clone)]
pub struct CropController {
    min_size: f64,
    handle_size: f64,
    rect: Option<CropRectangle>,
    gesture: Gesture,
}

impl Default for CropController {
    fn default() -> Self {
        Self::new(&CropperConfig::default())
    }
}

impl CropController {
    pub fn new(config: &CropperConfig) -> Self {
        Self {
            min_size: config.min_size,
            handle_size: config.handle_size,
            rect: None,
            gesture: Gesture::Idle,
        }
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    pub fn handle_size(&self) -> f64 {
        self.handle_size
    }

    /// Place the default centered square for a laid-out viewport.
    ///
    /// Any gesture in progress is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CropError::NotReady`] if the viewport has not been measured.
    pub fn initialize(&mut self, viewport: Size, sizing: PresetSizing) -> Result<CropRectangle> {
        if !viewport.is_measured() {
            return Err(CropError::NotReady("viewport has no displayed size"));
        }

        let side = sizing.side(viewport.width, viewport.height);
        let width = side.max(self.min_size).min(viewport.width);
        let height = side.max(self.min_size).min(viewport.height);
        let rect = CropRectangle::new(
            (viewport.width - width) / 2.0,
            (viewport.height - height) / 2.0,
            width,
            height,
        );

        log::debug!(
            "crop rectangle initialized to {}x{} at ({}, {}) in {}x{} viewport",
            rect.width,
            rect.height,
            rect.x,
            rect.y,
            viewport.width,
            viewport.height
        );

        self.rect = Some(rect);
        self.gesture = Gesture::Idle;
        Ok(rect)
    }

    /// Place a rectangle directly, clamped to the viewport.
    pub fn set_rectangle(&mut self, rect: CropRectangle, viewport: Size) -> CropRectangle {
        let rect = clamp_to_viewport(rect, viewport, self.min_size);
        self.rect = Some(rect);
        rect
    }

    /// Drop the rectangle and any gesture, e.g. when a new image arrives.
    pub fn reset(&mut self) {
        self.rect = None;
        self.gesture = Gesture::Idle;
    }

    pub fn current_rectangle(&self) -> Option<CropRectangle> {
        self.rect
    }

    pub fn mode(&self) -> InteractionMode {
        match self.gesture {
            Gesture::Idle => InteractionMode::Idle,
            Gesture::Dragging { .. } => InteractionMode::Dragging,
            Gesture::Resizing { handle, .. } => InteractionMode::Resizing(handle),
        }
    }

    pub fn anchor(&self) -> Option<DragAnchor> {
        match self.gesture {
            Gesture::Idle => None,
            Gesture::Dragging { offset } => Some(DragAnchor::Offset {
                offset_x: offset.x,
                offset_y: offset.y,
            }),
            Gesture::Resizing {
                start, start_rect, ..
            } => Some(DragAnchor::Pointer {
                start_x: start.x,
                start_y: start.y,
                start_rect,
            }),
        }
    }

    /// Start whichever gesture the pointer lands on.
    ///
    /// Handles are tested before the body so a press on a handle never also
    /// starts a drag. Presses outside the rectangle, or before one exists,
    /// leave the controller idle.
    pub fn pointer_down(&mut self, pointer: Point) -> InteractionMode {
        let Some(rect) = self.rect else {
            return InteractionMode::Idle;
        };

        if let Some(handle) = Handle::hit_test(&rect, pointer, self.handle_size) {
            self.start_resize(handle, pointer, rect);
        } else if rect.contains(pointer) {
            self.start_drag(pointer, rect);
        }
        self.mode()
    }

    /// Start moving the rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`CropError::NotReady`] if no rectangle exists.
    pub fn begin_drag(&mut self, pointer: Point) -> Result<()> {
        let rect = self
            .rect
            .ok_or(CropError::NotReady("no crop rectangle to drag"))?;
        self.start_drag(pointer, rect);
        Ok(())
    }

    /// Start resizing from `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`CropError::NotReady`] if no rectangle exists.
    pub fn begin_resize(&mut self, handle: Handle, pointer: Point) -> Result<()> {
        let rect = self
            .rect
            .ok_or(CropError::NotReady("no crop rectangle to resize"))?;
        self.start_resize(handle, pointer, rect);
        Ok(())
    }

    fn start_drag(&mut self, pointer: Point, rect: CropRectangle) {
        self.gesture = Gesture::Dragging {
            offset: pointer - rect.origin(),
        };
        log::debug!("drag started at ({}, {})", pointer.x, pointer.y);
    }

    fn start_resize(&mut self, handle: Handle, pointer: Point, rect: CropRectangle) {
        self.gesture = Gesture::Resizing {
            handle,
            start: pointer,
            start_rect: rect,
        };
        log::debug!("resize started from {:?} handle", handle);
    }

    /// Apply a pointer move to the active gesture.
    ///
    /// Returns the new rectangle if it changed.
    pub fn on_pointer_move(&mut self, pointer: Point, viewport: Size) -> Option<CropRectangle> {
        let current = self.rect?;

        let next = match self.gesture {
            Gesture::Idle => return None,
            Gesture::Dragging { offset } => drag_to(current, pointer - offset, viewport),
            Gesture::Resizing {
                handle,
                start,
                start_rect,
            } => resize_from(start_rect, handle, pointer - start, viewport, self.min_size),
        };

        let next = clamp_to_viewport(next, viewport, self.min_size);
        if next == current {
            return None;
        }
        self.rect = Some(next);
        Some(next)
    }

    /// Finish the gesture. Called on pointer-up and pointer-leave.
    pub fn end_gesture(&mut self) {
        if self.gesture != Gesture::Idle {
            log::debug!("gesture ended");
        }
        self.gesture = Gesture::Idle;
    }

    /// Re-clamp the rectangle after the displayed size changed.
    pub fn fit_to_viewport(&mut self, viewport: Size) -> Option<CropRectangle> {
        let rect = clamp_to_viewport(self.rect?, viewport, self.min_size);
        self.rect = Some(rect);
        Some(rect)
    }
}

/// Move `rect` to `origin`, keeping its size and staying inside the viewport.
fn drag_to(rect: CropRectangle, origin: Point, viewport: Size) -> CropRectangle {
    CropRectangle {
        x: origin.x.min(viewport.width - rect.width).max(0.0),
        y: origin.y.min(viewport.height - rect.height).max(0.0),
        ..rect
    }
}

/// Move the edges `handle` controls by `delta`, holding the opposite edges.
fn resize_from(
    start: CropRectangle,
    handle: Handle,
    delta: Point,
    viewport: Size,
    min_size: f64,
) -> CropRectangle {
    let (mut left, mut right) = (start.x, start.right());
    let (mut top, mut bottom) = (start.y, start.bottom());

    if handle.moves_west() {
        left = (left + delta.x).min(right - min_size).max(0.0);
    }
    if handle.moves_east() {
        right = (right + delta.x).max(left + min_size).min(viewport.width);
    }
    if handle.moves_north() {
        top = (top + delta.y).min(bottom - min_size).max(0.0);
    }
    if handle.moves_south() {
        bottom = (bottom + delta.y).max(top + min_size).min(viewport.height);
    }

    CropRectangle::new(left, top, right - left, bottom - top)
}

/// Enforce the rectangle invariants against a viewport.
///
/// Size is floored at `min_size` and capped at the viewport, then the origin
/// is pulled inside. On an axis where the viewport is smaller than
/// `min_size`, the viewport wins.
pub(crate) fn clamp_to_viewport(rect: CropRectangle, viewport: Size, min_size: f64) -> CropRectangle {
    let width = rect.width.max(min_size).min(viewport.width).max(0.0);
    let height = rect.height.max(min_size).min(viewport.height).max(0.0);
    CropRectangle {
        x: rect.x.min(viewport.width - width).max(0.0),
        y: rect.y.min(viewport.height - height).max(0.0),
        width,
        height,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
