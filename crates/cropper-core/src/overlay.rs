//! Geometry for drawing the crop overlay.
//!
//! The page owns the actual drawing; this module only says where things go:
//! the selection frame, its eight handle squares, and the four shade bands
//! that dim the image outside the selection.

use serde::Serialize;

use crate::geometry::{CropRectangle, Handle, Point, Size};

/// One handle square and the cursor to show over it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandleBox {
    pub handle: Handle,
    pub rect: CropRectangle,
    pub cursor: &'static str,
}

/// Everything needed to paint the overlay for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub frame: CropRectangle,
    pub handles: Vec<HandleBox>,
    /// Top, bottom, left and right bands outside the frame; empty bands are omitted.
    pub shades: Vec<CropRectangle>,
    /// Cursor for the frame body.
    pub body_cursor: &'static str,
}

impl Overlay {
    pub fn new(frame: CropRectangle, viewport: Size, handle_size: f64) -> Self {
        let handles = Handle::ALL
            .into_iter()
            .map(|handle| HandleBox {
                handle,
                rect: handle.square(&frame, handle_size),
                cursor: handle.cursor(),
            })
            .collect();

        Self {
            frame,
            handles,
            shades: shades(frame, viewport),
            body_cursor: "move",
        }
    }

    /// Cursor to show with the pointer at `p`, using the same priority as
    /// pointer-down: handles, then the body.
    pub fn cursor_at(&self, p: Point) -> &'static str {
        if let Some(hit) = self.handles.iter().find(|h| h.rect.contains(p)) {
            return hit.cursor;
        }
        if self.frame.contains(p) {
            self.body_cursor
        } else {
            "default"
        }
    }
}

fn shades(frame: CropRectangle, viewport: Size) -> Vec<CropRectangle> {
    [
        CropRectangle::new(0.0, 0.0, viewport.width, frame.y),
        CropRectangle::new(
            0.0,
            frame.bottom(),
            viewport.width,
            viewport.height - frame.bottom(),
        ),
        CropRectangle::new(0.0, frame.y, frame.x, frame.height),
        CropRectangle::new(
            frame.right(),
            frame.y,
            viewport.width - frame.right(),
            frame.height,
        ),
    ]
    .into_iter()
    .filter(CropRectangle::has_area)
    .collect()
}
