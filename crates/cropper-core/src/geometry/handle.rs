//! Resize handles.

use serde::{Deserialize, Serialize};

use super::{CropRectangle, Point};

/// One of the eight hotspots that drive a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Handle {
    /// Hit-test order: corners win over edges where the squares meet.
    pub const ALL: [Handle; 8] = [
        Handle::NW,
        Handle::NE,
        Handle::SW,
        Handle::SE,
        Handle::N,
        Handle::S,
        Handle::W,
        Handle::E,
    ];

    pub fn moves_north(self) -> bool {
        matches!(self, Handle::N | Handle::NE | Handle::NW)
    }

    pub fn moves_south(self) -> bool {
        matches!(self, Handle::S | Handle::SE | Handle::SW)
    }

    pub fn moves_west(self) -> bool {
        matches!(self, Handle::W | Handle::NW | Handle::SW)
    }

    pub fn moves_east(self) -> bool {
        matches!(self, Handle::E | Handle::NE | Handle::SE)
    }

    /// CSS cursor shown while hovering the handle.
    pub fn cursor(self) -> &'static str {
        match self {
            Handle::N => "n-resize",
            Handle::S => "s-resize",
            Handle::E => "e-resize",
            Handle::W => "w-resize",
            Handle::NE => "ne-resize",
            Handle::NW => "nw-resize",
            Handle::SE => "se-resize",
            Handle::SW => "sw-resize",
        }
    }

    /// The handle's square, flush inside `rect` at its corner or edge midpoint.
    pub fn square(self, rect: &CropRectangle, size: f64) -> CropRectangle {
        let mid_x = rect.x + (rect.width - size) / 2.0;
        let mid_y = rect.y + (rect.height - size) / 2.0;
        let right = rect.right() - size;
        let bottom = rect.bottom() - size;

        let (x, y) = match self {
            Handle::NW => (rect.x, rect.y),
            Handle::NE => (right, rect.y),
            Handle::SW => (rect.x, bottom),
            Handle::SE => (right, bottom),
            Handle::N => (mid_x, rect.y),
            Handle::S => (mid_x, bottom),
            Handle::W => (rect.x, mid_y),
            Handle::E => (right, mid_y),
        };
        CropRectangle::new(x, y, size, size)
    }

    /// Find the handle under `p`, if any.
    pub fn hit_test(rect: &CropRectangle, p: Point, size: f64) -> Option<Handle> {
        Handle::ALL
            .into_iter()
            .find(|h| h.square(rect, size).contains(p))
    }
}
