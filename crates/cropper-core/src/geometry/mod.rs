//! Crop-region geometry.
//!
//! This module holds the value types shared by the interaction controller,
//! the coordinate mapper and the exporter, plus the controller itself.
//!
//! # Coordinate System
//!
//! - Display space: pixels as rendered in the viewport, origin at the
//!   viewport's top-left corner
//! - Source space: pixels on the decoded image's native grid
//! - Both use `f64` so fractional layout sizes survive until export rounds them

mod controller;
mod handle;

pub use controller::{CropController, DragAnchor, InteractionMode};
pub use handle::Handle;

use serde::{Deserialize, Serialize};

/// A pointer position in display space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of a surface, usually the displayed image's bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both sides are finite and strictly positive.
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Native pixel dimensions of a decoded source image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn as_size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned crop rectangle.
///
/// Used in display space by the controller and in source space by the
/// exporter; which space a value lives in is decided by who produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CropRectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Inclusive hit test.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// True when both sides are strictly positive.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Check the display-space invariants against a viewport.
    ///
    /// `min_size` is only required on an axis where the viewport can fit it.
    pub fn is_valid_within(&self, viewport: Size, min_size: f64) -> bool {
        const EPS: f64 = 1e-9;
        let min_w = min_size.min(viewport.width);
        let min_h = min_size.min(viewport.height);
        self.x >= -EPS
            && self.y >= -EPS
            && self.width >= min_w - EPS
            && self.height >= min_h - EPS
            && self.right() <= viewport.width + EPS
            && self.bottom() <= viewport.height + EPS
    }
}
