//! Coordinate mapping and pixel cropping.
//!
//! This module turns a display-space selection into pixels on the source
//! grid. It runs once per export, right before encoding.
//!
//! # Export Order
//!
//! 1. Map the display-space rectangle to source space ([`to_source_space`])
//! 2. Round it to a whole-pixel region ([`PixelRegion`])
//! 3. Copy that block out of the decoded image ([`crop_pixels`])
//!
//! # Coordinate System
//!
//! - Display coordinates are viewport pixels, possibly scaled by layout
//! - Source coordinates are native image pixels
//! - Origin is top-left corner in both spaces

mod crop;
mod map;

pub use crop::{crop_pixels, PixelRegion};
pub use map::{scale_factors, to_display_space, to_source_space};
