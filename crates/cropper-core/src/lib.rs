//! Cropper Core - Interactive image cropping library
//!
//! This crate provides the core functionality for the cropper widget:
//! the pointer-driven crop rectangle, display-to-source coordinate mapping,
//! and JPEG export of the selected region.

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod export;
pub mod geometry;
pub mod overlay;
pub mod session;
pub mod transform;

pub use config::{CropperConfig, Preset, PresetSizing};
pub use error::{CropError, Result};
pub use export::{export, EncodedImage};
pub use geometry::{
    CropController, CropRectangle, Handle, ImageDimensions, InteractionMode, Point, Size,
};
pub use overlay::{HandleBox, Overlay};
pub use session::CropSession;
pub use transform::{to_display_space, to_source_space};
