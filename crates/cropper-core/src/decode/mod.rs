//! Image decoding for the cropper.
//!
//! This module provides functionality for:
//! - Decoding JPEG and PNG images with EXIF orientation applied
//! - Decoding `data:` URIs handed over by the page's file reader
//! - Reading native dimensions from the header alone
//!
//! # Architecture
//!
//! Decoding is the one asynchronous boundary of a crop session: the page
//! hands bytes over once the file is read, and nothing else may happen to
//! the session until the decode completes.
//!
//! # Examples
//!
//! ```ignore
//! use cropper_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod data_uri;
mod raster;
mod types;

pub use data_uri::{data_uri_bytes, decode_data_uri};
pub use raster::{decode_image, read_dimensions};
pub use types::{DecodeError, DecodedImage, Orientation};
