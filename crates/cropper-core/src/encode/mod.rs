//! Image encoding for crop export.
//!
//! This module provides functionality for:
//! - Encoding RGB pixels to JPEG at the codec's default quality
//! - Encoding with an explicit quality when a caller needs one
//!
//! All operations are synchronous and single-threaded within WASM.

mod jpeg;

pub use jpeg::{encode_jpeg, encode_jpeg_default, EncodeError};
