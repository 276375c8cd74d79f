//! Cropper WASM - WebAssembly bindings for the image cropper
//!
//! This crate provides WASM bindings to expose the cropper-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `cropper` - The interactive `ImageCropper` class
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings
//! - `export` - Stateless coordinate mapping and JPEG export
//!
//! # Usage
//!
//! ```typescript
//! import init, { ImageCropper } from '@cropper/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const cropper = new ImageCropper();
//! cropper.load_image(new Uint8Array(await file.arrayBuffer()));
//! ```

use wasm_bindgen::prelude::*;

mod cropper;
mod decode;
mod export;
mod types;

// Re-export public types
pub use cropper::ImageCropper;
pub use decode::{decode_data_url, decode_image, read_image_size};
pub use export::{export_crop, map_to_source};
pub use types::{JsDecodedImage, JsEncodedImage};

/// Initialize the WASM module (called automatically on load)
///
/// Installs the panic hook and routes `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    init_logging();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"cropper: a logger was already installed".into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
