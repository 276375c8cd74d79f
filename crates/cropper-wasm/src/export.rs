//! Stateless mapping and export bindings.
//!
//! For pages that keep the crop rectangle themselves and only need the
//! conversion to native pixels and the JPEG encode. Pages driving the whole
//! interaction should use [`crate::ImageCropper`] instead.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const img = document.querySelector('img');
//! const src = map_to_source(x, y, w, h, img.width, img.height, image.width, image.height);
//! const result = export_crop(image, src.x, src.y, src.width, src.height);
//! ```

use crate::types::{JsDecodedImage, JsEncodedImage};
use cropper_core::{export, to_source_space, CropRectangle, ImageDimensions, Size};
use wasm_bindgen::prelude::*;

/// Convert a display-space rectangle into native pixel units.
///
/// Returns `{ x, y, width, height }`, clamped to the native bounds.
///
/// # Errors
///
/// Returns an error if the displayed size is not positive or the native
/// image is empty.
#[allow(clippy::too_many_arguments)]
#[wasm_bindgen]
pub fn map_to_source(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    displayed_width: f64,
    displayed_height: f64,
    native_width: u32,
    native_height: u32,
) -> Result<JsValue, JsValue> {
    let rect = source_rect(
        CropRectangle::new(x, y, width, height),
        Size::new(displayed_width, displayed_height),
        ImageDimensions::new(native_width, native_height),
    )?;
    serde_wasm_bindgen::to_value(&rect).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn source_rect(
    rect: CropRectangle,
    displayed: Size,
    native: ImageDimensions,
) -> Result<CropRectangle, JsValue> {
    to_source_space(rect, displayed, native).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Crop `image` to a source-space rectangle and encode it as JPEG.
///
/// # Errors
///
/// Returns an error if the rectangle covers no pixels or encoding fails.
#[wasm_bindgen]
pub fn export_crop(
    image: &JsDecodedImage,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Result<JsEncodedImage, JsValue> {
    export(&image.to_decoded(), &CropRectangle::new(x, y, width, height))
        .map(JsEncodedImage::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_map_to_source_scales() {
        let value = map_to_source(0.0, 0.0, 400.0, 300.0, 800.0, 600.0, 1600, 1200).unwrap();
        let rect: CropRectangle = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(rect, CropRectangle::new(0.0, 0.0, 800.0, 600.0));
    }

    #[wasm_bindgen_test]
    fn test_map_to_source_unmeasured() {
        assert!(map_to_source(0.0, 0.0, 10.0, 10.0, 0.0, 600.0, 100, 100).is_err());
    }

    #[wasm_bindgen_test]
    fn test_export_crop_degenerate() {
        let img = JsDecodedImage::new(10, 10, vec![0u8; 300]).unwrap();
        assert!(export_crop(&img, 0.0, 0.0, 0.0, 5.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_blob_parts() {
        let img = JsDecodedImage::new(4, 4, vec![255u8; 48]).unwrap();
        let result = export_crop(&img, 0.0, 0.0, 4.0, 4.0).unwrap();
        assert_eq!(result.blob_parts().length(), 1);
    }
}
