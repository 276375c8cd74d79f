//! Image decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode a JPEG or PNG image from bytes
//! - [`decode_data_url`] - Decode a `data:` URL from a `FileReader`
//! - [`read_image_size`] - Native dimensions without decoding pixels
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@cropper/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::JsDecodedImage;
use cropper_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a JPEG or PNG image from bytes.
///
/// EXIF orientation is applied, so the result has the same orientation a
/// browser would display.
///
/// # Errors
///
/// Returns an error if the format is unsupported or the data is corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode a base64 `data:` URL, as produced by `FileReader.readAsDataURL`.
#[wasm_bindgen]
pub fn decode_data_url(url: &str) -> Result<JsDecodedImage, JsValue> {
    decode::decode_data_uri(url)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Read the oriented `{ width, height }` of an encoded image from its header.
#[wasm_bindgen]
pub fn read_image_size(bytes: &[u8]) -> Result<JsValue, JsValue> {
    let dims = decode::read_dimensions(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&dims).map_err(|e| JsValue::from_str(&e.to_string()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use cropper_core::encode::encode_jpeg_default;
    use cropper_core::ImageDimensions;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_read_image_size() {
        let jpeg = encode_jpeg_default(&vec![0u8; 20 * 10 * 3], 20, 10).unwrap();
        let value = read_image_size(&jpeg).unwrap();
        let dims: ImageDimensions = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(dims, ImageDimensions::new(20, 10));
    }

    #[wasm_bindgen_test]
    fn test_decode_garbage_fails() {
        assert!(decode_image(&[0, 1, 2, 3]).is_err());
        assert!(decode_data_url("not a data url").is_err());
    }
}
