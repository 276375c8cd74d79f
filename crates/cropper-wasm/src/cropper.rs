//! The interactive cropper as a JavaScript class.
//!
//! `ImageCropper` owns one [`CropSession`]. The page forwards the image
//! bytes, the laid-out size of the `<img>` and pointer events (already
//! relative to the image and normalized for device pixel ratio), and reads
//! back the rectangle and overlay geometry to draw.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const cropper = new ImageCropper({ min_size: 50 });
//! cropper.load_image(new Uint8Array(await file.arrayBuffer()));
//!
//! img.onload = () => cropper.layout(img.width, img.height, window.innerWidth);
//! frame.onpointerdown = (e) => cropper.pointer_down(e.offsetX, e.offsetY);
//! frame.onpointermove = (e) => {
//!   if (cropper.pointer_move(e.offsetX, e.offsetY)) redraw(cropper.overlay());
//! };
//! frame.onpointerup = () => cropper.pointer_up();
//! frame.onpointerleave = () => cropper.pointer_leave();
//!
//! preview.src = cropper.export().data_url();
//! ```

use crate::types::JsEncodedImage;
use cropper_core::config::{DOWNLOAD_FILENAME, EXPORT_MIME_TYPE};
use cropper_core::{CropSession, CropperConfig, InteractionMode, Point, Size};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
#[derive(Default)]
pub struct ImageCropper {
    session: CropSession,
}

#[wasm_bindgen]
impl ImageCropper {
    /// Create a cropper, optionally with a partial config object.
    ///
    /// Missing fields take their defaults; non-positive values are replaced.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ImageCropper, JsValue> {
        let config: CropperConfig = if config.is_undefined() || config.is_null() {
            CropperConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid cropper config: {}", e)))?
        };
        Ok(Self::with_config(config))
    }

    /// Load encoded image bytes (JPEG or PNG).
    ///
    /// Discards the previous image and selection. The rectangle appears on
    /// the next [`ImageCropper::layout`].
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.session
            .load_image(bytes)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Load a base64 `data:` URL from `FileReader.readAsDataURL`.
    pub fn load_data_url(&mut self, url: &str) -> Result<(), JsValue> {
        self.session
            .load_data_uri(url)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Report the displayed size of the image and the window width.
    ///
    /// Call once the `<img>` has loaded and again whenever it is resized.
    pub fn layout(
        &mut self,
        displayed_width: f64,
        displayed_height: f64,
        window_width: f64,
    ) -> Result<(), JsValue> {
        self.session
            .layout(Size::new(displayed_width, displayed_height), window_width)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Returns true if the press started a drag or resize.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.session.pointer_down(Point::new(x, y)) != InteractionMode::Idle
    }

    /// Returns true if the rectangle changed and the overlay needs a redraw.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.session.pointer_move(Point::new(x, y)).is_some()
    }

    pub fn pointer_up(&mut self) {
        self.session.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.session.pointer_leave();
    }

    /// CSS cursor for the pointer at `(x, y)`.
    pub fn cursor_at(&self, x: f64, y: f64) -> String {
        self.session.cursor_at(Point::new(x, y)).to_string()
    }

    /// `{ x, y, width, height }` in display pixels, or `undefined` before layout.
    pub fn crop_rect(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.crop_rectangle())
    }

    /// `{ mode: "idle" | "dragging" | "resizing", handle? }`.
    pub fn mode(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.mode())
    }

    /// Frame, handle squares and shade bands, or `undefined` before layout.
    pub fn overlay(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.overlay())
    }

    #[wasm_bindgen(getter)]
    pub fn image_width(&self) -> Option<u32> {
        self.session.image_dimensions().map(|d| d.width)
    }

    #[wasm_bindgen(getter)]
    pub fn image_height(&self) -> Option<u32> {
        self.session.image_dimensions().map(|d| d.height)
    }

    #[wasm_bindgen(getter)]
    pub fn can_export(&self) -> bool {
        self.session.can_export()
    }

    /// Crop the original image to the selection and encode it as JPEG.
    pub fn export(&self) -> Result<JsEncodedImage, JsValue> {
        self.session
            .export()
            .map(JsEncodedImage::from)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Shorthand for `export().data_url()`.
    pub fn export_data_url(&self) -> Result<String, JsValue> {
        self.session
            .export()
            .map(|encoded| encoded.to_data_uri())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn download_filename(&self) -> String {
        DOWNLOAD_FILENAME.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        EXPORT_MIME_TYPE.to_string()
    }
}

impl ImageCropper {
    pub fn with_config(config: CropperConfig) -> Self {
        log::debug!("cropper created with {:?}", config);
        Self {
            session: CropSession::new(config),
        }
    }

    pub fn session(&self) -> &CropSession {
        &self.session
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use cropper_core::encode::encode_jpeg_default;
    use cropper_core::CropRectangle;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn laid_out(config: JsValue) -> ImageCropper {
        let jpeg = encode_jpeg_default(&vec![90u8; 64 * 48 * 3], 64, 48).unwrap();
        let mut cropper = ImageCropper::new(config).unwrap();
        cropper.load_image(&jpeg).unwrap();
        cropper.layout(320.0, 480.0, 320.0).unwrap();
        cropper
    }

    #[wasm_bindgen_test]
    fn test_default_config() {
        let cropper = laid_out(JsValue::UNDEFINED);
        let rect: Option<CropRectangle> =
            serde_wasm_bindgen::from_value(cropper.crop_rect().unwrap()).unwrap();
        assert_eq!(rect, Some(CropRectangle::new(10.0, 90.0, 300.0, 300.0)));
    }

    #[wasm_bindgen_test]
    fn test_partial_config() {
        #[derive(Serialize)]
        struct Partial {
            min_size: f64,
        }
        let config = serde_wasm_bindgen::to_value(&Partial { min_size: 80.0 }).unwrap();
        let cropper = laid_out(config);
        assert_eq!(cropper.session().config().min_size, 80.0);
        assert_eq!(cropper.session().config().mobile_breakpoint, 768.0);
    }

    #[wasm_bindgen_test]
    fn test_invalid_config() {
        let config = serde_wasm_bindgen::to_value(&"nope").unwrap();
        assert!(ImageCropper::new(config).is_err());
    }

    #[wasm_bindgen_test]
    fn test_crop_rect_undefined_before_layout() {
        let cropper = ImageCropper::default();
        assert!(cropper.crop_rect().unwrap().is_undefined());
        assert!(cropper.overlay().unwrap().is_undefined());
    }

    #[wasm_bindgen_test]
    fn test_mode_is_tagged() {
        let mut cropper = laid_out(JsValue::NULL);
        cropper.pointer_down(12.0, 92.0);
        let mode = cropper.mode().unwrap();
        let tag = js_sys::Reflect::get(&mode, &"mode".into()).unwrap();
        let handle = js_sys::Reflect::get(&mode, &"handle".into()).unwrap();
        assert_eq!(tag.as_string().as_deref(), Some("resizing"));
        assert_eq!(handle.as_string().as_deref(), Some("nw"));
    }

    #[wasm_bindgen_test]
    fn test_export_before_load_fails() {
        let cropper = ImageCropper::default();
        assert!(cropper.export().is_err());
    }
}
