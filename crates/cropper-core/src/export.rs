//! Raster export of a source-space selection.
//!
//! Each call is independent: round the rectangle to whole pixels, copy the
//! block out at 1:1 and encode it as JPEG. Nothing is produced on failure.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::config::{DOWNLOAD_FILENAME, EXPORT_MIME_TYPE};
use crate::decode::DecodedImage;
use crate::encode::encode_jpeg_default;
use crate::error::{CropError, Result};
use crate::geometry::CropRectangle;
use crate::transform::{crop_pixels, PixelRegion};

/// An encoded crop result, ready for display or download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// JPEG bytes.
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn mime_type(&self) -> &'static str {
        EXPORT_MIME_TYPE
    }

    pub fn filename(&self) -> &'static str {
        DOWNLOAD_FILENAME
    }

    /// `data:image/jpeg;base64,...`, usable directly as an `<img>` source.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", EXPORT_MIME_TYPE, BASE64.encode(&self.bytes))
    }
}

/// Export the pixels inside `source_rect` as a JPEG.
///
/// `source_rect` must already be in native pixel units and inside the
/// image, as returned by [`crate::transform::to_source_space`].
///
/// # Errors
///
/// Returns [`CropError::InvalidState`] if the image has no pixels, its pixel
/// buffer does not match its dimensions, or the rectangle rounds to no
/// pixels. Returns [`CropError::Encode`] if the codec fails.
pub fn export(image: &DecodedImage, source_rect: &CropRectangle) -> Result<EncodedImage> {
    if image.is_empty() {
        log::warn!("export requested before the image finished decoding");
        return Err(CropError::invalid_state("image has not been decoded"));
    }
    if !image.has_consistent_buffer() {
        log::warn!(
            "pixel buffer for {}x{} image has {} bytes",
            image.width,
            image.height,
            image.pixels.len()
        );
        return Err(CropError::invalid_state(format!(
            "pixel buffer has {} bytes, expected {}",
            image.pixels.len(),
            image.expected_len()
        )));
    }
    if !source_rect.has_area() {
        log::warn!("export requested for degenerate rectangle {:?}", source_rect);
        return Err(CropError::invalid_state(format!(
            "crop rectangle has non-positive size {}x{}",
            source_rect.width, source_rect.height
        )));
    }

    let region = PixelRegion::from_source_rect(source_rect, image.dimensions()).ok_or_else(|| {
        log::warn!("crop rectangle {:?} covers no pixels", source_rect);
        CropError::invalid_state("crop rectangle covers no pixels")
    })?;

    let cropped = crop_pixels(image, region);
    let bytes = encode_jpeg_default(&cropped.pixels, cropped.width, cropped.height)?;

    log::info!(
        "exported {}x{} crop at ({}, {}) as {} bytes",
        cropped.width,
        cropped.height,
        region.left,
        region.top,
        bytes.len()
    );

    Ok(EncodedImage {
        width: cropped.width,
        height: cropped.height,
        bytes,
    })
}
