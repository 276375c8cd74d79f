//! Display space ↔ source space conversion.
//!
//! The controller only ever works in display space. Conversion happens at
//! export time against the displayed size measured at that moment, so a
//! window resize between the last gesture and the export cannot make the
//! two spaces drift apart.

use crate::error::{CropError, Result};
use crate::geometry::{CropRectangle, ImageDimensions, Size};

/// Ratio of native to displayed size on each axis, as `(horizontal, vertical)`.
///
/// # Errors
///
/// Returns [`CropError::NotReady`] if the displayed size has not been measured
/// or the image has no pixels.
pub fn scale_factors(displayed: Size, native: ImageDimensions) -> Result<(f64, f64)> {
    if !displayed.is_measured() {
        return Err(CropError::NotReady("image has no displayed size"));
    }
    if native.is_empty() {
        return Err(CropError::NotReady("image has not been decoded"));
    }
    Ok((
        native.width as f64 / displayed.width,
        native.height as f64 / displayed.height,
    ))
}

/// Convert a display-space rectangle to native pixel units.
///
/// The result is clamped to the native bounds after scaling, so
/// `x + width <= native.width` and `y + height <= native.height` hold even
/// when the input sat on the viewport edge.
///
/// # Example
///
/// ```
/// use cropper_core::geometry::{CropRectangle, ImageDimensions, Size};
/// use cropper_core::transform::to_source_space;
///
/// let rect = CropRectangle::new(0.0, 0.0, 400.0, 300.0);
/// let src = to_source_space(rect, Size::new(800.0, 600.0), ImageDimensions::new(1600, 1200)).unwrap();
/// assert_eq!(src, CropRectangle::new(0.0, 0.0, 800.0, 600.0));
/// ```
pub fn to_source_space(
    rect: CropRectangle,
    displayed: Size,
    native: ImageDimensions,
) -> Result<CropRectangle> {
    let (sx, sy) = scale_factors(displayed, native)?;
    let bounds = native.as_size();

    let x = (rect.x * sx).clamp(0.0, bounds.width);
    let y = (rect.y * sy).clamp(0.0, bounds.height);
    let width = (rect.width * sx).min(bounds.width - x).max(0.0);
    let height = (rect.height * sy).min(bounds.height - y).max(0.0);

    Ok(CropRectangle::new(x, y, width, height))
}

/// Convert a source-space rectangle back to display pixels.
pub fn to_display_space(
    rect: CropRectangle,
    displayed: Size,
    native: ImageDimensions,
) -> Result<CropRectangle> {
    let (sx, sy) = scale_factors(displayed, native)?;
    Ok(CropRectangle::new(
        rect.x / sx,
        rect.y / sy,
        rect.width / sx,
        rect.height / sy,
    ))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
