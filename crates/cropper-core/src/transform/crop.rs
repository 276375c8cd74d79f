//! Pixel-exact cropping.
//!
//! A [`PixelRegion`] is a source-space rectangle rounded to whole pixels and
//! clamped to the image. [`crop_pixels`] copies that block out of a decoded
//! image at 1:1 scale, one row at a time.
//!
//! # Example
//!
//! ```ignore
//! let region = PixelRegion::from_source_rect(&source_rect, image.dimensions()).unwrap();
//! let cropped = crop_pixels(&image, region);
//! ```

use serde::{Deserialize, Serialize};

use crate::decode::DecodedImage;
use crate::geometry::{CropRectangle, ImageDimensions};

/// A whole-pixel block on the source grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRegion {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRegion {
    /// Round a source-space rectangle to pixels.
    ///
    /// The size is rounded first and capped at the image size, then the
    /// rounded origin is pulled back so the block ends on the image. Returns
    /// `None` when the block has no pixels or starts past the image edge.
    pub fn from_source_rect(rect: &CropRectangle, bounds: ImageDimensions) -> Option<Self> {
        if !rect.x.is_finite()
            || !rect.y.is_finite()
            || !rect.width.is_finite()
            || !rect.height.is_finite()
        {
            return None;
        }

        let (left, width) = round_span(rect.x, rect.width, bounds.width)?;
        let (top, height) = round_span(rect.y, rect.height, bounds.height)?;
        Some(Self {
            left,
            top,
            width,
            height,
        })
    }

    pub fn right(&self) -> u32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

/// Round one axis to `(start, len)` with `start + len <= extent`.
fn round_span(start: f64, len: f64, extent: u32) -> Option<(u32, u32)> {
    let len = (len.max(0.0).round() as u32).min(extent);
    let start = start.max(0.0).round() as u32;
    if len == 0 || start >= extent {
        return None;
    }
    Some((start.min(extent - len), len))
}

/// Copy `region` out of `image` without resampling.
///
/// The region is clamped to the image first; a region entirely off the
/// image yields an empty result.
pub fn crop_pixels(image: &DecodedImage, region: PixelRegion) -> DecodedImage {
    // Fast path: full-frame region returns a clone
    if region.left == 0
        && region.top == 0
        && region.width == image.width
        && region.height == image.height
    {
        return image.clone();
    }

    let left = region.left.min(image.width);
    let top = region.top.min(image.height);
    let out_width = region.width.min(image.width - left);
    let out_height = region.height.min(image.height - top);

    let src_stride = image.width as usize * 3;
    let row_bytes = out_width as usize * 3;
    let mut output = Vec::with_capacity(row_bytes * out_height as usize);

    for y in top..top + out_height {
        let start = y as usize * src_stride + left as usize * 3;
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    DecodedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.push(v); // R
                pixels.push(x as u8); // G
                pixels.push(y as u8); // B
            }
        }
        DecodedImage {
            width,
            height,
            pixels,
        }
    }

    fn region(left: u32, top: u32, width: u32, height: u32) -> PixelRegion {
        PixelRegion {
            left,
            top,
            width,
            height,
        }
    }

    #[test]
    fn test_full_region_is_identity() {
        let img = test_image(50, 40);
        let result = crop_pixels(&img, region(0, 0, 50, 40));
        assert_eq!(result.width, 50);
        assert_eq!(result.height, 40);
        assert_eq!(result.pixels, img.pixels);
    }

    #[test]
    fn test_sub_block_pixels() {
        let img = test_image(10, 10);
        let result = crop_pixels(&img, region(3, 2, 4, 5));

        assert_eq!(result.width, 4);
        assert_eq!(result.height, 5);
        assert_eq!(result.pixels.len(), 4 * 5 * 3);

        // First pixel is source (3, 2): value (2 * 10 + 3) = 23
        assert_eq!(&result.pixels[0..3], &[23, 3, 2]);
        // Last pixel is source (6, 6)
        let last = result.pixels.len() - 3;
        assert_eq!(&result.pixels[last..], &[66, 6, 6]);
    }

    #[test]
    fn test_region_clamped_to_image() {
        let img = test_image(10, 10);
        let result = crop_pixels(&img, region(8, 8, 5, 5));
        assert_eq!(result.width, 2);
        assert_eq!(result.height, 2);
    }

    #[test]
    fn test_rectangular_strip() {
        let img = test_image(200, 100);
        let result = crop_pixels(&img, region(0, 0, 50, 100));
        assert_eq!(result.width, 50);
        assert_eq!(result.height, 100);
    }

    #[test]
    fn test_from_source_rect_rounds() {
        let bounds = ImageDimensions::new(100, 100);
        let r = PixelRegion::from_source_rect(&CropRectangle::new(10.4, 10.6, 20.5, 19.4), bounds)
            .unwrap();
        assert_eq!(r, region(10, 11, 21, 19));
    }

    #[test]
    fn test_from_source_rect_shifts_onto_image() {
        let bounds = ImageDimensions::new(100, 100);
        let r = PixelRegion::from_source_rect(&CropRectangle::new(90.0, 95.0, 20.0, 20.0), bounds)
            .unwrap();
        assert_eq!(r, region(80, 80, 20, 20));
        assert_eq!(r.right(), 100);
        assert_eq!(r.bottom(), 100);
    }

    #[test]
    fn test_from_source_rect_keeps_rounded_size_at_edge() {
        // 1200.5 + 400.5 ends exactly on the edge; both halves round up
        let bounds = ImageDimensions::new(1601, 1201);
        let rect = CropRectangle::new(1200.5, 800.5, 400.5, 400.5);
        let r = PixelRegion::from_source_rect(&rect, bounds).unwrap();
        assert_eq!(r, region(1200, 800, 401, 401));
        assert_eq!(r.right(), 1601);
        assert_eq!(r.bottom(), 1201);
    }

    #[test]
    fn test_from_source_rect_caps_size_at_image() {
        let bounds = ImageDimensions::new(50, 40);
        let r = PixelRegion::from_source_rect(&CropRectangle::new(0.0, 0.0, 80.0, 40.4), bounds)
            .unwrap();
        assert_eq!(r, region(0, 0, 50, 40));
    }

    #[test]
    fn test_from_source_rect_degenerate() {
        let bounds = ImageDimensions::new(100, 100);
        assert!(PixelRegion::from_source_rect(&CropRectangle::new(0.0, 0.0, 0.0, 10.0), bounds)
            .is_none());
        assert!(PixelRegion::from_source_rect(&CropRectangle::new(0.0, 0.0, 0.4, 10.0), bounds)
            .is_none());
        assert!(
            PixelRegion::from_source_rect(&CropRectangle::new(100.0, 0.0, 10.0, 10.0), bounds)
                .is_none()
        );
        assert!(
            PixelRegion::from_source_rect(&CropRectangle::new(f64::NAN, 0.0, 10.0, 10.0), bounds)
                .is_none()
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep reasonable for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (4u32..=100, 4u32..=100)
    }

    fn create_test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(x as u8);
                pixels.push(y as u8);
                pixels.push(((x + y) % 256) as u8);
            }
        }
        DecodedImage {
            width,
            height,
            pixels,
        }
    }

    proptest! {
        /// Property: output has exactly the region's size and matching buffer.
        #[test]
        fn prop_output_matches_region(
            (width, height) in dimensions_strategy(),
            (a, b, c, d) in (0.0f64..1.0, 0.0f64..1.0, 0.0f64..=1.0, 0.0f64..=1.0),
        ) {
            let img = create_test_image(width, height);
            let rect = CropRectangle::new(
                a * width as f64,
                b * height as f64,
                c * width as f64,
                d * height as f64,
            );
            if let Some(r) = PixelRegion::from_source_rect(&rect, ImageDimensions::new(width, height)) {
                prop_assert!(r.right() <= width && r.bottom() <= height);

                let result = crop_pixels(&img, r);
                prop_assert_eq!(result.width, r.width);
                prop_assert_eq!(result.height, r.height);
                prop_assert_eq!(result.pixels.len(), (r.width * r.height * 3) as usize);
            }
        }

        /// Property: a rectangle lying on the image keeps its rounded size.
        #[test]
        fn prop_rounded_size_survives(
            (width, height) in dimensions_strategy(),
            (a, b, c, d) in (0.0f64..1.0, 0.0f64..1.0, 0.0f64..=1.0, 0.0f64..=1.0),
        ) {
            let x = a * width as f64;
            let y = b * height as f64;
            let rect = CropRectangle::new(x, y, c * (width as f64 - x), d * (height as f64 - y));
            if let Some(r) = PixelRegion::from_source_rect(&rect, ImageDimensions::new(width, height)) {
                prop_assert_eq!(r.width, rect.width.round() as u32);
                prop_assert_eq!(r.height, rect.height.round() as u32);
                prop_assert!(r.right() <= width && r.bottom() <= height);
            }
        }

        /// Property: every output pixel is the source pixel at the offset position.
        #[test]
        fn prop_pixels_copied_one_to_one(
            (width, height) in (10u32..=60, 10u32..=60),
            (left, top) in (0u32..10, 0u32..10),
            (w, h) in (1u32..=50, 1u32..=50),
        ) {
            let img = create_test_image(width, height);
            let result = crop_pixels(&img, PixelRegion { left, top, width: w, height: h });

            for y in 0..result.height {
                for x in 0..result.width {
                    let i = ((y * result.width + x) * 3) as usize;
                    prop_assert_eq!(result.pixels[i], (left + x) as u8);
                    prop_assert_eq!(result.pixels[i + 1], (top + y) as u8);
                }
            }
        }
    }
}
