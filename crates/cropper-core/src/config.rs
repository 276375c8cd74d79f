//! Cropper configuration.
//!
//! All tunables have defaults matching the widget's shipped behavior, so an
//! empty JSON object (or no config at all) yields the standard cropper. The
//! only environment signal is the window width, which selects a [`Preset`].

use serde::{Deserialize, Serialize};

/// Smallest crop side in display pixels.
pub const MIN_SIZE: f64 = 50.0;

/// Side of a resize handle square in display pixels.
pub const HANDLE_SIZE: f64 = 16.0;

/// Window widths at or below this are treated as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Filename offered when the page downloads an export.
pub const DOWNLOAD_FILENAME: &str = "cropped_image.jpg";

/// MIME type of every export.
pub const EXPORT_MIME_TYPE: &str = "image/jpeg";

/// Density preset used to size the initial crop square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Mobile,
    Desktop,
}

/// Sizing rule for one preset: `min(viewport_w, viewport_h, cap) / divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresetSizing {
    pub cap: f64,
    pub divisor: f64,
}

impl PresetSizing {
    /// Side of the initial square for a viewport.
    pub fn side(&self, viewport_width: f64, viewport_height: f64) -> f64 {
        viewport_width.min(viewport_height).min(self.cap) / self.divisor
    }
}

/// Configuration for a crop session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropperConfig {
    /// Minimum crop width and height (display px)
    pub min_size: f64,
    /// Handle square side (display px)
    pub handle_size: f64,
    /// Window width threshold for the mobile preset (logical px)
    pub mobile_breakpoint: f64,
    /// Initial square sizing on narrow windows
    pub mobile: PresetSizing,
    /// Initial square sizing on wide windows
    pub desktop: PresetSizing,
}

impl Default for CropperConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_SIZE,
            handle_size: HANDLE_SIZE,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            mobile: PresetSizing {
                cap: 300.0,
                divisor: 1.0,
            },
            desktop: PresetSizing {
                cap: 400.0,
                divisor: 2.0,
            },
        }
    }
}

impl CropperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the preset for a window width.
    pub fn preset_for(&self, window_width: f64) -> Preset {
        if window_width <= self.mobile_breakpoint {
            Preset::Mobile
        } else {
            Preset::Desktop
        }
    }

    pub fn sizing(&self, preset: Preset) -> PresetSizing {
        match preset {
            Preset::Mobile => self.mobile,
            Preset::Desktop => self.desktop,
        }
    }

    /// Replace non-finite or non-positive values with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !is_positive(self.min_size) {
            self.min_size = defaults.min_size;
        }
        if !is_positive(self.handle_size) {
            self.handle_size = defaults.handle_size;
        }
        if !self.mobile_breakpoint.is_finite() || self.mobile_breakpoint < 0.0 {
            self.mobile_breakpoint = defaults.mobile_breakpoint;
        }
        if !is_positive(self.mobile.cap) || !is_positive(self.mobile.divisor) {
            self.mobile = defaults.mobile;
        }
        if !is_positive(self.desktop.cap) || !is_positive(self.desktop.divisor) {
            self.desktop = defaults.desktop;
        }
        self
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
