//! Error types for crop sessions.
//!
//! Geometry never fails: out-of-range edits are clamped in place. Only the
//! boundaries report errors outward: decoding the source, and exporting
//! before (or without) a valid selection.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors surfaced by the controller, session and exporter.
#[derive(Debug, Error)]
pub enum CropError {
    /// The image has not decoded or no crop rectangle exists yet.
    #[error("Cropper is not ready: {0}")]
    NotReady(&'static str),

    /// A contract violation, such as exporting a degenerate rectangle.
    #[error("Invalid cropper state: {0}")]
    InvalidState(String),

    /// The source image could not be decoded.
    #[error("Failed to decode image: {0}")]
    DecodeFailure(#[from] DecodeError),

    /// The cropped pixels could not be encoded.
    #[error("Failed to encode cropped image: {0}")]
    Encode(#[from] EncodeError),
}

impl CropError {
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}

/// A convenient alias for Result with [`CropError`].
pub type Result<T> = std::result::Result<T, CropError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CropError::NotReady("no crop rectangle");
        assert_eq!(err.to_string(), "Cropper is not ready: no crop rectangle");

        let err = CropError::invalid_state("width is 0");
        assert_eq!(err.to_string(), "Invalid cropper state: width is 0");
    }

    #[test]
    fn test_decode_error_converts() {
        let err: CropError = DecodeError::InvalidFormat.into();
        assert!(matches!(err, CropError::DecodeFailure(DecodeError::InvalidFormat)));
        assert_eq!(
            err.to_string(),
            "Failed to decode image: Invalid or unsupported image format"
        );
    }
}
