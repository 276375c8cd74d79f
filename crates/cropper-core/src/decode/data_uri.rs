//! `data:` URI input, as produced by a browser `FileReader`.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use super::{decode_image, DecodeError, DecodedImage};

/// Extract the raw bytes from a `data:<mime>;base64,<payload>` URI.
///
/// # Errors
///
/// Returns `DecodeError::InvalidDataUri` if the scheme or comma is missing,
/// the payload is not base64, or the base64 is malformed.
pub fn data_uri_bytes(uri: &str) -> Result<Vec<u8>, DecodeError> {
    let rest = uri
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| DecodeError::InvalidDataUri("missing data: scheme".to_string()))?;

    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| DecodeError::InvalidDataUri("missing ',' separator".to_string()))?;

    if !meta.split(';').any(|part| part.eq_ignore_ascii_case("base64")) {
        return Err(DecodeError::InvalidDataUri(
            "only base64 payloads are supported".to_string(),
        ));
    }

    BASE64
        .decode(payload.trim())
        .map_err(|e| DecodeError::InvalidDataUri(e.to_string()))
}

/// Decode an image delivered as a base64 `data:` URI.
pub fn decode_data_uri(uri: &str) -> Result<DecodedImage, DecodeError> {
    decode_image(&data_uri_bytes(uri)?)
}
