//! Variant markup in the formats consumers embed it in.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::geometry::GeometryConfig;
use crate::template::{LogoVariant, produce};

/// Prefix of an SVG data URL carrying base64 markup.
pub const DATA_URL_PREFIX: &str = "data:image/svg+xml;base64,";

/// How resolved markup is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputFormat {
    /// The markup itself.
    #[default]
    Svg,
    /// A `data:` URL suitable for `<img src>` or CSS.
    DataUrl,
    /// Standard base64 of the UTF-8 markup.
    Base64,
}

/// Returns the markup for `variant` in the requested format.
pub fn resolve(geometry: &GeometryConfig, variant: LogoVariant, format: OutputFormat) -> String {
    let markup = produce(geometry, variant);
    match format {
        OutputFormat::Svg => markup,
        OutputFormat::Base64 => STANDARD.encode(markup.as_bytes()),
        OutputFormat::DataUrl => format!("{DATA_URL_PREFIX}{}", STANDARD.encode(markup.as_bytes())),
    }
}

/// Decodes a [`OutputFormat::Base64`] or [`OutputFormat::DataUrl`] string
/// back into the markup it was produced from.
pub fn decode(encoded: &str) -> Result<String, DecodeError> {
    let payload = match encoded.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(";base64,")
            .map(|(_, payload)| payload)
            .ok_or(DecodeError::MissingPayload)?,
        None => encoded,
    };
    let bytes = STANDARD.decode(payload.trim())?;
    Ok(String::from_utf8(bytes)?)
}
