//! Rotation segment.

use crate::error::MalformedScalerUrl;
use crate::scaler::extract_parameters;

/// Derives the IIIF rotation segment from the `rot` parameter.
///
/// The value is passed through verbatim (no normalization to [0, 360), no
/// numeric validation), exactly as the legacy scaler accepted it. Absent means
/// no rotation, `"0"`.
pub fn iiif_rotation(url: &str) -> Result<String, MalformedScalerUrl> {
    let parameters = extract_parameters(url)?;
    Ok(parameters
        .get("rot")
        .cloned()
        .unwrap_or_else(|| "0".to_string()))
}
