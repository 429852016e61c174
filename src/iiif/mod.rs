//! IIIF URL assembly from a classified legacy scaler URL.
//!
//! The IIIF Image API addresses an image as
//! `{base}/{identifier}/{region}/{size}/{rotation}/{quality}.{format}`.
//! The three geometry segments are derived independently from the legacy
//! query parameters; assembly only happens for URLs classified as legacy
//! scalers, everything else passes through byte-for-byte.

mod region;
mod rotation;
mod size;

pub use region::iiif_region;
pub use rotation::iiif_rotation;
pub use size::iiif_size;

use crate::error::MalformedScalerUrl;
use crate::scaler::{convert_file_path, iiif_base, is_legacy_scaler};

/// Quality and format tail requested for every translated image.
const QUALITY_FORMAT: &str = "default.jpg";

/// Geometry tail requesting the maximal untransformed image.
const FULL_PARAMETERS: &str = "/full/full/0/default.jpg";

/// Translates a legacy scaler URL into the IIIF URL of the full-sized image,
/// discarding any crop, scale, and rotation parameters.
///
/// URLs that are not legacy scalers (already IIIF, other scaler forms,
/// unrelated strings) are returned unchanged.
pub fn to_full_image(url: &str) -> Result<String, MalformedScalerUrl> {
    if !is_legacy_scaler(url) {
        return Ok(url.to_string());
    }

    let base = iiif_base(url)?;
    let filepath = convert_file_path(url)?;

    let iiif_url = format!("{}{}{}", base, filepath, FULL_PARAMETERS);
    tracing::debug!(old = url, new = %iiif_url, "translated scaler URL to full image");
    Ok(iiif_url)
}

/// Translates a legacy scaler URL into the IIIF URL requesting the same
/// crop, scale, and rotation, as closely as the IIIF grammar allows.
///
/// URLs that are not legacy scalers are returned unchanged, which also makes
/// the translation idempotent: its own output is never translated again.
pub fn to_equivalent_image(url: &str) -> Result<String, MalformedScalerUrl> {
    if !is_legacy_scaler(url) {
        return Ok(url.to_string());
    }

    let base = iiif_base(url)?;
    let filepath = convert_file_path(url)?;
    let region = iiif_region(url)?;
    let size = iiif_size(url)?;
    let rotation = iiif_rotation(url)?;

    let iiif_url = format!(
        "{}{}/{}/{}/{}/{}",
        base, filepath, region, size, rotation, QUALITY_FORMAT
    );
    tracing::debug!(old = url, new = %iiif_url, "translated scaler URL to equivalent image");
    Ok(iiif_url)
}
