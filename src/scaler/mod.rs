//! Legacy digilib scaler URL classification and base derivation.
//!
//! A digilib image server exposes one endpoint, marked by the `Scaler` token
//! in the URL. The legacy form carries its geometry as query parameters
//! (`Scaler?fn=...`), the IIIF form as positional path segments
//! (`Scaler/IIIF/...`). Classification gates all translation: only the legacy
//! form is ever transformed, everything else passes through unchanged.

mod filepath;
mod params;

pub use filepath::convert_file_path;
pub use params::extract_parameters;

use crate::error::MalformedScalerUrl;

/// Endpoint marker token identifying a digilib scaler.
pub(crate) const SCALER_MARKER: &str = "Scaler";

/// Marker followed by the legacy query introducer.
pub(crate) const LEGACY_SCALER: &str = "Scaler?fn=";

/// Marker followed by the IIIF sub-path token.
pub(crate) const IIIF_SCALER: &str = "Scaler/IIIF/";

/// Which of the known scaler URL shapes a string matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlVariant {
    /// Marker followed by the legacy `?fn=` query form; the only variant that
    /// gets translated.
    LegacyScaler,
    /// Marker followed by the IIIF sub-path; already in the target format.
    IiifScaler,
    /// Marker present but in neither known form.
    OtherScaler,
    /// No marker at all.
    Unrelated,
}

/// Classifies a URL into its scaler variant.
pub fn classify(url: &str) -> UrlVariant {
    if is_legacy_scaler(url) {
        UrlVariant::LegacyScaler
    } else if is_iiif_scaler(url) {
        UrlVariant::IiifScaler
    } else if is_scaler(url) {
        UrlVariant::OtherScaler
    } else {
        UrlVariant::Unrelated
    }
}

/// True if the URL mentions the scaler endpoint at all.
pub fn is_scaler(url: &str) -> bool {
    url.contains(SCALER_MARKER)
}

/// True if the URL is an old-fashioned scaler request (`Scaler?fn=`).
pub fn is_legacy_scaler(url: &str) -> bool {
    url.contains(LEGACY_SCALER)
}

/// True if the URL is already an IIIF scaler request (`Scaler/IIIF/`).
pub fn is_iiif_scaler(url: &str) -> bool {
    url.contains(IIIF_SCALER)
}

/// Returns the IIIF scaler base of the same service: everything up through
/// the marker token, with the IIIF sub-path appended.
///
/// `https://host/servlet/Scaler?fn=...` → `https://host/servlet/Scaler/IIIF/`
pub fn iiif_base(url: &str) -> Result<String, MalformedScalerUrl> {
    let marker_at = url
        .find(SCALER_MARKER)
        .ok_or(MalformedScalerUrl::MissingMarker)?;
    let base = &url[..marker_at + SCALER_MARKER.len()];
    Ok(format!("{}/IIIF/", base))
}
