//! File path transcoding for the IIIF identifier segment.

use crate::error::MalformedScalerUrl;
use crate::scaler::extract_parameters;

/// Derives the IIIF identifier from the `fn` parameter of a legacy scaler URL.
///
/// Strips exactly one leading `/`, then replaces every remaining `/` with
/// `!`, digilib's substitute delimiter (a raw slash is not legal inside a
/// single IIIF path segment). Percent-escapes are left untouched.
///
/// `/silo10/Koran/page1.jpg` → `silo10!Koran!page1.jpg`
pub fn convert_file_path(url: &str) -> Result<String, MalformedScalerUrl> {
    let parameters = extract_parameters(url)?;
    let filepath = parameters
        .get("fn")
        .ok_or(MalformedScalerUrl::MissingFileName)?;

    let filepath = filepath.strip_prefix('/').unwrap_or(filepath);
    Ok(filepath.replace('/', "!"))
}
