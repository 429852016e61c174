//! Region segment: relative crop window to IIIF `pct:` form.

use crate::error::MalformedScalerUrl;
use crate::scaler::extract_parameters;

/// Relative crop window parameters: offset x/y and width/height, each a
/// fraction of the full image.
const WINDOW: [&str; 4] = ["wx", "wy", "ww", "wh"];

/// Derives the IIIF region segment from the relative crop window parameters.
///
/// All four of `wx`, `wy`, `ww`, `wh` must be present; any proper subset is
/// treated the same as none and yields `full`. Each fraction is multiplied by
/// 100 and formatted with the default float-to-string conversion, so `0.354`
/// becomes `35.4`, not `35.40`.
pub fn iiif_region(url: &str) -> Result<String, MalformedScalerUrl> {
    let parameters = extract_parameters(url)?;

    // Presence is all-or-nothing, checked before any value is parsed.
    if !WINDOW.iter().all(|name| parameters.contains_key(*name)) {
        return Ok("full".to_string());
    }

    let mut pct = Vec::with_capacity(WINDOW.len());
    for name in WINDOW {
        let value = &parameters[name];
        let fraction: f64 = value
            .parse()
            .map_err(|_| MalformedScalerUrl::bad_number(name, value))?;
        pct.push(format!("{}", fraction * 100.0));
    }

    Ok(format!("pct:{},{},{},{}", pct[0], pct[1], pct[2], pct[3]))
}
