//! Size segment: absolute target dimensions and scaling factor.

use crate::error::MalformedScalerUrl;
use crate::scaler::extract_parameters;
use std::collections::HashMap;

/// Derives the IIIF size segment from the absolute dimension parameters.
///
/// `dw` and `dh` are integer target dimensions; `ws` is an optional scaling
/// factor applied to both (default 1). A missing dimension stays empty in the
/// output, which the IIIF grammar reads as "scale proportionally":
///
/// - both → `w,h`
/// - only `dw` → `w,`
/// - only `dh` → `,h`
/// - neither → `full` (`ws` alone has no effect)
///
/// Products are rounded half-up.
pub fn iiif_size(url: &str) -> Result<String, MalformedScalerUrl> {
    let parameters = extract_parameters(url)?;

    let scaling_factor = match parameters.get("ws") {
        Some(value) => value
            .parse::<f64>()
            .map_err(|_| MalformedScalerUrl::bad_number("ws", value))?,
        None => 1.0,
    };

    let width = dimension(&parameters, "dw")?;
    let height = dimension(&parameters, "dh")?;

    let scaled = |dim: i64| (dim as f64 * scaling_factor).round() as i64;

    Ok(match (width, height) {
        (Some(w), Some(h)) => format!("{},{}", scaled(w), scaled(h)),
        (Some(w), None) => format!("{},", scaled(w)),
        (None, Some(h)) => format!(",{}", scaled(h)),
        (None, None) => "full".to_string(),
    })
}

/// Looks up one integer dimension parameter.
fn dimension(
    parameters: &HashMap<String, String>,
    name: &str,
) -> Result<Option<i64>, MalformedScalerUrl> {
    match parameters.get(name) {
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| MalformedScalerUrl::bad_number(name, value)),
        None => Ok(None),
    }
}
