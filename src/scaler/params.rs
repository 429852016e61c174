//! Query parameter extraction from a legacy scaler URL.

use crate::error::MalformedScalerUrl;
use std::collections::HashMap;

/// Extracts the query parameters of a scaler URL into a key/value map.
///
/// The substring after the first `?` is split on `&`, each fragment on its
/// first `=`. A fragment without `=` maps to the empty value. Duplicate keys
/// keep the last occurrence. Values are carried verbatim: percent-escapes
/// like `%20` are not decoded, matching what the scaler itself expects.
pub fn extract_parameters(url: &str) -> Result<HashMap<String, String>, MalformedScalerUrl> {
    let (_, query) = url.split_once('?').ok_or(MalformedScalerUrl::MissingQuery)?;

    let mut parameters = HashMap::new();
    for fragment in query.split('&') {
        let (key, value) = fragment.split_once('=').unwrap_or((fragment, ""));
        parameters.insert(key.to_string(), value.to_string());
    }

    Ok(parameters)
}
