//! Error kind for scaler URLs that classify as legacy but lack expected structure.

use thiserror::Error;

/// A URL passed classification as a legacy scaler yet is missing the structure
/// the translation needs. The old implementation let these cases fail with a
/// null-dereference-class error; here they are typed. Unrecognized URLs never
/// produce this error, they pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedScalerUrl {
    /// The `Scaler` marker token does not appear in the URL.
    #[error("URL contains no Scaler marker")]
    MissingMarker,
    /// The URL has no `?`, so there is no query string to extract parameters from.
    #[error("scaler URL has no query string")]
    MissingQuery,
    /// The query string has no `fn` parameter naming the image file.
    #[error("scaler URL has no `fn` parameter")]
    MissingFileName,
    /// A geometry parameter could not be parsed as a number.
    #[error("scaler parameter `{name}` is not numeric: `{value}`")]
    BadNumber { name: String, value: String },
}

impl MalformedScalerUrl {
    pub(crate) fn bad_number(name: &str, value: &str) -> Self {
        MalformedScalerUrl::BadNumber {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
