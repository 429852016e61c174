pub mod error;
pub mod logging;

pub mod iiif;
pub mod rewrite;
pub mod scaler;
