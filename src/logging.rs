//! Logging init: stderr subscriber with env-filter override.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// Translation events are logged at `debug`, rewrite failures at `warn`;
/// `RUST_LOG` overrides the default filter. Safe to call more than once
/// (later calls are no-ops), so tests and embedding applications may call it
/// unconditionally.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,digilib_iiif=debug"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("digilib-iiif logging initialized");
    }

    Ok(())
}
