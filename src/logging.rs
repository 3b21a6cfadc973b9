//! Build diagnostics setup.
//!
//! Resolution emits `tracing` events while it works; this module installs a
//! subscriber for them when the configuration asks for build logs. When
//! logging is disabled the events still fire but nothing collects them, so
//! diagnostics never influence generated output.

use tracing_subscriber::EnvFilter;

/// Install the diagnostic subscriber. Safe to call more than once; later
/// calls are ignored when a subscriber is already in place.
pub fn initialize(enabled: bool) {
    if !enabled {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
