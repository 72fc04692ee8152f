//! Console output for resolver events.
//!
//! Installs a `tracing` subscriber that prints the solver's structured
//! events. The library crates only emit events; nothing below this module
//! ever installs a subscriber, so embedding applications stay in control
//! of their own logging.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output for resolver events.
///
/// Safe to call multiple times - only the first call has effect. Honors
/// `RUST_LOG`; without it, `lexorder_solver` events at `info` and above
/// are shown.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::from_default_env()
            .add_directive("lexorder_solver=info".parse().expect("static directive"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    });
}
