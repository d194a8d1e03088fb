//! Lazy `tracing` subscriber install.
//!
//! Mandatory fatal diagnostics (`crate::fatal!`) and the signal handlers in
//! [`crate::signals`] never go through this — they write straight to the raw
//! stderr fd so they work before this subscriber exists and inside a signal
//! handler. This covers everything else: the non-fatal, non-signal-handler
//! notices the init orchestrator wants to emit (symbol resolution, a signal
//! handler that failed to install but isn't fatal).
//!
//! Verbosity is controlled by `RUST_LOG`, falling back to `COMMSPLIT_LOG`,
//! defaulting to `warn`.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

/// Install the subscriber if it hasn't been already. Safe to call from every
/// shadowed entry point that wants to log; only the first call does work.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_env("RUST_LOG")
            .or_else(|_| EnvFilter::try_from_env("COMMSPLIT_LOG"))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
