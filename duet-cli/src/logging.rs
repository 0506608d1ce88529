//! Log setup for the CLI.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter, e.g. `DUET_LOG=duet_vm=trace`.
pub const LOG_ENV: &str = "DUET_LOG";

/// Initialize logging to stderr.
///
/// Defaults to `warn` when `DUET_LOG` is unset or unparsable, so stdout only
/// ever carries results.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
