// Logging setup for the binary
//
// Diagnostics go to stderr so stdout only carries device output.
// Verbosity comes from RUST_LOG (e.g. RUST_LOG=device_model=debug).

use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global fmt subscriber. Returns false if one was already set.
pub fn init() -> bool {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
