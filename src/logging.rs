// ==========================================
// Logging Setup
// ==========================================
// tracing + tracing-subscriber; log level comes from the
// environment.
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the log system.
///
/// # Environment
/// - RUST_LOG: level filter (default: info)
///   e.g. RUST_LOG=debug or RUST_LOG=biis_import=trace
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Initializes logging for tests, with a more verbose level.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
