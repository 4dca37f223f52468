// ============================================================================
// mkvprep-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the mkvprep binary
//
// The application uses env_logger with the RUST_LOG environment variable:
// - RUST_LOG=info (default): Normal operation logs
// - RUST_LOG=debug: Probe and mkvpropedit command lines
// - RUST_LOG=trace: Very verbose debugging information
//
// Logs go to stderr so stdout only carries the progress lines.

use std::io::Write;

/// Initializes the global logger. Safe to call more than once.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
