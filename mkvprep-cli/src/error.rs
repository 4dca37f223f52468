// ============================================================================
// mkvprep-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias shared by the CLI commands
//
// The CLI has no error kinds of its own. Usage errors are reported by clap
// before any command runs; everything else is a CoreError.

use mkvprep_core::CoreResult;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;
