//! Command implementations for the CLI.

/// Module containing the implementation of the prepare run.
/// Tags every container under a release directory.
pub mod prepare;
