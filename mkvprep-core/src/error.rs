//! Error types for the mkvprep-core library.
//!
//! Every error in this crate is fatal for the run: nothing is retried and
//! nothing is recovered. The CLI prints the message and exits non-zero.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors produced while resolving input, probing tracks or editing files.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("The directory you provided ({}) does not exist.", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error(
        "No global_tags.xml in provided directory ({}). This is required. \
         An example file is available on the GitHub page: {url}",
        .path.display()
    )]
    MissingTagsFile { path: PathBuf, url: &'static str },

    #[error("No video tracks? hmm? ({})", .0.display())]
    NoVideoTrack(PathBuf),

    #[error("No audio tracks? hmm? ({})", .0.display())]
    NoAudioTrack(PathBuf),

    #[error("Failed to mkvpropedit: {}\nWhy? Not sure, here's the log:\n\n{output}", .path.display())]
    EditToolFailed { path: PathBuf, output: String },

    #[error("Required external tool '{0}' was not found. Is it installed and on PATH?")]
    DependencyNotFound(String),

    #[error("Failed to start '{0}': {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory traversal failed: {0}")]
    Walkdir(#[from] walkdir::Error),
}

/// Result type for mkvprep-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Builds the error for an external command that could not be spawned.
pub fn command_start_error(command: &str, err: std::io::Error) -> CoreError {
    if err.kind() == std::io::ErrorKind::NotFound {
        CoreError::DependencyNotFound(command.to_string())
    } else {
        CoreError::CommandStart(command.to_string(), err)
    }
}

/// Builds the error for an external command that ran but exited non-zero.
pub fn command_failed_error(command: &str, status: ExitStatus, stderr: String) -> CoreError {
    CoreError::CommandFailed {
        command: command.to_string(),
        status,
        stderr,
    }
}
