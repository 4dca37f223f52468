// ============================================================================
// mkvprep-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with mediainfo and mkvpropedit
//
// This module encapsulates the two external command-line tools mkvprep relies
// on. Each is modelled as a trait so the processing pipeline can be driven by
// fakes in tests:
//
// - TrackProber: path -> probed tracks (MediaInfoProber)
// - PropertyEditor: edit command -> exit status and output (MkvPropEditor)
//

// ---- Internal crate imports ----
use crate::config::CoreConfig;
use crate::directives::EditCommand;
use crate::error::{CoreResult, command_start_error};
use crate::tracks::ProbedTracks;

// ---- Standard library imports ----
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// mediainfo JSON parsing and the production prober
pub mod mediainfo;

/// mkvpropedit invocation
pub mod mkvpropedit;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use mediainfo::MediaInfoProber;
pub use mkvpropedit::MkvPropEditor;

// ============================================================================
// TRAITS
// ============================================================================

/// Something that can read the tracks of a container.
pub trait TrackProber {
    /// Probes a single file.
    fn probe(&self, path: &Path) -> CoreResult<ProbedTracks>;
}

/// Captured result of one editor invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutput {
    pub success: bool,
    /// Standard output, where mkvpropedit writes its diagnostics
    pub stdout: String,
    pub stderr: String,
}

impl EditOutput {
    /// Diagnostic text to surface when the edit failed.
    pub fn log(&self) -> String {
        if self.stderr.trim().is_empty() {
            self.stdout.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Something that can apply an edit command to a file.
///
/// A non-zero exit is reported through [`EditOutput::success`], not as an
/// error; errors are reserved for failing to run the tool at all.
pub trait PropertyEditor {
    fn apply(&self, command: &EditCommand) -> CoreResult<EditOutput>;
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that an external command can be started.
///
/// Runs the command once with `version_arg`. Only spawning matters: the exit
/// status is ignored.
///
/// # Returns
///
/// * `Ok(())` - If the command started
/// * `Err(CoreError::DependencyNotFound)` - If the command is not found
/// * `Err(CoreError::CommandStart)` - If the command exists but fails to start
pub fn check_dependency(program: &Path, version_arg: &str) -> CoreResult<()> {
    let name = program.display().to_string();

    let result = Command::new(program)
        .arg(version_arg)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", name);
            Ok(())
        }
        Err(e) => {
            log::error!("Dependency check for '{}' failed: {}", name, e);
            Err(command_start_error(&name, e))
        }
    }
}

/// Checks both configured tools before any file is touched.
pub fn check_dependencies(config: &CoreConfig) -> CoreResult<()> {
    check_dependency(&config.mediainfo_path, "--Version")?;
    check_dependency(&config.mkvpropedit_path, "--version")?;
    log::debug!("External dependency check passed.");
    Ok(())
}
