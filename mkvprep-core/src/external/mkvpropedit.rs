//! mkvpropedit invocation.

use crate::directives::EditCommand;
use crate::error::{CoreResult, command_start_error};
use crate::external::{EditOutput, PropertyEditor};
use std::path::PathBuf;
use std::process::Command;

/// Production [`PropertyEditor`] backed by the mkvpropedit executable.
#[derive(Debug, Clone)]
pub struct MkvPropEditor {
    program: PathBuf,
}

impl MkvPropEditor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for MkvPropEditor {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MKVPROPEDIT)
    }
}

impl PropertyEditor for MkvPropEditor {
    fn apply(&self, command: &EditCommand) -> CoreResult<EditOutput> {
        let name = self.program.display().to_string();
        let args = command.to_args();
        log::debug!(
            "Executing command: {} {}",
            name,
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        // Blocks until mkvpropedit exits; there is no timeout.
        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| command_start_error(&name, e))?;

        if !output.status.success() {
            log::error!(
                "{} exited with {} for {}",
                name,
                output.status,
                command.target.display()
            );
        }

        Ok(EditOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
