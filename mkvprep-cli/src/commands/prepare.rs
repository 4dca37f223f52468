//! Implementation of the prepare run.
//!
//! Resolves the release directory, checks the external tools when there is
//! anything to edit, then hands the files to mkvprep-core one at a time and reports progress on the console.

use crate::cli::Cli;
use crate::error::CliResult;
use crate::output;

use mkvprep_core::discovery::{check_directory, resolve_input};
use mkvprep_core::{
    CoreConfig, MediaInfoProber, MkvPropEditor, ProcessingEvent, check_dependencies,
    process_release,
};

use log::{debug, info};

/// Runs mkvprep against the directory given on the command line.
pub fn run_prepare(args: &Cli) -> CliResult<()> {
    check_directory(&args.directory)?;
    output::print_banner();

    let input = resolve_input(&args.directory)?;
    debug!("Release directory: {}", input.directory.display());

    let config = CoreConfig::from_env();
    if input.container_files().next().is_some() {
        check_dependencies(&config)?;
    } else {
        debug!("No .mkv files under {}", input.directory.display());
    }

    let prober = MediaInfoProber::new(&config.mediainfo_path);
    let editor = MkvPropEditor::new(&config.mkvpropedit_path);

    let reports = process_release(&prober, &editor, &input, |event| match event {
        ProcessingEvent::Warning { path, warning } => {
            debug!("{}: {}", path.display(), warning);
            output::print_warning(warning);
        }
        ProcessingEvent::FileDone(report) => output::print_file_done(&report.file_name()),
    })?;

    info!("Prepared {} file(s)", reports.len());
    output::print_all_done();
    Ok(())
}
