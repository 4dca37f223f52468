//! Main processing pipeline.
//!
//! For every container file, in order: probe, validate, annotate, build the
//! mkvpropedit command and run it. The first fatal error ends the run; files
//! already edited stay edited.

use crate::annotate::{FileAnnotation, annotate_file};
use crate::directives::{EditCommand, build_edit_command};
use crate::discovery::ReleaseInput;
use crate::error::{CoreError, CoreResult};
use crate::external::{PropertyEditor, TrackProber};
use crate::tracks::ProbeWarning;

use std::path::{Path, PathBuf};

/// What happened to one successfully edited file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub warnings: Vec<ProbeWarning>,
    pub annotation: FileAnnotation,
}

impl FileReport {
    /// File name for display, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Events emitted while a run progresses.
#[derive(Debug)]
pub enum ProcessingEvent<'a> {
    /// Probing finished with non-fatal findings
    Warning {
        path: &'a Path,
        warning: ProbeWarning,
    },
    /// mkvpropedit succeeded for the file
    FileDone(&'a FileReport),
}

/// Container title: the file name without its extension.
pub fn file_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Probes and annotates one file, returning the command to run and any
/// probe warnings. Nothing is modified.
pub fn plan_file<P>(
    prober: &P,
    global_tags: &Path,
    path: &Path,
) -> CoreResult<(EditCommand, FileAnnotation, Vec<ProbeWarning>)>
where
    P: TrackProber + ?Sized,
{
    let tracks = prober.probe(path)?;
    let warnings = tracks.validate(path)?;

    let annotation = annotate_file(&file_title(path), &tracks);
    let command = build_edit_command(global_tags, &annotation, path);
    log::debug!(
        "Planned {} directives for {}",
        command.directives.len(),
        path.display()
    );

    Ok((command, annotation, warnings))
}

/// Runs the whole pipeline for a single file.
pub fn process_file<P, E, F>(
    prober: &P,
    editor: &E,
    global_tags: &Path,
    path: &Path,
    on_event: &mut F,
) -> CoreResult<FileReport>
where
    P: TrackProber + ?Sized,
    E: PropertyEditor + ?Sized,
    F: FnMut(ProcessingEvent<'_>),
{
    let (command, annotation, warnings) = plan_file(prober, global_tags, path)?;
    for warning in &warnings {
        on_event(ProcessingEvent::Warning {
            path,
            warning: *warning,
        });
    }

    let output = editor.apply(&command)?;
    if !output.success {
        return Err(CoreError::EditToolFailed {
            path: path.to_path_buf(),
            output: output.log(),
        });
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        warnings,
        annotation,
    })
}

/// Processes every container file of a release, strictly one after another.
///
/// Returns the reports of all edited files. Stops at the first error.
pub fn process_release<P, E, F>(
    prober: &P,
    editor: &E,
    input: &ReleaseInput,
    mut on_event: F,
) -> CoreResult<Vec<FileReport>>
where
    P: TrackProber + ?Sized,
    E: PropertyEditor + ?Sized,
    F: FnMut(ProcessingEvent<'_>),
{
    let mut reports = Vec::new();

    for path in input.container_files() {
        let path = path?;
        log::debug!("Processing: {}", path.display());

        let report = process_file(prober, editor, &input.global_tags, &path, &mut on_event)?;
        on_event(ProcessingEvent::FileDone(&report));
        reports.push(report);
    }

    log::debug!(
        "Edited {} file(s) under {}",
        reports.len(),
        input.directory.display()
    );
    Ok(reports)
}
