//! Core library for preparing Matroska track metadata before a release.
//!
//! This crate finds `.mkv` files in a release directory, probes their tracks
//! with mediainfo, decides track flags and reviewer-facing names, and writes
//! them back in place with mkvpropedit.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mkvprep_core::{CoreConfig, MediaInfoProber, MkvPropEditor, process_release, resolve_input};
//! use std::path::Path;
//!
//! let config = CoreConfig::from_env();
//! let input = resolve_input(Path::new("/path/to/release")).unwrap();
//!
//! let prober = MediaInfoProber::new(&config.mediainfo_path);
//! let editor = MkvPropEditor::new(&config.mkvpropedit_path);
//!
//! let reports = process_release(&prober, &editor, &input, |_event| {}).unwrap();
//! println!("edited {} files", reports.len());
//! ```

pub mod annotate;
pub mod config;
pub mod directives;
pub mod discovery;
pub mod error;
pub mod external;
pub mod processing;
pub mod tracks;

// Re-exports for public API
pub use annotate::{FileAnnotation, TrackAnnotation, annotate_file, looks_like_real_language_tag};
pub use config::CoreConfig;
pub use directives::{EditCommand, EditDirective, build_edit_command};
pub use discovery::{ReleaseInput, find_container_files, resolve_input};
pub use error::{CoreError, CoreResult};
pub use external::{
    EditOutput, MediaInfoProber, MkvPropEditor, PropertyEditor, TrackProber, check_dependencies,
};
pub use processing::{FileReport, ProcessingEvent, process_release};
pub use tracks::{ProbeWarning, ProbedTracks, Track, TrackGroup, TrackKind};
