//! Input discovery: the release directory, its global tag file, and the
//! Matroska files below it.
//!
//! The directory is searched recursively. Entries are visited in file-name
//! order within each directory, so a given tree always yields the same
//! sequence.

use crate::config::{GLOBAL_TAGS_EXAMPLE_URL, GLOBAL_TAGS_FILE_NAME};
use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// A validated release directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInput {
    pub directory: PathBuf,
    /// `<directory>/global_tags.xml`, known to exist
    pub global_tags: PathBuf,
}

impl ReleaseInput {
    /// Lazily enumerates the `.mkv` files under the directory.
    pub fn container_files(&self) -> impl Iterator<Item = CoreResult<PathBuf>> + use<> {
        find_container_files(&self.directory)
    }
}

/// Fails with `DirectoryNotFound` unless `directory` is an existing directory.
pub fn check_directory(directory: &Path) -> CoreResult<()> {
    if directory.is_dir() {
        Ok(())
    } else {
        Err(CoreError::DirectoryNotFound(directory.to_path_buf()))
    }
}

/// Checks the directory exists and carries a global tag file.
///
/// # Returns
///
/// * `Err(CoreError::DirectoryNotFound)` - If the path is missing or not a directory
/// * `Err(CoreError::MissingTagsFile)` - If `global_tags.xml` is absent
pub fn resolve_input(directory: &Path) -> CoreResult<ReleaseInput> {
    check_directory(directory)?;

    let global_tags = directory.join(GLOBAL_TAGS_FILE_NAME);
    if !global_tags.is_file() {
        return Err(CoreError::MissingTagsFile {
            path: global_tags,
            url: GLOBAL_TAGS_EXAMPLE_URL,
        });
    }

    log::debug!("Using global tags from {}", global_tags.display());
    Ok(ReleaseInput {
        directory: directory.to_path_buf(),
        global_tags,
    })
}

fn is_mkv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("mkv"))
}

/// Finds `.mkv` files (case-insensitive) anywhere under `input_dir`.
///
/// Traversal errors are yielded in place rather than ending the iteration.
pub fn find_container_files(input_dir: &Path) -> impl Iterator<Item = CoreResult<PathBuf>> + use<> {
    WalkDir::new(input_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => {
                let keep = entry.file_type().is_file() && is_mkv(entry.path());
                keep.then(|| Ok(entry.into_path()))
            }
            Err(e) => Some(Err(CoreError::from(e))),
        })
}
