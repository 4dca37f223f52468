// mkvprep-core/tests/common/mod.rs
//
// Fake prober and editor shared by the integration tests.

#![allow(dead_code)]

use mkvprep_core::directives::EditCommand;
use mkvprep_core::{CoreResult, EditOutput, ProbedTracks, PropertyEditor, Track, TrackKind, TrackProber};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Prober answering from a table keyed by file name.
#[derive(Default)]
pub struct FakeProber {
    tracks: HashMap<String, Vec<Track>>,
    pub probed: RefCell<Vec<PathBuf>>,
}

impl FakeProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file_name: &str, tracks: Vec<Track>) -> Self {
        self.tracks.insert(file_name.to_string(), tracks);
        self
    }
}

impl TrackProber for FakeProber {
    fn probe(&self, path: &Path) -> CoreResult<ProbedTracks> {
        self.probed.borrow_mut().push(path.to_path_buf());
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tracks = self.tracks.get(&name).cloned().unwrap_or_default();
        Ok(ProbedTracks::from_tracks(tracks))
    }
}

/// Editor that records every command and answers with a fixed outcome.
pub struct RecordingEditor {
    pub commands: RefCell<Vec<EditCommand>>,
    fail_on: Option<String>,
}

impl RecordingEditor {
    pub fn succeeding() -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            fail_on: None,
        }
    }

    /// Fails for the file with this name, succeeds for the rest.
    pub fn failing_on(file_name: &str) -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            fail_on: Some(file_name.to_string()),
        }
    }

    pub fn args(&self, index: usize) -> Vec<String> {
        self.commands.borrow()[index]
            .to_args()
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl PropertyEditor for RecordingEditor {
    fn apply(&self, command: &EditCommand) -> CoreResult<EditOutput> {
        self.commands.borrow_mut().push(command.clone());
        let failed = self.fail_on.as_deref().is_some_and(|name| {
            command.target.file_name().is_some_and(|n| n == name)
        });
        Ok(EditOutput {
            success: !failed,
            stdout: if failed {
                "Error: The file could not be opened for writing.".to_string()
            } else {
                "The changes are written to the file.".to_string()
            },
            stderr: String::new(),
        })
    }
}

pub fn video(id: &str, sid: u32) -> Track {
    Track::new(TrackKind::Video, id, sid).with_format("AVC")
}

pub fn audio(id: &str, sid: u32, language: &str) -> Track {
    Track::new(TrackKind::Audio, id, sid)
        .with_format("AAC")
        .with_channel_layout("L R")
        .with_language(language)
}

pub fn subtitle(id: &str, sid: u32, language: &str, codec: &str) -> Track {
    Track::new(TrackKind::Subtitle, id, sid)
        .with_language(language)
        .with_codec_id(codec)
}

/// Creates a release directory with a tag file and empty containers.
pub fn release_dir(root: &Path, files: &[&str]) -> PathBuf {
    fs::write(root.join("global_tags.xml"), "<Tags/>").expect("write tags");
    for file in files {
        let path = root.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        File::create(&path).expect("create container");
    }
    root.to_path_buf()
}
