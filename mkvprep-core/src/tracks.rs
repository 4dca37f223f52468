//! Probed track model.
//!
//! Tracks are read-only input to the annotator. They are grouped per kind and
//! ordered by their stream identifier, so the first element of a group is
//! normally its primary track.

use std::fmt;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Kind of elementary stream inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    Video,
    Audio,
    Subtitle,
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackKind::Video => write!(f, "Video"),
            TrackKind::Audio => write!(f, "Audio"),
            TrackKind::Subtitle => write!(f, "Subtitle"),
        }
    }
}

/// One probed track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Identifier the editor uses to address the track
    pub track_id: String,
    /// Zero-based rank among tracks of the same kind
    pub stream_identifier: u32,
    pub kind: TrackKind,
    /// Raw language tag, never the localized display name
    pub language: Option<String>,
    pub format: Option<String>,
    pub codec_id: Option<String>,
    /// Space-separated channel positions, e.g. "L R C LFE"
    pub channel_layout: Option<String>,
    /// Raw channel count, used when no layout is reported
    pub channels: Option<u32>,
    pub muxing_mode: Option<String>,
}

impl Track {
    /// Creates a track with only the addressing fields set.
    pub fn new(kind: TrackKind, track_id: impl Into<String>, stream_identifier: u32) -> Self {
        Self {
            track_id: track_id.into(),
            stream_identifier,
            kind,
            language: None,
            format: None,
            codec_id: None,
            channel_layout: None,
            channels: None,
            muxing_mode: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_codec_id(mut self, codec_id: impl Into<String>) -> Self {
        self.codec_id = Some(codec_id.into());
        self
    }

    pub fn with_channel_layout(mut self, layout: impl Into<String>) -> Self {
        self.channel_layout = Some(layout.into());
        self
    }

    pub fn with_muxing_mode(mut self, mode: impl Into<String>) -> Self {
        self.muxing_mode = Some(mode.into());
        self
    }

    /// True for the first track of its kind.
    pub fn is_primary(&self) -> bool {
        self.stream_identifier == 0
    }
}

/// Tracks of a single kind, ordered by stream identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackGroup {
    kind: TrackKind,
    tracks: Vec<Track>,
}

impl TrackGroup {
    /// Builds a group, dropping tracks of other kinds and sorting the rest.
    pub fn new(kind: TrackKind, tracks: impl IntoIterator<Item = Track>) -> Self {
        let mut tracks: Vec<Track> = tracks.into_iter().filter(|t| t.kind == kind).collect();
        // Stable, so equal identifiers keep probe order.
        tracks.sort_by_key(|t| t.stream_identifier);
        Self { kind, tracks }
    }

    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// The member with stream identifier 0, if any.
    pub fn primary(&self) -> Option<&Track> {
        self.tracks.iter().find(|t| t.is_primary())
    }
}

impl<'a> IntoIterator for &'a TrackGroup {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

/// Non-fatal conditions found while probing a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeWarning {
    NoSubtitleTracks,
}

impl fmt::Display for ProbeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeWarning::NoSubtitleTracks => write!(f, "No subtitle tracks?"),
        }
    }
}

/// All track groups of one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbedTracks {
    pub video: TrackGroup,
    pub audio: TrackGroup,
    pub subtitle: TrackGroup,
}

impl ProbedTracks {
    /// Splits a flat track list into its three groups.
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        Self {
            video: TrackGroup::new(TrackKind::Video, tracks.iter().cloned()),
            audio: TrackGroup::new(TrackKind::Audio, tracks.iter().cloned()),
            subtitle: TrackGroup::new(TrackKind::Subtitle, tracks),
        }
    }

    /// Enforces the per-file track requirements.
    ///
    /// Video and audio are mandatory; a missing subtitle group only yields
    /// a warning.
    pub fn validate(&self, path: &Path) -> CoreResult<Vec<ProbeWarning>> {
        if self.video.is_empty() {
            return Err(CoreError::NoVideoTrack(path.to_path_buf()));
        }
        if self.audio.is_empty() {
            return Err(CoreError::NoAudioTrack(path.to_path_buf()));
        }

        let mut warnings = Vec::new();
        if self.subtitle.is_empty() {
            log::debug!("No subtitle tracks in {}", path.display());
            warnings.push(ProbeWarning::NoSubtitleTracks);
        }
        Ok(warnings)
    }
}
