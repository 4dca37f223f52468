//! MediaInfo integration for track probing
//!
//! This module runs `mediainfo --Output=JSON --Full` on a container and maps
//! its Video, Audio and Text tracks to [`Track`]s. Values are taken from the
//! raw fields (e.g. `Language` = "en"), never from the `*_String` display
//! variants, so the case of language tags survives.

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::external::TrackProber;
use crate::tracks::{ProbedTracks, Track, TrackKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

/// One track object from mediainfo's JSON output
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct MediaInfoTrack {
    #[serde(rename = "@type")]
    pub track_type: String,
    /// 1-based position among tracks of the same type, only present when
    /// there is more than one
    #[serde(rename = "@typeorder")]
    pub type_order: Option<String>,
    #[serde(rename = "ID")]
    pub id: Option<String>,
    #[serde(rename = "StreamKindID")]
    pub stream_kind_id: Option<String>,
    #[serde(rename = "Format")]
    pub format: Option<String>,
    #[serde(rename = "CodecID")]
    pub codec_id: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "ChannelLayout")]
    pub channel_layout: Option<String>,
    #[serde(rename = "Channels")]
    pub channels: Option<String>,
    #[serde(rename = "MuxingMode")]
    pub muxing_mode: Option<String>,
}

/// MediaInfo media container
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MediaInfoMedia {
    #[serde(default)]
    pub track: Vec<MediaInfoTrack>,
}

/// Root MediaInfo response structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaInfoResponse {
    /// `null` when mediainfo could not open the file
    pub media: Option<MediaInfoMedia>,
}

fn track_kind(track_type: &str) -> Option<TrackKind> {
    match track_type {
        "Video" => Some(TrackKind::Video),
        "Audio" => Some(TrackKind::Audio),
        "Text" => Some(TrackKind::Subtitle),
        _ => None,
    }
}

fn parse_index(value: Option<&str>) -> Option<u32> {
    value.and_then(|v| v.trim().parse::<u32>().ok())
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Maps mediainfo tracks to probed tracks.
///
/// The stream identifier comes from `StreamKindID`, then `@typeorder - 1`,
/// then the track's position among tracks of its kind.
pub fn tracks_from_response(response: &MediaInfoResponse, path: &Path) -> CoreResult<Vec<Track>> {
    let Some(media) = &response.media else {
        return Err(CoreError::JsonParse(format!(
            "mediainfo reported no media for {}",
            path.display()
        )));
    };

    let mut seen: HashMap<TrackKind, u32> = HashMap::new();
    let mut tracks = Vec::new();

    for raw in &media.track {
        let Some(kind) = track_kind(&raw.track_type) else {
            continue;
        };

        let position = seen.entry(kind).or_insert(0);
        let stream_identifier = parse_index(raw.stream_kind_id.as_deref())
            .or_else(|| parse_index(raw.type_order.as_deref()).and_then(|o| o.checked_sub(1)))
            .unwrap_or(*position);
        *position += 1;

        let track_id = non_empty(&raw.id).ok_or_else(|| {
            CoreError::JsonParse(format!(
                "{} track #{} in {} has no ID",
                kind,
                stream_identifier,
                path.display()
            ))
        })?;

        tracks.push(Track {
            track_id,
            stream_identifier,
            kind,
            language: non_empty(&raw.language),
            format: non_empty(&raw.format),
            codec_id: non_empty(&raw.codec_id),
            channel_layout: non_empty(&raw.channel_layout),
            channels: parse_index(raw.channels.as_deref()),
            muxing_mode: non_empty(&raw.muxing_mode),
        });
    }

    Ok(tracks)
}

/// Parses mediainfo's JSON output into grouped tracks.
pub fn parse_mediainfo_json(json: &str, path: &Path) -> CoreResult<ProbedTracks> {
    let response: MediaInfoResponse = serde_json::from_str(json).map_err(|e| {
        CoreError::JsonParse(format!(
            "Failed to parse mediainfo JSON output for {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(ProbedTracks::from_tracks(tracks_from_response(&response, path)?))
}

/// Production [`TrackProber`] backed by the mediainfo executable.
#[derive(Debug, Clone)]
pub struct MediaInfoProber {
    program: PathBuf,
}

impl MediaInfoProber {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for MediaInfoProber {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MEDIAINFO)
    }
}

impl TrackProber for MediaInfoProber {
    fn probe(&self, path: &Path) -> CoreResult<ProbedTracks> {
        let name = self.program.display().to_string();
        log::debug!("Running {} on: {}", name, path.display());

        let output = Command::new(&self.program)
            .arg("--Output=JSON")
            .arg("--Full")
            .arg(path)
            .output()
            .map_err(|e| command_start_error(&name, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(command_failed_error(&name, output.status, stderr.to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_mediainfo_json(&stdout, path)
    }
}
