//! Track naming and flag heuristics.
//!
//! Given the probed tracks of one container, this module decides every
//! property mkvprep writes back: enabled/default/forced flags, the video
//! language, and the reviewer-facing names that point out anything that
//! looks wrong. It performs no I/O.
//!
//! Rules in short:
//! - Only the primary (stream identifier 0) video and audio tracks are
//!   default. Subtitles are never default and nothing is ever forced.
//! - Video inherits the first real audio language tag.
//! - Audio names carry the codec and channel count plus warnings.
//! - Subtitle names carry the language plus reviewer prompts.

use crate::tracks::{ProbedTracks, Track, TrackGroup, TrackKind};

/// Codec id of plain SRT subtitles in Matroska.
pub const SRT_CODEC_ID: &str = "S_TEXT/UTF8";

/// Muxing mode reported for zlib-compressed tracks.
pub const ZLIB_MUXING_MODE: &str = "zlib";

const MULTIPLE_VIDEO_MEMO: &str = "More than one video track?";
const CHECK_LANGUAGE_MEMO: &str = "Correct Lang tag?";
const UNDEFINED_LANGUAGE: &str = "Und lang tag?";
const DIFFERENT_LANGUAGE: &str = ", different lang, is this wanted?";
const NOT_FIRST_AUDIO: &str = ", not first audio, is this commentary?";
const DIALECT_OR_FORCED: &str = " (Dialect? Forced?)";
const ZLIB_WARNING: &str = ", Disable zlib/track compression!";

/// Decided properties for one track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackAnnotation {
    pub track_id: String,
    pub kind: TrackKind,
    pub enabled: bool,
    pub default: bool,
    pub forced: bool,
    pub name: String,
    /// Only ever set for video tracks
    pub language: Option<String>,
}

/// Decided properties for one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAnnotation {
    pub title: String,
    /// Video, then audio, then subtitle tracks, each in stream order
    pub tracks: Vec<TrackAnnotation>,
}

impl FileAnnotation {
    pub fn of_kind(&self, kind: TrackKind) -> impl Iterator<Item = &TrackAnnotation> {
        self.tracks.iter().filter(move |t| t.kind == kind)
    }
}

/// Whether a language tag looks like a real ISO code.
///
/// Real tags are lower-case ("en", "jpn"); placeholders such as "Und" or
/// "Undetermined" start upper-case.
pub fn looks_like_real_language_tag(tag: &str) -> bool {
    tag.chars().next().is_some_and(char::is_lowercase)
}

fn real_language(track: &Track) -> Option<&str> {
    track
        .language
        .as_deref()
        .filter(|tag| looks_like_real_language_tag(tag))
}

/// Channel count with the LFE channel counted as 0.1.
pub fn channel_count(layout: &str) -> f64 {
    layout
        .split_whitespace()
        .map(|position| if position == "LFE" { 0.1 } else { 1.0 })
        .sum()
}

fn audio_channels(track: &Track) -> f64 {
    match (&track.channel_layout, track.channels) {
        (Some(layout), _) if !layout.trim().is_empty() => channel_count(layout),
        (_, Some(channels)) => f64::from(channels),
        _ => {
            log::warn!(
                "Audio track {} reports no channel layout or count",
                track.track_id
            );
            0.0
        }
    }
}

/// Annotates every track of one container.
pub fn annotate_file(title: &str, tracks: &ProbedTracks) -> FileAnnotation {
    let mut annotations = annotate_video(&tracks.video, &tracks.audio);
    annotations.extend(annotate_audio(&tracks.audio));
    annotations.extend(annotate_subtitles(&tracks.subtitle));

    FileAnnotation {
        title: title.to_string(),
        tracks: annotations,
    }
}

pub fn annotate_video(video: &TrackGroup, audio: &TrackGroup) -> Vec<TrackAnnotation> {
    let language = audio.iter().find_map(real_language).map(str::to_string);

    video
        .iter()
        .map(|track| {
            let mut memo = Vec::new();
            if !track.is_primary() {
                memo.push(MULTIPLE_VIDEO_MEMO);
            }
            if language.is_none() {
                memo.push(CHECK_LANGUAGE_MEMO);
            }

            TrackAnnotation {
                track_id: track.track_id.clone(),
                kind: TrackKind::Video,
                enabled: true,
                default: track.is_primary(),
                forced: false,
                name: memo.join(" ").trim().to_string(),
                language: language.clone(),
            }
        })
        .collect()
}

pub fn annotate_audio(audio: &TrackGroup) -> Vec<TrackAnnotation> {
    let primary_language = audio.primary().and_then(|t| t.language.as_deref());

    audio
        .iter()
        .map(|track| {
            let format = track.format.as_deref().unwrap_or("Unknown");
            let mut name = format!("{} {:.1}", format, audio_channels(track));

            if real_language(track).is_none() {
                name.push_str(", ");
                name.push_str(UNDEFINED_LANGUAGE);
            }
            if track.language.as_deref() != primary_language {
                name.push_str(DIFFERENT_LANGUAGE);
            }
            if !track.is_primary() {
                name.push_str(NOT_FIRST_AUDIO);
            }

            TrackAnnotation {
                track_id: track.track_id.clone(),
                kind: TrackKind::Audio,
                enabled: true,
                default: track.is_primary(),
                forced: false,
                name,
                language: None,
            }
        })
        .collect()
}

pub fn annotate_subtitles(subtitles: &TrackGroup) -> Vec<TrackAnnotation> {
    let primary_language = subtitles.primary().and_then(|t| t.language.as_deref());

    subtitles
        .iter()
        .map(|track| {
            let mut name = match real_language(track) {
                Some(language) => {
                    let mut name = language.to_string();
                    if track.language.as_deref() != primary_language {
                        name.push_str(DIFFERENT_LANGUAGE);
                    }
                    let variants = subtitles
                        .iter()
                        .filter(|other| {
                            other.language == track.language && other.codec_id == track.codec_id
                        })
                        .count();
                    if variants > 1 {
                        name.push_str(DIALECT_OR_FORCED);
                    }
                    name
                }
                None => UNDEFINED_LANGUAGE.to_string(),
            };

            let srt_hint = if track.codec_id.as_deref() == Some(SRT_CODEC_ID) {
                " its SRT so probably"
            } else {
                ""
            };
            name.push_str(&format!(" (CC?{} SDH?)", srt_hint));

            if track.muxing_mode.as_deref() == Some(ZLIB_MUXING_MODE) {
                name.push_str(ZLIB_WARNING);
            }

            TrackAnnotation {
                track_id: track.track_id.clone(),
                kind: TrackKind::Subtitle,
                enabled: true,
                default: false,
                forced: false,
                name,
                language: None,
            }
        })
        .collect()
}
