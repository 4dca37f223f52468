//! mkvpropedit argument building.
//!
//! Serializes a [`FileAnnotation`] into the ordered edit directives mkvpropedit
//! understands. Selection is stateful in mkvpropedit's argument grammar: every
//! `--set` applies to the most recent `--edit`, so each selection directive is
//! emitted immediately before the properties it scopes.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::annotate::{FileAnnotation, TrackAnnotation};

/// Matroska properties mkvprep writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Title,
    FlagEnabled,
    FlagDefault,
    FlagForced,
    Name,
    Language,
}

impl Property {
    /// Property name as spelled on the mkvpropedit command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Property::Title => "title",
            Property::FlagEnabled => "flag-enabled",
            Property::FlagDefault => "flag-default",
            Property::FlagForced => "flag-forced",
            Property::Name => "name",
            Property::Language => "language",
        }
    }
}

/// Value assigned to a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Flag(bool),
    Text(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Flag(true) => write!(f, "1"),
            PropertyValue::Flag(false) => write!(f, "0"),
            PropertyValue::Text(text) => write!(f, "{}", text),
        }
    }
}

/// One atomic editor instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditDirective {
    /// Apply a global tag file to the whole container
    GlobalTags(PathBuf),
    /// Enter the segment info context
    SelectInfo,
    /// Enter a track context
    SelectTrack(String),
    /// Set a property in the current context
    Set(Property, PropertyValue),
}

impl EditDirective {
    fn set_flag(property: Property, value: bool) -> Self {
        EditDirective::Set(property, PropertyValue::Flag(value))
    }

    fn set_text(property: Property, value: impl Into<String>) -> Self {
        EditDirective::Set(property, PropertyValue::Text(value.into()))
    }

    /// Command line tokens for this directive.
    pub fn to_args(&self) -> [OsString; 2] {
        match self {
            EditDirective::GlobalTags(path) => {
                let mut tags = OsString::from("global:");
                tags.push(path.as_os_str());
                ["-t".into(), tags]
            }
            EditDirective::SelectInfo => ["-e".into(), "info".into()],
            EditDirective::SelectTrack(id) => ["-e".into(), format!("track:{}", id).into()],
            EditDirective::Set(property, value) => {
                ["-s".into(), format!("{}={}", property.as_str(), value).into()]
            }
        }
    }
}

/// Every directive for one file plus the file itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    pub directives: Vec<EditDirective>,
    pub target: PathBuf,
}

impl EditCommand {
    /// Full argument list, target file last.
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = self
            .directives
            .iter()
            .flat_map(EditDirective::to_args)
            .collect();
        args.push(self.target.clone().into_os_string());
        args
    }
}

fn track_directives(track: &TrackAnnotation) -> impl Iterator<Item = EditDirective> + '_ {
    [
        EditDirective::SelectTrack(track.track_id.clone()),
        EditDirective::set_flag(Property::FlagEnabled, track.enabled),
        EditDirective::set_flag(Property::FlagDefault, track.default),
        EditDirective::set_flag(Property::FlagForced, track.forced),
        EditDirective::set_text(Property::Name, track.name.as_str()),
    ]
    .into_iter()
    .chain(
        track
            .language
            .as_deref()
            .map(|lang| EditDirective::set_text(Property::Language, lang)),
    )
}

/// Builds the edit command for one annotated file.
pub fn build_edit_command(
    global_tags: &Path,
    annotation: &FileAnnotation,
    target: &Path,
) -> EditCommand {
    let mut directives = vec![
        EditDirective::GlobalTags(global_tags.to_path_buf()),
        EditDirective::SelectInfo,
        EditDirective::set_text(Property::Title, annotation.title.as_str()),
    ];
    directives.extend(annotation.tracks.iter().flat_map(track_directives));

    EditCommand {
        directives,
        target: target.to_path_buf(),
    }
}
