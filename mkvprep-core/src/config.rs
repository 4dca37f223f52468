//! Configuration structures and constants for the mkvprep-core library.
//!
//! The only tunables are the external executables. Both default to the bare
//! command names and can be overridden through the environment, which is how
//! the CLI integration tests substitute stand-in tools.

use std::path::PathBuf;

// Default constants

/// File name of the global tag definition expected in the target directory.
pub const GLOBAL_TAGS_FILE_NAME: &str = "global_tags.xml";

/// Where operators can fetch an example global tag definition.
pub const GLOBAL_TAGS_EXAMPLE_URL: &str =
    "https://raw.githubusercontent.com/rlaphoenix/RPG/master/global_tags.xml";

/// Default executable used to probe track metadata.
pub const DEFAULT_MEDIAINFO: &str = "mediainfo";

/// Default executable used to edit Matroska properties in place.
pub const DEFAULT_MKVPROPEDIT: &str = "mkvpropedit";

/// Environment variable overriding the mediainfo executable.
pub const ENV_MEDIAINFO: &str = "MKVPREP_MEDIAINFO";

/// Environment variable overriding the mkvpropedit executable.
pub const ENV_MKVPROPEDIT: &str = "MKVPREP_MKVPROPEDIT";

/// Main configuration structure for the mkvprep-core library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Executable invoked to probe each container
    pub mediainfo_path: PathBuf,

    /// Executable invoked to apply the edits
    pub mkvpropedit_path: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            mediainfo_path: PathBuf::from(DEFAULT_MEDIAINFO),
            mkvpropedit_path: PathBuf::from(DEFAULT_MKVPROPEDIT),
        }
    }
}

impl CoreConfig {
    /// Builds a configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(path) = non_empty(ENV_MEDIAINFO) {
            log::debug!("Using mediainfo override from {}: {}", ENV_MEDIAINFO, path);
            config.mediainfo_path = PathBuf::from(path);
        }
        if let Some(path) = non_empty(ENV_MKVPROPEDIT) {
            log::debug!("Using mkvpropedit override from {}: {}", ENV_MKVPROPEDIT, path);
            config.mkvpropedit_path = PathBuf::from(path);
        }

        config
    }
}
