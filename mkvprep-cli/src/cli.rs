// mkvprep-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mkvprep: Matroska track tagging preparation",
    long_about = "Sets track flags, names and languages on every .mkv file under a release \
                  directory using mediainfo and mkvpropedit. The directory must contain a \
                  global_tags.xml file.\n\n\
                  Tool locations can be overridden with MKVPREP_MEDIAINFO and \
                  MKVPREP_MKVPROPEDIT. Log verbosity follows RUST_LOG."
)]
pub struct Cli {
    /// Release directory containing global_tags.xml and the .mkv files
    #[arg(required = true, value_name = "DIRECTORY")]
    pub directory: PathBuf,
}
