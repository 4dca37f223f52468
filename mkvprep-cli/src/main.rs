// mkvprep-cli/src/main.rs
//
// Entry point for the mkvprep binary.
//
// Responsibilities include:
// - Parsing the single directory argument (clap prints usage and exits
//   non-zero for anything else).
// - Setting up logging.
// - Running the prepare command and mapping failures to exit status 1.

use clap::Parser;
use mkvprep_cli::{Cli, logging, output, run_prepare};
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(e) = run_prepare(&cli) {
        log::debug!("Run aborted: {:?}", e);
        output::print_error(&e);
        process::exit(1);
    }
}
