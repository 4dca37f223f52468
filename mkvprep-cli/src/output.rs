//! Console output for the mkvprep binary.
//!
//! Progress goes to stdout, errors to stderr. `console` drops the colours by
//! itself when the stream is not a terminal.

use console::style;
use std::fmt::Display;

/// Printed once the directory has been found.
pub fn print_banner() {
    println!(
        "Ok, setting up what I can automatically.\n\
         You still need to follow the handbook. This script cannot cover every single thing.\n\
         There's various stuff a script simply cannot do automatically."
    );
}

pub fn print_warning<T: Display>(message: T) {
    println!("{} {}", style("Warning:").yellow().bold(), message);
}

/// Per-file confirmation.
pub fn print_file_done(file_name: &str) {
    println!("{} : {}", style("✓").green(), file_name);
}

pub fn print_all_done() {
    println!("{} done all files", style("✓✓✓").green().bold());
}

pub fn print_error<T: Display>(message: T) {
    eprintln!("{} {}", style("Error:").for_stderr().red().bold(), message);
}
