//! scansion - Verse-pattern phrase classification
//!
//! Provides CLI utilities and an interactive REPL over phonetic
//! dictionaries in cmudict format.

use std::process;

use clap::Parser;
use colored::Colorize;

use scansion::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli.command) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
