//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::matcher::{RhymeScheme, SyllablePattern};

/// Top-level argument surface.
#[derive(Parser)]
#[command(name = "scansion")]
#[command(about = "Verse-pattern phrase classification with phonetic dictionaries")]
#[command(version)]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Classify phrases against a syllable pattern and rhyme scheme
    Check {
        /// Phrase to classify (reads stdin lines when omitted)
        phrase: Option<String>,

        /// Pronunciation dictionary in cmudict format
        #[arg(short, long)]
        dict: PathBuf,

        /// Per-line syllable targets, e.g. 5,4,9,4
        #[arg(short, long, default_value = "5,4,9,4")]
        pattern: SyllablePattern,

        /// Rhyme scheme, one char per line ('-' or '.' for unrhymed),
        /// e.g. --aa; omit to match on syllables alone
        #[arg(short, long)]
        scheme: Option<RhymeScheme>,

        /// Show the annotated words and segmented lines
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show per-word syllable counts
    Syllables {
        /// Words to look up
        words: Vec<String>,

        /// Pronunciation dictionary in cmudict format
        #[arg(short, long)]
        dict: PathBuf,
    },

    /// List the words that rhyme with a word
    Rhymes {
        /// Word to look up
        word: String,

        /// Pronunciation dictionary in cmudict format
        #[arg(short, long)]
        dict: PathBuf,

        /// Limit the number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Launch the interactive REPL
    Repl {
        /// Pronunciation dictionary in cmudict format
        #[arg(short, long)]
        dict: PathBuf,

        /// Per-line syllable targets, e.g. 5,4,9,4
        #[arg(short, long, default_value = "5,4,9,4")]
        pattern: SyllablePattern,

        /// Rhyme scheme, one char per line ('-' or '.' for unrhymed)
        #[arg(short, long)]
        scheme: Option<RhymeScheme>,
    },
}
