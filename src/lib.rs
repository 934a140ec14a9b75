//! # scansion
//!
//! Verse-pattern phrase classification backed by phonetic dictionaries.
//!
//! This library decides whether a sequence of words fits a structured poetic
//! pattern: a fixed division into lines by syllable count, plus an optional
//! rhyme scheme binding groups of lines to each other by their final word.
//! Syllable counts and rhymes come from a pluggable pronunciation resource;
//! a backend for the CMU Pronouncing Dictionary text format is included.
//!
//! ## Example
//!
//! ```rust,ignore
//! use scansion::prelude::*;
//!
//! let dict = CmuDictionary::from_path("cmudict.dict")?;
//! let matcher = PhraseMatcher::new(
//!     dict,
//!     "5,4,9,4".parse()?,
//!     Some("--aa".parse()?),
//! )?;
//!
//! if matcher.matches("waits at the window wearing the face that she keeps \
//!                     in a jar by the door who is it for") {
//!     println!("a verse!");
//! }
//! ```
//!
//! Segmentation is a deterministic greedy pass: words are consumed left to
//! right into the current line until its target is hit exactly, and word
//! syllable counts are never split across lines. Phrases with the right
//! total whose word boundaries fail to land on the line breaks do not match.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod matcher;
pub mod phonetic;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Interactive REPL for classifying phrases
#[cfg(feature = "cli")]
pub mod repl;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::matcher::{
        segment, words_rhyme, BuilderError, Classification, ConfigError, Line, MatchOutcome,
        PhraseMatcher, PhraseMatcherBuilder, RhymeScheme, SyllablePattern,
    };
    pub use crate::phonetic::{
        annotate, syllables_of, AnnotatedWord, CmuDictionary, LexiconError, Phoneme,
        PhoneticLexicon, Pronunciation,
    };
}
