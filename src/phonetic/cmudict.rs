//! CMU Pronouncing Dictionary backend.
//!
//! Parses the `cmudict.dict` text format and implements
//! [`PhoneticLexicon`] on top of it. Entries have a term and a pronunciation,
//! with the option of several pronunciations per word:
//!
//! ```text
//! aluminium AH0 L UW1 M IH0 N AH0 M
//! aluminium(2) AE2 L Y UW1 M IH0 N AH0 M
//! rigby R IH1 G B IY0 # proper name
//! ```
//!
//! Variant suffixes like `(2)` group under the base word in file order, so
//! the first listed pronunciation stays primary. `#` starts a comment that
//! runs to the end of the line.
//!
//! Rhyme queries are answered from an index built at load time: every
//! pronunciation is bucketed under its rhyming part, and two words rhyme
//! when any of their pronunciations share a bucket.
//!
//! Related references:
//!
//! * <https://github.com/cmusphinx/cmudict>
//! * <https://cmusphinx.github.io/wiki/tutorialdict/>

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use super::phoneme::{Phoneme, Pronunciation};
use super::PhoneticLexicon;

/// Errors raised while loading a lexicon.
///
/// Loading is a one-time initialization step; these errors never appear
/// during matching.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The underlying reader failed.
    #[error("failed to read lexicon: {0}")]
    Io(#[from] std::io::Error),

    /// An entry line had a term but no phonemes.
    #[error("malformed lexicon entry on line {line}: {text:?}")]
    MalformedEntry {
        /// 1-based line number within the source.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },
}

/// A pronunciation/rhyme lexicon in CMU dictionary format.
///
/// # Example
///
/// ```rust,ignore
/// use scansion::prelude::*;
///
/// let dict = CmuDictionary::from_path("cmudict.dict")?;
/// assert_eq!(syllables_of(&dict, "aluminium"), Some(5));
/// assert!(dict.rhymes_for("door").contains("for"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CmuDictionary {
    /// Word → pronunciation variants, primary first.
    entries: FxHashMap<String, Vec<Pronunciation>>,
    /// Rhyming-part key → words with a pronunciation ending in that part.
    rhyme_index: FxHashMap<String, Vec<String>>,
}

impl CmuDictionary {
    /// Load a dictionary from a file in `cmudict.dict` format.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a dictionary from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LexiconError> {
        let mut dict = Self::default();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            dict.insert_line(&line, i + 1)?;
        }
        Ok(dict)
    }

    /// Build a dictionary from entry lines already in memory.
    ///
    /// Convenient for fixtures and small hand-rolled lexicons.
    pub fn from_entries<I, S>(lines: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        for (i, line) in lines.into_iter().enumerate() {
            dict.insert_line(line.as_ref(), i + 1)?;
        }
        Ok(dict)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert_line(&mut self, line: &str, line_no: usize) -> Result<(), LexiconError> {
        let content = match line.find('#') {
            Some(comment) => &line[..comment],
            None => line,
        };
        let mut tokens = content.split_whitespace();
        let Some(term) = tokens.next() else {
            // Blank or comment-only line.
            return Ok(());
        };
        let pronunciation = Pronunciation::new(tokens.map(Phoneme::new));
        if pronunciation.is_empty() {
            return Err(LexiconError::MalformedEntry {
                line: line_no,
                text: line.trim().to_string(),
            });
        }

        let word = base_term(term);
        self.rhyme_index
            .entry(rhyme_key(&pronunciation))
            .or_default()
            .push(word.to_string());
        self.entries
            .entry(word.to_string())
            .or_default()
            .push(pronunciation);
        Ok(())
    }
}

impl PhoneticLexicon for CmuDictionary {
    fn pronunciations_for(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    fn rhymes_for(&self, word: &str) -> FxHashSet<String> {
        let mut rhymes = FxHashSet::default();
        if let Some(pronunciations) = self.entries.get(word) {
            for pronunciation in pronunciations {
                if let Some(bucket) = self.rhyme_index.get(&rhyme_key(pronunciation)) {
                    rhymes.extend(
                        bucket
                            .iter()
                            .filter(|candidate| candidate.as_str() != word)
                            .cloned(),
                    );
                }
            }
        }
        rhymes
    }
}

/// Strip a `(n)` variant suffix, e.g. `"aluminium(2)"` → `"aluminium"`.
fn base_term(term: &str) -> &str {
    if let Some(open) = term.find('(') {
        if term.ends_with(')') && open > 0 {
            let inner = &term[open + 1..term.len() - 1];
            if !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit()) {
                return &term[..open];
            }
        }
    }
    term
}

/// Index key for a pronunciation's rhyming part.
fn rhyme_key(pronunciation: &Pronunciation) -> String {
    let mut key = String::new();
    for phoneme in pronunciation.rhyming_part() {
        if !key.is_empty() {
            key.push(' ');
        }
        key.push_str(phoneme.symbol());
    }
    key
}
