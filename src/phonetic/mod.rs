//! Phonetic lookup abstractions for pluggable lexicon backends.
//!
//! This module provides the trait that abstracts over pronunciation/rhyme
//! resources (a full CMU dictionary, a cached table, a test fake) so the
//! matching engine can be constructed against any conforming implementation.

pub mod cmudict;
pub mod phoneme;
pub mod syllables;

use rustc_hash::FxHashSet;

pub use cmudict::{CmuDictionary, LexiconError};
pub use phoneme::{Phoneme, Pronunciation};
pub use syllables::{annotate, syllables_of, AnnotatedWord};

/// Read-only phonetic lookup capability.
///
/// A lexicon maps words to pronunciation variants and answers rhyme queries.
/// It is a pure lookup resource: implementations are expected to be loaded
/// once (a one-time, blocking initialization step) and then shared freely —
/// the `Send + Sync` bound reflects that concurrent read access must be safe.
///
/// Lookup misses are a normal outcome, not an error: `pronunciations_for`
/// returns `None` for words the resource does not know, and `rhymes_for`
/// returns an empty set.
pub trait PhoneticLexicon: Send + Sync {
    /// All pronunciation variants for a word, primary variant first.
    ///
    /// Returns `None` if the word has no entry.
    fn pronunciations_for(&self, word: &str) -> Option<&[Pronunciation]>;

    /// The set of words the resource considers rhymes of `word`.
    ///
    /// The relation is not required to be symmetric; callers that need
    /// tolerance of an asymmetric source should test membership in both
    /// directions.
    fn rhymes_for(&self, word: &str) -> FxHashSet<String>;

    /// The primary (first listed) pronunciation for a word.
    fn primary_pronunciation(&self, word: &str) -> Option<&Pronunciation> {
        self.pronunciations_for(word).and_then(|v| v.first())
    }

    /// Check if a word has an entry.
    fn contains(&self, word: &str) -> bool {
        self.pronunciations_for(word).is_some()
    }
}

impl<L: PhoneticLexicon + ?Sized> PhoneticLexicon for &L {
    fn pronunciations_for(&self, word: &str) -> Option<&[Pronunciation]> {
        (**self).pronunciations_for(word)
    }

    fn rhymes_for(&self, word: &str) -> FxHashSet<String> {
        (**self).rhymes_for(word)
    }
}
