//! Builder pattern for creating `PhraseMatcher` instances.
//!
//! The `PhraseMatcherBuilder` provides a fluent API for constructing
//! `PhraseMatcher` instances with optional configuration and validation.

use crate::phonetic::PhoneticLexicon;

use super::pattern::{ConfigError, RhymeScheme, SyllablePattern};
use super::PhraseMatcher;

/// Builder for constructing a `PhraseMatcher` with a fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use scansion::prelude::*;
///
/// let dict = CmuDictionary::from_path("cmudict.dict")?;
/// let matcher = PhraseMatcherBuilder::new()
///     .lexicon(dict)
///     .pattern("5,4,9,4".parse()?)
///     .rhyme_scheme("--aa".parse()?)
///     .build()?;
/// ```
pub struct PhraseMatcherBuilder<L> {
    lexicon: Option<L>,
    pattern: Option<SyllablePattern>,
    scheme: Option<RhymeScheme>,
}

/// Error type for builder validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    /// No lexicon was provided
    #[error("Lexicon is required. Use .lexicon() to set it.")]
    MissingLexicon,
    /// No pattern was provided
    #[error("Pattern is required. Use .pattern() to set it.")]
    MissingPattern,
    /// The assembled configuration failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl<L: PhoneticLexicon> PhraseMatcherBuilder<L> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        PhraseMatcherBuilder {
            lexicon: None,
            pattern: None,
            scheme: None,
        }
    }

    /// Set the lexicon to consult for pronunciations and rhymes.
    pub fn lexicon(mut self, lexicon: L) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Set the per-line syllable targets.
    pub fn pattern(mut self, pattern: SyllablePattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Set the rhyme scheme. Leaving it unset skips rhyme validation.
    pub fn rhyme_scheme(mut self, scheme: RhymeScheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Build the `PhraseMatcher`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Lexicon was not set (use `.lexicon()`)
    /// - Pattern was not set (use `.pattern()`)
    /// - The rhyme scheme length does not match the pattern length
    pub fn build(self) -> Result<PhraseMatcher<L>, BuilderError> {
        let lexicon = self.lexicon.ok_or(BuilderError::MissingLexicon)?;
        let pattern = self.pattern.ok_or(BuilderError::MissingPattern)?;

        Ok(PhraseMatcher::new(lexicon, pattern, self.scheme)?)
    }
}

impl<L: PhoneticLexicon> Default for PhraseMatcherBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}
