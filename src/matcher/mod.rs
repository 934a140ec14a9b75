//! The phrase matching engine.
//!
//! A [`PhraseMatcher`] owns an immutable configuration — per-line syllable
//! targets plus an optional rhyme scheme — and a phonetic lexicon, and
//! answers a single question: does a phrase fit? Classification runs in
//! three stages over whitespace tokens:
//!
//! 1. annotate every word with its syllable count (unknown words fail the
//!    phrase);
//! 2. greedily segment the words into lines matching the targets exactly;
//! 3. check every configured rhyme group pairwise on the lines' final words.
//!
//! All runtime rejection reasons collapse into a `false` verdict — the
//! engine answers *does it match*, not *why not*. [`Classification`] exposes
//! the same run as data for observability.
//!
//! # Example
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
//! assert!(matcher.matches(
//!     "waits at the window wearing the face that she keeps \
//!      in a jar by the door who is it for"
//! ));
//! assert!(!matcher.matches("hello world"));
//! ```

pub mod builder;
mod classification;
pub mod pattern;
pub mod rhyme;
pub mod segmenter;

pub use builder::{BuilderError, PhraseMatcherBuilder};
pub use classification::{Classification, MatchOutcome};
pub use pattern::{ConfigError, RhymeScheme, SyllablePattern};
pub use rhyme::words_rhyme;
pub use segmenter::{segment, Line};

use crate::phonetic::{annotate, PhoneticLexicon};

use rhyme::find_rhyme_failure;

/// Classifies phrases against a syllable pattern and optional rhyme scheme.
///
/// Immutable once constructed: the pattern, scheme, and derived rhyme groups
/// are validated and precomputed up front, and every call is a pure function
/// of the input phrase. Shared references can classify concurrently as long
/// as the lexicon supports concurrent reads, which the
/// [`PhoneticLexicon`] bound requires.
#[derive(Debug, Clone)]
pub struct PhraseMatcher<L> {
    lexicon: L,
    pattern: SyllablePattern,
    scheme: Option<RhymeScheme>,
    /// Rhyme groups derived from the scheme at construction time.
    groups: Vec<(char, Vec<usize>)>,
}

impl<L: PhoneticLexicon> PhraseMatcher<L> {
    /// Create a matcher over `lexicon` for `pattern`, rhyming per `scheme`.
    ///
    /// # Errors
    ///
    /// Rejects a scheme whose length differs from the pattern's. This is a
    /// configuration error, distinct from any runtime non-match.
    pub fn new(
        lexicon: L,
        pattern: SyllablePattern,
        scheme: Option<RhymeScheme>,
    ) -> Result<Self, ConfigError> {
        if let Some(scheme) = &scheme {
            if scheme.len() != pattern.len() {
                return Err(ConfigError::SchemeLengthMismatch {
                    pattern_len: pattern.len(),
                    scheme_len: scheme.len(),
                });
            }
        }
        let groups = scheme.as_ref().map(RhymeScheme::groups).unwrap_or_default();
        Ok(Self {
            lexicon,
            pattern,
            scheme,
            groups,
        })
    }

    /// Whether the phrase fits the configured pattern and rhyme scheme.
    ///
    /// The phrase is tokenized on whitespace; any unknown word, syllable
    /// total mismatch, misaligned line break, or failed rhyme group yields
    /// `false`.
    pub fn matches(&self, phrase: &str) -> bool {
        self.classify(phrase).is_match()
    }

    /// Classify the phrase, reporting what was observed at each stage.
    ///
    /// The embedded verdict equals [`matches`](Self::matches); the rest is
    /// observability data.
    pub fn classify(&self, phrase: &str) -> Classification {
        let words = annotate(&self.lexicon, phrase.split_whitespace());

        if let Some(unknown) = words.iter().find(|w| w.syllables.is_none()) {
            let word = unknown.word.clone();
            return Classification::new(words, None, MatchOutcome::UnknownWord { word });
        }

        let found: usize = words.iter().filter_map(|w| w.syllables).sum();
        let required = self.pattern.total();
        if found != required {
            return Classification::new(
                words,
                None,
                MatchOutcome::TotalMismatch { found, required },
            );
        }

        let Some(lines) = segment(&words, &self.pattern) else {
            return Classification::new(words, None, MatchOutcome::Misaligned);
        };

        if let Some((first, second)) = find_rhyme_failure(&self.lexicon, &lines, &self.groups) {
            return Classification::new(
                words,
                Some(lines),
                MatchOutcome::RhymeMismatch { first, second },
            );
        }

        Classification::new(words, Some(lines), MatchOutcome::Matched)
    }

    /// The configured syllable pattern.
    pub fn pattern(&self) -> &SyllablePattern {
        &self.pattern
    }

    /// The configured rhyme scheme, if any.
    pub fn rhyme_scheme(&self) -> Option<&RhymeScheme> {
        self.scheme.as_ref()
    }

    /// The lexicon the matcher consults.
    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetic::CmuDictionary;

    fn lexicon() -> CmuDictionary {
        CmuDictionary::from_entries([
            "all AO1 L",
            "of AH1 V",
            "these DH IY1 Z",
            "phrases F R EY1 Z IH0 Z",
            "please P L IY1 Z",
            "such S AH1 CH",
            "a AH0",
            "tease T IY1 Z",
            "cart K AA1 R T",
        ])
        .unwrap()
    }

    fn matcher(scheme: Option<&str>) -> PhraseMatcher<CmuDictionary> {
        PhraseMatcher::new(
            lexicon(),
            "3,3,3".parse().unwrap(),
            scheme.map(|s| s.parse().unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn test_scheme_length_must_match_pattern() {
        let err = PhraseMatcher::new(
            lexicon(),
            "3,3,3".parse().unwrap(),
            Some("aabb".parse().unwrap()),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::SchemeLengthMismatch {
                pattern_len: 3,
                scheme_len: 4,
            }
        );
    }

    #[test]
    fn test_matching_phrase() {
        let matcher = matcher(Some("aaa"));
        assert!(matcher.matches("all of these phrases please such a tease"));
    }

    #[test]
    fn test_rhyme_failure_collapses_to_false() {
        let matcher = matcher(Some("aaa"));
        // Same syllable structure, final line ends in a non-rhyme.
        assert!(!matcher.matches("all of these phrases please such a cart"));
    }

    #[test]
    fn test_no_scheme_ignores_rhyme() {
        let matcher = matcher(None);
        assert!(matcher.matches("all of these phrases please such a tease"));
        assert!(matcher.matches("all of these phrases please such a cart"));
    }

    #[test]
    fn test_unknown_word_fails() {
        let matcher = matcher(None);
        let classification = matcher.classify("all of these phrases please such a stranger");
        assert!(!classification.is_match());
        assert_eq!(
            classification.outcome(),
            &MatchOutcome::UnknownWord {
                word: "stranger".to_string()
            }
        );
    }

    #[test]
    fn test_total_mismatch_reports_counts() {
        let matcher = matcher(None);
        let classification = matcher.classify("all of these");
        assert_eq!(
            classification.outcome(),
            &MatchOutcome::TotalMismatch {
                found: 3,
                required: 9,
            }
        );
        assert_eq!(classification.lines(), None);
    }

    #[test]
    fn test_empty_phrase_fails() {
        let matcher = matcher(None);
        assert!(!matcher.matches(""));
        assert!(!matcher.matches("   "));
    }

    #[test]
    fn test_classification_exposes_lines_on_match() {
        let matcher = matcher(Some("aaa"));
        let classification = matcher.classify("all of these phrases please such a tease");
        assert!(classification.is_match());
        let lines = classification.lines().unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].to_string(), "all of these");
        assert_eq!(lines[2].to_string(), "such a tease");
    }
}
