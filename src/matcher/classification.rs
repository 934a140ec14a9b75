//! Structured classification results.
//!
//! The matcher's primary contract is a boolean verdict; everything a phrase
//! could be rejected for collapses into it. [`Classification`] is the
//! observability side-channel: it carries the annotated tokens, the
//! segmented lines, and which rule ended the run, so calling code can print
//! or record the decision. It is data about the verdict — branching on it
//! for anything beyond display defeats the predicate contract.

use std::fmt;

use crate::phonetic::AnnotatedWord;

use super::segmenter::Line;

/// The rule that settled a classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The phrase satisfied the pattern and any configured rhyme scheme.
    Matched,
    /// A word had no lexicon entry, so no syllable total exists.
    UnknownWord {
        /// The first token without an entry.
        word: String,
    },
    /// The phrase's syllable total differs from the pattern total.
    TotalMismatch {
        /// Syllables counted in the phrase.
        found: usize,
        /// Syllables the pattern requires.
        required: usize,
    },
    /// The totals agree but no word boundary aligns with a line break.
    Misaligned,
    /// A rhyme group contains a pair of final words that do not rhyme.
    RhymeMismatch {
        /// Final word of the earlier line in the failing pair.
        first: String,
        /// Final word of the later line in the failing pair.
        second: String,
    },
}

impl MatchOutcome {
    /// Whether this outcome is the match verdict.
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched)
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Matched => f.write_str("matches the scheme"),
            MatchOutcome::UnknownWord { word } => {
                write!(f, "no pronunciation for {word:?}")
            }
            MatchOutcome::TotalMismatch { found, required } => {
                write!(f, "{found} syllables where {required} are required")
            }
            MatchOutcome::Misaligned => {
                f.write_str("word boundaries do not align with the line breaks")
            }
            MatchOutcome::RhymeMismatch { first, second } => {
                write!(f, "{first:?} does not rhyme with {second:?}")
            }
        }
    }
}

/// Everything observed while classifying one phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    words: Vec<AnnotatedWord>,
    lines: Option<Vec<Line>>,
    outcome: MatchOutcome,
}

impl Classification {
    pub(crate) fn new(
        words: Vec<AnnotatedWord>,
        lines: Option<Vec<Line>>,
        outcome: MatchOutcome,
    ) -> Self {
        Self {
            words,
            lines,
            outcome,
        }
    }

    /// The boolean verdict — identical to what `matches` returns.
    pub fn is_match(&self) -> bool {
        self.outcome.is_match()
    }

    /// The rule that settled the run.
    pub fn outcome(&self) -> &MatchOutcome {
        &self.outcome
    }

    /// The tokens with their syllable counts, before segmentation.
    pub fn words(&self) -> &[AnnotatedWord] {
        &self.words
    }

    /// The segmented lines, present whenever segmentation succeeded.
    pub fn lines(&self) -> Option<&[Line]> {
        self.lines.as_deref()
    }
}
