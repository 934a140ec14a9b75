//! Greedy partition of an annotated word sequence into lines.
//!
//! The segmenter walks the pattern left to right, consuming words from the
//! front of the sequence and accumulating their syllable counts until the
//! running total lands exactly on the current line target. It is a single
//! deterministic pass: no alternative splits are explored, word counts are
//! never divided across lines, and an earlier commitment is never revisited.
//! A phrase whose words sum correctly but whose only workable split would
//! need a different earlier commitment is therefore rejected; that narrow
//! behavior is part of the contract, not an optimization shortcut.

use std::fmt;

use crate::phonetic::AnnotatedWord;

use super::pattern::SyllablePattern;

/// One line of a segmented phrase: the words whose syllable counts sum
/// exactly to the corresponding pattern target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    words: Vec<String>,
}

impl Line {
    /// Build a line from words.
    pub fn new(words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The words in encounter order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The line's final word, which carries the rhyme.
    ///
    /// Lines produced by [`segment`] always have at least one word, since
    /// every line target is positive.
    pub fn final_word(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}

/// Partition `words` into lines matching `pattern` exactly.
///
/// Fails (returns `None`) when:
///
/// - any word's syllable count is unknown;
/// - the counts do not sum to the pattern total (fast rejection, no
///   segmentation attempted);
/// - a running total overshoots a line target, i.e. no word boundary aligns
///   with the required line break;
/// - the words run out before a line target is reached, or words are left
///   over after the last line closes.
pub fn segment(words: &[AnnotatedWord], pattern: &SyllablePattern) -> Option<Vec<Line>> {
    let mut counts = Vec::with_capacity(words.len());
    for word in words {
        counts.push(word.syllables?);
    }
    if counts.iter().sum::<usize>() != pattern.total() {
        return None;
    }

    let mut lines = Vec::with_capacity(pattern.len());
    let mut next = 0;
    for &target in pattern.targets() {
        let mut line = Line::default();
        let mut run = 0;
        while run < target {
            let word = words.get(next)?;
            run += counts[next];
            if run > target {
                // Overshoot: the break falls inside this word.
                return None;
            }
            line.words.push(word.word.clone());
            next += 1;
        }
        lines.push(line);
    }

    // Equal totals make leftovers impossible unless a word contributed no
    // syllables; those still break the partition.
    (next == words.len()).then_some(lines)
}
