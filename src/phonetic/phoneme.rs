//! ARPABET phonemes and pronunciations.
//!
//! The phonetic resources this crate consumes describe a word as one or more
//! pronunciations, each an ordered sequence of ARPABET phonemes
//! (<https://en.wikipedia.org/wiki/ARPABET>). Vowel phonemes carry a trailing
//! stress digit (`AH0`, `EY1`, `AW2`); consonants do not (`K`, `T`, `NG`).
//!
//! Two derived notions drive everything downstream:
//!
//! - a phoneme is **syllabic** iff it carries a stress digit, so the syllable
//!   count of a pronunciation is its number of syllabic phonemes;
//! - the **rhyming part** of a pronunciation is the phoneme suffix starting at
//!   the last primary- or secondary-stressed phoneme. Two pronunciations that
//!   share a rhyming part rhyme.

use std::fmt;

use smallvec::SmallVec;

/// A single ARPABET phoneme, e.g. `K`, `AH0`, `EY1`.
///
/// The symbol is stored verbatim, including any stress digit. Equality is
/// symbol equality, so `AH0` and `AH1` are distinct phonemes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phoneme {
    symbol: String,
}

impl Phoneme {
    /// Create a phoneme from its ARPABET symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// The ARPABET symbol, including any stress digit.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The stress marker, if this phoneme carries one.
    ///
    /// `0` is unstressed, `1` primary stress, `2` secondary stress.
    pub fn stress(&self) -> Option<u8> {
        self.symbol
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8)
    }

    /// Whether this phoneme is a syllable-bearing unit.
    ///
    /// In ARPABET notation exactly the vowel phonemes carry a stress digit,
    /// so this is equivalent to "is a vowel sound".
    pub fn is_syllabic(&self) -> bool {
        self.stress().is_some()
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// One pronunciation of a word: an ordered sequence of phonemes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pronunciation {
    // Most dictionary entries are short; keep them inline.
    phonemes: SmallVec<[Phoneme; 8]>,
}

impl Pronunciation {
    /// Build a pronunciation from phonemes.
    pub fn new(phonemes: impl IntoIterator<Item = Phoneme>) -> Self {
        Self {
            phonemes: phonemes.into_iter().collect(),
        }
    }

    /// Parse a whitespace-separated phoneme sequence, e.g. `"W EY1 T S"`.
    pub fn parse(text: &str) -> Self {
        Self::new(text.split_whitespace().map(Phoneme::new))
    }

    /// The phonemes in order.
    pub fn phonemes(&self) -> &[Phoneme] {
        &self.phonemes
    }

    /// Number of phonemes.
    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    /// Whether the pronunciation has no phonemes.
    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }

    /// Number of syllables: the count of syllable-bearing phonemes.
    pub fn syllable_count(&self) -> usize {
        self.phonemes.iter().filter(|p| p.is_syllabic()).count()
    }

    /// The phoneme suffix that determines what this pronunciation rhymes
    /// with: everything from the last primary- or secondary-stressed phoneme
    /// to the end.
    ///
    /// Pronunciations without a stressed phoneme (e.g. `the` → `DH AH0`)
    /// rhyme on the whole sequence.
    pub fn rhyming_part(&self) -> &[Phoneme] {
        let start = self
            .phonemes
            .iter()
            .rposition(|p| matches!(p.stress(), Some(1) | Some(2)))
            .unwrap_or(0);
        &self.phonemes[start..]
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, phoneme) in self.phonemes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", phoneme)?;
        }
        Ok(())
    }
}
