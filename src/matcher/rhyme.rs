//! Rhyme-scheme validation over segmented lines.
//!
//! A group of lines rhymes when every pairwise combination of their final
//! words passes the lexicon's rhyme test. The test is applied in both
//! directions — `a` rhymes with `b` if either word appears in the other's
//! rhyme set — to tolerate an asymmetric underlying resource.

use crate::phonetic::PhoneticLexicon;

use super::segmenter::Line;

/// Whether two words rhyme according to the lexicon.
///
/// Membership is checked in both directions, so an asymmetric rhyme
/// relation still connects the pair if either side lists the other.
pub fn words_rhyme<L: PhoneticLexicon + ?Sized>(lexicon: &L, first: &str, second: &str) -> bool {
    lexicon.rhymes_for(first).contains(second) || lexicon.rhymes_for(second).contains(first)
}

/// Find the first pair of final words that breaks a rhyme group.
///
/// Groups with fewer than two members are vacuously satisfied. Returns
/// `None` when every group holds.
pub(crate) fn find_rhyme_failure<L: PhoneticLexicon + ?Sized>(
    lexicon: &L,
    lines: &[Line],
    groups: &[(char, Vec<usize>)],
) -> Option<(String, String)> {
    for (_, members) in groups {
        for (i, &first_line) in members.iter().enumerate() {
            for &second_line in &members[i + 1..] {
                let (Some(first), Some(second)) = (
                    lines[first_line].final_word(),
                    lines[second_line].final_word(),
                ) else {
                    continue;
                };
                if !words_rhyme(lexicon, first, second) {
                    return Some((first.to_string(), second.to_string()));
                }
            }
        }
    }
    None
}
