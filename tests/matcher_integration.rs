//! End-to-end classification against a cmudict-format fixture lexicon.

use std::sync::Arc;

use scansion::prelude::*;

/// Fixture in `cmudict.dict` format, carrying real pronunciations for every
/// word the scenarios below use.
const FIXTURE: &str = "\
a AH0
all AO1 L
along AH0 L AO1 NG
alpha AE1 L F AH0
and AH0 N D
as AE1 Z
at AE1 T
banana B AH0 N AE1 N AH0
be B IY1
been B IH1 N
bravo B R AA1 V OW0
buried B EH1 R IY0 D
by B AY1
came K EY1 M
can K AE1 N
cart K AA1 R T
charlie CH AA1 R L IY0
church CH ER1 CH
concatenate K AA0 N K AE1 T AH0 N EY2 T
delta D EH1 L T AH0
died D AY1 D
dirt D ER1 T
door D AO1 R
echo EH1 K OW0
eleanor EH1 L AH0 N ER0
exit EH1 G Z IH0 T
face F EY1 S
falls F AO1 L Z
father F AA1 DH ER0
final F AY1 N AH0 L
for F AO1 R
foxtrot F AA1 K S T R AA2 T
from F R AH1 M
goodbye G UH2 D B AY1
grave G R EY1 V
hands HH AE1 N D Z
has HH AE1 Z
he HH IY1
hello HH AH0 L OW1
her HH ER1
his HH IH1 Z
in IH0 N
is IH1 Z
it IH1 T
jar JH AA1 R
keeps K IY1 P S
leaving L IY1 V IH0 NG
like L AY1 K
lives L IH1 V Z
mckenzie M AH0 K EH1 N Z IY0
name N EY1 M
no N OW1
nobody N OW1 B AH0 D IY2
not N AA1 T
of AH1 V
one W AH1 N
over OW1 V ER0
phrases F R EY1 Z IH0 Z
picks P IH1 K S
plane P L EY1 N
please P L IY1 Z
rhyme R AY1 M
rice R AY1 S
rigby R IH1 G B IY0
saved S EY1 V D
see S IY1
she SH IY1
sky S K AY1
stone S T OW1 N
such S AH1 CH
tease T IY1 Z
terrible T EH1 R AH0 B AH0 L
that DH AE1 T
the DH AH0
the(2) DH AH1
the(3) DH IY0
these DH IY1 Z
up AH1 P
waits W EY1 T S
walks W AO1 K S
was W AA1 Z
we W IY1
wearing W EH1 R IH0 NG
wedding W EH1 D IH0 NG
where W EH1 R
who HH UW1
window W IH1 N D OW0
wing W IH1 NG
wiping W AY1 P IH0 NG
with W IH1 DH
world W ER1 L D
you Y UW1
";

fn fixture_lexicon() -> CmuDictionary {
    CmuDictionary::from_entries(FIXTURE.lines()).unwrap()
}

/// The verse matcher: four lines of 5, 4, 9 and 4 syllables, with the last
/// two lines rhyming.
fn verse_matcher() -> PhraseMatcher<CmuDictionary> {
    PhraseMatcher::new(
        fixture_lexicon(),
        "5,4,9,4".parse().unwrap(),
        Some("--aa".parse().unwrap()),
    )
    .unwrap()
}

#[test]
fn test_verse_quotes_match() {
    let matcher = verse_matcher();
    assert!(matcher.matches(
        "waits at the window wearing the face that she keeps in a jar by \
         the door who is it for"
    ));
    assert!(matcher.matches(
        "eleanor rigby died in the church and was buried along with her \
         name nobody came"
    ));
}

#[test]
fn test_wrong_total_rejected() {
    let matcher = verse_matcher();
    let classification = matcher.classify("hello world");
    assert!(!classification.is_match());
    assert_eq!(
        classification.outcome(),
        &MatchOutcome::TotalMismatch {
            found: 3,
            required: 22,
        }
    );
}

#[test]
fn test_unknown_word_rejected() {
    let matcher = verse_matcher();
    let classification = matcher.classify("the darning door");
    assert!(!classification.is_match());
    assert_eq!(
        classification.outcome(),
        &MatchOutcome::UnknownWord {
            word: "darning".to_string()
        }
    );
}

#[test]
fn test_misaligned_breaks_rejected() {
    // 22 syllables, but the first break falls inside "banana".
    let matcher = verse_matcher();
    let classification = matcher
        .classify("concatenate banana terrible alpha bravo charlie delta echo foxtrot");
    assert!(!classification.is_match());
    assert_eq!(classification.outcome(), &MatchOutcome::Misaligned);
    assert_eq!(classification.lines(), None);
}

#[test]
fn test_correct_pattern_without_rhyme_rejected() {
    let matcher = verse_matcher();
    let classification = matcher.classify(
        "eleanor rigby picks up the rice in the church where a wedding has \
         been lives in a cart",
    );
    assert!(!classification.is_match());
    assert_eq!(
        classification.outcome(),
        &MatchOutcome::RhymeMismatch {
            first: "been".to_string(),
            second: "cart".to_string(),
        }
    );
    // Segmentation itself succeeded; the report still carries the lines.
    assert!(classification.lines().is_some());
}

#[test]
fn test_near_rhyme_rejected() {
    // "grave" and "saved" differ in their final consonant; sharing the vowel
    // is not enough.
    let matcher = verse_matcher();
    assert!(!matcher.matches(
        "father mckenzie wiping the dirt from his hands as he walks from \
         the grave no one was saved"
    ));
}

#[test]
fn test_pattern_only_matcher_ignores_rhyme() {
    let matcher =
        PhraseMatcher::new(fixture_lexicon(), "5,4,9,4".parse().unwrap(), None).unwrap();
    // Identical structure, rhyming and non-rhyming endings both match.
    assert!(matcher.matches(
        "waits at the window wearing the face that she keeps in a jar by \
         the door who is it for"
    ));
    assert!(matcher.matches(
        "eleanor rigby picks up the rice in the church where a wedding has \
         been lives in a cart"
    ));
}

#[test]
fn test_smaller_pattern_with_full_rhyme_group() {
    let matcher = PhraseMatcher::new(
        fixture_lexicon(),
        "3,3,3".parse().unwrap(),
        Some("aaa".parse().unwrap()),
    )
    .unwrap();
    assert!(matcher.matches("all of these phrases please such a tease"));
    // Correct structure, but "rhyme" breaks the three-way group.
    assert!(!matcher.matches("can you see we can be not a rhyme"));
}

#[test]
fn test_scheme_length_mismatch_is_config_error() {
    let err = PhraseMatcher::new(
        fixture_lexicon(),
        "5,4,9".parse().unwrap(),
        Some("--aa".parse().unwrap()),
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
fn test_classification_report() {
    let matcher = verse_matcher();
    let classification = matcher.classify(
        "over wing exit leaving the plane as it falls like a stone from \
         the sky final goodbye",
    );
    assert!(classification.is_match());

    let annotated: Vec<(&str, Option<usize>)> = classification
        .words()
        .iter()
        .map(|w| (w.word.as_str(), w.syllables))
        .collect();
    assert_eq!(
        annotated,
        vec![
            ("over", Some(2)),
            ("wing", Some(1)),
            ("exit", Some(2)),
            ("leaving", Some(2)),
            ("the", Some(1)),
            ("plane", Some(1)),
            ("as", Some(1)),
            ("it", Some(1)),
            ("falls", Some(1)),
            ("like", Some(1)),
            ("a", Some(1)),
            ("stone", Some(1)),
            ("from", Some(1)),
            ("the", Some(1)),
            ("sky", Some(1)),
            ("final", Some(2)),
            ("goodbye", Some(2)),
        ]
    );

    let lines: Vec<String> = classification
        .lines()
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        lines,
        vec![
            "over wing exit",
            "leaving the plane",
            "as it falls like a stone from the sky",
            "final goodbye",
        ]
    );
}

#[test]
fn test_concurrent_classification() {
    // One configured matcher, shared read-only across threads.
    let matcher = Arc::new(verse_matcher());
    let verse = "waits at the window wearing the face that she keeps in a \
                 jar by the door who is it for";

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let matcher = Arc::clone(&matcher);
            scope.spawn(move || {
                for _ in 0..50 {
                    assert!(matcher.matches(verse));
                    assert!(!matcher.matches("hello world"));
                }
            });
        }
    });
}
