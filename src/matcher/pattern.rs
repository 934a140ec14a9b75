//! Matcher configuration: syllable patterns and rhyme schemes.
//!
//! Both types are explicit, validated, immutable configuration — built once,
//! then shared by every classification. Validation happens at construction
//! time; a malformed configuration can never reach the match path.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors rejected at matcher configuration time.
///
/// These are fatal to building that matcher instance and are never produced
/// by a classification call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The pattern had no line targets.
    #[error("pattern must contain at least one line target")]
    EmptyPattern,

    /// A line target was zero.
    #[error("line target at index {index} must be positive")]
    ZeroLineTarget {
        /// Index of the offending entry.
        index: usize,
    },

    /// The rhyme scheme length differs from the pattern length.
    #[error("rhyme scheme has {scheme_len} entries but the pattern has {pattern_len} lines")]
    SchemeLengthMismatch {
        /// Number of line targets in the pattern.
        pattern_len: usize,
        /// Number of entries in the rhyme scheme.
        scheme_len: usize,
    },

    /// A pattern string could not be parsed.
    #[error("invalid syllable pattern {text:?}")]
    InvalidPattern {
        /// The rejected input.
        text: String,
    },

    /// A rhyme scheme string had no entries.
    #[error("rhyme scheme must contain at least one entry")]
    EmptyScheme,
}

/// Ordered per-line syllable targets, e.g. `5,4,9,4`.
///
/// Each entry is the exact syllable count one line must carry. The total is
/// precomputed once and used as a fast rejection before segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllablePattern {
    targets: Vec<usize>,
    total: usize,
}

impl SyllablePattern {
    /// Build a pattern from line targets.
    ///
    /// # Errors
    ///
    /// Rejects an empty sequence and zero targets.
    pub fn new(targets: impl Into<Vec<usize>>) -> Result<Self, ConfigError> {
        let targets = targets.into();
        if targets.is_empty() {
            return Err(ConfigError::EmptyPattern);
        }
        if let Some(index) = targets.iter().position(|&t| t == 0) {
            return Err(ConfigError::ZeroLineTarget { index });
        }
        let total = targets.iter().sum();
        Ok(Self { targets, total })
    }

    /// The per-line targets in order.
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Always `false`: patterns are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Total syllables a matching phrase must carry.
    pub fn total(&self) -> usize {
        self.total
    }
}

impl FromStr for SyllablePattern {
    type Err = ConfigError;

    /// Parse comma-separated targets, e.g. `"5,4,9,4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidPattern {
            text: s.to_string(),
        };
        let targets = s
            .split(',')
            .map(|entry| entry.trim().parse::<usize>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(targets).map_err(|err| match err {
            // Zero targets in a parsed string read better as a parse error.
            ConfigError::ZeroLineTarget { .. } => invalid(),
            other => other,
        })
    }
}

impl fmt::Display for SyllablePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, target) in self.targets.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{target}")?;
        }
        Ok(())
    }
}

/// Line-group assignments for rhyme validation, e.g. `-`,`-`,`a`,`a`.
///
/// Each entry either opts its line out of rhyming (`None`) or names the
/// group it must rhyme with (`Some(label)`). Group labels are compared by
/// equality only; any character works.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RhymeScheme {
    labels: Vec<Option<char>>,
}

impl RhymeScheme {
    /// Build a scheme from explicit per-line labels.
    ///
    /// Length agreement with the pattern is checked when the matcher is
    /// constructed, not here.
    pub fn new(labels: impl Into<Vec<Option<char>>>) -> Self {
        Self {
            labels: labels.into(),
        }
    }

    /// The per-line labels in order.
    pub fn labels(&self) -> &[Option<char>] {
        &self.labels
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the scheme has no entries.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Group the line indices by label, in order of first appearance.
    ///
    /// Lines with no label are absent; a group may have a single member, in
    /// which case it is vacuously satisfied.
    pub fn groups(&self) -> Vec<(char, Vec<usize>)> {
        let mut groups: Vec<(char, Vec<usize>)> = Vec::new();
        let mut positions: FxHashMap<char, usize> = FxHashMap::default();
        for (line, label) in self.labels.iter().enumerate() {
            let Some(label) = *label else { continue };
            let slot = *positions.entry(label).or_insert_with(|| {
                groups.push((label, Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(line);
        }
        groups
    }
}

impl FromStr for RhymeScheme {
    type Err = ConfigError;

    /// Parse compact notation: one character per line, `-` or `.` for
    /// unrhymed lines, anything else as a group label. Whitespace is
    /// ignored, so `"- - a a"` and `"--aa"` are equivalent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let labels: Vec<Option<char>> = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '-' | '.' => None,
                label => Some(label),
            })
            .collect();
        if labels.is_empty() {
            return Err(ConfigError::EmptyScheme);
        }
        Ok(Self { labels })
    }
}

impl fmt::Display for RhymeScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.labels {
            match label {
                Some(c) => write!(f, "{c}")?,
                None => f.write_str("-")?,
            }
        }
        Ok(())
    }
}
