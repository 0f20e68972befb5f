// crates/core/src/tally.rs
//! 行末文字の集計
//!
//! Counts, for every target letter, the lines whose trimmed content ends
//! with that letter (case-insensitive).

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{Result, TallyError};
use crate::letters::{single_char, trim_blank};

/// Per-letter line counts of one tally run.
///
/// Holds one entry per distinct target letter, in the order each letter
/// first appeared in the letter list. Letters that never matched stay at 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TallyMap {
    entries: Vec<(char, usize)>,
    index: HashMap<char, usize>,
}

impl TallyMap {
    /// Zero-initialized map; repeated letters collapse onto one entry.
    fn with_letters<I>(letters: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut map = Self::default();
        for letter in letters {
            if !map.index.contains_key(&letter) {
                map.index.insert(letter, map.entries.len());
                map.entries.push((letter, 0));
            }
        }
        map
    }

    fn record(&mut self, letter: char) {
        if let Some(&slot) = self.index.get(&letter) {
            self.entries[slot].1 += 1;
        }
    }

    /// Count for `letter`, or `None` if it is not a target.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<usize> {
        self.index.get(&letter).map(|&slot| self.entries[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of distinct target letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lines that matched any target letter.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }
}

impl Serialize for TallyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (letter, count) in &self.entries {
            map.serialize_entry(letter, count)?;
        }
        map.end()
    }
}

/// Split file text into the line sequence shown to the user as-is.
pub fn preview_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// Tally line endings of `text` against `letters`.
///
/// `is_valid` must be the verdict produced together with `letters`. A
/// tally is only produced when the verdict is true and every token really
/// is a single character.
///
/// # Errors
/// Returns [`TallyError::InvalidLetterSpec`] otherwise; no partial counts
/// are returned.
pub fn count_line_endings(text: &str, letters: &[String], is_valid: bool) -> Result<TallyMap> {
    if !is_valid {
        return Err(TallyError::InvalidLetterSpec);
    }
    let targets = letters
        .iter()
        .map(|t| single_char(t))
        .collect::<Option<Vec<_>>>()
        .ok_or(TallyError::InvalidLetterSpec)?;

    let mut tally = TallyMap::with_letters(targets);
    for line in preview_lines(text) {
        if let Some(letter) = last_letter(line) {
            tally.record(letter);
        }
    }
    Ok(tally)
}

/// Lowercased last character of the trimmed line.
///
/// Blank lines have none. A character whose lowercase form spans several
/// characters can never equal a single target letter, so it is skipped too.
fn last_letter(line: &str) -> Option<char> {
    let last = trim_blank(line).chars().next_back()?;
    let mut lower = last.to_lowercase();
    let first = lower.next()?;
    lower.next().is_none().then_some(first)
}
