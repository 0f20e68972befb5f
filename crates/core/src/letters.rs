// crates/core/src/letters.rs
//! 対象文字リストの解析
//!
//! Turns the raw, comma-separated letter list typed by the user into a
//! [`LetterSpec`]. The normalized tokens and their validity verdict are
//! produced by the same pass and live in the same value, so a verdict can
//! never describe a different list than the one it is stored with.

use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use crate::error::Result;
use crate::tally::{TallyMap, count_line_endings};

/// Letter list used when the user has not typed anything else.
pub const DEFAULT_LETTER_SPEC: &str = "e,t,h";

/// Normalized target letters together with their validity verdict.
///
/// The token list always has one entry per comma-separated piece of the
/// raw input, even when the list is invalid. Callers decide whether to
/// trust it through [`LetterSpec::is_valid`], not through its length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterSpec {
    #[serde(rename = "letters")]
    tokens: Vec<String>,
    valid: bool,
}

impl LetterSpec {
    /// Parse a raw comma-separated letter list.
    ///
    /// Every piece is trimmed and lowercased. Empty pieces (for example the
    /// one produced by a trailing comma) are kept and make the list invalid.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut tokens = Vec::new();
        let mut valid = true;

        for piece in raw.split(',') {
            let token = trim_blank(piece).to_lowercase();
            if single_char(&token).is_none() {
                valid = false;
            }
            tokens.push(token);
        }

        Self { tokens, valid }
    }

    /// Normalized tokens in input order, duplicates included.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Target letters as `char`s, or `None` when the list is invalid.
    #[must_use]
    pub fn letters(&self) -> Option<Vec<char>> {
        self.tokens.iter().map(|t| single_char(t)).collect()
    }

    /// Tokens that broke the one-character rule, with their position.
    pub fn invalid_tokens(&self) -> impl Iterator<Item = (usize, &str)> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| single_char(t).is_none())
            .map(|(i, t)| (i, t.as_str()))
    }

    /// Tally `text` against this list.
    ///
    /// # Errors
    /// Returns [`crate::TallyError::InvalidLetterSpec`] when the list is invalid.
    pub fn tally(&self, text: &str) -> Result<TallyMap> {
        count_line_endings(text, &self.tokens, self.valid)
    }
}

impl Default for LetterSpec {
    fn default() -> Self {
        Self::parse(DEFAULT_LETTER_SPEC)
    }
}

impl FromStr for LetterSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for LetterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(","))
    }
}

/// Whitespace as browsers trim it: Unicode `White_Space` without U+0085,
/// plus the byte order mark U+FEFF.
pub(crate) fn is_blank(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

pub(crate) fn trim_blank(s: &str) -> &str {
    s.trim_matches(is_blank)
}

/// The only character of `token`, if it has exactly one.
pub(crate) fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn tokens(spec: &LetterSpec) -> Vec<&str> {
        spec.tokens().iter().map(String::as_str).collect()
    }

    #[test]
    fn parses_default_list() {
        let spec = LetterSpec::parse("e,t,h");
        assert_eq!(tokens(&spec), vec!["e", "t", "h"]);
        assert!(spec.is_valid());
        assert_eq!(spec, LetterSpec::default());
    }

    #[test]
    fn multi_character_token_is_invalid_but_kept() {
        let spec = LetterSpec::parse("a,bc,d");
        assert_eq!(tokens(&spec), vec!["a", "bc", "d"]);
        assert!(!spec.is_valid());
        assert_eq!(spec.invalid_tokens().collect::<Vec<_>>(), vec![(1, "bc")]);
    }

    #[test]
    fn trailing_comma_leaves_empty_token() {
        let spec = LetterSpec::parse("a,b,c,");
        assert_eq!(tokens(&spec), vec!["a", "b", "c", ""]);
        assert!(!spec.is_valid());
        assert_eq!(spec.invalid_tokens().collect::<Vec<_>>(), vec![(3, "")]);
    }

    #[test]
    fn whitespace_and_case_are_normalized() {
        let spec = LetterSpec::parse(" E , t ,H");
        assert_eq!(tokens(&spec), vec!["e", "t", "h"]);
        assert!(spec.is_valid());
    }

    #[test]
    fn empty_input_yields_one_empty_token() {
        let spec = LetterSpec::parse("");
        assert_eq!(tokens(&spec), vec![""]);
        assert_eq!(spec.len(), 1);
        assert!(!spec.is_valid());
    }

    #[test]
    fn duplicates_are_kept() {
        let spec = LetterSpec::parse("t,h,h");
        assert_eq!(tokens(&spec), vec!["t", "h", "h"]);
        assert!(spec.is_valid());
    }

    #[test]
    fn letters_only_for_valid_lists() {
        assert_eq!(LetterSpec::parse("x, Y").letters(), Some(vec!['x', 'y']));
        assert_eq!(LetterSpec::parse("x,yz").letters(), None);
    }

    #[test]
    fn non_ascii_single_char_is_valid() {
        let spec = LetterSpec::parse("é,Ä");
        assert!(spec.is_valid());
        assert_eq!(spec.letters(), Some(vec!['é', 'ä']));
    }

    #[test]
    fn byte_order_mark_is_trimmed_but_next_line_is_not() {
        assert!(LetterSpec::parse("\u{FEFF}t").is_valid());
        assert_eq!(LetterSpec::parse("\u{FEFF}t").letters(), Some(vec!['t']));
        assert!(LetterSpec::parse("\u{00A0}t\u{3000}").is_valid());
        assert!(!LetterSpec::parse("t\u{85}").is_valid());
    }

    #[test]
    fn display_joins_normalized_tokens() {
        let spec: LetterSpec = " A ,b".parse().unwrap();
        assert_eq!(alloc::format!("{spec}"), "a,b");
    }
}
