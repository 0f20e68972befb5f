//! # Letter Counter Core
//!
//! Pure, allocation-only logic behind `letter_counter`:
//!
//! - [`letters`]: parsing and validating the comma-separated target letter list
//! - [`tally`]: counting lines whose last non-whitespace character is a target letter
//! - [`error`]: the signal returned when a tally is requested for an invalid list
//!
//! Nothing here touches the file system; callers hand in decoded text.

#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod error;
pub mod letters;
pub mod tally;

pub use error::{Result, TallyError};
pub use letters::{DEFAULT_LETTER_SPEC, LetterSpec};
pub use tally::{TallyMap, count_line_endings, preview_lines};
