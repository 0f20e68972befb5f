// crates/core/src/error.rs
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TallyError {
    /// At least one comma-separated entry is not exactly one character.
    #[error("Invalid letter list: every comma-separated entry must be a single character")]
    InvalidLetterSpec,
}

pub type Result<T> = core::result::Result<T, TallyError>;
