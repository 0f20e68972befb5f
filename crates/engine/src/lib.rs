// crates/engine/src/lib.rs
//! # Letter Counter Engine
//!
//! Drives the pure core from the outside world: picks and checks the
//! file, decodes it, and keeps the state a front end displays.

pub mod config;
pub mod error;
pub mod filesystem;
pub mod media;
pub mod options;
pub mod session;
pub mod watch;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::session::Session;
use letter_counter_core::LetterSpec;

/// Run one submission as described by `config`.
///
/// An invalid letter list is not an error here: the returned session
/// carries [`session::Outcome::Invalid`] so the caller can display it.
///
/// # Errors
/// Returns an error if the configuration is unusable, no file was given,
/// the file type is not accepted, or the file cannot be read.
pub fn run(config: &Config) -> Result<Session> {
    config.validate()?;
    let mut session = Session::new(config);
    session.submit_path(config.file.as_deref())?;
    Ok(session)
}

/// Parse `raw` and turn an invalid list into an error naming the bad entries.
///
/// # Errors
/// Returns [`EngineError::InvalidLetterSpec`] if any entry is not exactly one character.
pub fn validate_letters(raw: &str) -> Result<LetterSpec> {
    let spec = LetterSpec::parse(raw);
    if spec.is_valid() {
        return Ok(spec);
    }
    let reason = spec
        .invalid_tokens()
        .map(|(i, token)| {
            if token.is_empty() {
                format!("entry {} is empty", i + 1)
            } else {
                format!("entry {} '{token}' is not a single character", i + 1)
            }
        })
        .collect::<Vec<_>>()
        .join("; ");
    Err(EngineError::InvalidLetterSpec {
        raw: raw.to_string(),
        reason,
    })
}
