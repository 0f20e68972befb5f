// crates/engine/src/error.rs
use letter_counter_core::TallyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Unsupported file type '{media_type}' for '{path}' (accepted: {accepted})")]
    UnsupportedFileType {
        path: std::path::PathBuf,
        media_type: String,
        accepted: String,
    },

    #[error("Invalid letter list '{raw}': {reason}")]
    InvalidLetterSpec { raw: String, reason: String },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Tally(#[from] TallyError),

    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
