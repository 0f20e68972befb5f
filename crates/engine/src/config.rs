use crate::error::{EngineError, Result};
use crate::media::TEXT_PLAIN;
use crate::options::OutputFormat;
use derive_builder::Builder;
use letter_counter_core::DEFAULT_LETTER_SPEC;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// File to submit; `None` means nothing was selected.
    #[builder(default)]
    pub file: Option<PathBuf>,
    /// Raw comma-separated letter list, exactly as typed.
    #[builder(default = "DEFAULT_LETTER_SPEC.to_string()")]
    pub letters: String,
    /// Media types a selected file may have.
    #[builder(default = "vec![TEXT_PLAIN.to_string()]")]
    pub allowed_types: Vec<String>,

    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
    #[builder(default = "true")]
    pub show_preview: bool,

    #[builder(default)]
    pub watch: bool,
    #[builder(default = "Duration::from_secs(1)")]
    pub watch_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: None,
            letters: DEFAULT_LETTER_SPEC.to_string(),
            allowed_types: vec![TEXT_PLAIN.to_string()],
            format: OutputFormat::Table,
            show_preview: true,
            watch: false,
            watch_interval: Duration::from_secs(1),
        }
    }
}

impl Config {
    /// Reject combinations that can never produce a result.
    ///
    /// # Errors
    /// Returns [`EngineError::Config`] when no media type is accepted, or
    /// when watch mode is requested without a file.
    pub fn validate(&self) -> Result<()> {
        if self.allowed_types.iter().all(|t| t.trim().is_empty()) {
            return Err(EngineError::Config(
                "at least one accepted media type is required".to_string(),
            ));
        }
        if self.watch && self.file.is_none() {
            return Err(EngineError::Config("watch mode needs a file".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = ConfigBuilder::default().build().unwrap();
        let default = Config::default();
        assert_eq!(built.letters, default.letters);
        assert_eq!(built.allowed_types, vec!["text/plain".to_string()]);
        assert_eq!(built.format, OutputFormat::Table);
        assert!(built.show_preview);
        assert!(!built.watch);
        assert_eq!(built.watch_interval, Duration::from_secs(1));
        assert!(built.file.is_none());
    }

    #[test]
    fn watch_without_file_is_rejected() {
        let config = Config {
            watch: true,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));
    }

    #[test]
    fn empty_allow_list_is_rejected() {
        let config = Config {
            allowed_types: vec![" ".to_string()],
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));
    }

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }
}
