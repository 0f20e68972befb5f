// crates/engine/src/session.rs
//! Submission state shown to the user.
//!
//! A [`Session`] holds the current letter list (re-parsed on every edit),
//! the selected file, and the two independent outputs of the last
//! submission: the file preview and the tally outcome.

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::filesystem::{SelectedFile, read_text, select_file};
use letter_counter_core::{LetterSpec, TallyMap, preview_lines};
use log::{debug, info};
use serde::Serialize;
use std::path::Path;

/// Result area of the last submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "counts", rename_all = "snake_case")]
pub enum Outcome {
    /// Nothing submitted yet.
    #[default]
    NoResult,
    /// The letter list was invalid at submit time.
    Invalid,
    Tally(TallyMap),
}

impl Outcome {
    #[must_use]
    pub const fn tally(&self) -> Option<&TallyMap> {
        match self {
            Self::Tally(tally) => Some(tally),
            Self::NoResult | Self::Invalid => None,
        }
    }
}

/// File data area of the last submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "lines", rename_all = "snake_case")]
pub enum Preview {
    #[default]
    NoData,
    Invalid,
    Lines(Vec<String>),
}

impl Preview {
    fn from_text(text: &str) -> Self {
        Self::Lines(preview_lines(text).map(str::to_string).collect())
    }
}

/// Serializable snapshot of everything a session displays.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub file: Option<&'a SelectedFile>,
    pub letters: &'a LetterSpec,
    pub result: &'a Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<&'a Preview>,
}

#[derive(Debug, Clone)]
pub struct Session {
    allowed_types: Vec<String>,
    raw_letters: String,
    letters: LetterSpec,
    file: Option<SelectedFile>,
    preview: Preview,
    outcome: Outcome,
}

impl Session {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            allowed_types: config.allowed_types.clone(),
            raw_letters: config.letters.clone(),
            letters: LetterSpec::parse(&config.letters),
            file: None,
            preview: Preview::default(),
            outcome: Outcome::default(),
        }
    }

    /// Replace the raw letter list and re-parse it.
    ///
    /// Earlier results stay on display until the next submission.
    pub fn set_letters(&mut self, raw: &str) -> &LetterSpec {
        raw.clone_into(&mut self.raw_letters);
        self.letters = LetterSpec::parse(raw);
        debug!("letters {raw:?} valid={}", self.letters.is_valid());
        &self.letters
    }

    #[must_use]
    pub fn raw_letters(&self) -> &str {
        &self.raw_letters
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterSpec {
        &self.letters
    }

    /// Choose the file for the next submission.
    ///
    /// A rejected path also drops the previous selection, so a later
    /// [`Session::submit`] never reads a file the user has moved away from.
    /// Passing `None` changes nothing.
    ///
    /// # Errors
    /// [`EngineError::NoFileSelected`] for `None`, otherwise whatever
    /// [`select_file`] reports.
    pub fn select(&mut self, path: Option<&Path>) -> Result<&SelectedFile> {
        let path = path.ok_or(EngineError::NoFileSelected)?;
        self.file = None;
        let selected = select_file(path, &self.allowed_types)?;
        Ok(self.file.insert(selected))
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// Read the selected file and tally it against the current letters.
    ///
    /// With an invalid letter list the file is not read; both output areas
    /// switch to their invalid state. A failed read leaves both untouched.
    ///
    /// # Errors
    /// [`EngineError::NoFileSelected`] or a read error from [`read_text`].
    pub fn submit(&mut self) -> Result<&Outcome> {
        let file = self.file.as_ref().ok_or(EngineError::NoFileSelected)?;

        if !self.letters.is_valid() {
            info!("submission of {} skipped: invalid letters", file.path.display());
            self.preview = Preview::Invalid;
            self.outcome = Outcome::Invalid;
            return Ok(&self.outcome);
        }

        let text = read_text(file)?;
        let tally = self.letters.tally(&text)?;
        info!(
            "submitted {}: {} of {} lines matched",
            file.path.display(),
            tally.total(),
            preview_lines(&text).count()
        );

        self.preview = Preview::from_text(&text);
        self.outcome = Outcome::Tally(tally);
        Ok(&self.outcome)
    }

    /// [`Session::select`] followed by [`Session::submit`].
    ///
    /// # Errors
    /// See both.
    pub fn submit_path(&mut self, path: Option<&Path>) -> Result<&Outcome> {
        self.select(path)?;
        self.submit()
    }

    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    #[must_use]
    pub const fn preview(&self) -> &Preview {
        &self.preview
    }

    #[must_use]
    pub fn report(&self, with_preview: bool) -> Report<'_> {
        Report {
            file: self.file.as_ref(),
            letters: &self.letters,
            result: &self.outcome,
            preview: with_preview.then_some(&self.preview),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn text_file(content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn session(letters: &str) -> Session {
        Session::new(&Config {
            letters: letters.to_string(),
            ..Config::default()
        })
    }

    #[test]
    fn starts_with_no_result() {
        let s = Session::new(&Config::default());
        assert_eq!(s.outcome(), &Outcome::NoResult);
        assert_eq!(s.preview(), &Preview::NoData);
        assert!(s.letters().is_valid());
        assert_eq!(s.raw_letters(), "e,t,h");
    }

    #[test]
    fn submit_tallies_and_previews() {
        let file = text_file("cat\nDOG\nmoth\n");
        let mut s = session("t,h");
        let outcome = s.submit_path(Some(file.path())).unwrap();
        let tally = outcome.tally().unwrap();
        assert_eq!(tally.get('t'), Some(1));
        assert_eq!(tally.get('h'), Some(1));
        assert_eq!(
            s.preview(),
            &Preview::Lines(vec![
                "cat".to_string(),
                "DOG".to_string(),
                "moth".to_string(),
                String::new()
            ])
        );
    }

    #[test]
    fn no_file_leaves_state_alone() {
        let file = text_file("cat\n");
        let mut s = session("t");
        s.submit_path(Some(file.path())).unwrap();
        let before = s.outcome().clone();

        let err = s.submit_path(None).unwrap_err();
        assert!(matches!(err, EngineError::NoFileSelected));
        assert_eq!(s.outcome(), &before);
    }

    #[test]
    fn submit_without_selection_fails() {
        let mut s = session("t");
        assert!(matches!(s.submit(), Err(EngineError::NoFileSelected)));
        assert_eq!(s.outcome(), &Outcome::NoResult);
    }

    #[test]
    fn unsupported_type_drops_previous_selection() {
        let good = text_file("cat\n");
        let bad = Builder::new().suffix(".md").tempfile().unwrap();
        let mut s = session("t");
        s.select(Some(good.path())).unwrap();

        let err = s.select(Some(bad.path())).unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedFileType { .. }));
        assert!(s.selected().is_none());

        assert!(matches!(s.submit(), Err(EngineError::NoFileSelected)));
        assert_eq!(s.outcome(), &Outcome::NoResult);
        assert_eq!(s.preview(), &Preview::NoData);
    }

    #[test]
    fn missing_path_drops_previous_selection() {
        let good = text_file("cat\n");
        let gone = good.path().with_file_name("no-such-file.txt");
        let mut s = session("t");
        s.select(Some(good.path())).unwrap();

        assert!(matches!(s.select(Some(&gone)), Err(EngineError::FileRead { .. })));
        assert!(s.selected().is_none());
    }

    #[test]
    fn none_keeps_current_selection() {
        let good = text_file("cat\n");
        let mut s = session("t");
        s.select(Some(good.path())).unwrap();

        assert!(matches!(s.select(None), Err(EngineError::NoFileSelected)));
        assert_eq!(s.selected().unwrap().path, good.path());
    }

    #[test]
    fn invalid_letters_skip_the_read() {
        let file = text_file("cat\n");
        let path = file.path().to_path_buf();
        let mut s = session("t");
        s.select(Some(&path)).unwrap();
        drop(file);

        s.set_letters("t,");
        assert_eq!(s.submit().unwrap(), &Outcome::Invalid);
        assert_eq!(s.preview(), &Preview::Invalid);
    }

    #[test]
    fn invalid_letters_replace_previous_tally() {
        let file = text_file("cat\n");
        let mut s = session("t");
        s.submit_path(Some(file.path())).unwrap();
        assert!(s.outcome().tally().is_some());

        s.set_letters("a,bc");
        assert_eq!(s.submit().unwrap(), &Outcome::Invalid);
        assert!(s.outcome().tally().is_none());
    }

    #[test]
    fn editing_letters_does_not_touch_results() {
        let file = text_file("cat\n");
        let mut s = session("t");
        s.submit_path(Some(file.path())).unwrap();
        let before = s.outcome().clone();

        assert!(!s.set_letters("tt").is_valid());
        assert_eq!(s.outcome(), &before);
        assert_eq!(s.raw_letters(), "tt");
    }

    #[test]
    fn failed_read_keeps_previous_results() {
        let file = text_file("cat\n");
        let path = file.path().to_path_buf();
        let mut s = session("t");
        s.submit_path(Some(&path)).unwrap();
        let before = (s.outcome().clone(), s.preview().clone());

        drop(file);
        assert!(matches!(s.submit(), Err(EngineError::FileRead { .. })));
        assert_eq!((s.outcome().clone(), s.preview().clone()), before);
    }

    #[test]
    fn resubmission_replaces_tally() {
        let file = text_file("cat\n");
        let mut s = session("t");
        s.submit_path(Some(file.path())).unwrap();
        s.set_letters("c,a,t");
        let tally = s.submit().unwrap().tally().unwrap().clone();
        assert_eq!(tally.iter().collect::<Vec<_>>(), vec![('c', 0), ('a', 0), ('t', 1)]);
    }

    #[test]
    fn report_serializes_outcome_and_optional_preview() {
        let file = text_file("bath\n");
        let mut s = session("h");
        s.submit_path(Some(file.path())).unwrap();

        let json = serde_json::to_value(s.report(false)).unwrap();
        assert_eq!(json["letters"]["letters"], serde_json::json!(["h"]));
        assert_eq!(json["letters"]["valid"], true);
        assert_eq!(json["result"]["status"], "tally");
        assert_eq!(json["result"]["counts"]["h"], 1);
        assert!(json.get("preview").is_none());

        let json = serde_json::to_value(s.report(true)).unwrap();
        assert_eq!(json["preview"]["lines"], serde_json::json!(["bath", ""]));
    }
}
