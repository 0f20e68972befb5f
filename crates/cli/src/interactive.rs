// crates/cli/src/interactive.rs
//! 対話モード
//!
//! A small line-oriented shell over one [`Session`]: the letter list can be
//! edited and re-validated at any time, and every submission replaces the
//! displayed results as a whole. Errors are reported and the shell keeps
//! accepting commands.

use crate::error::Result;
use crate::presentation::{render_outcome, render_preview, render_table, validity_label};
use letter_counter_engine::config::Config;
use letter_counter_engine::error::EngineError;
use letter_counter_engine::session::Session;
use letter_counter_engine::validate_letters;
use std::io::{BufRead, Write};
use std::path::Path;

const HELP: &str = "\
commands:
  letters <list>   set the target letters (e.g. letters e,t,h)
  file <path>      select the text file to submit
  submit           read the selected file and count line endings
  show             print the current letters, result and file data
  help             show this help
  quit             leave
";

/// Run the shell until `quit` or end of input.
///
/// # Errors
/// Returns an error only if reading input or writing output fails.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, mut out: W) -> Result<()> {
    let mut session = Session::new(config);
    let show_preview = config.show_preview;

    writeln!(out, "letter_counter v{} interactive mode (type 'help')", crate::VERSION)?;
    write_validity(&mut out, &session)?;
    if let Some(path) = config.file.as_deref() {
        select(&mut out, &mut session, path)?;
    }

    for line in input.lines() {
        let line = line?;
        let (command, rest) = line
            .trim_start()
            .split_once(char::is_whitespace)
            .unwrap_or((line.trim(), ""));
        tracing::debug!(command, "interactive command");

        match command {
            "" => {}
            "letters" | "l" => {
                session.set_letters(rest.trim());
                write_validity(&mut out, &session)?;
            }
            "file" | "f" => {
                let path = rest.trim();
                if path.is_empty() {
                    writeln!(out, "Error: {}", EngineError::NoFileSelected)?;
                } else {
                    select(&mut out, &mut session, Path::new(path))?;
                }
            }
            "submit" | "s" => match session.submit() {
                Ok(outcome) => {
                    let rendered = render_outcome(outcome);
                    out.write_all(rendered.as_bytes())?;
                    if show_preview {
                        out.write_all(render_preview(session.preview()).as_bytes())?;
                    }
                }
                Err(e) => writeln!(out, "Error: {e}")?,
            },
            "show" => out.write_all(render_table(&session, show_preview).as_bytes())?,
            "help" | "?" => out.write_all(HELP.as_bytes())?,
            "quit" | "exit" | "q" => break,
            other => writeln!(out, "Unknown command '{other}' (type 'help')")?,
        }
        out.flush()?;
    }
    Ok(())
}

fn write_validity<W: Write>(out: &mut W, session: &Session) -> Result<()> {
    writeln!(out, "{}", validity_label(session.letters()))?;
    if let Err(e) = validate_letters(session.raw_letters()) {
        writeln!(out, "  {e}")?;
    }
    Ok(())
}

fn select<W: Write>(out: &mut W, session: &mut Session, path: &Path) -> Result<()> {
    match session.select(Some(path)) {
        Ok(file) => writeln!(
            out,
            "Selected {} ({}, {} bytes)",
            file.path.display(),
            file.media_type,
            file.size
        )?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    Ok(())
}
