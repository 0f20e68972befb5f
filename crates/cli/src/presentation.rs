// crates/cli/src/presentation.rs
use crate::error::Result;
use letter_counter_core::{LetterSpec, TallyMap};
use letter_counter_engine::config::Config;
use letter_counter_engine::options::OutputFormat;
use letter_counter_engine::session::{Outcome, Preview, Session};
use std::fmt::Write;

const RULE: &str = "----------------------";

pub fn print_clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

/// Live feedback label for the current letter list.
#[must_use]
pub const fn validity_label(letters: &LetterSpec) -> &'static str {
    if letters.is_valid() {
        "Valid input"
    } else {
        "Invalid input"
    }
}

/// Render the whole session in the configured format.
///
/// # Errors
/// Returns an error only if JSON/YAML serialization fails.
pub fn render(session: &Session, config: &Config) -> Result<String> {
    let show_preview = config.show_preview;
    Ok(match config.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&session.report(show_preview))?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yaml::to_string(&session.report(show_preview))?,
        OutputFormat::Md => render_markdown(session, show_preview),
        OutputFormat::Csv => render_sv(session.outcome(), ","),
        OutputFormat::Tsv => render_sv(session.outcome(), "\t"),
        OutputFormat::Table => render_table(session, show_preview),
    })
}

/// # Errors
/// See [`render`].
pub fn print_results(session: &Session, config: &Config) -> Result<()> {
    print!("{}", render(session, config)?);
    Ok(())
}

pub fn render_table(session: &Session, show_preview: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "letter_counter v{} · letters={} ({})",
        crate::VERSION,
        session.raw_letters(),
        validity_label(session.letters())
    );
    out.push('\n');
    out.push_str(&render_outcome(session.outcome()));

    if show_preview {
        out.push('\n');
        out.push_str(&render_preview(session.preview()));
    }
    out
}

/// "Processing Result" section.
#[must_use]
pub fn render_outcome(outcome: &Outcome) -> String {
    let mut out = String::from("Processing Result\n");
    out.push_str(RULE);
    out.push('\n');

    match outcome {
        Outcome::NoResult => out.push_str("No result to show.\n"),
        Outcome::Invalid => out.push_str("Invalid Input\n"),
        Outcome::Tally(tally) => render_tally_rows(&mut out, tally),
    }
    out
}

fn render_tally_rows(out: &mut String, tally: &TallyMap) {
    let _ = writeln!(out, "{:>10}{:>12}", "LETTER", "COUNT");
    for (letter, count) in tally.iter() {
        let _ = writeln!(out, "{:>10}{count:>12}", upper(letter));
    }
    out.push_str("---\n");
    let _ = writeln!(out, "{:>10}{:>12}", "TOTAL", tally.total());
}

/// "File Data" section.
#[must_use]
pub fn render_preview(preview: &Preview) -> String {
    let mut out = String::from("File Data\n");
    out.push_str(RULE);
    out.push('\n');

    match preview {
        Preview::NoData => out.push_str("No data\n"),
        Preview::Invalid => out.push_str("Invalid Input\n"),
        Preview::Lines(lines) => {
            for line in lines {
                out.push_str(line);
                out.push('\n');
            }
        }
    }
    out
}

fn render_sv(outcome: &Outcome, delimiter: &str) -> String {
    let mut out = format!("letter{delimiter}count\n");
    if let Some(tally) = outcome.tally() {
        for (letter, count) in tally.iter() {
            let field = letter.to_string();
            if delimiter == "," && field.contains(['"', '\n', '\r']) {
                let escaped = field.replace('"', "\"\"");
                let _ = writeln!(out, "\"{escaped}\"{delimiter}{count}");
            } else {
                let _ = writeln!(out, "{field}{delimiter}{count}");
            }
        }
    }
    out
}

fn render_markdown(session: &Session, show_preview: bool) -> String {
    let mut out = String::from("### Processing Result\n\n");
    match session.outcome() {
        Outcome::NoResult => out.push_str("No result to show.\n"),
        Outcome::Invalid => out.push_str("**Invalid Input**\n"),
        Outcome::Tally(tally) => {
            out.push_str("| Letter | Count |\n");
            out.push_str("|:---:|---:|\n");
            for (letter, count) in tally.iter() {
                let cell = upper(letter).replace('|', "\\|");
                let _ = writeln!(out, "| {cell} | {count} |");
            }
            let _ = writeln!(out, "| **Total** | {} |", tally.total());
        }
    }

    if show_preview {
        out.push_str("\n### File Data\n\n");
        match session.preview() {
            Preview::NoData => out.push_str("No data\n"),
            Preview::Invalid => out.push_str("**Invalid Input**\n"),
            Preview::Lines(lines) => {
                let fence = code_fence(lines);
                let _ = writeln!(out, "{fence}text");
                for line in lines {
                    out.push_str(line);
                    out.push('\n');
                }
                let _ = writeln!(out, "{fence}");
            }
        }
    }
    out
}

/// Backtick fence one longer than the longest backtick run in `lines`.
fn code_fence(lines: &[String]) -> String {
    let longest = lines
        .iter()
        .flat_map(|line| line.split(|c| c != '`'))
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}

fn upper(letter: char) -> String {
    letter.to_uppercase().collect()
}
