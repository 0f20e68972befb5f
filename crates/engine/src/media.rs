// crates/engine/src/media.rs
//! Media type detection for selected files.
//!
//! The type is derived from the file extension, the same way a browser
//! file picker reports it, and checked against an allow-list before any
//! byte of the file is read.

use std::path::Path;

pub const TEXT_PLAIN: &str = "text/plain";
pub const OCTET_STREAM: &str = "application/octet-stream";

const KNOWN_TYPES: &[(&[&str], &str)] = &[
    (&["txt", "text"], TEXT_PLAIN),
    (&["md", "markdown"], "text/markdown"),
    (&["csv"], "text/csv"),
    (&["tsv"], "text/tab-separated-values"),
    (&["htm", "html"], "text/html"),
    (&["css"], "text/css"),
    (&["js", "mjs"], "text/javascript"),
    (&["json"], "application/json"),
    (&["xml"], "application/xml"),
    (&["pdf"], "application/pdf"),
    (&["zip"], "application/zip"),
    (&["png"], "image/png"),
    (&["jpg", "jpeg"], "image/jpeg"),
    (&["gif"], "image/gif"),
];

/// Media type reported for `path`.
///
/// Files without an extension have no type (empty string); unknown
/// extensions are reported as `application/octet-stream`.
#[must_use]
pub fn media_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return "";
    };
    KNOWN_TYPES
        .iter()
        .find(|(exts, _)| exts.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .map_or(OCTET_STREAM, |&(_, media_type)| media_type)
}

/// Whether `media_type` is one of `allowed` (case-insensitive).
#[must_use]
pub fn is_allowed(media_type: &str, allowed: &[String]) -> bool {
    !media_type.is_empty()
        && allowed
            .iter()
            .any(|a| a.trim().eq_ignore_ascii_case(media_type))
}

/// NUL bytes near the start mean the content is not text, whatever the extension says.
#[must_use]
pub fn looks_binary(content: &[u8]) -> bool {
    let len = content.len().min(8 * 1024);
    content[..len].contains(&0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn txt_is_plain_text() {
        assert_eq!(media_type_for(Path::new("notes.txt")), TEXT_PLAIN);
        assert_eq!(media_type_for(Path::new("NOTES.TXT")), TEXT_PLAIN);
    }

    #[test]
    fn other_extensions() {
        assert_eq!(media_type_for(Path::new("a.md")), "text/markdown");
        assert_eq!(media_type_for(Path::new("a.rs")), OCTET_STREAM);
        assert_eq!(media_type_for(Path::new("Makefile")), "");
    }

    #[test]
    fn allow_list_matching() {
        let allowed = vec!["text/plain".to_string()];
        assert!(is_allowed(TEXT_PLAIN, &allowed));
        assert!(is_allowed("Text/Plain", &allowed));
        assert!(!is_allowed("text/markdown", &allowed));
        assert!(!is_allowed("", &allowed));
    }

    #[test]
    fn binary_detection() {
        assert!(looks_binary(b"abc\0def"));
        assert!(!looks_binary(b"abc\ndef"));
        assert!(!looks_binary(b""));
    }
}
