use crate::error::{EngineError, Result};
use crate::media::{OCTET_STREAM, is_allowed, looks_binary, media_type_for};
use log::{debug, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A file that passed the presence and media type checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub media_type: String,
    pub size: u64,
}

/// Validate `path` as the file to submit.
///
/// Only metadata is inspected here; content is not read until
/// [`read_text`] is called.
///
/// # Errors
/// - [`EngineError::FileRead`] if the path is missing or is a directory.
/// - [`EngineError::UnsupportedFileType`] if its media type is not in `allowed`.
pub fn select_file(path: &Path, allowed: &[String]) -> Result<SelectedFile> {
    let meta = std::fs::metadata(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    if meta.is_dir() {
        return Err(EngineError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::other("is a directory"),
        });
    }

    let media_type = media_type_for(path);
    if !is_allowed(media_type, allowed) {
        warn!("rejected {} ({media_type:?})", path.display());
        return Err(EngineError::UnsupportedFileType {
            path: path.to_path_buf(),
            media_type: media_type.to_string(),
            accepted: allowed.join(", "),
        });
    }

    Ok(SelectedFile {
        path: path.to_path_buf(),
        media_type: media_type.to_string(),
        size: meta.len(),
    })
}

/// Read and decode a selected file.
///
/// Invalid UTF-8 is replaced rather than rejected; content with NUL bytes
/// is refused as binary.
///
/// # Errors
/// Returns [`EngineError::FileRead`] on I/O failure, or
/// [`EngineError::UnsupportedFileType`] for binary content.
pub fn read_text(file: &SelectedFile) -> Result<String> {
    let bytes = std::fs::read(&file.path).map_err(|e| EngineError::FileRead {
        path: file.path.clone(),
        source: e,
    })?;

    if looks_binary(&bytes) {
        warn!("{} has binary content", file.path.display());
        return Err(EngineError::UnsupportedFileType {
            path: file.path.clone(),
            media_type: OCTET_STREAM.to_string(),
            accepted: file.media_type.clone(),
        });
    }

    debug!(
        "read {} ({} bytes, {} line feeds)",
        file.path.display(),
        bytes.len(),
        bytecount::count(&bytes, b'\n')
    );

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
