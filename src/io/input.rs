use std::path::Path;

use crate::error::AuditError;
use crate::parser::{Transcript, parse_transcript};

/// Read and parse a transcript file.
pub fn parse_transcript_file(path: &Path) -> Result<Transcript, AuditError> {
    let text = read_transcript(path)?;
    Ok(parse_transcript(&text))
}

/// Read a transcript file as text.
///
/// Decodes UTF-8 first and falls back to Latin-1, the common encoding for
/// exported Portuguese chat logs.
pub fn read_transcript(path: &Path) -> Result<String, AuditError> {
    if !path.exists() {
        return Err(AuditError::SourceNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|source| AuditError::ReadFailure {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => Ok(latin1_to_string(err.as_bytes())),
    }
}

fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
