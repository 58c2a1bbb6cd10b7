use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading a transcript source.
///
/// Malformed transcript lines are never errors; the parser records them as
/// skipped outcomes and carries on.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Input path does not exist.
    #[error("Transcript not found: {0:?}")]
    SourceNotFound(PathBuf),

    /// Input path exists but could not be read.
    #[error("Failed to read transcript {path:?}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No attempted encoding produced text. The UTF-8 reader falls back to
    /// Latin-1, which accepts any byte sequence, so this is reserved for
    /// stricter future decoders.
    #[error("Transcript {0:?} could not be decoded as text")]
    DecodeFailure(PathBuf),
}
