//! Errors produced by the trade import flow.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImportError>;

/// One attempt, one error: nothing here is retried or escalated beyond the
/// status line shown to the user.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The picked path has no UTF-8 file name to send alongside the bytes.
    #[error("file name is not valid UTF-8: {}", .0.display())]
    InvalidFilename(PathBuf),

    /// The staged file could not be read back from disk.
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The server answered with a non-2xx status; the payload is the response
    /// body text, or the status reason when the body was empty.
    #[error("{0}")]
    Rejected(String),

    /// Connection, request, or response-decode failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
