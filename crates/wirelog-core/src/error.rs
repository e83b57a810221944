//! Error type for wirelog-core.
//!
//! The three parse-failure kinds are fatal to the current file's parse; no
//! partial [`RecordSet`](crate::RecordSet) is returned for a failed file.
//! Field coercion failures are *not* errors — the parser keeps the raw
//! trimmed string and moves on.

use thiserror::Error;

/// Everything that can abort parsing or serialization.
#[derive(Debug, Error)]
pub enum Error {
    /// A header row matched neither known record-kind signature.
    #[error("can't determine record kind: {0}")]
    Parse(String),

    /// A data row has more cells than the active header can index.
    #[error("row doesn't match header: {0}")]
    BadHeader(String),

    /// The state machine reached a state its transitions should make
    /// unreachable. Seeing this in a test means a transition gap, not a
    /// malformed input.
    #[error("illegal parser state: {0}")]
    IllegalState(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
