use std::io;

use thiserror::Error;

/// Failures that stop a run.
#[derive(Debug, Error)]
pub enum GrabError {
    /// Writing or flushing the output stream failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Why a matched entry produced no record.
#[derive(Debug, Error)]
pub enum SkipReason {
    /// The walker could not produce the entry (unreadable directory, missing root).
    #[error("walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// The entry could not be opened or read.
    #[error("read failed: {0}")]
    Read(#[source] io::Error),
}
