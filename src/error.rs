// Copyright (c) 2026 zipline64 developers
// MIT License

//! A module which holds relevant error reporting structures/types.

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
///
/// None of these are retried internally; every failure is surfaced to the
/// caller, and an archive that could not be fully formed should be discarded
/// rather than served as a truncated ZIP.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("duplicate entry name: '{0}'")]
    DuplicateEntry(String),
    #[error("entry name is empty after trimming whitespace")]
    EmptyEntryName,

    #[error("an entry's content source returned an error: {0}")]
    SourceStream(#[source] std::io::Error),
    #[error("the output sink rejected further writes: {0}")]
    SinkAbort(#[from] std::io::Error),

    #[error("entry file name does not fit the 16-bit length field")]
    FileNameTooLarge,
    #[error("entry comment does not fit the 16-bit length field")]
    CommentTooLarge,
}
