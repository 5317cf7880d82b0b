//! Errors that can occur while parsing and reporting on flagstat output.

use std::io;

use thiserror::Error;

/// Fatal errors raised while turning flagstat text into a report. An
/// unrecognized line is _not_ an error: it is collected as a warning by the
/// scanner (see [`crate::flagstat::classify::UnrecognizedLine`]).
#[derive(Debug, Error)]
pub enum FlagstatError {
    /// Reading from the input stream failed.
    #[error("failed to read flagstat input: {0}")]
    Io(#[from] io::Error),

    /// A line matched a category, but one of its numeric captures could not
    /// be converted into a number.
    #[error("failed to parse flagstat line {line:?}: {cause}")]
    Parse {
        /// The offending (trimmed) line.
        line: String,

        /// What went wrong with the capture.
        cause: String,
    },

    /// The finalized record could not be encoded as JSON.
    #[error("failed to serialize flagstat record to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
