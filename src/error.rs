//! Error types for fixture generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for fixture operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The fixture could not be opened, written, flushed or read.
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record could not be written to a caller-supplied writer.
    #[error("write failed: {0}")]
    Write(#[source] io::Error),

    /// The generator path has no final segment to put an extension on.
    #[error("cannot derive a fixture path from {}", .0.display())]
    SourcePath(PathBuf),

    /// A listed value is not a Unicode scalar value, so has no UTF-8 form.
    #[error("U+{0:04X} is not a Unicode scalar value")]
    Encoding(u32),

    /// The log subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),

    /// A fixture line that is not a record.
    #[error("line {line}: malformed record {text:?}")]
    MalformedRecord { line: usize, text: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Error {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
