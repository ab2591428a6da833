//! Error types for the transfer layer.
//!
//! The line, buffer and block helpers return `std::io::Result` and hand back
//! the underlying `io::Error` untouched. Only [`Transfer`](crate::Transfer)
//! adds context:
//! - `Stage`: where in a transfer the error occurred
//! - `TransferError`: the stage, the source or sink id, and the `io::Error`

use std::fmt;
use std::io;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// A transfer setting, such as the block size, is invalid
    Configure,
    ResolveInput,
    ResolveOutput,
    /// Error while opening a source or sink
    Open,
    /// Error while moving data from source to sink
    Transfer,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Configure => write!(f, "Configure"),
            Stage::ResolveInput => write!(f, "ResolveInput"),
            Stage::ResolveOutput => write!(f, "ResolveOutput"),
            Stage::Open => write!(f, "Open"),
            Stage::Transfer => write!(f, "Transfer"),
        }
    }
}

#[derive(Debug, Error)]
#[error("[{stage}] {target}: {source}")]
pub struct TransferError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the source or sink ("-" for stdin/stdout, file path, ...)
    pub target: String,
    /// The underlying error
    #[source]
    pub source: io::Error,
}

impl TransferError {
    pub fn new(stage: Stage, target: impl Into<String>, source: io::Error) -> Self {
        Self {
            stage,
            target: target.into(),
            source,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }

    /// Unwrap the underlying I/O error.
    pub fn into_io(self) -> io::Error {
        self.source
    }
}

impl From<TransferError> for io::Error {
    fn from(e: TransferError) -> Self {
        e.source
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
