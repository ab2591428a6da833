//! Source trait definition.

use std::fmt::Debug;
use std::io::BufRead;

/// A named, re-openable provider of a buffered input handle.
///
/// Implementors provide a way to open a line-readable stream from sources
/// such as files, stdin, or in-memory buffers.
pub trait Source: Send + Sync + Debug {
    /// Returns a unique identifier for this source.
    ///
    /// Used as the target in error context and log events.
    /// Convention: "-" for stdin, file path for files.
    fn id(&self) -> &str;

    /// Open and return a new buffered handle.
    ///
    /// Each call should return a fresh handle positioned at the beginning
    /// where the source allows it.
    fn open(&self) -> std::io::Result<Box<dyn BufRead + Send>>;
}
