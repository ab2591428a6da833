//! Sink trait definition.

use std::fmt::Debug;
use std::io::Write;

/// How a sink should treat content already present at the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Discard existing content
    #[default]
    Truncate,
    /// Keep existing content and write after it
    Append,
    /// Fail with `AlreadyExists` if the destination holds content
    CreateNew,
}

/// A named provider of an output handle.
pub trait Sink: Send + Sync + Debug {
    /// Returns a unique identifier for this sink.
    ///
    /// Convention: "-" for stdout, file path for files.
    fn id(&self) -> &str;

    /// Open the destination for writing.
    fn open(&self, mode: WriteMode) -> std::io::Result<Box<dyn Write + Send>>;

    /// Whether the destination already holds content that `WriteMode::Truncate`
    /// would discard. Streams always report `false`.
    fn exists(&self) -> bool {
        false
    }
}
