//! Named sources and sinks for the transfer layer.
//!
//! This module provides:
//! - `Source`: Trait for re-openable buffered input handles
//! - `Sink`: Trait for output handles, opened truncating or appending
//! - Standard implementations for files, stdin/stdout/stderr
//! - In-memory implementations for testing

mod memory;
mod sink;
mod source;
mod std_io;

pub use memory::{MemorySink, MemorySource};
pub use sink::{Sink, WriteMode};
pub use source::Source;
pub use std_io::{FileSink, FileSource, StdStream, StdStreamSink, StdinSource};
