//! # handleio
//!
//! Line, block and buffer helpers over buffered I/O handles.
//!
//! ## Overview
//!
//! handleio provides:
//! - **Line I/O**: `write_lines` writes newline-terminated strings, `read_lines`
//!   pulls lines lazily until end-of-file
//! - **Interact**: `interact` transforms a whole stream as one string;
//!   `line_interact_on` transforms it as a lazy sequence of lines
//! - **Binary buffers**: `write_buffer`, `read_buffer` (one read, possibly short)
//!   and `read_buffer_full` (exact count unless end-of-file)
//! - **Blocks and copies**: lazy block sequences, block transforms and
//!   file-to-file copy helpers
//! - **Transfers**: named sources and sinks, a serde-deserializable
//!   `TransferConfig`, and `TransferBuilder` to run source-to-sink moves
//!
//! ## Quick Start
//!
//! ```rust
//! use std::io::Cursor;
//!
//! let input = Cursor::new("1 apple\n2 pear\n3 kiwi\n");
//! let mut output = Vec::new();
//!
//! handleio::line_interact_on(input, &mut output, |lines| {
//!     lines.filter(|l| l.starts_with('1'))
//! })?;
//!
//! assert_eq!(output, b"1 apple\n");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! ## Features
//!
//! - `async` - Async line and buffer helpers over Tokio handles
//! - `miette` - Pretty error reporting for transfer errors
//!
//! ## Errors and end-of-file
//!
//! The helpers return `std::io::Result` and pass the underlying `io::Error`
//! through untouched. End-of-file is never an error: it ends a line or block
//! sequence, or shortens a buffer read. Only the transfer layer wraps errors,
//! in [`TransferError`], to name the stage and the source or sink involved.
//!
//! ## Streaming semantics
//!
//! - `read_lines` and `read_blocks` issue no read until advanced, and check
//!   for end-of-file before every read.
//! - Line and block transforms hand the function a plain iterator. If the
//!   function is lazy, output for a line is written before the next input
//!   line is read. A read error ends that iterator early and is returned once
//!   the function's output has been written.
//! - `interact` is the exception: it reads the whole input into memory.

pub mod blocks;
pub mod buffer;
pub mod builder;
pub mod config;
pub mod error;
pub mod interact;
pub mod io;
pub mod lines;
pub mod transfer;

// Async modules (feature-gated)
#[cfg(feature = "async")]
pub mod buffer_async;
#[cfg(feature = "async")]
pub mod lines_async;

// Re-exports for convenience
pub use blocks::{
    BlockStream, Blocks, FullBlocks, block_interact, block_interact_on, copy,
    copy_file_blocks_to_file, copy_file_lines_to_file, full_block_interact,
    full_block_interact_on, line_copy, line_copy_on, read_blocks, read_full_blocks,
};
pub use buffer::{read_buffer, read_buffer_full, write_buffer};
pub use builder::TransferBuilder;
pub use config::{FileExistsPolicy, SinkSpec, SourceSpec, TransferConfig, TransferMode};
pub use error::{Stage, TransferError};
pub use interact::{LineStream, interact, line_interact, line_interact_on};
pub use io::{
    FileSink, FileSource, MemorySink, MemorySource, Sink, Source, StdStream, StdStreamSink,
    StdinSource, WriteMode,
};
pub use lines::{Lines, read_lines, write_lines};
pub use transfer::Transfer;

// Async re-exports
#[cfg(feature = "async")]
pub use buffer_async::{read_buffer_async, read_buffer_full_async, write_buffer_async};
#[cfg(feature = "async")]
pub use lines_async::{interact_async, read_lines_async, write_lines_async};

/// Build a transfer from a deserialized configuration.
pub fn build_transfer_from_config(config: &TransferConfig) -> Result<Transfer, TransferError> {
    TransferBuilder::from_config(config)?.build()
}

/// Build a transfer from a configuration, letting the caller adjust the
/// builder first, for example to swap in a custom source or sink.
pub fn build_transfer_from_config_with<F>(
    config: &TransferConfig,
    customize: F,
) -> Result<Transfer, TransferError>
where
    F: FnOnce(TransferBuilder) -> TransferBuilder,
{
    let builder = TransferBuilder::from_config(config)?;
    customize(builder).build()
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::IoDiagnostic;
