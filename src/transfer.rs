//! Runs a resolved source-to-sink transfer.

use std::io::{self, BufRead, Write};

use crate::blocks::{
    BlockStream, block_interact_on, copy, drive_blocks, full_block_interact_on, line_copy_on,
    read_blocks, read_full_blocks,
};
use crate::config::{SinkSpec, SourceSpec, TransferMode};
use crate::error::{Stage, TransferError};
use crate::interact::{LineStream, line_interact_on};

/// Buffered handle produced by a [`Source`](crate::io::Source).
pub type SourceHandle = Box<dyn BufRead + Send>;

/// Block sequence handed to [`Transfer::run_blocks`].
pub type DynBlocks = Box<dyn Iterator<Item = io::Result<Vec<u8>>>>;

/// A resolved source, sink and mode.
///
/// A transfer can be run more than once; every run reopens both sides.
#[derive(Debug)]
pub struct Transfer {
    source: SourceSpec,
    sink: SinkSpec,
    mode: TransferMode,
    block_size: usize,
}

impl Transfer {
    pub fn new(source: SourceSpec, sink: SinkSpec, mode: TransferMode, block_size: usize) -> Self {
        Self {
            source,
            sink,
            mode,
            block_size,
        }
    }

    pub fn source(&self) -> &SourceSpec {
        &self.source
    }

    pub fn sink(&self) -> &SinkSpec {
        &self.sink
    }

    pub fn mode(&self) -> TransferMode {
        self.mode
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Move everything from source to sink according to the configured mode.
    ///
    /// Returns the number of bytes written to the sink.
    pub fn run(&self) -> Result<u64, TransferError> {
        let size = self.block_size;
        self.drive(|mut input, output| match self.mode {
            TransferMode::Copy => copy(&mut input, output).map(drop),
            TransferMode::Lines => line_copy_on(input, output),
            TransferMode::Blocks => block_interact_on(input, output, size, |blocks| blocks),
            TransferMode::FullBlocks => {
                full_block_interact_on(input, output, size, |blocks| blocks)
            }
        })
    }

    /// Transform the source's lines with `f` and write the result to the sink.
    pub fn run_lines<F, I>(&self, f: F) -> Result<u64, TransferError>
    where
        F: FnOnce(LineStream<SourceHandle>) -> I,
        I: IntoIterator<Item = String>,
    {
        self.drive(|input, output| line_interact_on(input, output, f))
    }

    /// Transform the source's blocks with `f` and write the result to the sink.
    ///
    /// Blocks are best-effort in `Blocks` mode and exact-size otherwise.
    pub fn run_blocks<F, O>(&self, f: F) -> Result<u64, TransferError>
    where
        F: FnOnce(BlockStream<DynBlocks>) -> O,
        O: IntoIterator<Item = Vec<u8>>,
    {
        let size = self.block_size;
        let mode = self.mode;
        self.drive(|input, output| {
            let blocks: DynBlocks = match mode {
                TransferMode::Blocks => Box::new(read_blocks(input, size)),
                _ => Box::new(read_full_blocks(input, size)),
            };
            drive_blocks(blocks, output, f)
        })
    }

    fn drive<F>(&self, body: F) -> Result<u64, TransferError>
    where
        F: FnOnce(SourceHandle, &mut CountingWriter) -> io::Result<()>,
    {
        tracing::debug!(
            input = %self.source.raw,
            output = %self.sink.raw,
            mode = ?self.mode,
            "transfer started"
        );

        let input = self
            .source
            .source
            .open()
            .map_err(|e| TransferError::new(Stage::Open, &self.source.raw, e))?;

        let mode = self.sink.file_exists_policy.write_mode();
        let writer = self
            .sink
            .sink
            .open(mode)
            .map_err(|e| TransferError::new(Stage::Open, &self.sink.raw, e))?;
        let mut output = CountingWriter::new(writer);

        body(input, &mut output).map_err(|e| {
            TransferError::new(
                Stage::Transfer,
                format!("{} -> {}", self.source.raw, self.sink.raw),
                e,
            )
        })?;

        tracing::debug!(bytes = output.written, "transfer finished");
        Ok(output.written)
    }
}

/// Writer that counts bytes accepted by the sink.
struct CountingWriter {
    inner: Box<dyn Write + Send>,
    written: u64,
}

impl CountingWriter {
    fn new(inner: Box<dyn Write + Send>) -> Self {
        Self { inner, written: 0 }
    }
}

impl Write for CountingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
