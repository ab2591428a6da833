//! Block sequences, block transforms and whole-stream copy helpers.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, StdinLock, Write};
use std::iter::FusedIterator;
use std::path::Path;

use crate::buffer::{read_buffer, read_buffer_full, write_buffer};
use crate::interact::{ParkedError, line_interact, line_interact_on};

/// Lazy sequence of best-effort blocks of at most `size` bytes.
///
/// Every item is the result of one [`read_buffer`] call, so blocks may be
/// short. The sequence ends at the first empty read.
pub fn read_blocks<R: Read>(handle: R, size: usize) -> Blocks<R> {
    Blocks {
        handle,
        size,
        done: size == 0,
    }
}

/// Lazy sequence of blocks of exactly `size` bytes, except possibly the last.
pub fn read_full_blocks<R: Read>(handle: R, size: usize) -> FullBlocks<R> {
    FullBlocks {
        inner: read_blocks(handle, size),
    }
}

/// Iterator returned by [`read_blocks`].
#[derive(Debug)]
pub struct Blocks<R> {
    handle: R,
    size: usize,
    done: bool,
}

impl<R: Read> Blocks<R> {
    /// Return the underlying handle at its current position.
    pub fn into_inner(self) -> R {
        self.handle
    }

    fn pull(
        &mut self,
        read: fn(&mut R, usize) -> io::Result<Vec<u8>>,
    ) -> Option<io::Result<Vec<u8>>> {
        if self.done {
            return None;
        }

        match read(&mut self.handle, self.size) {
            Ok(block) if block.is_empty() => {
                self.done = true;
                None
            }
            Ok(block) => Some(Ok(block)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> Iterator for Blocks<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pull(read_buffer::<R>)
    }
}

impl<R: Read> FusedIterator for Blocks<R> {}

/// Iterator returned by [`read_full_blocks`].
#[derive(Debug)]
pub struct FullBlocks<R> {
    inner: Blocks<R>,
}

impl<R: Read> FullBlocks<R> {
    /// Return the underlying handle at its current position.
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl<R: Read> Iterator for FullBlocks<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.pull(read_buffer_full::<R>)
    }
}

impl<R: Read> FusedIterator for FullBlocks<R> {}

/// Input side of a block transform. Yields blocks until end-of-file or the
/// first read error.
pub struct BlockStream<I> {
    blocks: I,
    parked: ParkedError,
}

impl<I> fmt::Debug for BlockStream<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockStream").finish_non_exhaustive()
    }
}

impl<I> Iterator for BlockStream<I>
where
    I: Iterator<Item = io::Result<Vec<u8>>>,
{
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.blocks.next()? {
            Ok(block) => Some(block),
            Err(e) => {
                self.parked.park(e);
                None
            }
        }
    }
}

pub(crate) fn drive_blocks<B, W, F, O>(blocks: B, output: &mut W, f: F) -> io::Result<()>
where
    B: Iterator<Item = io::Result<Vec<u8>>>,
    W: Write + ?Sized,
    F: FnOnce(BlockStream<B>) -> O,
    O: IntoIterator<Item = Vec<u8>>,
{
    let parked = ParkedError::default();
    let stream = BlockStream {
        blocks,
        parked: parked.clone(),
    };

    for block in f(stream) {
        write_buffer(output, &block)?;
    }
    output.flush()?;
    parked.into_result()
}

/// Apply `f` to best-effort blocks of `input` and write each block it yields.
pub fn block_interact_on<R, W, F, O>(
    input: R,
    output: &mut W,
    size: usize,
    f: F,
) -> io::Result<()>
where
    R: Read,
    W: Write + ?Sized,
    F: FnOnce(BlockStream<Blocks<R>>) -> O,
    O: IntoIterator<Item = Vec<u8>>,
{
    drive_blocks(read_blocks(input, size), output, f)
}

/// Like [`block_interact_on`], but every input block except the last holds
/// exactly `size` bytes.
pub fn full_block_interact_on<R, W, F, O>(
    input: R,
    output: &mut W,
    size: usize,
    f: F,
) -> io::Result<()>
where
    R: Read,
    W: Write + ?Sized,
    F: FnOnce(BlockStream<FullBlocks<R>>) -> O,
    O: IntoIterator<Item = Vec<u8>>,
{
    drive_blocks(read_full_blocks(input, size), output, f)
}

/// [`block_interact_on`] over stdin and stdout.
pub fn block_interact<F, O>(size: usize, f: F) -> io::Result<()>
where
    F: FnOnce(BlockStream<Blocks<StdinLock<'static>>>) -> O,
    O: IntoIterator<Item = Vec<u8>>,
{
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    block_interact_on(stdin, &mut stdout, size, f)
}

/// [`full_block_interact_on`] over stdin and stdout.
pub fn full_block_interact<F, O>(size: usize, f: F) -> io::Result<()>
where
    F: FnOnce(BlockStream<FullBlocks<StdinLock<'static>>>) -> O,
    O: IntoIterator<Item = Vec<u8>>,
{
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    full_block_interact_on(stdin, &mut stdout, size, f)
}

/// Copy every remaining byte of `input` to `output`, then flush.
///
/// Returns the number of bytes copied.
pub fn copy<R, W>(input: &mut R, output: &mut W) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let n = io::copy(input, output)?;
    output.flush()?;
    Ok(n)
}

/// Copy `input` to `output` line by line.
///
/// A final line without a newline gains one.
pub fn line_copy_on<R, W>(input: R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write + ?Sized,
{
    line_interact_on(input, output, |lines| lines)
}

/// [`line_copy_on`] from stdin to stdout.
pub fn line_copy() -> io::Result<()> {
    line_interact(|lines| lines)
}

/// Line-copy the file at `src` into `dst`, creating or truncating `dst`.
pub fn copy_file_lines_to_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> io::Result<()> {
    let input = BufReader::new(File::open(src)?);
    let mut output = BufWriter::new(File::create(dst)?);
    line_copy_on(input, &mut output)
}

/// Copy the file at `src` into `dst` in blocks of `size` bytes, creating or
/// truncating `dst`.
pub fn copy_file_blocks_to_file(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    size: usize,
) -> io::Result<()> {
    let input = File::open(src)?;
    let mut output = BufWriter::new(File::create(dst)?);
    full_block_interact_on(input, &mut output, size, |blocks| blocks)
}
