//! Test handles with controlled read and write behavior.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io::{self, BufRead, Read, Write};
use std::rc::Rc;

/// Reader that hands out at most `chunk` bytes per read and counts calls.
pub struct ChunkedReader {
    data: Vec<u8>,
    pos: usize,
    chunk: usize,
    pub reads: Rc<Cell<usize>>,
}

impl ChunkedReader {
    pub fn new(data: impl Into<Vec<u8>>, chunk: usize) -> Self {
        Self {
            data: data.into(),
            pos: 0,
            chunk,
            reads: Rc::new(Cell::new(0)),
        }
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads.set(self.reads.get() + 1);
        let remaining = &self.data[self.pos..];
        let n = remaining.len().min(buf.len()).min(self.chunk);
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }
}

/// Reader that must never be touched.
pub struct UntouchableReader;

impl Read for UntouchableReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        panic!("read called on untouchable reader");
    }
}

/// Reader that fails every read with the given kind.
pub struct FailingReader(pub io::ErrorKind);

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(self.0, "read failed"))
    }
}

/// Writer that fails every write with `BrokenPipe`.
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer appending to a buffer the test can inspect while it is in use.
#[derive(Clone, Default)]
pub struct SharedWriter(pub Rc<RefCell<Vec<u8>>>);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Buffered reader that serves one chunk per refill and records how much
/// output had been written each time it pulls a new chunk.
pub struct LineFeed {
    pending: VecDeque<Vec<u8>>,
    current: Vec<u8>,
    pos: usize,
    out: Rc<RefCell<Vec<u8>>>,
    pub seen: Rc<RefCell<Vec<usize>>>,
}

impl LineFeed {
    pub fn new<I, S>(chunks: I, out: &SharedWriter) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        Self {
            pending: chunks.into_iter().map(Into::into).collect(),
            current: Vec::new(),
            pos: 0,
            out: out.0.clone(),
            seen: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl BufRead for LineFeed {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.current.len() {
            if let Some(next) = self.pending.pop_front() {
                self.seen.borrow_mut().push(self.out.borrow().len());
                self.current = next;
                self.pos = 0;
            }
        }
        Ok(&self.current[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.current.len());
    }
}

impl Read for LineFeed {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}
