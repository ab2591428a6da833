//! Line-oriented helpers over buffered handles.
//!
//! - `write_lines`: write each string followed by a newline
//! - `read_lines`: lazily pull lines from a `BufRead` until end-of-file

use std::io::{self, BufRead, Write};
use std::iter::FusedIterator;

/// Write every string in `lines` to `handle`, each followed by `'\n'`.
///
/// Strings are written in order. An empty sequence performs no I/O. The
/// handle is not flushed.
pub fn write_lines<W, I>(handle: &mut W, lines: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for line in lines {
        handle.write_all(line.as_ref().as_bytes())?;
        handle.write_all(b"\n")?;
    }
    Ok(())
}

/// Produce a lazy sequence of the lines remaining in `handle`.
///
/// Nothing is read until the returned iterator is advanced.
pub fn read_lines<R: BufRead>(handle: R) -> Lines<R> {
    Lines {
        handle,
        done: false,
    }
}

/// Lazy line sequence returned by [`read_lines`].
///
/// Each call to `next` first checks the handle for end-of-file and only then
/// reads one line. The trailing `'\n'` is stripped; a `'\r'` before it is
/// kept. After end-of-file or the first error the iterator stays exhausted.
#[derive(Debug)]
pub struct Lines<R> {
    handle: R,
    done: bool,
}

impl<R: BufRead> Lines<R> {
    /// Return the underlying handle at its current position.
    pub fn into_inner(self) -> R {
        self.handle
    }

    /// Borrow the underlying handle.
    pub fn get_ref(&self) -> &R {
        &self.handle
    }

    fn read_one(&mut self) -> io::Result<Option<String>> {
        if self.handle.fill_buf()?.is_empty() {
            return Ok(None);
        }

        let mut line = String::new();
        self.handle.read_line(&mut line)?;
        if line.ends_with('\n') {
            line.pop();
        }
        Ok(Some(line))
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_one() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for Lines<R> {}
