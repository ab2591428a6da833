//! Stream transforms: read an input handle, apply a pure function, write the
//! result to an output handle.
//!
//! Line transforms receive a [`LineStream`], a plain `Iterator<Item = String>`
//! that pulls from the input on demand. A read error ends the stream early and
//! is parked until the transform's output has been written, then returned.

use std::cell::Cell;
use std::fmt;
use std::io::{self, BufRead, Read, StdinLock, Write};
use std::rc::Rc;

use crate::lines::{Lines, read_lines, write_lines};

/// Read all of `input` as one string, apply `f`, and write the result to `output`.
///
/// The output handle is flushed afterwards.
pub fn interact<R, W, F>(mut input: R, output: &mut W, f: F) -> io::Result<()>
where
    R: Read,
    W: Write + ?Sized,
    F: FnOnce(String) -> String,
{
    let mut content = String::new();
    input.read_to_string(&mut content)?;

    let result = f(content);
    output.write_all(result.as_bytes())?;
    output.flush()
}

/// Apply `f` to the lines of stdin and write its lines to stdout.
pub fn line_interact<F, I>(f: F) -> io::Result<()>
where
    F: FnOnce(LineStream<StdinLock<'static>>) -> I,
    I: IntoIterator<Item = String>,
{
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    line_interact_on(stdin, &mut stdout, f)
}

/// Apply `f` to the lines of `input` and write the lines it yields to `output`.
///
/// Behaves like splitting the input into lines, running `f`, and joining the
/// result with a newline after every line. Input is pulled only as `f`'s
/// output is consumed, so a lazy `f` streams line by line.
pub fn line_interact_on<R, W, F, I>(input: R, output: &mut W, f: F) -> io::Result<()>
where
    R: BufRead,
    W: Write + ?Sized,
    F: FnOnce(LineStream<R>) -> I,
    I: IntoIterator<Item = String>,
{
    let parked = ParkedError::default();
    let stream = LineStream {
        lines: read_lines(input),
        parked: parked.clone(),
    };

    write_lines(output, f(stream))?;
    output.flush()?;
    parked.into_result()
}

/// Input side of a line transform.
///
/// Yields lines until end-of-file or the first read error.
pub struct LineStream<R> {
    lines: Lines<R>,
    parked: ParkedError,
}

impl<R> fmt::Debug for LineStream<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineStream").finish_non_exhaustive()
    }
}

impl<R: BufRead> Iterator for LineStream<R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        match self.lines.next()? {
            Ok(line) => Some(line),
            Err(e) => {
                self.parked.park(e);
                None
            }
        }
    }
}

/// Slot shared between a transform's input stream and the driver that
/// reports the first read error once output is written.
#[derive(Clone, Default)]
pub(crate) struct ParkedError(Rc<Cell<Option<io::Error>>>);

impl ParkedError {
    pub(crate) fn park(&self, error: io::Error) {
        // Keep the first error.
        let prev = self.0.take();
        self.0.set(Some(prev.unwrap_or(error)));
    }

    pub(crate) fn into_result(self) -> io::Result<()> {
        match self.0.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
