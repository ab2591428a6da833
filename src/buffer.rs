//! Fixed-size binary buffer helpers.
//!
//! Buffers are plain owned byte strings; no pointer arithmetic is involved.

use std::io::{self, Read, Write};

/// Largest buffer a single read allocates, whatever count is requested.
pub const MAX_READ_CHUNK: usize = 64 * 1024;

/// Write `bytes` to `handle` verbatim as a single binary write.
pub fn write_buffer<W>(handle: &mut W, bytes: &[u8]) -> io::Result<()>
where
    W: Write + ?Sized,
{
    handle.write_all(bytes)
}

/// Read at most `max` bytes from `handle` with a single underlying read.
///
/// The result may be shorter than `max` when fewer bytes were available, and
/// never exceeds [`MAX_READ_CHUNK`]. An empty result means end-of-file. A
/// request for zero bytes returns at once without touching the handle.
pub fn read_buffer<R>(handle: &mut R, max: usize) -> io::Result<Vec<u8>>
where
    R: Read + ?Sized,
{
    if max == 0 {
        return Ok(Vec::new());
    }

    let mut buf = vec![0u8; max.min(MAX_READ_CHUNK)];
    let n = handle.read(&mut buf)?;
    buf.truncate(n);
    Ok(buf)
}

/// Read exactly `count` bytes from `handle`, or fewer if end-of-file comes first.
///
/// Calls [`read_buffer`] with the remaining count until enough bytes are
/// accumulated or a read comes back empty.
pub fn read_buffer_full<R>(handle: &mut R, count: usize) -> io::Result<Vec<u8>>
where
    R: Read + ?Sized,
{
    let mut acc = Vec::with_capacity(count.min(MAX_READ_CHUNK));

    while acc.len() < count {
        let chunk = read_buffer(handle, count - acc.len())?;
        if chunk.is_empty() {
            break;
        }
        acc.extend_from_slice(&chunk);
    }

    Ok(acc)
}
