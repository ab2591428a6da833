//! Async binary buffer helpers.

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::buffer::MAX_READ_CHUNK;

pub async fn write_buffer_async<W>(handle: &mut W, bytes: &[u8]) -> io::Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    handle.write_all(bytes).await
}

/// Read at most `max` bytes with a single underlying read.
///
/// At most [`MAX_READ_CHUNK`] bytes per call. Zero `max` returns without
/// polling the handle.
pub async fn read_buffer_async<R>(handle: &mut R, max: usize) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin + ?Sized,
{
    if max == 0 {
        return Ok(Vec::new());
    }

    let mut buf = vec![0u8; max.min(MAX_READ_CHUNK)];
    let n = handle.read(&mut buf).await?;
    buf.truncate(n);
    Ok(buf)
}

/// Read exactly `count` bytes, or fewer if end-of-file comes first.
pub async fn read_buffer_full_async<R>(handle: &mut R, count: usize) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut acc = Vec::with_capacity(count.min(MAX_READ_CHUNK));

    while acc.len() < count {
        let chunk = read_buffer_async(handle, count - acc.len()).await?;
        if chunk.is_empty() {
            break;
        }
        acc.extend_from_slice(&chunk);
    }

    Ok(acc)
}
