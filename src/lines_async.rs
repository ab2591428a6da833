//! Async line helpers over Tokio handles.

use std::io;

use futures::stream::{self, Stream};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Async counterpart of [`write_lines`](crate::write_lines).
pub async fn write_lines_async<W, I>(handle: &mut W, lines: I) -> io::Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for line in lines {
        handle.write_all(line.as_ref().as_bytes()).await?;
        handle.write_all(b"\n").await?;
    }
    Ok(())
}

/// Async counterpart of [`read_lines`](crate::read_lines).
///
/// The stream checks for end-of-file before each read and ends after the
/// first error.
pub fn read_lines_async<R>(handle: R) -> impl Stream<Item = io::Result<String>>
where
    R: AsyncBufRead + Unpin,
{
    stream::try_unfold(handle, |mut handle| async move {
        if handle.fill_buf().await?.is_empty() {
            return Ok(None);
        }

        let mut line = String::new();
        handle.read_line(&mut line).await?;
        if line.ends_with('\n') {
            line.pop();
        }
        Ok::<_, io::Error>(Some((line, handle)))
    })
}

/// Async counterpart of [`interact`](crate::interact).
pub async fn interact_async<R, W, F>(mut input: R, output: &mut W, f: F) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + ?Sized,
    F: FnOnce(String) -> String,
{
    let mut content = String::new();
    input.read_to_string(&mut content).await?;

    let result = f(content);
    output.write_all(result.as_bytes()).await?;
    output.flush().await
}
