//! In-memory sources and sinks.

use std::io::{self, BufRead, Cursor, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{Sink, Source, WriteMode};

/// In-memory source. Every `open` starts again from the first byte.
#[derive(Debug, Clone)]
pub struct MemorySource {
    id: String,
    data: Arc<Vec<u8>>,
}

impl MemorySource {
    /// Create a new in-memory source with the given bytes.
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            data: Arc::new(data),
        }
    }

    /// Create a new in-memory source from a string.
    pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(id, data.into().into_bytes())
    }
}

impl Source for MemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn BufRead + Send>> {
        Ok(Box::new(Cursor::new(self.data.as_ref().clone())))
    }
}

/// In-memory sink whose contents stay readable after the writer is dropped.
#[derive(Debug, Clone)]
pub struct MemorySink {
    id: String,
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    /// Create a new empty in-memory sink.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            buf: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the contents of the sink as bytes.
    pub fn contents(&self) -> Vec<u8> {
        lock(&self.buf).clone()
    }

    /// Get the contents of the sink as a string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Clear the sink contents.
    pub fn clear(&self) {
        lock(&self.buf).clear();
    }
}

impl Sink for MemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self, mode: WriteMode) -> io::Result<Box<dyn Write + Send>> {
        let mut buf = lock(&self.buf);
        match mode {
            WriteMode::Truncate => buf.clear(),
            WriteMode::Append => {}
            WriteMode::CreateNew if !buf.is_empty() => {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} already holds content", self.id),
                ));
            }
            WriteMode::CreateNew => {}
        }
        drop(buf);

        Ok(Box::new(MemoryWriteHandle {
            buf: self.buf.clone(),
        }))
    }

    fn exists(&self) -> bool {
        !lock(&self.buf).is_empty()
    }
}

// Poisoning is ignored: writers only ever append whole slices.
fn lock(buf: &Mutex<Vec<u8>>) -> MutexGuard<'_, Vec<u8>> {
    buf.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Write handle for an in-memory sink.
struct MemoryWriteHandle {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for MemoryWriteHandle {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        lock(&self.buf).extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
