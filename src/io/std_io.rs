//! Standard stream and file sources and sinks.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{Sink, Source, WriteMode};

/// Source reading from stdin. Its id is always "-".
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl Source for StdinSource {
    fn id(&self) -> &str {
        "-"
    }

    fn open(&self) -> io::Result<Box<dyn BufRead + Send>> {
        Ok(Box::new(BufReader::new(io::stdin())))
    }
}

/// Process output stream a [`StdStreamSink`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdStream {
    #[default]
    Stdout,
    Stderr,
}

/// Sink writing to stdout or stderr.
///
/// Write modes do not apply to streams; every open hands out the stream as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdStreamSink(pub StdStream);

impl StdStreamSink {
    pub fn stdout() -> Self {
        Self(StdStream::Stdout)
    }

    pub fn stderr() -> Self {
        Self(StdStream::Stderr)
    }
}

impl Sink for StdStreamSink {
    /// "-" for stdout, "stderr" for stderr.
    fn id(&self) -> &str {
        match self.0 {
            StdStream::Stdout => "-",
            StdStream::Stderr => "stderr",
        }
    }

    fn open(&self, _mode: WriteMode) -> io::Result<Box<dyn Write + Send>> {
        Ok(match self.0 {
            StdStream::Stdout => Box::new(io::stdout()),
            StdStream::Stderr => Box::new(io::stderr()),
        })
    }
}

/// A path plus its lossy display form, which doubles as the handle id.
#[derive(Debug, Clone)]
struct NamedPath {
    display: String,
    path: PathBuf,
}

impl NamedPath {
    fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            display: path.to_string_lossy().into_owned(),
            path,
        }
    }
}

/// Source reading from a file.
#[derive(Debug, Clone)]
pub struct FileSource(NamedPath);

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(NamedPath::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.0.path
    }
}

impl Source for FileSource {
    fn id(&self) -> &str {
        &self.0.display
    }

    fn open(&self) -> io::Result<Box<dyn BufRead + Send>> {
        Ok(Box::new(BufReader::new(File::open(&self.0.path)?)))
    }
}

/// Sink writing to a file.
#[derive(Debug, Clone)]
pub struct FileSink(NamedPath);

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(NamedPath::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.0.path
    }
}

impl Sink for FileSink {
    fn id(&self) -> &str {
        &self.0.display
    }

    fn open(&self, mode: WriteMode) -> io::Result<Box<dyn Write + Send>> {
        let mut options = OpenOptions::new();
        match mode {
            WriteMode::Truncate => options.write(true).create(true).truncate(true),
            WriteMode::Append => options.append(true).create(true),
            // The existence check and the creation are one atomic open.
            WriteMode::CreateNew => options.write(true).create_new(true),
        };
        let file = options.open(&self.0.path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    fn exists(&self) -> bool {
        self.0.path.exists()
    }
}
