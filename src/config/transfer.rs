//! Serde-facing configuration for a single transfer.

use serde::Deserialize;

use super::FileExistsPolicy;

/// Block size used when a block mode has no explicit size.
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// How a transfer moves data from its source to its sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferMode {
    /// Raw byte copy
    #[default]
    Copy,
    /// Line by line; a missing final newline is added
    Lines,
    /// Best-effort blocks, as many bytes as each read returns
    Blocks,
    /// Blocks of exactly `block_size` bytes, except possibly the last
    FullBlocks,
}

/// Configuration for a complete transfer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferConfig {
    /// Where data comes from; stdin when omitted
    #[serde(default)]
    pub input: SourceConfig,
    /// Where data goes; stdout when omitted
    #[serde(default)]
    pub output: SinkConfig,
    #[serde(default)]
    pub mode: TransferMode,
    /// Block size for the block modes
    #[serde(default)]
    pub block_size: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Stdin,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    #[default]
    Stdout,
    Stderr,
    File,
}

/// Configuration for the input side of a transfer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// File path (for file sources)
    #[serde(default)]
    pub path: Option<String>,
}

/// Configuration for the output side of a transfer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SinkConfig {
    pub kind: SinkKind,
    /// File path (for file sinks)
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub file_exists_policy: Option<FileExistsPolicy>,
}

impl TransferConfig {
    /// Create a stdin-to-stdout copy configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: SourceConfig) -> Self {
        self.input = input;
        self
    }

    pub fn with_output(mut self, output: SinkConfig) -> Self {
        self.output = output;
        self
    }

    pub fn with_mode(mut self, mode: TransferMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_block_size(mut self, size: usize) -> Self {
        self.block_size = Some(size);
        self
    }

    /// Block size to use, falling back to [`DEFAULT_BLOCK_SIZE`].
    pub fn effective_block_size(&self) -> usize {
        self.block_size.unwrap_or(DEFAULT_BLOCK_SIZE)
    }
}

impl SourceConfig {
    pub fn stdin() -> Self {
        Self::default()
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self {
            kind: SourceKind::File,
            path: Some(path.into()),
        }
    }
}

impl SinkConfig {
    pub fn stdout() -> Self {
        Self::default()
    }

    pub fn stderr() -> Self {
        Self {
            kind: SinkKind::Stderr,
            ..Self::default()
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self {
            kind: SinkKind::File,
            path: Some(path.into()),
            file_exists_policy: None,
        }
    }

    pub fn with_file_exists_policy(mut self, policy: FileExistsPolicy) -> Self {
        self.file_exists_policy = Some(policy);
        self
    }
}
