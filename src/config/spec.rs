//! Resolved source and sink specifications.

use std::sync::Arc;

use serde::Deserialize;

use crate::io::{Sink, Source, WriteMode};

/// Policy for handling existing output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileExistsPolicy {
    /// Overwrite existing files
    #[default]
    Overwrite,
    /// Append to existing files
    Append,
    /// Return an error if file exists
    Error,
}

impl FileExistsPolicy {
    /// Write mode a sink should be opened with under this policy.
    pub fn write_mode(self) -> WriteMode {
        match self {
            FileExistsPolicy::Overwrite => WriteMode::Truncate,
            FileExistsPolicy::Append => WriteMode::Append,
            FileExistsPolicy::Error => WriteMode::CreateNew,
        }
    }
}

/// Specification for the input side of a transfer.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    /// Raw input argument or configuration string
    pub raw: String,
    /// The source implementation
    pub source: Arc<dyn Source>,
}

impl SourceSpec {
    pub fn new(raw: impl Into<String>, source: Arc<dyn Source>) -> Self {
        Self {
            raw: raw.into(),
            source,
        }
    }
}

/// Specification for the output side of a transfer.
#[derive(Debug, Clone)]
pub struct SinkSpec {
    /// Raw output argument or configuration string
    pub raw: String,
    /// The sink implementation
    pub sink: Arc<dyn Sink>,
    /// Policy for handling existing files
    pub file_exists_policy: FileExistsPolicy,
}

impl SinkSpec {
    pub fn new(raw: impl Into<String>, sink: Arc<dyn Sink>) -> Self {
        Self {
            raw: raw.into(),
            sink,
            file_exists_policy: FileExistsPolicy::default(),
        }
    }

    pub fn with_file_exists_policy(mut self, policy: FileExistsPolicy) -> Self {
        self.file_exists_policy = policy;
        self
    }
}
