//! Builder for creating Transfer instances.

use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::config::{
    DEFAULT_BLOCK_SIZE, FileExistsPolicy, SinkConfig, SinkKind, SinkSpec, SourceConfig,
    SourceKind, SourceSpec, TransferConfig, TransferMode,
};
use crate::error::{Stage, TransferError};
use crate::io::{FileSink, FileSource, Sink, Source, StdStreamSink, StdinSource};
use crate::transfer::Transfer;

pub struct TransferBuilder {
    input_arg: Option<String>,
    output_arg: Option<String>,
    input_spec: Option<SourceSpec>,
    output_spec: Option<SinkSpec>,
    mode: TransferMode,
    block_size: usize,
    file_exists_policy: FileExistsPolicy,
}

impl Default for TransferBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferBuilder {
    /// A stdin-to-stdout copy until told otherwise.
    pub fn new() -> Self {
        Self {
            input_arg: None,
            output_arg: None,
            input_spec: None,
            output_spec: None,
            mode: TransferMode::Copy,
            block_size: DEFAULT_BLOCK_SIZE,
            file_exists_policy: FileExistsPolicy::Overwrite,
        }
    }

    /// Read from `arg`: "-" for stdin, anything else is a file path.
    pub fn input(mut self, arg: impl Into<String>) -> Self {
        self.input_arg = Some(arg.into());
        self
    }

    /// Write to `arg`: "-" for stdout, anything else is a file path.
    pub fn output(mut self, arg: impl Into<String>) -> Self {
        self.output_arg = Some(arg.into());
        self
    }

    /// Use a prebuilt source; takes precedence over `input`.
    pub fn input_spec(mut self, spec: SourceSpec) -> Self {
        self.input_spec = Some(spec);
        self
    }

    /// Use a prebuilt sink; takes precedence over `output`.
    ///
    /// The spec's own file exists policy applies.
    pub fn output_spec(mut self, spec: SinkSpec) -> Self {
        self.output_spec = Some(spec);
        self
    }

    pub fn with_mode(mut self, mode: TransferMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_block_size(mut self, size: usize) -> Self {
        self.block_size = size;
        self
    }

    pub fn with_file_exists_policy(mut self, policy: FileExistsPolicy) -> Self {
        self.file_exists_policy = policy;
        self
    }

    /// Create a builder from a deserialized configuration.
    pub fn from_config(config: &TransferConfig) -> Result<Self, TransferError> {
        let mut builder = Self::new()
            .with_mode(config.mode)
            .with_block_size(config.effective_block_size());

        builder.input_spec = Some(Self::source_from_config(&config.input)?);

        let sink = Self::sink_from_config(&config.output)?;
        let policy = config.output.file_exists_policy.unwrap_or_default();
        builder.output_spec = Some(sink.with_file_exists_policy(policy));

        Ok(builder)
    }

    fn source_from_config(cfg: &SourceConfig) -> Result<SourceSpec, TransferError> {
        match cfg.kind {
            SourceKind::Stdin => Ok(SourceSpec::new("-", Arc::new(StdinSource))),
            SourceKind::File => {
                let path = cfg
                    .path
                    .as_deref()
                    .ok_or_else(|| missing_path(Stage::ResolveInput, "file"))?;
                Ok(SourceSpec::new(path, Arc::new(FileSource::new(path))))
            }
        }
    }

    fn sink_from_config(cfg: &SinkConfig) -> Result<SinkSpec, TransferError> {
        match cfg.kind {
            SinkKind::Stdout => Ok(SinkSpec::new("-", Arc::new(StdStreamSink::stdout()))),
            SinkKind::Stderr => Ok(SinkSpec::new("stderr", Arc::new(StdStreamSink::stderr()))),
            SinkKind::File => {
                let path = cfg
                    .path
                    .as_deref()
                    .ok_or_else(|| missing_path(Stage::ResolveOutput, "file"))?;
                Ok(SinkSpec::new(path, Arc::new(FileSink::new(path))))
            }
        }
    }

    pub fn build(self) -> Result<Transfer, TransferError> {
        let source = match self.input_spec {
            Some(spec) => spec,
            None => resolve_input(self.input_arg.as_deref().unwrap_or("-")),
        };

        let sink = match self.output_spec {
            Some(spec) => spec,
            None => resolve_output(self.output_arg.as_deref().unwrap_or("-"))
                .with_file_exists_policy(self.file_exists_policy),
        };

        let block_mode = matches!(self.mode, TransferMode::Blocks | TransferMode::FullBlocks);
        if block_mode && self.block_size == 0 {
            return Err(TransferError::new(
                Stage::Configure,
                "block_size",
                io::Error::new(io::ErrorKind::InvalidInput, "block size must be non-zero"),
            ));
        }

        if sink.file_exists_policy == FileExistsPolicy::Error && sink.sink.exists() {
            tracing::warn!(output = %sink.raw, "refusing to overwrite existing output");
            return Err(TransferError::new(
                Stage::ResolveOutput,
                sink.raw,
                io::Error::new(io::ErrorKind::AlreadyExists, "output already exists"),
            ));
        }

        Ok(Transfer::new(source, sink, self.mode, self.block_size))
    }
}

fn resolve_input(raw: &str) -> SourceSpec {
    let source: Arc<dyn Source> = if raw == "-" {
        Arc::new(StdinSource)
    } else {
        Arc::new(FileSource::new(Path::new(raw)))
    };
    SourceSpec::new(raw, source)
}

fn resolve_output(raw: &str) -> SinkSpec {
    let sink: Arc<dyn Sink> = if raw == "-" {
        Arc::new(StdStreamSink::stdout())
    } else {
        Arc::new(FileSink::new(Path::new(raw)))
    };
    SinkSpec::new(raw, sink)
}

fn missing_path(stage: Stage, kind: &str) -> TransferError {
    TransferError::new(
        stage,
        kind,
        io::Error::new(io::ErrorKind::InvalidInput, "file kind requires a path"),
    )
}
