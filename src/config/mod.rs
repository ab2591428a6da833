//! Configuration types for transfers.
//!
//! This module provides:
//! - `TransferConfig`: Deserializable description of one transfer
//! - `SourceSpec` / `SinkSpec`: Resolved input and output sides
//! - `FileExistsPolicy`: Policy for handling existing output files

mod spec;
mod transfer;

pub use spec::{FileExistsPolicy, SinkSpec, SourceSpec};
pub use transfer::{
    DEFAULT_BLOCK_SIZE, SinkConfig, SinkKind, SourceConfig, SourceKind, TransferConfig,
    TransferMode,
};
