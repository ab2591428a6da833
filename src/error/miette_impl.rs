//! Miette integration for pretty error reporting.

use std::io;

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{Stage, TransferError};

/// A diagnostic wrapper for transfer errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct IoDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<io::Error>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage, kind: io::ErrorKind) -> String {
    match (stage, kind) {
        (_, io::ErrorKind::NotFound) => "Check that the input path exists".into(),
        (_, io::ErrorKind::PermissionDenied) => "Check file permissions".into(),
        (_, io::ErrorKind::AlreadyExists) => {
            "Use the overwrite or append file exists policy".into()
        }
        (_, io::ErrorKind::BrokenPipe) => "The reader on the other end went away".into(),
        (_, io::ErrorKind::InvalidData) => "Line input must be valid UTF-8".into(),
        (Stage::Configure, _) => "Check the transfer mode and block size".into(),
        (Stage::ResolveInput | Stage::ResolveOutput, _) => {
            "Check your input and output arguments".into()
        }
        _ => "Check your I/O arguments".into(),
    }
}

impl From<TransferError> for IoDiagnostic {
    fn from(e: TransferError) -> Self {
        IoDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            help: Some(help_for(e.stage, e.kind())),
            source: Some(e.source),
            severity: Severity::Error,
        }
    }
}

impl From<TransferError> for miette::Report {
    fn from(e: TransferError) -> Self {
        miette::Report::new(IoDiagnostic::from(e))
    }
}
