//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::DumpError;

/// A diagnostic wrapper for dump errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct DumpDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<DumpError>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(e: &DumpError) -> &'static str {
    match e {
        DumpError::Io(_) => "Check that the destination is writable and the disk is not full",
        #[cfg(feature = "json")]
        DumpError::Json(_) => "The object could not be represented as JSON",
        DumpError::Utf8(_) => "The content is binary; use `bytes()` instead of `string()`",
        DumpError::Provider(_) => "The content producer failed before anything was written",
        DumpError::Exists(_) => {
            "Remove the existing destination or use the `overwrite` file exists policy"
        }
    }
}

impl From<DumpError> for DumpDiagnostic {
    fn from(e: DumpError) -> Self {
        DumpDiagnostic {
            message: format!("dump failed: {e}"),
            help: Some(help_for(&e).into()),
            source: Some(e),
            severity: Severity::Error,
        }
    }
}

impl From<DumpError> for miette::Report {
    fn from(e: DumpError) -> Self {
        miette::Report::new(DumpDiagnostic::from(e))
    }
}
