//! Tests for the miette diagnostic conversion.

use miette::Diagnostic;

use crate::{DumpDiagnostic, DumpError};

#[test]
fn diagnostic_carries_message_help_and_source() {
    let diag = DumpDiagnostic::from(DumpError::provider("no rows"));
    assert_eq!(diag.to_string(), "dump failed: no rows");
    assert!(diag.help().is_some());
    assert!(std::error::Error::source(&diag).is_some());
}

#[test]
fn dump_error_into_report() {
    let report: miette::Report =
        DumpError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full")).into();
    assert_eq!(report.to_string(), "dump failed: disk full");
}
