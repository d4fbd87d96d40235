//! DumpError passes underlying errors through untouched.

use std::io;
use std::path::PathBuf;

use crate::DumpError;

#[test]
fn io_error_is_transparent() {
    let err: DumpError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
    assert_eq!(err.to_string(), "denied");
    assert_eq!(
        err.as_io().map(|e| e.kind()),
        Some(io::ErrorKind::PermissionDenied)
    );
}

#[test]
fn provider_error_keeps_its_message() {
    let err = DumpError::provider("no rows");
    assert_eq!(err.to_string(), "no rows");
    assert!(err.as_io().is_none());

    let inner = io::Error::new(io::ErrorKind::Other, "inner");
    let err = DumpError::provider(inner);
    assert_eq!(err.to_string(), "inner");
}

#[test]
fn utf8_error_converts() {
    let bad = String::from_utf8(vec![0xff]).unwrap_err();
    let message = bad.to_string();
    let err: DumpError = bad.into();
    assert!(matches!(err, DumpError::Utf8(_)));
    assert_eq!(err.to_string(), message);
}

#[test]
fn exists_names_the_path() {
    let err = DumpError::Exists(PathBuf::from("out.json"));
    assert_eq!(err.to_string(), "refusing to overwrite existing file: out.json");
}
