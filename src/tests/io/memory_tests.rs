//! Tests for the in-memory sink.

use std::io::Write;

use crate::{FileExistsPolicy, InMemorySink, OutputTarget};

#[test]
fn in_memory_sink_overwrite_and_append() {
    let sink = InMemorySink::new("out");
    assert!(sink.is_empty());

    {
        let mut w = sink.open(FileExistsPolicy::Overwrite).unwrap();
        w.write_all(b"abc").unwrap();
    }
    assert_eq!(sink.contents(), b"abc".to_vec());

    {
        let mut w = sink.open(FileExistsPolicy::Append).unwrap();
        w.write_all(b"def").unwrap();
    }
    assert_eq!(sink.contents_string(), "abcdef");

    {
        let mut w = sink.open(FileExistsPolicy::Overwrite).unwrap();
        w.write_all(b"x").unwrap();
    }
    assert_eq!(sink.contents_string(), "x");
}

#[test]
fn in_memory_sink_error_policy_rejects_non_empty() {
    let sink = InMemorySink::new("out");
    sink.open(FileExistsPolicy::Error)
        .unwrap()
        .write_all(b"first")
        .unwrap();

    let err = sink
        .open(FileExistsPolicy::Error)
        .err()
        .expect("second open should fail");
    assert_eq!(err.kind(), std::io::ErrorKind::AlreadyExists);

    sink.clear();
    assert!(sink.open(FileExistsPolicy::Error).is_ok());
}

#[test]
fn in_memory_sink_clones_share_buffer() {
    let sink = InMemorySink::new("out");
    let other = sink.clone();
    other
        .open(FileExistsPolicy::Append)
        .unwrap()
        .write_all(b"shared")
        .unwrap();
    assert_eq!(sink.contents_string(), "shared");
    assert_eq!(sink.id(), "out");
}
