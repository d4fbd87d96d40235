//! Dump trait and ContentDumper tests.
