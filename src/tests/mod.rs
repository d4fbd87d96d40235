//! Unit tests, one directory per module.

mod dump;
mod io;

use crate::{ContentDumper, DumpError};

/// A dumper writing a fixed multi-line text.
pub(crate) fn text_dumper() -> ContentDumper {
    ContentDumper::new(|w| {
        writeln!(w, "row 1: k1 p1")?;
        writeln!(w, "row 2: p1 k1")?;
        Ok(())
    })
}

pub(crate) const TEXT: &str = "row 1: k1 p1\nrow 2: p1 k1\n";

/// A dumper whose write-strategy writes a prefix and then fails.
pub(crate) fn failing_dumper() -> ContentDumper {
    ContentDumper::new(|w| {
        w.write_all(b"partial")?;
        Err(DumpError::provider("pattern is incomplete"))
    })
}
