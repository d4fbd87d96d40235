//! Destinations a dump can be written to.
//!
//! This module provides:
//! - `OutputTarget`: Trait for named output destinations
//! - `FileOutput` and `StdoutOutput`
//! - `InMemorySink`: shared in-memory destination
//! - `TemporaryDump`: open handle to a dumped temporary file

mod counting;
mod memory;
mod output;
mod std_io;
mod temporary;

pub(crate) use counting::CountingWriter;
pub use memory::InMemorySink;
pub use output::OutputTarget;
pub use std_io::{FileOutput, StdoutOutput};
pub use temporary::TemporaryDump;
