//! # contentdump
//!
//! Write serialized content to whatever destination the caller wants, without
//! the producing code knowing which one.
//!
//! ## Overview
//!
//! A producer (a pattern, an SVG document, a report, ...) supplies a
//! write-strategy: a function that writes its content to a sink. Wrapped in a
//! [`ContentDumper`], the same strategy can then be materialized as
//!
//! - a `String` or byte vector ([`Dump::string`], [`Dump::bytes`]),
//! - a fresh in-memory buffer or a caller-owned stream ([`Dump::file`],
//!   [`Dump::file_into`]),
//! - a file on disk ([`Dump::path`]),
//! - a temporary file, either kept ([`Dump::temporary_path`]) or removed when
//!   its handle is closed ([`Dump::temporary_file`]),
//! - stdout ([`Dump::print`]),
//! - any [`OutputTarget`] such as an [`InMemorySink`] ([`Dump::target`]).
//!
//! [`JsonDumper`] composes a `ContentDumper` whose strategy encodes the value
//! of an object-provider as JSON.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use contentdump::{Dump, JsonDumper};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Pattern {
//!     name: String,
//!     rows: Vec<String>,
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dumper = JsonDumper::new(|| {
//!         Ok(Pattern {
//!             name: "scarf".into(),
//!             rows: vec!["k".into(), "p".into()],
//!         })
//!     });
//!
//!     println!("{}", dumper.string()?);
//!     dumper.path("scarf.json")?;
//!
//!     let mut tmp = dumper.temporary_file(true)?;
//!     println!("{} -> {}", tmp.path().display(), tmp.contents_string()?);
//!     tmp.close()?; // removes the file
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `json` - `JsonDumper` backed by serde_json (enabled by default)
//! - `miette` - Pretty error reporting with miette
//!
//! ## Logging
//!
//! Every materialization is reported through the `log` facade at `debug`
//! level, temporary-file lifecycle events at `trace` level. Install any
//! `log` backend to see them.

// Core modules
pub mod config;
pub mod dump;
pub mod dumper;
pub mod error;
pub mod format;
pub mod io;

// Re-exports for convenience
pub use config::{DumpOptions, FileExistsPolicy};
pub use dump::Dump;
pub use dumper::{ContentDumper, WriteStrategy};
pub use error::DumpError;
#[cfg(feature = "json")]
pub use format::{JsonDumper, JsonStyle, ObjectProvider};
pub use io::{FileOutput, InMemorySink, OutputTarget, StdoutOutput, TemporaryDump};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::DumpDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
