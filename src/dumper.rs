//! `ContentDumper`: a dumper built from a write-strategy closure.

use std::io::Write;
use std::sync::Arc;

use crate::config::DumpOptions;
use crate::dump::Dump;
use crate::error::DumpError;

/// Type alias for a write-strategy.
///
/// Receives the sink to write to and reports failures through `DumpError`.
/// It owns no resource itself: opening and closing the sink is the dumper's
/// job.
pub type WriteStrategy = Arc<dyn Fn(&mut dyn Write) -> Result<(), DumpError> + Send + Sync>;

/// Decouples where content is saved from how it is produced.
///
/// Producers (patterns, SVG documents, ...) hand over a write-strategy once;
/// callers then pick the destination through the [`Dump`] methods.
///
/// ```rust
/// use std::io::Write;
/// use contentdump::{ContentDumper, Dump};
///
/// let dumper = ContentDumper::new(|w| {
///     writeln!(w, "<svg/>")?;
///     Ok(())
/// });
///
/// let text = dumper.string().unwrap();
/// let path = dumper.temporary_path().unwrap();
/// assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
/// std::fs::remove_file(path).unwrap();
/// ```
#[derive(Clone)]
pub struct ContentDumper {
    on_dump: WriteStrategy,
    options: DumpOptions,
}

impl std::fmt::Debug for ContentDumper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentDumper")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl ContentDumper {
    /// Create a dumper that calls `on_dump` with a sink on every save.
    pub fn new<F>(on_dump: F) -> Self
    where
        F: Fn(&mut dyn Write) -> Result<(), DumpError> + Send + Sync + 'static,
    {
        Self::from_strategy(Arc::new(on_dump))
    }

    /// Create a dumper from an already shared write-strategy.
    pub fn from_strategy(on_dump: WriteStrategy) -> Self {
        Self {
            on_dump,
            options: DumpOptions::default(),
        }
    }

    /// Replace the file options.
    pub fn with_options(mut self, options: DumpOptions) -> Self {
        self.options = options;
        self
    }

    /// The write-strategy, for composing into another dumper.
    pub fn strategy(&self) -> &WriteStrategy {
        &self.on_dump
    }
}

impl Dump for ContentDumper {
    fn dump(&self, writer: &mut dyn Write) -> Result<(), DumpError> {
        (self.on_dump)(writer)
    }

    fn options(&self) -> &DumpOptions {
        &self.options
    }
}
