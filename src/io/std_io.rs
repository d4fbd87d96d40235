//! Output targets for files on disk and stdout.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::OutputTarget;
use crate::config::FileExistsPolicy;

/// Output target for printing a dump on stdout.
///
/// Stdout has no existing content to protect, so every policy behaves like
/// `Append`. Used by [`Dump::print`](crate::Dump::print).
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutput;

impl OutputTarget for StdoutOutput {
    fn id(&self) -> &str {
        "-"
    }

    fn open(&self, _policy: FileExistsPolicy) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stdout()))
    }
}

/// Output target for writing to a file on disk.
#[derive(Debug, Clone)]
pub struct FileOutput {
    id: String,
    path: PathBuf,
}

impl FileOutput {
    /// Create a new file output target.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file itself rather than a boxed writer.
    ///
    /// `Error` uses `create_new`, so the existence check and the creation are
    /// a single step.
    pub fn open_file(&self, policy: FileExistsPolicy) -> io::Result<File> {
        let mut options = OpenOptions::new();
        match policy {
            FileExistsPolicy::Overwrite => options.write(true).create(true).truncate(true),
            FileExistsPolicy::Append => options.append(true).create(true),
            FileExistsPolicy::Error => options.write(true).create_new(true),
        };
        options.open(&self.path)
    }
}

impl OutputTarget for FileOutput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self, policy: FileExistsPolicy) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(self.open_file(policy)?))
    }
}
