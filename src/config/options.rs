//! Options shared by every materialization method.

use std::io;
use std::path::PathBuf;

use serde::Deserialize;
use tempfile::NamedTempFile;

use super::FileExistsPolicy;

fn default_temp_prefix() -> String {
    "dump".into()
}

/// Placement and naming of dumped files.
///
/// All fields have defaults, so an empty JSON object or YAML document is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DumpOptions {
    /// Directory for temporary files; the OS temp directory when unset
    pub temp_dir: Option<PathBuf>,
    /// File name prefix of temporary files
    pub temp_prefix: String,
    /// File name suffix of temporary files, e.g. ".json"
    pub temp_suffix: String,
    /// File exists policy for `path()`: "overwrite", "append" or "error"
    pub file_exists_policy: Option<String>,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            temp_dir: None,
            temp_prefix: default_temp_prefix(),
            temp_suffix: String::new(),
            file_exists_policy: None,
        }
    }
}

impl DumpOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the temporary directory.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Set the temporary file name prefix.
    pub fn with_temp_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.temp_prefix = prefix.into();
        self
    }

    /// Set the temporary file name suffix.
    pub fn with_temp_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.temp_suffix = suffix.into();
        self
    }

    /// Set the file exists policy.
    pub fn with_file_exists_policy(mut self, policy: FileExistsPolicy) -> Self {
        self.file_exists_policy = Some(policy.to_string());
        self
    }

    /// Resolve the configured file exists policy.
    ///
    /// Unset means `Overwrite`. An unknown name is an `InvalidInput` error.
    pub fn policy(&self) -> io::Result<FileExistsPolicy> {
        match self.file_exists_policy.as_deref() {
            None => Ok(FileExistsPolicy::default()),
            Some(raw) => FileExistsPolicy::from_str(raw).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("unknown file exists policy: {raw}"),
                )
            }),
        }
    }

    /// Create a new, empty named temporary file according to these options.
    ///
    /// The file is opened for reading and writing and is deleted when the
    /// returned value is dropped, unless it is kept explicitly.
    pub fn create_temp_file(&self) -> io::Result<NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder
            .prefix(self.temp_prefix.as_str())
            .suffix(self.temp_suffix.as_str());
        match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
    }
}
