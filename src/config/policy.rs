//! File exists policy.

use std::fmt;

/// Policy for handling existing output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileExistsPolicy {
    /// Truncate existing files
    #[default]
    Overwrite,
    /// Append to existing files
    Append,
    /// Return an error if file exists
    Error,
}

impl FileExistsPolicy {
    /// Parse a policy from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" | "truncate" => Some(FileExistsPolicy::Overwrite),
            "append" => Some(FileExistsPolicy::Append),
            "error" => Some(FileExistsPolicy::Error),
            _ => None,
        }
    }
}

impl fmt::Display for FileExistsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileExistsPolicy::Overwrite => write!(f, "overwrite"),
            FileExistsPolicy::Append => write!(f, "append"),
            FileExistsPolicy::Error => write!(f, "error"),
        }
    }
}
