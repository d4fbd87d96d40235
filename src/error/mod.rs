//! Error type for dump operations.
//!
//! Every variant is a transparent wrapper: the message and `source()` are the
//! ones of the underlying platform, serializer or caller error. Nothing is
//! retried or translated on the way out.

use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors returned by the materialization methods.
#[derive(Debug, Error)]
pub enum DumpError {
    /// I/O error while opening, writing or closing a destination
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The dumped bytes are not valid UTF-8 text
    #[error(transparent)]
    Utf8(#[from] FromUtf8Error),

    /// Failure raised by a caller-supplied write-strategy or object-provider
    #[error(transparent)]
    Provider(Box<dyn std::error::Error + Send + Sync>),

    /// The destination (file path or target id) already exists and the policy
    /// forbids touching it
    #[error("refusing to overwrite existing file: {}", .0.display())]
    Exists(PathBuf),
}

impl DumpError {
    /// Wrap an arbitrary caller error.
    pub fn provider<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        DumpError::Provider(error.into())
    }

    /// The underlying I/O error, if this is one.
    pub fn as_io(&self) -> Option<&std::io::Error> {
        match self {
            DumpError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
