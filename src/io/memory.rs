//! In-memory output target.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use super::OutputTarget;
use crate::config::FileExistsPolicy;

/// In-memory output sink.
///
/// Clones share the same buffer, so a sink handed to `Dump::target` can be
/// inspected afterwards.
#[derive(Debug, Clone)]
pub struct InMemorySink {
    id: String,
    buf: Arc<Mutex<Vec<u8>>>,
}

impl InMemorySink {
    /// Create a new empty in-memory sink.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            buf: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        // a panicking writer cannot leave the Vec itself inconsistent
        self.buf.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get the contents of the sink as bytes.
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Get the contents of the sink as a string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clear the sink contents.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl OutputTarget for InMemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self, policy: FileExistsPolicy) -> io::Result<Box<dyn Write + Send>> {
        match policy {
            FileExistsPolicy::Overwrite => self.clear(),
            FileExistsPolicy::Append => {}
            FileExistsPolicy::Error if !self.is_empty() => {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("in-memory sink '{}' already holds content", self.id),
                ));
            }
            FileExistsPolicy::Error => {}
        }
        Ok(Box::new(InMemoryWriteHandle {
            sink: self.clone(),
        }))
    }
}

/// Write handle for in-memory sink.
#[derive(Debug)]
struct InMemoryWriteHandle {
    sink: InMemorySink,
}

impl Write for InMemoryWriteHandle {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.sink.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
