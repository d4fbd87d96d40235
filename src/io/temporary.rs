//! Handle to a temporary file holding a dump.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

#[derive(Debug)]
enum Storage {
    /// Removed from disk when closed or dropped
    Deleting(NamedTempFile),
    /// Left on disk; the owner of the handle must remove it
    Kept { file: File, path: PathBuf },
}

/// An open temporary file that a dump was written to.
///
/// The read/write position starts right after the dumped content; call
/// [`TemporaryDump::rewind`] before reading it back.
///
/// Whether the file outlives the handle depends on how it was created:
///
/// - with `delete_on_close = true` the file is removed by [`close`] or when
///   the handle is dropped;
/// - with `delete_on_close = false` closing only releases the descriptor.
///   The file stays in the temporary directory and **the caller is
///   responsible for deleting it**, e.g. with `std::fs::remove_file(path)`.
///
/// [`close`]: TemporaryDump::close
#[derive(Debug)]
pub struct TemporaryDump {
    storage: Storage,
}

impl TemporaryDump {
    pub(crate) fn new(file: NamedTempFile, delete_on_close: bool) -> io::Result<Self> {
        let storage = if delete_on_close {
            Storage::Deleting(file)
        } else {
            let (file, path) = file.keep()?;
            log::trace!("keeping temporary dump {}", path.display());
            Storage::Kept { file, path }
        };
        Ok(Self { storage })
    }

    /// Location of the file on disk.
    pub fn path(&self) -> &Path {
        match &self.storage {
            Storage::Deleting(file) => file.path(),
            Storage::Kept { path, .. } => path,
        }
    }

    /// Whether closing or dropping this handle removes the file.
    pub fn deletes_on_close(&self) -> bool {
        matches!(self.storage, Storage::Deleting(_))
    }

    /// The underlying file.
    pub fn as_file(&self) -> &File {
        match &self.storage {
            Storage::Deleting(file) => file.as_file(),
            Storage::Kept { file, .. } => file,
        }
    }

    /// The underlying file, mutably.
    pub fn as_file_mut(&mut self) -> &mut File {
        match &mut self.storage {
            Storage::Deleting(file) => file.as_file_mut(),
            Storage::Kept { file, .. } => file,
        }
    }

    /// Seek back to the start of the content.
    pub fn rewind(&mut self) -> io::Result<()> {
        self.as_file_mut().seek(SeekFrom::Start(0)).map(|_| ())
    }

    /// Read the whole content as text, from the beginning.
    ///
    /// Leaves the position at the end of the content.
    pub fn contents_string(&mut self) -> io::Result<String> {
        self.rewind()?;
        let mut content = String::new();
        self.as_file_mut().read_to_string(&mut content)?;
        Ok(content)
    }

    /// Close the handle.
    ///
    /// Deletes the file if the handle was created with `delete_on_close`,
    /// reporting a failed removal instead of ignoring it as `Drop` does.
    pub fn close(self) -> io::Result<()> {
        match self.storage {
            Storage::Deleting(file) => {
                let path = file.path().to_path_buf();
                file.close()?;
                log::trace!("deleted temporary dump {}", path.display());
                Ok(())
            }
            Storage::Kept { file, path } => {
                drop(file);
                log::trace!("closed temporary dump {}, file kept", path.display());
                Ok(())
            }
        }
    }

    /// Close the handle without deleting the file and return its path.
    ///
    /// From here on the caller owns the file.
    pub fn keep(self) -> io::Result<PathBuf> {
        let path = match self.storage {
            Storage::Deleting(file) => file.keep()?.1,
            Storage::Kept { path, .. } => path,
        };
        log::trace!("keeping temporary dump {}", path.display());
        Ok(path)
    }
}

impl Read for TemporaryDump {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.as_file_mut().read(buf)
    }
}

impl Write for TemporaryDump {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.as_file_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.as_file_mut().flush()
    }
}

impl Seek for TemporaryDump {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.as_file_mut().seek(pos)
    }
}
