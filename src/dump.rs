//! The `Dump` trait: one write-strategy, many destinations.

use std::io::{self, BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use tempfile::NamedTempFile;

use crate::config::{DumpOptions, FileExistsPolicy};
use crate::error::DumpError;
use crate::io::{CountingWriter, FileOutput, OutputTarget, StdoutOutput, TemporaryDump};

static DEFAULT_OPTIONS: LazyLock<DumpOptions> = LazyLock::new(DumpOptions::default);

/// Something that can write its content to a sink.
///
/// Implementors only provide [`Dump::dump`]; every materialization method
/// (`string`, `file`, `path`, ...) is derived from it. Each call runs the
/// write-strategy exactly once and shares no state with other calls.
///
/// # Example
///
/// ```rust
/// use std::io::Write;
/// use contentdump::{ContentDumper, Dump};
///
/// let dumper = ContentDumper::new(|w| {
///     w.write_all(b"hello")?;
///     Ok(())
/// });
/// assert_eq!(dumper.string().unwrap(), "hello");
/// ```
pub trait Dump {
    /// Write the content to `writer`.
    fn dump(&self, writer: &mut dyn Write) -> Result<(), DumpError>;

    /// Options used by the file based methods.
    fn options(&self) -> &DumpOptions {
        &DEFAULT_OPTIONS
    }

    /// Return the dump as raw bytes.
    fn bytes(&self) -> Result<Vec<u8>, DumpError> {
        let mut buf = Vec::new();
        self.dump(&mut buf)?;
        log::debug!("dumped {} bytes to memory", buf.len());
        Ok(buf)
    }

    /// Return the dump as a string.
    ///
    /// Fails with [`DumpError::Utf8`] if the content is not valid UTF-8.
    fn string(&self) -> Result<String, DumpError> {
        Ok(String::from_utf8(self.bytes()?)?)
    }

    /// Dump into a fresh in-memory buffer.
    ///
    /// The returned cursor is positioned after the content; seek to the start
    /// before reading from it.
    fn file(&self) -> Result<Cursor<Vec<u8>>, DumpError> {
        let mut cursor = Cursor::new(Vec::new());
        self.dump(&mut cursor)?;
        log::debug!("dumped {} bytes to a new buffer", cursor.position());
        Ok(cursor)
    }

    /// Dump into a stream owned by the caller and hand it back.
    ///
    /// The stream is only borrowed, so it is never closed here. Its position
    /// afterwards points behind the dumped content.
    fn file_into<'w, W>(&self, writer: &'w mut W) -> Result<&'w mut W, DumpError>
    where
        W: Write,
        Self: Sized,
    {
        let mut counting = CountingWriter::new(&mut *writer);
        self.dump(&mut counting)?;
        log::debug!("dumped {} bytes to a caller stream", counting.written());
        Ok(writer)
    }

    /// Save the dump in the file at `path`.
    ///
    /// Existing files are handled according to the configured
    /// [`FileExistsPolicy`] (truncated by default). The file is closed before
    /// this returns, whether the write succeeded or not.
    fn path<P>(&self, path: P) -> Result<(), DumpError>
    where
        P: AsRef<Path>,
        Self: Sized,
    {
        let path = path.as_ref();
        let policy = self.options().policy()?;
        let file = FileOutput::new(path)
            .open_file(policy)
            .map_err(|e| open_error(policy, path, e))?;

        let mut writer = CountingWriter::new(BufWriter::new(file));
        self.dump(&mut writer)?;
        let written = writer.written();
        // Drop would discard a flush error
        writer.into_inner().into_inner().map_err(|e| e.into_error())?;
        log::debug!("dumped {written} bytes to {} ({policy})", path.display());
        Ok(())
    }

    /// Save the dump in a new temporary file and return its path.
    ///
    /// The file is closed but **not deleted**: the caller is responsible for
    /// removing it. Use [`Dump::temporary_file`] to get a file that cleans up
    /// after itself.
    fn temporary_path(&self) -> Result<PathBuf, DumpError> {
        let file = dump_to_temp_file(self)?;
        let (file, path) = file.keep().map_err(io::Error::from)?;
        drop(file);
        log::trace!("keeping temporary dump {}", path.display());
        Ok(path)
    }

    /// Save the dump in a new temporary file and return the open handle.
    ///
    /// The handle is positioned after the content. With `delete_on_close` the
    /// file is removed when the handle is closed or dropped; without it the
    /// caller must delete the file, as with [`Dump::temporary_path`].
    fn temporary_file(&self, delete_on_close: bool) -> Result<TemporaryDump, DumpError> {
        let file = dump_to_temp_file(self)?;
        Ok(TemporaryDump::new(file, delete_on_close)?)
    }

    /// Print the dump on stdout.
    fn print(&self) -> Result<(), DumpError> {
        self.target(&StdoutOutput, FileExistsPolicy::Append)
    }

    /// Write the dump to an arbitrary output target.
    ///
    /// The writer opened on the target is flushed and dropped before this
    /// returns. A target refused under [`FileExistsPolicy::Error`] is reported
    /// as [`DumpError::Exists`] naming the target id, as for [`Dump::path`].
    fn target(&self, target: &dyn OutputTarget, policy: FileExistsPolicy) -> Result<(), DumpError> {
        let mut out = target
            .open(policy)
            .map_err(|e| open_error(policy, Path::new(target.id()), e))?;
        let mut writer = CountingWriter::new(&mut out);
        self.dump(&mut writer)?;
        writer.flush()?;
        log::debug!(
            "dumped {} bytes to target '{}' ({policy})",
            writer.written(),
            target.id()
        );
        Ok(())
    }
}

/// Map a failure to open a destination.
///
/// Under `FileExistsPolicy::Error` an `AlreadyExists` failure is the policy
/// refusing the destination, not an I/O fault.
fn open_error(policy: FileExistsPolicy, destination: &Path, error: io::Error) -> DumpError {
    if policy == FileExistsPolicy::Error && error.kind() == io::ErrorKind::AlreadyExists {
        DumpError::Exists(destination.to_path_buf())
    } else {
        DumpError::Io(error)
    }
}

/// Write a dump into a fresh temporary file.
///
/// On failure the temporary file is dropped, which deletes it.
fn dump_to_temp_file<D: Dump + ?Sized>(dumper: &D) -> Result<NamedTempFile, DumpError> {
    let mut file = dumper.options().create_temp_file()?;
    log::trace!("created temporary dump {}", file.path().display());
    {
        let mut writer = CountingWriter::new(BufWriter::new(file.as_file_mut()));
        dumper.dump(&mut writer)?;
        let written = writer.written();
        writer.into_inner().into_inner().map_err(|e| e.into_error())?;
        log::debug!("dumped {written} bytes to {}", file.path().display());
    }
    Ok(file)
}
