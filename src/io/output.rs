//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

use crate::config::FileExistsPolicy;

/// A named destination that can be opened for writing.
///
/// Targets that have no notion of existing content (stdout, stderr) ignore
/// the policy.
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns an identifier for this target, used in log messages.
    ///
    /// Convention: "-" for stdout, file path for files.
    fn id(&self) -> &str;

    /// Open the target for writing according to `policy`.
    ///
    /// The returned writer is closed when dropped.
    fn open(&self, policy: FileExistsPolicy) -> std::io::Result<Box<dyn Write + Send>>;
}
