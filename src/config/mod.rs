//! Configuration types for dump destinations.
//!
//! This module provides:
//! - `FileExistsPolicy`: Policy for handling existing output files
//! - `DumpOptions`: Temporary-file placement and naming, file exists policy

mod options;
mod policy;

pub use options::DumpOptions;
pub use policy::FileExistsPolicy;
