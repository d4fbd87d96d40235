//! Format-specific dumpers.
//!
//! This module provides:
//! - `JsonDumper`: serializes the value of an object-provider to JSON
//! - `JsonStyle`: layout of the emitted JSON text

#[cfg(feature = "json")]
mod json;

#[cfg(feature = "json")]
pub use json::{JsonDumper, JsonStyle, ObjectProvider};
