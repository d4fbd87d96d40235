//! JSON dumper implementation.

use std::io::{self, Write};
use std::sync::Arc;

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};

use crate::config::DumpOptions;
use crate::dump::Dump;
use crate::dumper::ContentDumper;
use crate::error::DumpError;

/// Type alias for an object-provider.
///
/// Called once per materialization; its value is encoded and then dropped.
pub type ObjectProvider<T> = Arc<dyn Fn() -> Result<T, DumpError> + Send + Sync>;

/// Layout of the emitted JSON text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// `{"a":1,"b":[1,2,3]}`
    Compact,
    /// `{"a": 1, "b": [1, 2, 3]}`
    #[default]
    Spaced,
    /// Indented with two spaces, one entry per line
    Pretty,
}

/// Single-line output with a space after every `,` and `:`.
#[derive(Debug, Clone, Copy, Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

fn encode<T, F>(value: &T, writer: &mut dyn Write, formatter: F) -> Result<(), DumpError>
where
    T: Serialize,
    F: Formatter,
{
    let mut ser = Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)?;
    Ok(())
}

/// A dumper that writes an object as JSON.
///
/// The object-provider is invoked afresh for every materialization, so the
/// output always reflects the current state of whatever it reads from.
///
/// ```rust
/// use contentdump::{Dump, JsonDumper};
/// use serde_json::json;
///
/// let dumper = JsonDumper::new(|| Ok(json!({"a": 1, "b": [1, 2, 3]})));
/// assert_eq!(dumper.string().unwrap(), r#"{"a": 1, "b": [1, 2, 3]}"#);
/// ```
pub struct JsonDumper<T> {
    provider: ObjectProvider<T>,
    style: JsonStyle,
    dumper: ContentDumper,
}

impl<T> Clone for JsonDumper<T> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            style: self.style,
            dumper: self.dumper.clone(),
        }
    }
}

impl<T> std::fmt::Debug for JsonDumper<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonDumper")
            .field("style", &self.style)
            .field("dumper", &self.dumper)
            .finish_non_exhaustive()
    }
}

impl<T> JsonDumper<T>
where
    T: Serialize + 'static,
{
    /// Create a JSON dumper from an object-provider.
    pub fn new<F>(provider: F) -> Self
    where
        F: Fn() -> Result<T, DumpError> + Send + Sync + 'static,
    {
        Self::from_parts(Arc::new(provider), JsonStyle::default(), DumpOptions::default())
    }

    /// Create a JSON dumper that always encodes a copy of `value`.
    pub fn from_value(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::new(move || Ok(value.clone()))
    }

    fn from_parts(provider: ObjectProvider<T>, style: JsonStyle, options: DumpOptions) -> Self {
        let source = provider.clone();
        let dumper = ContentDumper::new(move |writer| {
            let object = source()?;
            match style {
                JsonStyle::Compact => encode(&object, writer, CompactFormatter),
                JsonStyle::Spaced => encode(&object, writer, SpacedFormatter),
                JsonStyle::Pretty => encode(&object, writer, PrettyFormatter::new()),
            }
        })
        .with_options(options);

        Self {
            provider,
            style,
            dumper,
        }
    }

    /// Set the JSON layout.
    pub fn with_style(self, style: JsonStyle) -> Self {
        let options = self.dumper.options().clone();
        Self::from_parts(self.provider, style, options)
    }

    /// Shorthand for `with_style(JsonStyle::Pretty)`.
    pub fn pretty(self) -> Self {
        self.with_style(JsonStyle::Pretty)
    }

    /// Replace the file options.
    pub fn with_options(self, options: DumpOptions) -> Self {
        Self::from_parts(self.provider, self.style, options)
    }
}

impl<T> JsonDumper<T> {
    /// Return the object that would be dumped, without encoding it.
    pub fn object(&self) -> Result<T, DumpError> {
        (self.provider)()
    }

    /// The JSON layout in use.
    pub fn style(&self) -> JsonStyle {
        self.style
    }

    /// The plain dumper this one is composed of.
    pub fn as_content_dumper(&self) -> &ContentDumper {
        &self.dumper
    }
}

impl<T> Dump for JsonDumper<T> {
    fn dump(&self, writer: &mut dyn Write) -> Result<(), DumpError> {
        self.dumper.dump(writer)
    }

    fn options(&self) -> &DumpOptions {
        self.dumper.options()
    }
}
