//! Pretty printer for the generated Swagger documents.

use crate::error::SwaggerGenError;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io;

#[cfg(windows)]
const LINE_SEPARATOR: &[u8] = b"\r\n";
#[cfg(not(windows))]
const LINE_SEPARATOR: &[u8] = b"\n";

/// [`PrettyFormatter`] with two-space indentation that ends lines with the
/// platform line separator and writes empty containers as `{ }` and `[ ]`.
struct PlatformFormatter {
    inner: PrettyFormatter<'static>,
    /// Per open container, whether it has had a member yet.
    populated: Vec<bool>,
}

impl PlatformFormatter {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
            populated: Vec::new(),
        }
    }

    fn mark_populated(&mut self) {
        if let Some(populated) = self.populated.last_mut() {
            *populated = true;
        }
    }

    /// Close a container, padding it with a space when it stayed empty.
    fn close<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.populated.pop() == Some(false) {
            writer.write_all(b" ")?;
        }
        Ok(())
    }
}

/// Forwards to a writer, expanding every `\n` to [`LINE_SEPARATOR`]. String
/// contents never reach it raw: the serializer escapes their newlines.
struct LineWriter<W> {
    inner: W,
}

impl<W: io::Write> io::Write for LineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for (i, line) in buf.split(|b| *b == b'\n').enumerate() {
            if i > 0 {
                self.inner.write_all(LINE_SEPARATOR)?;
            }
            self.inner.write_all(line)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Formatter for PlatformFormatter {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.populated.push(false);
        self.inner.begin_array(&mut LineWriter { inner: writer })
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.close(writer)?;
        self.inner.end_array(&mut LineWriter { inner: writer })
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.mark_populated();
        self.inner
            .begin_array_value(&mut LineWriter { inner: writer }, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.populated.push(false);
        self.inner.begin_object(&mut LineWriter { inner: writer })
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.close(writer)?;
        self.inner.end_object(&mut LineWriter { inner: writer })
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.mark_populated();
        self.inner
            .begin_object_key(&mut LineWriter { inner: writer }, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}

/// Serialize `value` with two-space indentation, `": "` between keys and
/// values, and one member or element per line.
///
/// # Errors
///
/// Returns `SwaggerGenError::JsonError` if serialization fails.
pub fn to_pretty_string(value: &Value) -> Result<String, SwaggerGenError> {
    let mut buffer: Vec<u8> = Vec::new();
    let mut serializer: serde_json::Serializer<&mut Vec<u8>, PlatformFormatter> =
        serde_json::Serializer::with_formatter(&mut buffer, PlatformFormatter::new());
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|e| SwaggerGenError::GenericError(e.to_string()))
}
