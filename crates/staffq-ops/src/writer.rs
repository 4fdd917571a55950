//! JSON Lines output for query results.
//!
//! This module provides buffered writing of result rows, one JSON document
//! per line.

use crate::error::Result;
use serde::Serialize;
use std::io::{BufWriter, Write};

/// Writer for JSONL (JSON Lines) data.
///
/// `JsonlWriter` wraps a writer and provides buffered writing of JSONL
/// formatted data. Each value is serialized to a single line followed by a
/// newline character.
///
/// # Examples
///
/// ```
/// use staffq_ops::JsonlWriter;
///
/// # fn example() -> staffq_ops::Result<()> {
/// let mut writer = JsonlWriter::new(Vec::new());
/// writer.write(&("KING", 5000))?;
/// writer.write(&("FORD", 3000))?;
/// let bytes = writer.into_inner()?;
/// assert_eq!(String::from_utf8_lossy(&bytes), "[\"KING\",5000]\n[\"FORD\",3000]\n");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct JsonlWriter<W: Write> {
    /// Buffered writer wrapping the underlying writer.
    writer: BufWriter<W>,
    /// Number of lines written so far.
    lines: usize,
}

impl<W: Write> JsonlWriter<W> {
    /// Creates a new `JsonlWriter` wrapping the given writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            lines: 0,
        }
    }

    /// Creates a new `JsonlWriter` with a custom buffer capacity.
    #[must_use]
    pub fn with_capacity(writer: W, capacity: usize) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, writer),
            lines: 0,
        }
    }

    /// Serializes one value as a line.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying write fails.
    pub fn write<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.writer, value)?;
        self.writer.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    /// Serializes every value of `values`, one per line.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first serialization or write failure.
    pub fn write_all<'a, T, I>(&mut self, values: I) -> Result<()>
    where
        T: Serialize + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for value in values {
            self.write(value)?;
        }
        Ok(())
    }

    /// Number of lines written so far.
    #[must_use]
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Flushes buffered lines to the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying flush fails.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails.
    pub fn into_inner(self) -> Result<W> {
        tracing::trace!(lines = self.lines, "closing jsonl writer");
        self.writer
            .into_inner()
            .map_err(|e| crate::Error::Io(e.into_error()))
    }
}
