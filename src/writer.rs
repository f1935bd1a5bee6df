//! Box output
//!
//! [`BoxWriter`] renders rows for a [`BoxConfig`] into any [`io::Write`]
//! sink. Each row is laid out and encoded in memory first and then
//! handed to the sink in one `write_all`, so a failing row never leaves
//! a half-drawn line behind. Rows written before a failure stay written.

use std::fmt;
use std::io::{self, Write};

use crate::border::Edge;
use crate::config::BoxConfig;
use crate::encoding::Encoding;
use crate::error::Result;
use crate::format::{StagingBuffer, FORMAT_CAPACITY};
use crate::layout::{self, BodyLines};

/// Writes box rows to a sink
#[derive(Debug)]
pub struct BoxWriter<'c, W: Write> {
    config: &'c BoxConfig,
    out: W,
    encoding: Encoding,
    format_capacity: usize,
    scratch: Vec<u8>,
    lines_written: usize,
}

impl<'c, W: Write> BoxWriter<'c, W> {
    /// UTF-8 writer
    pub fn new(config: &'c BoxConfig, out: W) -> Self {
        Self::with_encoding(config, out, Encoding::Utf8)
    }

    /// Writer emitting `encoding`
    pub fn with_encoding(config: &'c BoxConfig, out: W, encoding: Encoding) -> Self {
        Self {
            config,
            out,
            encoding,
            format_capacity: FORMAT_CAPACITY,
            scratch: Vec::with_capacity(config.outer_width() * 4 + 1),
            lines_written: 0,
        }
    }

    /// Change the staging capacity used by [`BoxWriter::formatted`]
    pub fn with_format_capacity(mut self, capacity: usize) -> Self {
        self.format_capacity = capacity;
        self
    }

    /// Configuration this writer renders
    pub fn config(&self) -> &BoxConfig {
        self.config
    }

    /// Output encoding
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Rows written so far
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Get a reference to the sink
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the writer, returning the sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Flush the sink
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Encode and write one complete row
    fn emit(&mut self, line: &str) -> Result<()> {
        self.scratch.clear();
        self.encoding.encode_into(line, &mut self.scratch)?;
        self.out.write_all(&self.scratch)?;
        self.lines_written += 1;
        Ok(())
    }

    /// Plain border row for `edge`
    pub fn border(&mut self, edge: Edge) -> Result<()> {
        let (start, end) = self.config.corners(edge);
        let line = layout::border_line(self.config, start, end);
        self.emit(&line)
    }

    /// Border row for `edge` with a centered caption
    pub fn border_with(&mut self, edge: Edge, caption: &str) -> Result<()> {
        let (start, end) = self.config.corners(edge);
        let line = layout::caption_line(self.config, start, end, caption)?;
        self.emit(&line)
    }

    /// Top border
    pub fn header(&mut self) -> Result<()> {
        self.border(Edge::Top)
    }

    /// Junction border between sections
    pub fn divider(&mut self) -> Result<()> {
        self.border(Edge::Middle)
    }

    /// Bottom border
    pub fn footer(&mut self) -> Result<()> {
        self.border(Edge::Bottom)
    }

    /// Top border with a caption
    pub fn header_with(&mut self, caption: &str) -> Result<()> {
        self.border_with(Edge::Top, caption)
    }

    /// Junction border with a caption
    pub fn divider_with(&mut self, caption: &str) -> Result<()> {
        self.border_with(Edge::Middle, caption)
    }

    /// Bottom border with a caption
    pub fn footer_with(&mut self, caption: &str) -> Result<()> {
        self.border_with(Edge::Bottom, caption)
    }

    /// Body rows for `text`, returning how many rows were written
    pub fn text(&mut self, text: &str) -> Result<usize> {
        let config = self.config;
        let mut rows = 0;
        for line in BodyLines::new(config, text) {
            self.emit(&layout::body_line(config, line.content))?;
            rows += 1;
        }
        tracing::trace!(rows, bytes = text.len(), "Rendered text block");
        Ok(rows)
    }

    /// Body rows for formatted text.
    ///
    /// The text is staged in a buffer bounded by the format capacity;
    /// nothing is written if it does not fit.
    pub fn formatted(&mut self, args: fmt::Arguments<'_>) -> Result<usize> {
        let text = StagingBuffer::format(self.format_capacity, args)?;
        self.text(&text)
    }

    /// Top border, `text`, divider
    pub fn header_multiline(&mut self, text: &str) -> Result<usize> {
        self.header()?;
        let rows = self.text(text)?;
        self.divider()?;
        Ok(rows + 2)
    }

    /// Divider, `text`, divider
    pub fn divider_multiline(&mut self, text: &str) -> Result<usize> {
        self.divider()?;
        let rows = self.text(text)?;
        self.divider()?;
        Ok(rows + 2)
    }

    /// Divider, `text`, bottom border
    pub fn footer_multiline(&mut self, text: &str) -> Result<usize> {
        self.divider()?;
        let rows = self.text(text)?;
        self.footer()?;
        Ok(rows + 2)
    }
}

/// Write formatted body text to a [`BoxWriter`]
///
/// ```
/// use printbox::{box_format, Border, BoxConfig, BoxWriter};
///
/// let config = BoxConfig::new(12, true, Border::Simple).unwrap();
/// let mut writer = BoxWriter::new(&config, Vec::new());
/// box_format!(writer, "{} rows", 3).unwrap();
/// assert_eq!(writer.into_inner(), b"| 3 rows       |\n");
/// ```
#[macro_export]
macro_rules! box_format {
    ($writer:expr, $($arg:tt)*) => {
        $writer.formatted(::std::format_args!($($arg)*))
    };
}
