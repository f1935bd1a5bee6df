//! Bounded staging for formatted text
//!
//! Formatted box text is assembled in a [`StagingBuffer`] before it is
//! laid out. The buffer holds at most `capacity` characters and refuses
//! to grow past that; it never truncates.

use std::fmt::{self, Write};

use crate::error::{Error, Result};

/// Default staging capacity in characters
pub const FORMAT_CAPACITY: usize = 1024;

/// String buffer with a fixed character capacity
#[derive(Debug, Clone)]
pub struct StagingBuffer {
    buf: String,
    chars: usize,
    capacity: usize,
    overflowed: bool,
}

impl StagingBuffer {
    /// Create an empty buffer holding up to `capacity` characters
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::new(),
            chars: 0,
            capacity,
            overflowed: false,
        }
    }

    /// Format `args` into a fresh buffer
    pub fn format(capacity: usize, args: fmt::Arguments<'_>) -> Result<String> {
        let mut staging = Self::with_capacity(capacity);
        match staging.write_fmt(args) {
            // A Display impl may swallow the write error
            Ok(()) if staging.overflowed => Err(Error::FormatTooLong { capacity }),
            Ok(()) => Ok(staging.buf),
            Err(_) if staging.overflowed => Err(Error::FormatTooLong { capacity }),
            Err(e) => Err(Error::Format(e)),
        }
    }

    /// Characters staged so far
    pub fn len(&self) -> usize {
        self.chars
    }

    /// Whether nothing has been staged
    pub fn is_empty(&self) -> bool {
        self.chars == 0
    }

    /// Maximum number of characters
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Staged text
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

impl Write for StagingBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let incoming = s.chars().count();
        if self.chars + incoming > self.capacity {
            self.overflowed = true;
            return Err(fmt::Error);
        }
        self.buf.push_str(s);
        self.chars += incoming;
        Ok(())
    }
}
