//! Error types for box rendering

use std::{fmt, io};

use thiserror::Error;

use crate::encoding::Encoding;

/// Box rendering error type
#[derive(Error, Debug)]
pub enum Error {
    /// The box could not be configured
    #[error("Invalid box configuration: {0}")]
    Config(#[from] ConfigError),

    /// Caption does not fit between the corners of a border line
    #[error("Caption is {len} columns wide, the border has room for {max}")]
    CaptionTooLong { len: usize, max: usize },

    /// Caption holds a control character and would not stay on one row
    #[error("Caption contains control character {ch:?}")]
    InvalidCaption { ch: char },

    /// Formatted text does not fit in the staging buffer
    #[error("Formatted text exceeds the staging buffer of {capacity} characters")]
    FormatTooLong { capacity: usize },

    /// A `Display` implementation failed while formatting
    #[error("Formatting failed")]
    Format(#[from] fmt::Error),

    /// Character has no representation in the output encoding
    #[error("Cannot encode {ch:?} as {encoding}")]
    Unencodable { ch: char, encoding: Encoding },

    /// Malformed settings document
    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// Writing to the output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Reasons a [`BoxConfig`](crate::BoxConfig) cannot be built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Content width must be at least one column
    #[error("content width must be at least 1")]
    ZeroWidth,

    /// Custom borders take exactly eight glyphs
    #[error("custom border needs 8 glyphs, got {found}")]
    GlyphCount { found: usize },

    /// Every glyph must occupy exactly one terminal column
    #[error("glyph {glyph:?} is not a single-column character")]
    GlyphWidth { glyph: char },
}

/// Result type for box operations
pub type Result<T> = std::result::Result<T, Error>;
