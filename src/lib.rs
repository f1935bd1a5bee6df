//! Printbox
//!
//! Renders plain text inside a bordered, fixed-width box on a
//! character-cell output stream:
//!
//! - `border`: border glyph sets (ASCII, single-line, double-line, custom)
//! - `config`: immutable box configuration and settings files
//! - `layout`: the line builders and the word-wrap engine
//! - `writer`: writes rows to any `io::Write` in a chosen encoding
//!
//! ```
//! use printbox::{Border, BoxConfig, BoxWriter};
//!
//! let config = BoxConfig::new(10, true, Border::Single).unwrap();
//! let mut writer = BoxWriter::new(&config, Vec::new());
//! writer.header_with("demo").unwrap();
//! writer.text("hello world foo").unwrap();
//! writer.footer().unwrap();
//!
//! let out = String::from_utf8(writer.into_inner()).unwrap();
//! assert_eq!(
//!     out,
//!     "┌─── demo ───┐\n│ hello      │\n│ world foo  │\n└────────────┘\n"
//! );
//! ```

pub mod border;
pub mod config;
pub mod encoding;
pub mod error;
pub mod format;
pub mod layout;
pub mod writer;

pub use border::{Border, Edge, Glyphs};
pub use config::{BoxConfig, BoxSettings};
pub use encoding::Encoding;
pub use error::{ConfigError, Error, Result};
pub use format::{StagingBuffer, FORMAT_CAPACITY};
pub use layout::{BodyLine, BodyLines, Break};
pub use writer::BoxWriter;
