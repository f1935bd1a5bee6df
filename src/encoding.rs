//! Output encodings
//!
//! Rendered lines are built as Rust strings and converted to bytes only
//! when they reach the sink. The target encoding is chosen per writer,
//! so two writers may emit the same box in different encodings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Byte encoding used when writing rendered lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// UTF-8, every character is representable
    #[default]
    #[serde(alias = "utf-8")]
    Utf8,
    /// ISO-8859-1, one byte per character up to U+00FF
    #[serde(alias = "iso-8859-1")]
    Latin1,
    /// 7-bit ASCII
    Ascii,
}

impl Encoding {
    /// Look up an encoding by name (`utf8`, `latin1`, `ascii` and the
    /// usual hyphenated spellings)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Some(Encoding::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Some(Encoding::Latin1),
            "ascii" | "us-ascii" => Some(Encoding::Ascii),
            _ => None,
        }
    }

    /// Whether `ch` can be written in this encoding
    pub fn can_encode(&self, ch: char) -> bool {
        match self {
            Encoding::Utf8 => true,
            Encoding::Latin1 => u32::from(ch) <= 0xFF,
            Encoding::Ascii => ch.is_ascii(),
        }
    }

    /// Append the encoded form of `text` to `out`.
    ///
    /// On failure `out` is left as it was, so a partially encoded line is
    /// never handed to the sink.
    pub fn encode_into(&self, text: &str, out: &mut Vec<u8>) -> Result<()> {
        if let Encoding::Utf8 = self {
            out.extend_from_slice(text.as_bytes());
            return Ok(());
        }

        if let Some(ch) = text.chars().find(|&ch| !self.can_encode(ch)) {
            return Err(Error::Unencodable { ch, encoding: *self });
        }
        // Both remaining encodings map code points 1:1 onto bytes
        out.extend(text.chars().map(|ch| u32::from(ch) as u8));
        Ok(())
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Latin1 => "ISO-8859-1",
            Encoding::Ascii => "ASCII",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        let mut out = Vec::new();
        Encoding::Utf8.encode_into("┌─┐ é", &mut out).unwrap();
        assert_eq!(out, "┌─┐ é".as_bytes());
    }

    #[test]
    fn test_latin1() {
        let mut out = Vec::new();
        Encoding::Latin1.encode_into("+é|", &mut out).unwrap();
        assert_eq!(out, vec![b'+', 0xE9, b'|']);
    }

    #[test]
    fn test_latin1_rejects_box_drawing() {
        let mut out = b"kept".to_vec();
        let err = Encoding::Latin1.encode_into("+─+", &mut out).unwrap_err();
        assert!(matches!(
            err,
            Error::Unencodable {
                ch: '─',
                encoding: Encoding::Latin1
            }
        ));
        assert_eq!(out, b"kept");
    }

    #[test]
    fn test_ascii() {
        let mut out = Vec::new();
        Encoding::Ascii.encode_into("| ok |\n", &mut out).unwrap();
        assert_eq!(out, b"| ok |\n");
        assert!(Encoding::Ascii.encode_into("é", &mut out).is_err());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Encoding::from_name("UTF-8"), Some(Encoding::Utf8));
        assert_eq!(Encoding::from_name("latin1"), Some(Encoding::Latin1));
        assert_eq!(Encoding::from_name("ascii"), Some(Encoding::Ascii));
        assert_eq!(Encoding::from_name("koi8-r"), None);
    }

    #[test]
    fn test_serde_names() {
        let enc: Encoding = serde_json::from_str("\"latin1\"").unwrap();
        assert_eq!(enc, Encoding::Latin1);
        assert_eq!(serde_json::to_string(&Encoding::Utf8).unwrap(), "\"utf8\"");
    }
}
