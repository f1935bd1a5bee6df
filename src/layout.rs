//! Box layout engine
//!
//! Pure line builders: every function here returns complete rows
//! (terminated by `\n`) without touching any output. Body widths are
//! counted in characters, captions in display columns; border glyphs are
//! validated to be one column wide.
//!
//! Row shapes for a box with content width `w`:
//!
//! ```text
//! ┌──────────┐   border line: start, w + 2 horizontals, end
//! ├─ title ──┤   caption line: same width, caption centered
//! │ text     │   body line: vertical, space, w chars, space, vertical
//! └──────────┘
//! ```

use unicode_width::UnicodeWidthStr;

use crate::config::BoxConfig;
use crate::error::{Error, Result};

/// Plain border row: `start`, `content_width + 2` horizontal glyphs, `end`
pub fn border_line(config: &BoxConfig, start: char, end: char) -> String {
    let h = config.glyphs().horizontal;
    let mut line = String::with_capacity((config.outer_width() + 1) * 4);
    line.push(start);
    line.extend(std::iter::repeat(h).take(config.content_width() + 2));
    line.push(end);
    line.push('\n');
    line
}

/// Split the columns around a caption.
///
/// `caption_len` is the caption's display width in columns. Returns
/// `(left, right)` padding widths, each including the single space that
/// separates the caption from the horizontal run. An odd remainder goes
/// to the right side.
pub fn caption_padding(content_width: usize, caption_len: usize) -> Result<(usize, usize)> {
    if caption_len > content_width {
        return Err(Error::CaptionTooLong {
            len: caption_len,
            max: content_width,
        });
    }
    let total = content_width - caption_len + 2;
    let left = total / 2;
    Ok((left, total - left))
}

/// Border row with a centered caption: `start`, horizontals, space,
/// caption, space, horizontals, `end`. Same width as [`border_line`].
///
/// Captions are measured in display columns, so wide characters take
/// two. Control characters are rejected since they would break the row.
pub fn caption_line(config: &BoxConfig, start: char, end: char, caption: &str) -> Result<String> {
    if let Some(ch) = caption.chars().find(|c| c.is_control()) {
        return Err(Error::InvalidCaption { ch });
    }
    let (left, right) = caption_padding(config.content_width(), caption.width())?;
    let h = config.glyphs().horizontal;

    let mut line = String::with_capacity((config.outer_width() + 1) * 4);
    line.push(start);
    line.extend(std::iter::repeat(h).take(left - 1));
    line.push(' ');
    line.push_str(caption);
    line.push(' ');
    line.extend(std::iter::repeat(h).take(right - 1));
    line.push(end);
    line.push('\n');
    Ok(line)
}

/// Body row for one content span, padded with spaces to the content width
pub fn body_line(config: &BoxConfig, content: &str) -> String {
    let v = config.glyphs().vertical;
    let pad = config
        .content_width()
        .saturating_sub(content.chars().count());

    let mut line = String::with_capacity(content.len() + pad + 12);
    line.push(v);
    line.push(' ');
    line.push_str(content);
    line.extend(std::iter::repeat(' ').take(pad));
    line.push(' ');
    line.push(v);
    line.push('\n');
    line
}

/// Why a body line ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Break {
    /// Embedded newline, consumed by this line
    Newline,
    /// Word-wrap break at a whitespace character, which is dropped
    Word(char),
    /// Line filled up in the middle of a run of characters
    Hard,
    /// End of text
    End,
}

impl Break {
    /// Input text consumed by the break itself
    pub fn separator(&self) -> Option<char> {
        match self {
            Break::Newline => Some('\n'),
            Break::Word(ch) => Some(*ch),
            Break::Hard | Break::End => None,
        }
    }
}

/// One line of body text before padding and borders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLine<'a> {
    /// Characters shown on this line
    pub content: &'a str,
    /// Number of characters in `content`
    pub width: usize,
    /// How the line ended
    pub brk: Break,
}

/// Splits text into box-width lines.
///
/// Always yields at least one line, so empty text produces a single
/// blank row. A trailing newline does not start another line.
#[derive(Debug, Clone)]
pub struct BodyLines<'a> {
    text: &'a str,
    cursor: usize,
    width: usize,
    word_wrap: bool,
    finished: bool,
}

impl<'a> BodyLines<'a> {
    /// Lines of `text` laid out for `config`
    pub fn new(config: &BoxConfig, text: &'a str) -> Self {
        Self::with_width(text, config.content_width(), config.word_wrap())
    }

    /// Lines of `text` for an explicit width; `width` must be non-zero
    pub(crate) fn with_width(text: &'a str, width: usize, word_wrap: bool) -> Self {
        debug_assert!(width > 0);
        Self {
            text,
            cursor: 0,
            width,
            word_wrap,
            finished: false,
        }
    }
}

impl<'a> Iterator for BodyLines<'a> {
    type Item = BodyLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let text = self.text;
        let start = self.cursor;
        let mut pos = start;
        let mut count = 0;
        // Byte offset, character and column of the last whitespace seen
        let mut last_space: Option<(usize, char, usize)> = None;

        while count < self.width {
            let Some(ch) = text[pos..].chars().next() else {
                break;
            };
            if ch == '\n' {
                break;
            }
            if ch.is_whitespace() {
                last_space = Some((pos, ch, count));
            }
            pos += ch.len_utf8();
            count += 1;
        }

        let line = match (text[pos..].chars().next(), last_space) {
            (Some(next), Some((at, space, col))) if self.word_wrap && !next.is_whitespace() => {
                self.cursor = at + space.len_utf8();
                BodyLine {
                    content: &text[start..at],
                    width: col,
                    brk: Break::Word(space),
                }
            }
            (Some('\n'), _) => {
                self.cursor = pos + 1;
                BodyLine {
                    content: &text[start..pos],
                    width: count,
                    brk: Break::Newline,
                }
            }
            (next, _) => {
                self.cursor = pos;
                BodyLine {
                    content: &text[start..pos],
                    width: count,
                    brk: if next.is_some() { Break::Hard } else { Break::End },
                }
            }
        };

        self.finished = self.cursor >= text.len();
        tracing::trace!(
            start,
            next = self.cursor,
            width = line.width,
            brk = ?line.brk,
            "Laid out body line"
        );
        Some(line)
    }
}

impl std::iter::FusedIterator for BodyLines<'_> {}

/// Fully decorated body rows for `text`
pub fn text_lines<'a>(config: &'a BoxConfig, text: &'a str) -> impl Iterator<Item = String> + 'a {
    BodyLines::new(config, text).map(move |line| body_line(config, line.content))
}
