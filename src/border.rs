//! Border glyph sets
//!
//! A box border is drawn from eight glyphs: six corner/junction glyphs
//! for the header, divider and footer rows, plus the horizontal and
//! vertical edge glyphs. Glyph sets are always complete; presets and
//! custom sets are resolved into a [`Glyphs`] value in one step.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use crate::error::ConfigError;

/// Number of glyphs in a complete border set
pub const GLYPH_COUNT: usize = 8;

/// The eight glyphs that make up a box border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Glyphs {
    pub top_left: char,
    pub top_right: char,
    pub mid_left: char,
    pub mid_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl Glyphs {
    /// Plain ASCII border: `+`, `-` and `|`
    pub const SIMPLE: Glyphs = Glyphs::from_array(['+', '+', '+', '+', '+', '+', '-', '|']);
    /// Single-line box drawing
    pub const SINGLE: Glyphs = Glyphs::from_array(['┌', '┐', '├', '┤', '└', '┘', '─', '│']);
    /// Double-line box drawing
    pub const DOUBLE: Glyphs = Glyphs::from_array(['╔', '╗', '╠', '╣', '╚', '╝', '═', '║']);

    /// Build a glyph set from its fixed order: top-left, top-right,
    /// mid-left, mid-right, bottom-left, bottom-right, horizontal, vertical
    pub const fn from_array(glyphs: [char; GLYPH_COUNT]) -> Self {
        let [top_left, top_right, mid_left, mid_right, bottom_left, bottom_right, horizontal, vertical] =
            glyphs;
        Self {
            top_left,
            top_right,
            mid_left,
            mid_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
        }
    }

    /// Parse a glyph set from a string of exactly eight characters in
    /// [`Glyphs::from_array`] order
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let chars: Vec<char> = s.chars().collect();
        let glyphs: [char; GLYPH_COUNT] = chars
            .as_slice()
            .try_into()
            .map_err(|_| ConfigError::GlyphCount { found: chars.len() })?;
        Ok(Self::from_array(glyphs))
    }

    /// The glyphs in [`Glyphs::from_array`] order
    pub fn to_array(&self) -> [char; GLYPH_COUNT] {
        [
            self.top_left,
            self.top_right,
            self.mid_left,
            self.mid_right,
            self.bottom_left,
            self.bottom_right,
            self.horizontal,
            self.vertical,
        ]
    }

    /// Start and end glyph for a border row
    pub fn corners(&self, edge: Edge) -> (char, char) {
        match edge {
            Edge::Top => (self.top_left, self.top_right),
            Edge::Middle => (self.mid_left, self.mid_right),
            Edge::Bottom => (self.bottom_left, self.bottom_right),
        }
    }

    /// Check that every glyph occupies exactly one terminal column
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.to_array().into_iter().find(|g| g.width() != Some(1)) {
            Some(glyph) => Err(ConfigError::GlyphWidth { glyph }),
            None => Ok(()),
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs::SIMPLE
    }
}

/// Which border row to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Header row (top corners)
    Top,
    /// Divider row (junctions)
    Middle,
    /// Footer row (bottom corners)
    Bottom,
}

/// Border preset selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    /// Caller-supplied glyphs
    Custom(Glyphs),
    /// ASCII `+-|`
    #[default]
    Simple,
    /// Single-line box drawing `┌─┐│├┤└┘`
    Single,
    /// Double-line box drawing `╔═╗║╠╣╚╝`
    Double,
}

impl Border {
    /// Resolve the preset into its glyph set
    pub fn glyphs(&self) -> Glyphs {
        match self {
            Border::Custom(glyphs) => *glyphs,
            Border::Simple => Glyphs::SIMPLE,
            Border::Single => Glyphs::SINGLE,
            Border::Double => Glyphs::DOUBLE,
        }
    }

    /// Look up a named preset.
    ///
    /// Unknown names resolve to [`Border::Simple`]; an unrecognized preset
    /// is a fallback, not an error. `custom` has no glyphs of its own and
    /// takes the same path, callers with glyphs build [`Border::Custom`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "simple" | "ascii" => Border::Simple,
            "single" => Border::Single,
            "double" => Border::Double,
            other => {
                tracing::debug!("Unknown border preset {:?}, using simple", other);
                Border::Simple
            }
        }
    }

    /// Preset name as accepted by [`Border::from_name`]
    pub fn name(&self) -> &'static str {
        match self {
            Border::Custom(_) => "custom",
            Border::Simple => "simple",
            Border::Single => "single",
            Border::Double => "double",
        }
    }
}

impl From<Glyphs> for Border {
    fn from(glyphs: Glyphs) -> Self {
        Border::Custom(glyphs)
    }
}
