//! Box configuration
//!
//! [`BoxConfig`] is the immutable description of a box: its interior
//! width, whether body text is word-wrapped, and the border glyphs.
//! [`BoxSettings`] is the serializable form read from settings files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::border::{Border, Edge, Glyphs};
use crate::encoding::Encoding;
use crate::error::{ConfigError, Result};

/// Immutable box configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxConfig {
    content_width: usize,
    word_wrap: bool,
    glyphs: Glyphs,
}

impl BoxConfig {
    /// Build a box configuration.
    ///
    /// `content_width` counts text columns only, not the padding space on
    /// either side of the text or the border glyphs.
    pub fn new(content_width: usize, word_wrap: bool, border: Border) -> Result<Self> {
        if content_width == 0 {
            return Err(ConfigError::ZeroWidth.into());
        }
        let glyphs = border.glyphs();
        glyphs.validate()?;

        tracing::debug!(
            content_width,
            word_wrap,
            border = border.name(),
            "Box configured"
        );
        Ok(Self {
            content_width,
            word_wrap,
            glyphs,
        })
    }

    /// Interior text columns
    pub fn content_width(&self) -> usize {
        self.content_width
    }

    /// Total columns of every rendered row, borders included
    pub fn outer_width(&self) -> usize {
        self.content_width + 4
    }

    /// Whether body text breaks on word boundaries
    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    /// Border glyphs
    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// Start and end glyph for a border row
    pub fn corners(&self, edge: Edge) -> (char, char) {
        self.glyphs.corners(edge)
    }
}

/// Settings file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxSettings {
    /// Interior text columns
    pub width: usize,
    /// Break body text on word boundaries
    pub word_wrap: bool,
    /// Preset name: `simple`, `single`, `double` or `custom`
    pub border: String,
    /// Eight glyphs for the `custom` preset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyphs: Option<String>,
    /// Output encoding
    pub encoding: Encoding,
}

impl Default for BoxSettings {
    fn default() -> Self {
        Self {
            width: 76,
            word_wrap: true,
            border: "single".to_string(),
            glyphs: None,
            encoding: Encoding::Utf8,
        }
    }
}

impl BoxSettings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded settings from {}", path.as_ref().display());
        Self::from_json(&contents)
    }

    /// Serialize settings to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Border preset described by these settings.
    ///
    /// Custom glyphs win over the preset name whenever they are present.
    pub fn border(&self) -> Result<Border> {
        let custom = self.border.trim().eq_ignore_ascii_case("custom");
        match (&self.glyphs, custom) {
            (Some(glyphs), _) => Ok(Border::Custom(Glyphs::parse(glyphs)?)),
            (None, true) => Err(ConfigError::GlyphCount { found: 0 }.into()),
            (None, false) => Ok(Border::from_name(&self.border)),
        }
    }

    /// Build the box configuration
    pub fn to_config(&self) -> Result<BoxConfig> {
        BoxConfig::new(self.width, self.word_wrap, self.border()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_new_config() {
        let config = BoxConfig::new(20, true, Border::Single).unwrap();
        assert_eq!(config.content_width(), 20);
        assert_eq!(config.outer_width(), 24);
        assert!(config.word_wrap());
        assert_eq!(config.glyphs(), &Glyphs::SINGLE);
        assert_eq!(config.corners(Edge::Bottom), ('└', '┘'));
    }

    #[test]
    fn test_custom_glyphs() {
        let glyphs = Glyphs::from_array(['#', '#', '#', '#', '#', '#', '-', '|']);
        let config = BoxConfig::new(20, false, Border::Custom(glyphs)).unwrap();
        assert_eq!(config.glyphs().top_left, '#');
        assert_eq!(config.glyphs().top_right, '#');
        assert_eq!(config.glyphs().horizontal, '-');
        assert_eq!(config.glyphs().vertical, '|');
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = BoxConfig::new(0, true, Border::Simple).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ZeroWidth)));
    }

    #[test]
    fn test_wide_glyph_rejected() {
        let glyphs = Glyphs::from_array(['+', '+', '+', '+', '+', '+', '＝', '|']);
        let err = BoxConfig::new(10, true, Border::Custom(glyphs)).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::GlyphWidth { glyph: '＝' })
        ));
    }

    #[test]
    fn test_config_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BoxConfig>();
    }

    #[test]
    fn test_settings_defaults() {
        let settings = BoxSettings::from_json("{}").unwrap();
        assert_eq!(settings, BoxSettings::default());

        let config = settings.to_config().unwrap();
        assert_eq!(config.content_width(), 76);
        assert!(config.word_wrap());
        assert_eq!(config.glyphs(), &Glyphs::SINGLE);
    }

    #[test]
    fn test_settings_custom() {
        let settings = BoxSettings::from_json(
            r#"{ "width": 12, "word_wrap": false, "border": "custom", "glyphs": "**++**-|", "encoding": "latin1" }"#,
        )
        .unwrap();
        assert_eq!(settings.encoding, Encoding::Latin1);

        let config = settings.to_config().unwrap();
        assert_eq!(config.content_width(), 12);
        assert!(!config.word_wrap());
        assert_eq!(config.corners(Edge::Middle), ('+', '+'));
        assert_eq!(config.corners(Edge::Top), ('*', '*'));
    }

    #[test]
    fn test_settings_custom_without_glyphs() {
        let settings = BoxSettings {
            border: "custom".to_string(),
            ..Default::default()
        };
        let err = settings.to_config().unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::GlyphCount { found: 0 })
        ));
    }

    #[test]
    fn test_settings_unknown_border_falls_back() {
        let settings = BoxSettings::from_json(r#"{ "border": "heavy" }"#).unwrap();
        assert_eq!(settings.to_config().unwrap().glyphs(), &Glyphs::SIMPLE);
    }

    #[test]
    fn test_settings_negative_width_rejected() {
        let err = BoxSettings::from_json(r#"{ "width": -5 }"#).unwrap_err();
        assert!(matches!(err, Error::Settings(_)));
    }

    #[test]
    fn test_settings_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "width": 30, "border": "double" }}"#).unwrap();

        let settings = BoxSettings::load(file.path()).unwrap();
        let config = settings.to_config().unwrap();
        assert_eq!(config.content_width(), 30);
        assert_eq!(config.glyphs(), &Glyphs::DOUBLE);
    }

    #[test]
    fn test_settings_json_roundtrip() {
        let settings = BoxSettings {
            width: 40,
            glyphs: Some("╔╗╠╣╚╝═║".to_string()),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(BoxSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_settings_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BoxSettings::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
