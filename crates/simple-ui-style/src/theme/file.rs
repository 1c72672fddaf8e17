//! TOML theme files.
//!
//! ```toml
//! name = "night"
//! shadow_colour = "#111111"
//! foreground_colour = "#EEEEEE"
//!
//! [text]
//! font_family = "pixel"
//! font_size = 18.0
//! fill = "#FFFFFF"
//! align = "left"
//! ```
//!
//! Every field is optional. Missing fields keep the default theme's value.

use serde::Deserialize;
use simple_ui_render::Color;

use crate::error::{Error, Result};
use crate::style::{Style, StyleOverrides, TextAlign, TextStyle, make_style};

/// The on-disk shape of a theme.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeFile {
    pub name: Option<String>,
    pub shadow_colour: Option<String>,
    pub foreground_colour: Option<String>,
    pub text: Option<TextSection>,
}

/// The `[text]` table of a theme file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextSection {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub fill: Option<String>,
    pub align: Option<String>,
    pub word_wrap: Option<bool>,
    pub word_wrap_width: Option<f32>,
}

impl ThemeFile {
    /// Resolve the file into a complete style.
    pub fn into_style(self) -> Result<Style> {
        let text = match self.text {
            Some(section) => Some(section.into_text_style()?),
            None => None,
        };
        Ok(make_style(StyleOverrides {
            shadow_colour: parse_colour("shadow_colour", self.shadow_colour.as_deref())?,
            foreground_colour: parse_colour(
                "foreground_colour",
                self.foreground_colour.as_deref(),
            )?,
            text,
        }))
    }
}

impl TextSection {
    fn into_text_style(self) -> Result<TextStyle> {
        let mut text = TextStyle::default();
        if let Some(family) = self.font_family {
            text.font_family = family;
        }
        if let Some(size) = self.font_size {
            if !size.is_finite() || size <= 0.0 {
                return Err(Error::invalid_value("text.font_size", format!("{size} is not a positive size")));
            }
            text.font_size = size;
        }
        if let Some(fill) = parse_colour("text.fill", self.fill.as_deref())? {
            text.fill = fill;
        }
        if let Some(align) = self.align {
            text.align = TextAlign::from_name(&align)
                .ok_or_else(|| Error::invalid_value("text.align", format!("unknown alignment '{align}'")))?;
        }
        if let Some(wrap) = self.word_wrap {
            text.word_wrap = wrap;
        }
        if let Some(width) = self.word_wrap_width {
            text.word_wrap_width = width;
        }
        Ok(text)
    }
}

fn parse_colour(property: &str, value: Option<&str>) -> Result<Option<Color>> {
    value
        .map(|hex| {
            Color::from_hex(hex)
                .ok_or_else(|| Error::invalid_value(property, format!("'{hex}' is not a #RRGGBB or #RRGGBBAA colour")))
        })
        .transpose()
}

/// Parse TOML theme text into its name and style.
///
/// A theme parsed from text must declare its `name`.
pub fn parse_theme(source: &str) -> Result<(String, Style)> {
    let file: ThemeFile = toml::from_str(source)?;
    let name = file
        .name
        .clone()
        .ok_or_else(|| Error::invalid_value("name", "theme text must declare a name"))?;
    Ok((name, file.into_style()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_theme() {
        let source = r##"
            name = "night"
            shadow_colour = "#111111"
            foreground_colour = "#EEEEEE"

            [text]
            font_family = "pixel"
            font_size = 18.0
            fill = "#FFFFFF"
            align = "left"
            word_wrap = true
        "##;
        let (name, style) = parse_theme(source).unwrap();
        assert_eq!(name, "night");
        assert_eq!(style.shadow_colour, Color::from_hex_rgb(0x111111));
        assert_eq!(style.foreground_colour, Color::from_hex_rgb(0xEEEEEE));
        assert_eq!(style.text.font_family, "pixel");
        assert_eq!(style.text.font_size, 18.0);
        assert_eq!(style.text.fill, Color::WHITE);
        assert_eq!(style.text.align, TextAlign::Left);
        assert!(style.text.word_wrap);
    }

    #[test]
    fn test_missing_fields_fall_back_to_default() {
        let (_, style) = parse_theme("name = \"plain\"").unwrap();
        assert_eq!(style, Style::default_theme());
    }

    #[test]
    fn test_bad_colour_is_invalid_value() {
        let err = parse_theme("name = \"x\"\nshadow_colour = \"grey\"").unwrap_err();
        match err {
            Error::InvalidValue { property, .. } => assert_eq!(property, "shadow_colour"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = parse_theme("name = \"x\"\nbackground = \"#000000\"").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_text_without_name_is_rejected() {
        let err = parse_theme("shadow_colour = \"#000000\"").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
    }

    #[test]
    fn test_non_positive_font_size_is_rejected() {
        let err = parse_theme("name = \"x\"\n[text]\nfont_size = 0.0").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
    }
}
