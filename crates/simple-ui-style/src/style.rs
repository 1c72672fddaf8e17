//! Component styles.
//!
//! A [`Style`] is the small set of named values components consult when they
//! are attached under a table or restyled: two colours and a text style.

use simple_ui_render::Color;

/// Horizontal alignment of text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Flush with the left edge.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush with the right edge.
    Right,
    /// Justified; single lines are placed like [`TextAlign::Center`].
    Justify,
}

impl TextAlign {
    /// Parse an alignment name (`left`, `center`, `right`, `justify`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" | "centre" => Some(Self::Center),
            "right" => Some(Self::Right),
            "justify" => Some(Self::Justify),
            _ => None,
        }
    }
}

/// Text appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font family name. Resolving it to glyphs is the renderer's job.
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Fill colour before tinting.
    pub fill: Color,
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Whether long text wraps at [`word_wrap_width`](Self::word_wrap_width).
    pub word_wrap: bool,
    /// Wrap width in pixels, used when `word_wrap` is set.
    pub word_wrap_width: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 26.0,
            fill: Color::BLACK,
            align: TextAlign::Center,
            word_wrap: false,
            word_wrap_width: 100.0,
        }
    }
}

/// The style consulted by components.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Colour for shadows, outlines, pips and text.
    pub shadow_colour: Color,
    /// Colour for panel faces.
    pub foreground_colour: Color,
    /// Text appearance.
    pub text: TextStyle,
}

impl Style {
    /// The built-in default style: dark grey shadows on white panels.
    pub fn default_theme() -> Self {
        Self {
            shadow_colour: Color::from_hex_rgb(0x333333),
            foreground_colour: Color::from_hex_rgb(0xFFFFFF),
            text: TextStyle::default(),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// A partial style; unset fields fall back to the default theme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverrides {
    pub shadow_colour: Option<Color>,
    pub foreground_colour: Option<Color>,
    pub text: Option<TextStyle>,
}

/// Build a complete style from overrides layered over the default theme.
pub fn make_style(overrides: StyleOverrides) -> Style {
    let base = Style::default_theme();
    Style {
        shadow_colour: overrides.shadow_colour.unwrap_or(base.shadow_colour),
        foreground_colour: overrides.foreground_colour.unwrap_or(base.foreground_colour),
        text: overrides.text.unwrap_or(base.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_colours() {
        let style = Style::default();
        assert_eq!(style.foreground_colour, Color::WHITE);
        assert_eq!(style.shadow_colour, Color::from_hex_rgb(0x333333));
        assert_eq!(style.text, TextStyle::default());
    }

    #[test]
    fn test_make_style_keeps_unset_fields() {
        let style = make_style(StyleOverrides {
            shadow_colour: Some(Color::RED),
            ..Default::default()
        });
        assert_eq!(style.shadow_colour, Color::RED);
        assert_eq!(style.foreground_colour, Style::default().foreground_colour);
    }

    #[test]
    fn test_text_align_names() {
        assert_eq!(TextAlign::from_name("Left"), Some(TextAlign::Left));
        assert_eq!(TextAlign::from_name(" centre "), Some(TextAlign::Center));
        assert_eq!(TextAlign::from_name("justify"), Some(TextAlign::Justify));
        assert_eq!(TextAlign::from_name("middle"), None);
    }
}
