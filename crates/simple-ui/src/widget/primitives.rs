//! Drawable parts components are built from.
//!
//! These are not scene nodes; a component owns its parts and re-fits them in
//! [`Node::size_changed`](super::Node::size_changed). A renderer reads them
//! back through the component's accessors.

use std::sync::Arc;

use simple_ui_render::{Color, Graphics, Point, Rect, Size};
use simple_ui_style::TextStyle;

use super::node::{Node, NodeBase};
use crate::layout::Anchor;

/// A named image and its pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    name: Arc<str>,
    size: Size,
}

impl Texture {
    /// Asset name of the rounded pane behind panels and buttons.
    pub const ROUNDED_PANE: &'static str = "simple-ui/rounded-md.png";
    /// Asset name of the circle used by round checkboxes.
    pub const CIRCLE: &'static str = "simple-ui/circle.png";
    /// Asset name of the cross pip.
    pub const CROSS: &'static str = "simple-ui/cross.png";
    /// Size assumed for the built-in assets.
    pub const BUILTIN_SIZE: Size = Size::new(64.0, 64.0);

    pub fn new(name: impl Into<Arc<str>>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// A built-in asset at [`BUILTIN_SIZE`](Self::BUILTIN_SIZE).
    pub fn builtin(name: &'static str) -> Self {
        Self::new(name, Self::BUILTIN_SIZE)
    }

    /// A 1x1 white texture, tinted to draw solid shapes.
    pub fn white() -> Self {
        Self::new("white", Size::new(1.0, 1.0))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

/// A textured quad with an anchor, a per-axis scale, an alpha and a tint.
///
/// `position` is where the anchor point lands in the owner's coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub texture: Texture,
    pub position: Point,
    pub anchor: Anchor,
    pub scale: (f32, f32),
    pub alpha: f32,
    pub tint: Color,
    pub visible: bool,
}

impl Sprite {
    pub fn new(texture: Texture) -> Self {
        Self {
            texture,
            position: Point::ZERO,
            anchor: Anchor::TOP_LEFT,
            scale: (1.0, 1.0),
            alpha: 1.0,
            tint: Color::WHITE,
            visible: true,
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Displayed size.
    pub fn size(&self) -> Size {
        let texture = self.texture.size();
        Size::new(texture.width * self.scale.0, texture.height * self.scale.1)
    }

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = (scale, scale);
    }

    /// Set the displayed width by scaling.
    pub fn set_width(&mut self, width: f32) {
        self.scale.0 = scale_for(width, self.texture.size().width);
    }

    /// Set the displayed height by scaling.
    pub fn set_height(&mut self, height: f32) {
        self.scale.1 = scale_for(height, self.texture.size().height);
    }

    /// Displayed rectangle, with the anchor applied.
    pub fn bounds(&self) -> Rect {
        let size = self.size();
        Rect::new(
            self.position.x - size.width * self.anchor.x,
            self.position.y - size.height * self.anchor.y,
            size.width,
            size.height,
        )
    }
}

fn scale_for(length: f32, natural: f32) -> f32 {
    if natural == 0.0 { 0.0 } else { length / natural }
}

/// A nine-slice pane stretched to a size without distorting its corners.
#[derive(Debug, Clone, PartialEq)]
pub struct NineSlice {
    pub texture: Texture,
    pub size: Size,
    pub tint: Color,
}

impl NineSlice {
    pub fn new(texture: Texture) -> Self {
        Self {
            texture,
            size: Size::ZERO,
            tint: Color::WHITE,
        }
    }
}

/// Measures text laid out with a style.
pub trait TextMeasure: Send + Sync {
    /// Unscaled size of `text`, wrapped at `wrap_width` when given.
    fn measure(&self, text: &str, style: &TextStyle, wrap_width: Option<f32>) -> Size;
}

/// Fixed-advance text metrics.
///
/// Every glyph advances `0.6 x font_size` and lines are `1.2 x font_size`
/// apart. Good enough to lay out without font assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceMeasure;

impl MonospaceMeasure {
    pub const ADVANCE: f32 = 0.6;
    pub const LINE_HEIGHT: f32 = 1.2;
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, style: &TextStyle, wrap_width: Option<f32>) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let advance = style.font_size * Self::ADVANCE;
        let max_chars = wrap_width
            .filter(|w| *w > 0.0 && advance > 0.0)
            .map(|w| ((w / advance).floor() as usize).max(1));

        let mut lines = 0usize;
        let mut widest = 0usize;
        for line in text.split('\n') {
            for wrapped in wrap_line(line, max_chars) {
                lines += 1;
                widest = widest.max(wrapped);
            }
        }
        Size::new(
            widest as f32 * advance,
            lines as f32 * style.font_size * Self::LINE_HEIGHT,
        )
    }
}

/// Greedy word wrap. Returns the character width of each produced line.
fn wrap_line(line: &str, max_chars: Option<usize>) -> Vec<usize> {
    let Some(max_chars) = max_chars else {
        return vec![line.chars().count()];
    };
    let mut widths = Vec::new();
    let mut current = 0usize;
    for word in line.split_whitespace() {
        let len = word.chars().count();
        if current == 0 {
            current = len;
        } else if current + 1 + len <= max_chars {
            current += 1 + len;
        } else {
            widths.push(current);
            current = len;
        }
    }
    widths.push(current);
    widths
}

/// A run of text with a uniform scale, anchored like a [`Sprite`].
#[derive(Clone)]
pub struct TextPart {
    pub text: String,
    pub style: TextStyle,
    pub position: Point,
    pub anchor: Anchor,
    pub scale: f32,
    pub tint: Color,
    /// Wrap width used when `style.word_wrap` is set.
    pub wrap_width: f32,
    measure: Arc<dyn TextMeasure>,
}

impl TextPart {
    pub fn new(text: impl Into<String>, measure: Arc<dyn TextMeasure>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
            position: Point::ZERO,
            anchor: Anchor::TOP_LEFT,
            scale: 1.0,
            tint: Color::WHITE,
            wrap_width: TextStyle::default().word_wrap_width,
            measure,
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Size before scaling.
    pub fn natural_size(&self) -> Size {
        let wrap = self.style.word_wrap.then_some(self.wrap_width);
        self.measure.measure(&self.text, &self.style, wrap)
    }

    /// Displayed size.
    pub fn size(&self) -> Size {
        self.natural_size().scale(self.scale)
    }

    /// The uniform scale that fits this text inside `bounds`, never above 1.
    pub fn fit_scale(&self, bounds: Size) -> f32 {
        let natural = self.natural_size();
        (bounds.width / natural.width)
            .min(bounds.height / natural.height)
            .min(1.0)
            .max(0.0)
    }

    /// Displayed rectangle, with the anchor applied.
    pub fn bounds(&self) -> Rect {
        let size = self.size();
        Rect::new(
            self.position.x - size.width * self.anchor.x,
            self.position.y - size.height * self.anchor.y,
            size.width,
            size.height,
        )
    }
}

impl std::fmt::Debug for TextPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPart")
            .field("text", &self.text)
            .field("position", &self.position)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

/// A node that holds retained drawing commands.
#[derive(Debug, Clone, Default)]
pub struct GraphicsNode {
    base: NodeBase,
    graphics: Graphics,
}

impl GraphicsNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graphics(&self) -> &Graphics {
        &self.graphics
    }

    pub fn graphics_mut(&mut self) -> &mut Graphics {
        &mut self.graphics
    }
}

impl Node for GraphicsNode {
    fn node_base(&self) -> &NodeBase {
        &self.base
    }

    fn node_base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }
}
