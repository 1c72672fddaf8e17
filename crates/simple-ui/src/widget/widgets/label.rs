//! A text label that fits its text inside its bounds.
//!
//! The text is shrunk (never enlarged) to fit, aligned horizontally per the
//! label's alignment, and centred vertically. With word wrap on, lines wrap
//! at the label's width.

use std::sync::Arc;

use simple_ui_render::Point;
use simple_ui_style::{DefaultSizes, Style, TextAlign};

use super::component::StyleSlot;
use crate::widget::primitives::{MonospaceMeasure, TextMeasure, TextPart};
use crate::widget::{Node, NodeBase};

/// A fitted, aligned run of text.
pub struct Label {
    base: NodeBase,
    style: StyleSlot,
    text: TextPart,
    align: TextAlign,
    word_wrap: bool,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_measure(text, Arc::new(MonospaceMeasure))
    }

    /// Create a label that measures its text with `measure`.
    pub fn with_measure(text: impl Into<String>, measure: Arc<dyn TextMeasure>) -> Self {
        let mut label = Self {
            base: NodeBase::with_size(DefaultSizes::LABEL),
            style: StyleSlot::new(),
            text: TextPart::new(text, measure),
            align: TextAlign::Center,
            word_wrap: false,
        };
        label.apply_style();
        label
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.set_align(align);
        self
    }

    pub fn with_word_wrap(mut self, word_wrap: bool) -> Self {
        self.set_word_wrap(word_wrap);
        self
    }

    pub fn text(&self) -> &str {
        &self.text.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text.text = text.into();
        self.fit_text();
    }

    pub fn align(&self) -> TextAlign {
        self.align
    }

    pub fn set_align(&mut self, align: TextAlign) {
        self.align = align;
        self.apply_style();
    }

    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    pub fn set_word_wrap(&mut self, word_wrap: bool) {
        self.word_wrap = word_wrap;
        self.apply_style();
    }

    /// The laid-out text.
    pub fn text_part(&self) -> &TextPart {
        &self.text
    }

    pub fn style(&self) -> &Style {
        self.style.get()
    }

    pub fn set_style(&mut self, style: Option<Style>) {
        self.style.set_own(style);
        self.apply_style();
    }

    fn apply_style(&mut self) {
        let style = self.style.get();
        self.text.style = style.text.clone();
        self.text.style.align = self.align;
        self.text.style.word_wrap = self.word_wrap;
        self.text.tint = style.shadow_colour;
        self.fit_text();
    }

    fn fit_text(&mut self) {
        let bounds = self.base.size();
        self.text.wrap_width = bounds.width;
        self.text.scale = self.text.fit_scale(bounds);

        let size = self.text.size();
        let x = match self.align {
            TextAlign::Left => 0.0,
            TextAlign::Right => bounds.width - size.width,
            TextAlign::Center | TextAlign::Justify => (bounds.width - size.width) / 2.0,
        };
        self.text.position = Point::new(x, (bounds.height - size.height) / 2.0);
    }
}

impl std::fmt::Debug for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Label")
            .field("text", &self.text.text)
            .field("align", &self.align)
            .field("word_wrap", &self.word_wrap)
            .finish_non_exhaustive()
    }
}

impl Node for Label {
    fn node_base(&self) -> &NodeBase {
        &self.base
    }

    fn node_base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn size_changed(&mut self) {
        self.fit_text();
    }

    fn update_style(&mut self, style: &Style) {
        self.style.inherit(style);
        self.apply_style();
    }
}
