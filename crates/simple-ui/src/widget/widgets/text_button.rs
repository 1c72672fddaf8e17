//! A button with a text caption.

use std::sync::Arc;

use simple_ui_core::Signal;
use simple_ui_render::Point;
use simple_ui_style::Style;

use super::button::Button;
use crate::layout::Anchor;
use crate::widget::primitives::{MonospaceMeasure, TextMeasure, TextPart};
use crate::widget::{Node, NodeBase};

/// A [`Button`] whose face shows a centred caption, shrunk to fit.
pub struct TextButton {
    button: Button,
    caption: TextPart,
}

impl TextButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_measure(text, Arc::new(MonospaceMeasure))
    }

    /// Create a text button that measures its caption with `measure`.
    pub fn with_measure(text: impl Into<String>, measure: Arc<dyn TextMeasure>) -> Self {
        let mut button = Self {
            button: Button::new(),
            caption: TextPart::new(text, measure).with_anchor(Anchor::CENTER),
        };
        button.apply_style();
        button.size_changed();
        button
    }

    pub fn clicked(&self) -> &Signal<()> {
        self.button.clicked()
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn caption(&self) -> &TextPart {
        &self.caption
    }

    pub fn text(&self) -> &str {
        &self.caption.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.caption.text = text.into();
        self.fit_caption();
    }

    pub fn style(&self) -> &Style {
        self.button.style()
    }

    pub fn set_style(&mut self, style: Option<Style>) {
        self.button.set_style(style);
        self.apply_style();
    }

    fn apply_style(&mut self) {
        let style = self.button.style();
        self.caption.style = style.text.clone();
        self.caption.tint = style.shadow_colour;
        self.fit_caption();
    }

    /// Centre the caption on the face at the largest scale up to 1.
    fn fit_caption(&mut self) {
        let face = self.button.face_size();
        self.caption.position = Point::new(face.width / 2.0, face.height / 2.0);
        self.caption.scale = self.caption.fit_scale(face);
    }

    pub fn pointer_over(&mut self) {
        self.button.pointer_over();
    }

    pub fn pointer_out(&mut self) {
        self.button.pointer_out();
    }

    pub fn pointer_down(&mut self) {
        self.button.pointer_down();
    }

    pub fn pointer_up_outside(&mut self) {
        self.button.pointer_up_outside();
    }

    pub fn pointer_up(&mut self) {
        self.button.pointer_up();
    }
}

impl std::fmt::Debug for TextButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextButton")
            .field("text", &self.caption.text)
            .field("button", &self.button)
            .finish()
    }
}

impl Node for TextButton {
    fn node_base(&self) -> &NodeBase {
        self.button.node_base()
    }

    fn node_base_mut(&mut self) -> &mut NodeBase {
        self.button.node_base_mut()
    }

    fn size_changed(&mut self) {
        self.button.size_changed();
        self.fit_caption();
    }

    fn update_style(&mut self, style: &Style) {
        self.button.update_style(style);
        self.apply_style();
    }
}
