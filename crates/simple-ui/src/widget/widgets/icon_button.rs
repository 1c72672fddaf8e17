//! A button with an icon.

use simple_ui_core::Signal;
use simple_ui_render::{Point, Size};
use simple_ui_style::{DefaultSizes, Style};

use super::button::Button;
use crate::layout::Anchor;
use crate::widget::primitives::{Sprite, Texture};
use crate::widget::{Node, NodeBase};

/// A [`Button`] with a centred icon covering at most 80% of its face.
#[derive(Debug)]
pub struct IconButton {
    button: Button,
    icon: Sprite,
}

impl IconButton {
    /// Fraction of the face the icon may cover.
    pub const ICON_PROPORTION: f32 = 0.8;

    pub fn new(icon: Texture) -> Self {
        let mut button = Self {
            button: Button::new(),
            icon: Sprite::new(icon).with_anchor(Anchor::CENTER),
        };
        button.apply_style();
        let side = DefaultSizes::BUTTON.height;
        button.set_size(Size::new(side, side + Button::OVERLAP));
        button
    }

    pub fn clicked(&self) -> &Signal<()> {
        self.button.clicked()
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn icon(&self) -> &Sprite {
        &self.icon
    }

    pub fn style(&self) -> &Style {
        self.button.style()
    }

    pub fn set_style(&mut self, style: Option<Style>) {
        self.button.set_style(style);
        self.apply_style();
    }

    fn apply_style(&mut self) {
        self.icon.tint = self.button.style().shadow_colour;
    }

    fn fit_icon(&mut self) {
        let face = self.button.face_size();
        let texture = self.icon.texture.size();
        self.icon.position = Point::new(face.width / 2.0, face.height / 2.0);
        let scale = (face.width * Self::ICON_PROPORTION / texture.width)
            .min(face.height * Self::ICON_PROPORTION / texture.height)
            .min(1.0)
            .max(0.0);
        self.icon.set_uniform_scale(scale);
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

impl Node for IconButton {
    fn node_base(&self) -> &NodeBase {
        self.button.node_base()
    }

    fn node_base_mut(&mut self) -> &mut NodeBase {
        self.button.node_base_mut()
    }

    fn size_changed(&mut self) {
        self.button.size_changed();
        self.fit_icon();
    }

    fn update_style(&mut self, style: &Style) {
        self.button.update_style(style);
        self.apply_style();
    }
}
