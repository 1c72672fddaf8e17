//! A horizontal rule.

use simple_ui_render::Point;
use simple_ui_style::{DefaultSizes, Style};

use super::component::StyleSlot;
use crate::layout::Anchor;
use crate::widget::primitives::{Sprite, Texture};
use crate::widget::{Node, NodeBase};

/// A centred line, 80% of the node's width, in the shadow colour.
#[derive(Debug, Clone)]
pub struct Divider {
    base: NodeBase,
    style: StyleSlot,
    line: Sprite,
}

impl Divider {
    pub fn new() -> Self {
        let mut divider = Self {
            base: NodeBase::with_size(DefaultSizes::DIVIDER),
            style: StyleSlot::new(),
            line: Sprite::new(Texture::white()).with_anchor(Anchor::TOP),
        };
        divider.apply_style();
        divider.size_changed();
        divider
    }

    pub fn line(&self) -> &Sprite {
        &self.line
    }

    pub fn style(&self) -> &Style {
        self.style.get()
    }

    pub fn set_style(&mut self, style: Option<Style>) {
        self.style.set_own(style);
        self.apply_style();
    }

    fn apply_style(&mut self) {
        self.line.tint = self.style.get().shadow_colour;
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for Divider {
    fn node_base(&self) -> &NodeBase {
        &self.base
    }

    fn node_base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn size_changed(&mut self) {
        let size = self.base.size();
        self.line.position = Point::new(size.width / 2.0, 0.0);
        self.line.set_width(size.width * DefaultSizes::DIVIDER_PROPORTION);
        self.line.set_height(size.height);
    }

    fn update_style(&mut self, style: &Style) {
        self.style.inherit(style);
        self.apply_style();
    }
}
