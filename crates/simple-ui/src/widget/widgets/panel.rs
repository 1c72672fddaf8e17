//! A rounded, tinted pane.

use simple_ui_style::{DefaultSizes, Style};

use super::component::StyleSlot;
use crate::widget::primitives::{NineSlice, Texture};
use crate::widget::{Node, NodeBase};

/// A nine-slice pane filling the node, tinted with the foreground colour.
#[derive(Debug, Clone)]
pub struct Panel {
    base: NodeBase,
    style: StyleSlot,
    pane: NineSlice,
}

impl Panel {
    pub fn new() -> Self {
        let mut panel = Self {
            base: NodeBase::with_size(DefaultSizes::PANEL),
            style: StyleSlot::new(),
            pane: NineSlice::new(Texture::builtin(Texture::ROUNDED_PANE)),
        };
        panel.apply_style();
        panel.size_changed();
        panel
    }

    pub fn pane(&self) -> &NineSlice {
        &self.pane
    }

    pub fn style(&self) -> &Style {
        self.style.get()
    }

    /// Give the panel its own style, or `None` to follow its table.
    pub fn set_style(&mut self, style: Option<Style>) {
        self.style.set_own(style);
        self.apply_style();
    }

    fn apply_style(&mut self) {
        self.pane.tint = self.style.get().foreground_colour;
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for Panel {
    fn node_base(&self) -> &NodeBase {
        &self.base
    }

    fn node_base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn size_changed(&mut self) {
        self.pane.size = self.base.size();
    }

    fn update_style(&mut self, style: &Style) {
        self.style.inherit(style);
        self.apply_style();
    }
}
