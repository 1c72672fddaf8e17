//! A toggleable checkbox.
//!
//! The checkbox draws a background (a panel, or a circle sprite) with a pip
//! centred on top. The pip is fully shown when checked, hidden when not, and
//! half shown while the pointer hovers.

use simple_ui_core::Signal;
use simple_ui_core::logging::targets;
use simple_ui_render::{Point, Size};
use simple_ui_style::{DefaultSizes, Style};

use super::component::StyleSlot;
use super::panel::Panel;
use crate::layout::Anchor;
use crate::widget::primitives::{Sprite, Texture};
use crate::widget::{Node, NodeBase};

/// Shape of a checkbox's pip or background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckboxType {
    #[default]
    Cross,
    Circle,
}

impl CheckboxType {
    fn texture(self) -> Texture {
        match self {
            CheckboxType::Cross => Texture::builtin(Texture::CROSS),
            CheckboxType::Circle => Texture::builtin(Texture::CIRCLE),
        }
    }
}

/// What is drawn behind the pip.
#[derive(Debug, Clone)]
pub enum CheckboxBackground {
    Panel(Panel),
    Circle(Sprite),
}

/// Pip opacity while hovered.
const HOVER_ALPHA: f32 = 0.5;
/// Fraction of the checkbox the pip covers.
const PIP_PROPORTION: f32 = 0.5;

/// A two-state toggle.
pub struct Checkbox {
    base: NodeBase,
    style: StyleSlot,
    background: CheckboxBackground,
    pip: Sprite,
    checked: bool,
    toggled: Signal<bool>,
}

impl Checkbox {
    /// A checkbox with a cross pip on a panel.
    pub fn new() -> Self {
        Self::with_types(CheckboxType::Cross, None)
    }

    /// A checkbox with the given pip, and a background of `outer` type.
    ///
    /// Without an outer type the background matches the pip.
    pub fn with_types(inner: CheckboxType, outer: Option<CheckboxType>) -> Self {
        let background = match outer.unwrap_or(inner) {
            CheckboxType::Circle => CheckboxBackground::Circle(Sprite::new(CheckboxType::Circle.texture())),
            CheckboxType::Cross => CheckboxBackground::Panel(Panel::new()),
        };
        let mut pip = Sprite::new(inner.texture()).with_anchor(Anchor::CENTER);
        pip.alpha = 0.0;

        let side = DefaultSizes::BUTTON.height;
        let mut checkbox = Self {
            base: NodeBase::with_size(Size::new(side, side)),
            style: StyleSlot::new(),
            background,
            pip,
            checked: false,
            toggled: Signal::new(),
        };
        checkbox.apply_style();
        checkbox.size_changed();
        checkbox
    }

    /// Emitted with the new state when the user toggles the checkbox.
    pub fn toggled(&self) -> &Signal<bool> {
        &self.toggled
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the state without emitting [`toggled`](Self::toggled).
    pub fn set_checked(&mut self, checked: bool) {
        if self.checked == checked {
            return;
        }
        self.checked = checked;
        self.pip.alpha = self.resting_alpha();
    }

    pub fn background(&self) -> &CheckboxBackground {
        &self.background
    }

    pub fn pip(&self) -> &Sprite {
        &self.pip
    }

    pub fn style(&self) -> &Style {
        self.style.get()
    }

    pub fn set_style(&mut self, style: Option<Style>) {
        self.style.set_own(style);
        self.apply_style();
    }

    fn apply_style(&mut self) {
        let style = self.style.get().clone();
        match &mut self.background {
            CheckboxBackground::Panel(panel) => {
                panel.update_style(&style);
                panel.node_base_mut().set_tint(style.foreground_colour);
            }
            CheckboxBackground::Circle(sprite) => sprite.tint = style.foreground_colour,
        }
        self.pip.tint = style.shadow_colour;
    }

    fn resting_alpha(&self) -> f32 {
        if self.checked { 1.0 } else { 0.0 }
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    pub fn pointer_over(&mut self) {
        self.pip.alpha = HOVER_ALPHA;
    }

    pub fn pointer_out(&mut self) {
        self.pip.alpha = self.resting_alpha();
    }

    pub fn pointer_down(&mut self) {}

    pub fn pointer_up_outside(&mut self) {
        self.pip.alpha = self.resting_alpha();
    }

    /// Release over the checkbox: toggle and emit.
    pub fn pointer_up(&mut self) {
        self.set_checked(!self.checked);
        tracing::trace!(target: targets::WIDGET, checked = self.checked, "checkbox toggled");
        self.toggled.emit(self.checked);
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkbox")
            .field("size", &self.base.size())
            .field("checked", &self.checked)
            .finish_non_exhaustive()
    }
}

impl Node for Checkbox {
    fn node_base(&self) -> &NodeBase {
        &self.base
    }

    fn node_base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn size_changed(&mut self) {
        let size = self.base.size();
        match &mut self.background {
            CheckboxBackground::Panel(panel) => panel.set_size(size),
            CheckboxBackground::Circle(sprite) => {
                sprite.set_width(size.width);
                sprite.set_height(size.height);
            }
        }

        let texture = self.pip.texture.size();
        self.pip.position = Point::new(size.width / 2.0, size.height / 2.0);
        let scale = (size.width * PIP_PROPORTION / texture.width)
            .min(size.height * PIP_PROPORTION / texture.height);
        self.pip.set_uniform_scale(scale);
    }

    fn update_style(&mut self, style: &Style) {
        self.style.inherit(style);
        self.apply_style();
    }
}
