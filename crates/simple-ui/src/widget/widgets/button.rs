//! A push button drawn as two stacked panels.
//!
//! The foreground panel sits `OVERLAP` pixels above a shadow-coloured
//! background panel. Pressing moves the foreground down onto the background
//! and hides the background; releasing restores it and emits
//! [`clicked`](Button::clicked).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use simple_ui::widget::widgets::Button;
//!
//! let clicks = Arc::new(AtomicUsize::new(0));
//! let mut button = Button::new();
//! let counter = clicks.clone();
//! button.clicked().connect(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! button.pointer_down();
//! button.pointer_up();
//! assert_eq!(clicks.load(Ordering::SeqCst), 1);
//! ```

use simple_ui_core::Signal;
use simple_ui_core::logging::targets;
use simple_ui_render::{Point, Size};
use simple_ui_style::{DefaultSizes, Style};

use super::component::StyleSlot;
use super::panel::Panel;
use crate::widget::{Node, NodeBase};

/// A clickable button.
pub struct Button {
    base: NodeBase,
    style: StyleSlot,
    background: Panel,
    foreground: Panel,
    hovered: bool,
    pressed: bool,
    clicked: Signal<()>,
}

impl Button {
    /// Vertical offset between the foreground and background panels.
    pub const OVERLAP: f32 = 10.0;

    pub fn new() -> Self {
        let mut background = Panel::new();
        background.set_position(Point::new(0.0, Self::OVERLAP));
        let mut button = Self {
            base: NodeBase::with_size(DefaultSizes::BUTTON),
            style: StyleSlot::new(),
            background,
            foreground: Panel::new(),
            hovered: false,
            pressed: false,
            clicked: Signal::new(),
        };
        button.apply_style();
        button.size_changed();
        button
    }

    /// Emitted when the pointer is released over a pressed button.
    pub fn clicked(&self) -> &Signal<()> {
        &self.clicked
    }

    pub fn background(&self) -> &Panel {
        &self.background
    }

    pub fn foreground(&self) -> &Panel {
        &self.foreground
    }

    /// Size of the face panel, where content goes.
    pub fn face_size(&self) -> Size {
        self.foreground.size()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn style(&self) -> &Style {
        self.style.get()
    }

    /// Give the button its own style, or `None` to follow its table.
    pub fn set_style(&mut self, style: Option<Style>) {
        self.style.set_own(style);
        self.apply_style();
    }

    fn apply_style(&mut self) {
        let style = self.style.get().clone();
        self.background.update_style(&style);
        self.foreground.update_style(&style);
        self.background.node_base_mut().set_tint(style.shadow_colour);
        self.foreground.node_base_mut().set_tint(style.foreground_colour);
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    pub fn pointer_over(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_out(&mut self) {
        self.hovered = false;
    }

    pub fn pointer_down(&mut self) {
        self.pressed = true;
        self.foreground.set_position(Point::new(0.0, Self::OVERLAP));
        self.background.set_visible(false);
    }

    /// Release outside the button: restore without clicking.
    pub fn pointer_up_outside(&mut self) {
        self.pressed = false;
        self.foreground.set_position(Point::ZERO);
        self.background.set_visible(true);
    }

    pub fn pointer_up(&mut self) {
        self.pointer_up_outside();
        tracing::trace!(target: targets::WIDGET, "button clicked");
        self.clicked.emit(());
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("size", &self.base.size())
            .field("pressed", &self.pressed)
            .finish_non_exhaustive()
    }
}

impl Node for Button {
    fn node_base(&self) -> &NodeBase {
        &self.base
    }

    fn node_base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn size_changed(&mut self) {
        let size = self.base.size();
        let panel = Size::new(size.width, size.height - Self::OVERLAP);
        self.background.set_size(panel);
        self.foreground.set_size(panel);
    }

    fn update_style(&mut self, style: &Style) {
        self.style.inherit(style);
        self.apply_style();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_ui_render::Color;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(button: &Button) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        button.clicked().connect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_panels_leave_room_for_overlap() {
        let mut button = Button::new();
        assert_eq!(button.face_size(), Size::new(150.0, 40.0));
        button.set_size(Size::new(80.0, 30.0));
        assert_eq!(button.foreground().size(), Size::new(80.0, 20.0));
        assert_eq!(button.background().size(), Size::new(80.0, 20.0));
        assert_eq!(button.background().position(), Point::new(0.0, Button::OVERLAP));
    }

    #[test]
    fn test_press_and_release_clicks() {
        let mut button = Button::new();
        let clicks = counting(&button);

        button.pointer_down();
        assert!(button.is_pressed());
        assert_eq!(button.foreground().position(), Point::new(0.0, Button::OVERLAP));
        assert!(!button.background().is_visible());

        button.pointer_up();
        assert!(!button.is_pressed());
        assert_eq!(button.foreground().position(), Point::ZERO);
        assert!(button.background().is_visible());
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_release_outside_does_not_click() {
        let mut button = Button::new();
        let clicks = counting(&button);
        button.pointer_down();
        button.pointer_up_outside();
        assert!(button.background().is_visible());
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_panel_tints() {
        let mut button = Button::new();
        assert_eq!(
            button.background().node_base().tint(),
            Color::from_hex_rgb(0x333333)
        );
        assert_eq!(button.foreground().node_base().tint(), Color::WHITE);

        let mut own = Style::default_theme();
        own.shadow_colour = Color::RED;
        button.set_style(Some(own));
        // An inherited style does not override the button's own.
        button.update_style(&Style::default_theme());
        assert_eq!(button.background().node_base().tint(), Color::RED);
    }
}
