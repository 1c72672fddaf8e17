//! Default component sizes.

use simple_ui_render::Size;

/// Natural sizes components take when created.
pub struct DefaultSizes;

impl DefaultSizes {
    /// Buttons, and the height used for square controls.
    pub const BUTTON: Size = Size::new(150.0, 50.0);
    /// Labels.
    pub const LABEL: Size = Size::new(150.0, 50.0);
    /// Dividers.
    pub const DIVIDER: Size = Size::new(150.0, 2.0);
    /// Fraction of a divider's width the visible line covers.
    pub const DIVIDER_PROPORTION: f32 = 0.8;
    /// Panels.
    pub const PANEL: Size = Size::new(200.0, 200.0);
}
