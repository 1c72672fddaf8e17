//! The node trait and its shared base state.
//!
//! Every visual object a [`Scene`](super::Scene) stores implements [`Node`].
//! Implementations hold a [`NodeBase`] and delegate the common geometry and
//! visibility state to it.
//!
//! # Example
//!
//! ```
//! use simple_ui::widget::{Node, NodeBase};
//! use simple_ui::render::Size;
//!
//! struct Swatch {
//!     base: NodeBase,
//! }
//!
//! impl Node for Swatch {
//!     fn node_base(&self) -> &NodeBase { &self.base }
//!     fn node_base_mut(&mut self) -> &mut NodeBase { &mut self.base }
//! }
//!
//! let mut swatch = Swatch { base: NodeBase::with_size(Size::new(10.0, 10.0)) };
//! swatch.set_width(30.0);
//! assert_eq!(swatch.size(), Size::new(30.0, 10.0));
//! ```

use std::any::Any;

use simple_ui_render::{Color, Point, Rect, Size};
use simple_ui_style::Style;

/// State every node carries.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeBase {
    size: Size,
    position: Point,
    visible: bool,
    alpha: f32,
    tint: Color,
}

impl NodeBase {
    /// A visible, untinted node of zero size at the origin.
    pub fn new() -> Self {
        Self::with_size(Size::ZERO)
    }

    /// A visible, untinted node of the given size at the origin.
    pub fn with_size(size: Size) -> Self {
        Self {
            size,
            position: Point::ZERO,
            visible: true,
            alpha: 1.0,
            tint: Color::WHITE,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// The node's rectangle in its parent's coordinates.
    pub fn geometry(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Opacity in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Multiplicative colour applied to the node's content.
    pub fn tint(&self) -> Color {
        self.tint
    }

    pub fn set_tint(&mut self, tint: Color) {
        self.tint = tint;
    }
}

impl Default for NodeBase {
    fn default() -> Self {
        Self::new()
    }
}

/// A positionable, resizable visual node.
///
/// This is the only capability the table layout engine needs from the things
/// it arranges: a readable and writable size and a settable position. Size
/// writes go through [`set_size`](Node::set_size), which calls
/// [`size_changed`](Node::size_changed) so implementations can re-fit their
/// internal parts.
pub trait Node: Any + Send + Sync {
    /// Get the shared base state.
    fn node_base(&self) -> &NodeBase;

    /// Get the shared base state mutably.
    fn node_base_mut(&mut self) -> &mut NodeBase;

    /// Called after every size write.
    fn size_changed(&mut self) {}

    /// Called when the node is attached under a table, or the table's style
    /// changes.
    fn update_style(&mut self, _style: &Style) {}

    /// Short type name used in tree dumps.
    fn type_name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    fn size(&self) -> Size {
        self.node_base().size()
    }

    fn set_size(&mut self, size: Size) {
        self.node_base_mut().set_size(size);
        self.size_changed();
    }

    fn width(&self) -> f32 {
        self.size().width
    }

    fn set_width(&mut self, width: f32) {
        let height = self.height();
        self.set_size(Size::new(width, height));
    }

    fn height(&self) -> f32 {
        self.size().height
    }

    fn set_height(&mut self, height: f32) {
        let width = self.width();
        self.set_size(Size::new(width, height));
    }

    fn position(&self) -> Point {
        self.node_base().position()
    }

    fn set_position(&mut self, position: Point) {
        self.node_base_mut().set_position(position);
    }

    fn geometry(&self) -> Rect {
        self.node_base().geometry()
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    fn is_visible(&self) -> bool {
        self.node_base().is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.node_base_mut().set_visible(visible);
    }
}

/// A plain node with no content of its own.
///
/// Tables use one as their backing node; it is also handy as a grouping node.
#[derive(Debug, Clone, Default)]
pub struct Container {
    base: NodeBase,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(size: Size) -> Self {
        Self {
            base: NodeBase::with_size(size),
        }
    }
}

impl Node for Container {
    fn node_base(&self) -> &NodeBase {
        &self.base
    }

    fn node_base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        base: NodeBase,
        resizes: usize,
    }

    impl Node for Counting {
        fn node_base(&self) -> &NodeBase {
            &self.base
        }

        fn node_base_mut(&mut self) -> &mut NodeBase {
            &mut self.base
        }

        fn size_changed(&mut self) {
            self.resizes += 1;
        }
    }

    #[test]
    fn test_width_and_height_setters_keep_other_axis() {
        let mut node = Container::with_size(Size::new(10.0, 20.0));
        node.set_width(50.0);
        assert_eq!(node.size(), Size::new(50.0, 20.0));
        node.set_height(5.0);
        assert_eq!(node.size(), Size::new(50.0, 5.0));
    }

    #[test]
    fn test_size_writes_notify() {
        let mut node = Counting::default();
        node.set_size(Size::new(1.0, 1.0));
        node.set_width(2.0);
        node.set_height(3.0);
        assert_eq!(node.resizes, 3);

        node.set_position(Point::new(4.0, 4.0));
        assert_eq!(node.resizes, 3);
    }

    #[test]
    fn test_alpha_is_clamped() {
        let mut base = NodeBase::new();
        base.set_alpha(1.5);
        assert_eq!(base.alpha(), 1.0);
        base.set_alpha(-0.5);
        assert_eq!(base.alpha(), 0.0);
    }

    #[test]
    fn test_type_name_is_short() {
        assert_eq!(Container::new().type_name(), "Container");
    }
}
