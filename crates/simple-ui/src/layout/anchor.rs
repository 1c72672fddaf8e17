//! Anchors: where an element sits inside its cell.

use simple_ui_render::{Point, Rect, Size};

/// A fractional alignment point inside a cell.
///
/// `(0, 0)` aligns the element's top-left corner with the cell's, `(1, 1)`
/// its bottom-right with the cell's, and `(0.5, 0.5)` centres it. Values
/// outside `[0, 1]` are allowed and push the element past the cell edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    pub const TOP_LEFT: Anchor = Anchor::new(0.0, 0.0);
    pub const TOP: Anchor = Anchor::new(0.5, 0.0);
    pub const TOP_RIGHT: Anchor = Anchor::new(1.0, 0.0);
    pub const LEFT: Anchor = Anchor::new(0.0, 0.5);
    pub const CENTER: Anchor = Anchor::new(0.5, 0.5);
    pub const RIGHT: Anchor = Anchor::new(1.0, 0.5);
    pub const BOTTOM_LEFT: Anchor = Anchor::new(0.0, 1.0);
    pub const BOTTOM: Anchor = Anchor::new(0.5, 1.0);
    pub const BOTTOM_RIGHT: Anchor = Anchor::new(1.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The same fraction on both axes.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Build an anchor from optional components.
    ///
    /// A missing `x` is `0.5`; a missing `y` mirrors `x`.
    pub fn from_parts(x: Option<f32>, y: Option<f32>) -> Self {
        let x = x.unwrap_or(0.5);
        Self::new(x, y.unwrap_or(x))
    }

    /// Position of a box of size `target` anchored inside `cell`.
    pub fn place(&self, cell: Rect, target: Size) -> Point {
        Point::new(
            cell.left() + (cell.width() - target.width) * self.x,
            cell.top() + (cell.height() - target.height) * self.y,
        )
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Anchor::CENTER
    }
}

impl From<(f32, f32)> for Anchor {
    fn from((x, y): (f32, f32)) -> Self {
        Anchor::new(x, y)
    }
}

impl From<f32> for Anchor {
    fn from(value: f32) -> Self {
        Anchor::uniform(value)
    }
}
