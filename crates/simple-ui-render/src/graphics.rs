//! Retained drawing commands.
//!
//! [`Graphics`] records shapes for a backend to replay. The toolkit does not
//! rasterize anything itself; the command list is the contract between scene
//! nodes that draw vector shapes and whatever renderer presents them.
//!
//! # Example
//!
//! ```
//! use simple_ui_render::{Color, Graphics, Rect, Stroke};
//!
//! let mut graphics = Graphics::new();
//! graphics
//!     .stroke_rect(Rect::new(0.0, 0.0, 100.0, 50.0), Stroke::new(Color::RED, 1.0))
//!     .fill_rect(Rect::new(10.0, 10.0, 20.0, 20.0), Color::WHITE);
//! assert_eq!(graphics.commands().len(), 2);
//! ```

use crate::paint::{Paint, Stroke};
use crate::types::Rect;

/// A single recorded drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Fill a rectangle.
    FillRect { rect: Rect, paint: Paint },
    /// Outline a rectangle without filling it.
    StrokeRect { rect: Rect, stroke: Stroke },
}

impl DrawCommand {
    /// The rectangle the command draws.
    pub fn rect(&self) -> Rect {
        match self {
            Self::FillRect { rect, .. } | Self::StrokeRect { rect, .. } => *rect,
        }
    }
}

/// An ordered list of drawing commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graphics {
    commands: Vec<DrawCommand>,
}

impl Graphics {
    /// Create an empty command list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every recorded command.
    pub fn clear(&mut self) -> &mut Self {
        self.commands.clear();
        self
    }

    /// Record a filled rectangle.
    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) -> &mut Self {
        self.commands.push(DrawCommand::FillRect {
            rect,
            paint: paint.into(),
        });
        self
    }

    /// Record an unfilled, stroked rectangle.
    pub fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) -> &mut Self {
        self.commands.push(DrawCommand::StrokeRect { rect, stroke });
        self
    }

    /// The recorded commands in drawing order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
