//! Geometry and drawing types for simple-ui.
//!
//! This crate holds the plain value types every other simple-ui crate
//! speaks in: [`Point`], [`Size`], [`Rect`] and [`Color`], the [`Paint`] and
//! [`Stroke`] styles, and the retained [`Graphics`] command list.
//!
//! Presenting pixels is left to the host application. Nodes that draw vector
//! shapes record [`DrawCommand`]s, and a renderer replays them.

mod graphics;
mod paint;
mod types;

pub use graphics::{DrawCommand, Graphics};
pub use paint::{Paint, Stroke};
pub use types::{Color, Point, Rect, Size};
