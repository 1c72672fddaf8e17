//! Scene nodes and components.
//!
//! - [`Node`] / [`NodeBase`]: the positionable, resizable node capability
//! - [`NodeAccess`] / [`Scene`]: node storage and parent/child order
//! - [`primitives`]: sprites, panes and text the components draw with
//! - [`widgets`]: the standard components

mod node;
pub mod primitives;
mod scene;
pub mod widgets;

pub use node::{Container, Node, NodeBase};
pub use primitives::GraphicsNode;
pub use scene::{NodeAccess, Scene, SceneError, SceneResult};
