//! Commonly used types.
//!
//! ```
//! use simple_ui::prelude::*;
//! ```

pub use crate::layout::{
    Anchor, Basis, Placement, SizingStrategy, Table, TableError, TableResult, distribute,
};
pub use crate::widget::widgets::{
    Button, Checkbox, CheckboxType, Divider, IconButton, Label, Panel, TextButton,
};
pub use crate::widget::{Container, GraphicsNode, Node, NodeAccess, NodeBase, Scene, SceneError};
pub use simple_ui_core::{NodeId, Signal};
pub use simple_ui_render::{Color, Point, Rect, Size};
pub use simple_ui_style::{Style, Themes, make_style};
