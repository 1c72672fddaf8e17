//! simple-ui: a small widget toolkit with a table-based layout engine.
//!
//! # Example
//!
//! ```
//! use simple_ui::prelude::*;
//!
//! let mut scene = Scene::new();
//! let title = scene.add(Label::new("Settings"));
//! let ok = scene.add(TextButton::new("OK"));
//!
//! let mut table = Table::new(&mut scene);
//! table
//!     .row("20%")
//!     .element(&mut scene, title, SizingStrategy::Stretch)?
//!     .row(Basis::Flexible)
//!     .element(&mut scene, ok, Anchor::BOTTOM)?;
//! table.set_size(&mut scene, Size::new(300.0, 200.0))?;
//!
//! assert_eq!(scene.get_node(title).unwrap().size(), Size::new(300.0, 40.0));
//! # Ok::<(), TableError>(())
//! ```

pub mod layout;
pub mod prelude;
pub mod widget;

pub use simple_ui_core::{ConnectionId, NodeId, Signal};

/// Geometry and drawing types.
pub mod render {
    pub use simple_ui_render::*;
}

/// Styles and themes.
pub mod style {
    pub use simple_ui_style::*;
}
