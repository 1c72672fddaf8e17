//! Styles and themes for simple-ui components.
//!
//! This crate provides:
//!
//! - [`Style`]: the colours and text style a component consults
//! - [`make_style`]: build a style from partial overrides over the default theme
//! - [`Themes`]: a registry of named styles, loadable from TOML files
//! - [`DefaultSizes`]: the natural sizes components start with
//!
//! # Example
//!
//! ```
//! use simple_ui_style::{Themes, DEFAULT_THEME};
//!
//! let mut themes = Themes::builtin();
//! let name = themes
//!     .load_str("name = \"night\"\nshadow_colour = \"#111111\"")
//!     .unwrap();
//! assert_eq!(name, "night");
//! assert!(themes.get(DEFAULT_THEME).is_some());
//! ```

mod error;
mod sizes;
mod style;
pub mod theme;

pub use error::{Error, Result};
pub use sizes::DefaultSizes;
pub use style::{Style, StyleOverrides, TextAlign, TextStyle, make_style};
pub use theme::{DEFAULT_THEME, ThemeFile, Themes, parse_theme};
