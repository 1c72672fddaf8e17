//! Named themes.
//!
//! [`Themes`] is a registry of named [`Style`]s. It always contains the
//! built-in `"default"` theme; more can be added in code or loaded from TOML
//! files with [`Themes::load_file`].

mod file;

pub use file::{ThemeFile, parse_theme};

use std::collections::HashMap;
use std::path::Path;

use simple_ui_core::logging::targets;

use crate::error::{Error, Result};
use crate::style::Style;

/// Name of the built-in theme.
pub const DEFAULT_THEME: &str = "default";

/// A registry of named styles.
#[derive(Debug, Clone)]
pub struct Themes {
    default: Style,
    styles: HashMap<String, Style>,
}

impl Themes {
    /// Create a registry holding only the built-in themes.
    pub fn builtin() -> Self {
        Self {
            default: Style::default_theme(),
            styles: HashMap::new(),
        }
    }

    /// Look up a theme by name.
    pub fn get(&self, name: &str) -> Option<&Style> {
        if name == DEFAULT_THEME {
            Some(&self.default)
        } else {
            self.styles.get(name)
        }
    }

    /// The `"default"` theme.
    pub fn default_style(&self) -> &Style {
        &self.default
    }

    /// Register or replace a theme. Returns the previous style under that name.
    ///
    /// Inserting under `"default"` replaces the default theme.
    pub fn insert(&mut self, name: impl Into<String>, style: Style) -> Option<Style> {
        let name = name.into();
        tracing::debug!(target: targets::THEME, theme = %name, "registering theme");
        if name == DEFAULT_THEME {
            Some(std::mem::replace(&mut self.default, style))
        } else {
            self.styles.insert(name, style)
        }
    }

    /// Remove a theme. The default theme cannot be removed.
    pub fn remove(&mut self, name: &str) -> Option<Style> {
        self.styles.remove(name)
    }

    /// Names of all registered themes, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        names.push(DEFAULT_THEME);
        names.sort_unstable();
        names
    }

    /// Parse a theme from TOML text and register it under its declared name.
    ///
    /// Returns the registered name.
    pub fn load_str(&mut self, source: &str) -> Result<String> {
        let (name, style) = parse_theme(source)?;
        self.insert(name.clone(), style);
        Ok(name)
    }

    /// Read a TOML theme file and register it.
    ///
    /// A file without a `name` field is registered under its file stem.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let file: ThemeFile = toml::from_str(&source)?;
        let name = match file.name.clone() {
            Some(name) => name,
            None => path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
                .ok_or_else(|| Error::invalid_value("name", "theme has no name and no file stem"))?,
        };
        let style = file.into_style()?;
        tracing::debug!(target: targets::THEME, theme = %name, path = %path.display(), "loaded theme file");
        self.insert(name.clone(), style);
        Ok(name)
    }
}

impl Default for Themes {
    fn default() -> Self {
        Self::builtin()
    }
}
