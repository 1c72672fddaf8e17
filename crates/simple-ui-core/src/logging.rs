//! Logging conventions for simple-ui.
//!
//! simple-ui uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("simple_ui::layout=trace")
//!     .init();
//! ```
//!
//! The constants below name the targets and spans used across the workspace so
//! filters can be written without guessing module paths.

/// Span names used throughout simple-ui for tracing.
pub mod span_names {
    /// A full table layout pass.
    pub const LAYOUT_PASS: &str = "simple_ui::layout::pass";
    /// Rebuilding a table's child list.
    pub const REBUILD: &str = "simple_ui::layout::rebuild";
    /// Signal emission.
    pub const SIGNAL: &str = "simple_ui_core::signal";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Table layout engine.
    pub const LAYOUT: &str = "simple_ui::layout";
    /// Scene graph bookkeeping.
    pub const SCENE: &str = "simple_ui::scene";
    /// Components.
    pub const WIDGET: &str = "simple_ui::widget";
    /// Signal/slot system.
    pub const SIGNAL: &str = "simple_ui_core::signal";
    /// Theme loading and resolution.
    pub const THEME: &str = "simple_ui_style::theme";
}
