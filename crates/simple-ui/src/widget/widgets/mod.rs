//! Standard components.
//!
//! - [`Panel`]: a tinted rounded pane
//! - [`Button`], [`TextButton`], [`IconButton`]: clickable buttons
//! - [`Label`]: fitted, aligned text
//! - [`Checkbox`]: a two-state toggle
//! - [`Divider`]: a horizontal rule
//!
//! Components are [`Node`](super::Node)s. They take their style from the
//! table they are laid out in unless given their own with `set_style`.
//! Input delivery is up to the host: it calls the `pointer_*` methods.

mod button;
mod checkbox;
mod component;
mod divider;
mod icon_button;
mod label;
mod panel;
mod text_button;

pub use button::Button;
pub use checkbox::{Checkbox, CheckboxBackground, CheckboxType};
pub use component::StyleSlot;
pub use divider::Divider;
pub use icon_button::IconButton;
pub use label::Label;
pub use panel::Panel;
pub use text_button::TextButton;
