//! Table-based layout.
//!
//! - [`Table`]: rows of cells holding scene nodes
//! - [`Basis`] and [`distribute`]: how rows and cells share space
//! - [`SizingStrategy`]: how an element is sized inside its cell
//! - [`Anchor`]: where an element sits inside its cell
//!
//! # Layout Algorithm
//!
//! 1. Row heights are distributed from the table height.
//! 2. Within each row, cell widths are distributed from the table width.
//! 3. Each element's target size is computed from its cell size and the size
//!    it had when added, then it is positioned by its anchor.
//!
//! Fixed bases are absolute lengths, percentages are fractions of the total,
//! and flexible items split what is left evenly.

mod anchor;
mod basis;
mod sizing;
mod table;

pub use anchor::Anchor;
pub use basis::{Basis, distribute};
pub use sizing::{ParseStrategyError, SizingStrategy};
pub use table::{DEBUG_STROKE_COLOUR, Placement, Table, TableError, TableResult};
