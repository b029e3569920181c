//! Row/column block scaffolding (`:::row:::` / `:::column:::`).

pub mod placement;
pub mod template;

pub use placement::{LayoutContext, LayoutPlacement, check_placement, scan_context};
pub use template::{COLUMN_INDENT, ColumnKind, LayoutChoice, render_column, render_row};

pub const ROW_START: &str = ":::row:::";
pub const ROW_END: &str = ":::row-end:::";
pub const COLUMN_START: &str = ":::column";
pub const COLUMN_END: &str = ":::column-end:::";
