//! UI building blocks shared across rendering and state modules.

/// Modal add dialog.
pub mod dialog;
/// Table row construction for list items.
pub mod rows;
/// Scrollbar for the item table.
pub mod scrollbar;
/// Header and footer lines.
pub mod status;
/// Table rendering and configuration.
pub mod tables;

pub use dialog::{DialogContext, render_add_dialog};
pub use rows::{EditingRow, build_item_rows};
pub use scrollbar::render_scrollbar;
pub use status::{render_footer, render_header};
pub use tables::{TableSpec, render_table};
