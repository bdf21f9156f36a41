//! Export of the consolidated sanctions table.

mod csv;
mod error;

pub use csv::{EXPORT_DATE_FORMAT, ensure_parent_dir, export_sorted, sort_by_group_id, write_csv};
pub use error::{OutputError, Result};
