//! CSV reading utilities.

mod reader;

pub use reader::{read_source_table, validate_encoding};
