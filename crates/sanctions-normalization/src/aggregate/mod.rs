//! Group-level reduction.

pub mod entity;
pub mod field;

pub use entity::{EntityGroup, aggregate_group, aggregate_records, group_records, select_canonical};
pub use field::{aggregate_joined, aggregate_values, distinct_in_order};
