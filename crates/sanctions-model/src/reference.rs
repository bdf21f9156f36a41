//! Versioned reference data.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Version tag of the built-in group-type list.
pub const DEFAULT_GROUP_TYPES_VERSION: &str = "consolidated-list-2024";

/// Group classifications accepted by the built-in list.
pub const DEFAULT_GROUP_TYPES: [&str; 3] = ["Individual", "Entity", "Ship"];

/// Closed set of accepted group classifications.
///
/// The upstream list may add classifications; when it does, ship a new
/// version rather than editing the checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTypeSet {
    pub version: String,
    pub values: BTreeSet<String>,
}

impl Default for GroupTypeSet {
    fn default() -> Self {
        Self {
            version: DEFAULT_GROUP_TYPES_VERSION.to_string(),
            values: DEFAULT_GROUP_TYPES.iter().map(|v| (*v).to_string()).collect(),
        }
    }
}

impl GroupTypeSet {
    pub fn new<I, S>(version: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            version: version.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }
}
