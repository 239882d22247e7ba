use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Category;

/// One edition of the competition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Instance {
    pub id: i64,
    pub year: i32,
    pub category: Category,
}

impl Instance {
    #[must_use]
    pub const fn key(&self) -> InstanceKey {
        InstanceKey {
            year: self.year,
            category: self.category,
        }
    }
}

/// The `(year, category)` pair that identifies an instance within a store.
///
/// Import deduplication compares instances by this key only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceKey {
    pub year: i32,
    pub category: Category,
}

impl InstanceKey {
    #[must_use]
    pub const fn new(year: i32, category: Category) -> Self {
        Self { year, category }
    }
}

impl fmt::Display for InstanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.year, self.category)
    }
}
