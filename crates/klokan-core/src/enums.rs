//! Competition categories and entity kinds for Klokan.
//!
//! `Category` is stored and exported by its variant name (`"Benjamin"`), which
//! is the format existing export files carry in their `Category` column.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Competition category. Together with the year it identifies an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Cvrcek,
    Klokanek,
    Benjamin,
    Kadet,
    Junior,
    Student,
}

impl Category {
    /// Every category, in the order they are offered for selection.
    pub const ALL: [Self; 6] = [
        Self::Cvrcek,
        Self::Klokanek,
        Self::Benjamin,
        Self::Kadet,
        Self::Junior,
        Self::Student,
    ];

    /// Return the string representation used in SQL storage and exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cvrcek => "Cvrcek",
            Self::Klokanek => "Klokanek",
            Self::Benjamin => "Benjamin",
            Self::Kadet => "Kadet",
            Self::Junior => "Junior",
            Self::Student => "Student",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Case-insensitive parse of a category name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Validation(format!("unknown category '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Which kind of record a lookup or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Instance,
    AnswerSheet,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instance => "instance",
            Self::AnswerSheet => "answer_sheet",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
