//! Fully materialized instance subtrees.
//!
//! Used to move an instance with everything it owns between stores. The ids
//! inside a tree are those of the store it was read from; inserting a tree
//! assigns fresh ids and rewires the foreign keys.

use serde::{Deserialize, Serialize};

use super::{AnswerSheet, ChosenAnswer, CorrectAnswer, Instance};

/// An answer sheet with its scan and chosen answers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerSheetTree {
    pub sheet: AnswerSheet,
    #[serde(skip)]
    pub scan: Vec<u8>,
    pub chosen_answers: Vec<ChosenAnswer>,
}

/// An instance with its correct answers and all of its answer sheets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstanceTree {
    pub instance: Instance,
    pub correct_answers: Vec<CorrectAnswer>,
    pub answer_sheets: Vec<AnswerSheetTree>,
}

impl InstanceTree {
    /// Number of answer sheets in this subtree.
    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.answer_sheets.len()
    }
}
