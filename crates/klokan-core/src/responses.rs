//! Report and response types returned by Klokan operations.
//!
//! These are serialized as JSON by `klokan` commands such as
//! `klokan import`, `klokan export`, and `klokan show`.

use serde::{Deserialize, Serialize};

use crate::entities::{
    AnswerSheet, AnswerSheetListing, ChosenAnswer, CorrectAnswer, Instance, InstanceKey,
};
use crate::grid::AnswerGrid;

/// Outcome of one import call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportReport {
    /// Path of the external store that was read.
    pub source: String,
    pub instances_imported: u32,
    pub instances_skipped: u32,
    pub answer_sheets_imported: u32,
    /// Keys of the source instances that already existed locally.
    pub skipped: Vec<InstanceKey>,
    pub duration_ms: u64,
}

/// Outcome of one export call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportReport {
    /// Data rows written, not counting the header.
    pub rows_written: u32,
}

/// Everything the review display shows for one answer sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerSheetDetail {
    pub sheet: AnswerSheet,
    pub instance: Instance,
    pub chosen_answers: Vec<ChosenAnswer>,
    pub correct_answers: Vec<CorrectAnswer>,
}

impl AnswerSheetDetail {
    /// Grid of the student's marks.
    #[must_use]
    pub fn chosen_grid(&self) -> AnswerGrid {
        AnswerGrid::from_chosen(&self.chosen_answers)
    }

    /// Grid of the instance's reference answers.
    #[must_use]
    pub fn correct_grid(&self) -> AnswerGrid {
        AnswerGrid::from_correct(&self.correct_answers)
    }
}

/// Response from `klokan list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerSheetListResponse {
    pub instance: InstanceKey,
    pub answer_sheets: Vec<AnswerSheetListing>,
}
