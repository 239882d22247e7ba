use serde::{Deserialize, Serialize};

/// One mark made by a student on one question.
///
/// `value` is kept verbatim: a letter `a`..`e`, or anything else (usually
/// empty) meaning no mark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChosenAnswer {
    pub answer_sheet_id: i64,
    /// 0-based question index.
    pub position: u8,
    pub value: String,
}

/// The reference answer for one question of one instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorrectAnswer {
    pub instance_id: i64,
    /// 0-based question index.
    pub position: u8,
    pub value: String,
}
