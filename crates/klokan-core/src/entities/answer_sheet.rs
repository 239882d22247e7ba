use serde::{Deserialize, Serialize};

/// One submitted exam. The scan blob is fetched separately and never
/// interpreted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerSheet {
    pub id: i64,
    pub instance_id: i64,
    pub student_number: i64,
    /// Precomputed by the grading process.
    pub points: i32,
}

/// A row of the browse table for one instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerSheetListing {
    pub id: i64,
    pub student_number: i64,
    pub points: i32,
}
