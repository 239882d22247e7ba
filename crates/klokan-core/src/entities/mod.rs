//! Entity structs for all Klokan domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `klokan-db/migrations/001_initial.sql`). Answers carry an explicit
//! `position`; joins between chosen and correct answers key off it.

mod answer;
mod answer_sheet;
mod instance;
mod tree;

pub use answer::{ChosenAnswer, CorrectAnswer};
pub use answer_sheet::{AnswerSheet, AnswerSheetListing};
pub use instance::{Instance, InstanceKey};
pub use tree::{AnswerSheetTree, InstanceTree};
