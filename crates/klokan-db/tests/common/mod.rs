//! Fixtures shared by the klokan-db integration tests.

#![allow(dead_code)]

use std::path::Path;

use klokan_core::entities::{
    AnswerSheet, AnswerSheetTree, ChosenAnswer, CorrectAnswer, Instance, InstanceTree,
};
use klokan_core::enums::Category;
use klokan_db::KlokanDb;

pub const CORRECT: &str = "abcdeabcdeabcdeabcdeabcd";

fn marks(compact: &str) -> Vec<String> {
    compact
        .chars()
        .map(|c| if c == '-' { String::new() } else { c.to_string() })
        .collect()
}

/// An unsaved instance subtree. `sheets` holds `(student_number, points, chosen)`.
pub fn tree(
    year: i32,
    category: Category,
    correct: &str,
    sheets: &[(i64, i32, &str)],
) -> InstanceTree {
    InstanceTree {
        instance: Instance {
            id: 0,
            year,
            category,
        },
        correct_answers: marks(correct)
            .into_iter()
            .enumerate()
            .map(|(position, value)| CorrectAnswer {
                instance_id: 0,
                position: u8::try_from(position).unwrap(),
                value,
            })
            .collect(),
        answer_sheets: sheets
            .iter()
            .map(|(student_number, points, chosen)| AnswerSheetTree {
                sheet: AnswerSheet {
                    id: 0,
                    instance_id: 0,
                    student_number: *student_number,
                    points: *points,
                },
                scan: format!("scan-{student_number}").into_bytes(),
                chosen_answers: marks(chosen)
                    .into_iter()
                    .enumerate()
                    .map(|(position, value)| ChosenAnswer {
                        answer_sheet_id: 0,
                        position: u8::try_from(position).unwrap(),
                        value,
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Open a file-backed store at `path` and fill it with `trees`.
pub async fn store_at(path: &Path, trees: &[InstanceTree]) -> KlokanDb {
    let db = KlokanDb::open_local(path.to_str().unwrap()).await.unwrap();
    for tree in trees {
        db.store_instance_tree(tree).await.unwrap();
    }
    db
}
