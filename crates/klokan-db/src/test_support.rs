//! Shared test utilities for klokan-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use klokan_core::entities::{
        AnswerSheet, AnswerSheetTree, ChosenAnswer, CorrectAnswer, Instance, InstanceTree,
    };
    use klokan_core::enums::Category;

    use crate::KlokanDb;

    /// Fresh in-memory store with the schema applied.
    pub async fn test_db() -> KlokanDb {
        KlokanDb::open_local(":memory:").await.unwrap()
    }

    /// Mark values from a compact string: one character per position, `-` for blank.
    pub fn marks(compact: &str) -> Vec<String> {
        compact
            .chars()
            .map(|c| if c == '-' { String::new() } else { c.to_string() })
            .collect()
    }

    /// Build an unsaved instance subtree.
    ///
    /// `sheets` holds `(student_number, points, chosen)` per answer sheet.
    pub fn sample_tree(
        year: i32,
        category: Category,
        correct: &str,
        sheets: &[(i64, i32, &str)],
    ) -> InstanceTree {
        let correct_answers = marks(correct)
            .into_iter()
            .enumerate()
            .map(|(position, value)| CorrectAnswer {
                instance_id: 0,
                position: u8::try_from(position).unwrap(),
                value,
            })
            .collect();

        let answer_sheets = sheets
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
            .collect();

        InstanceTree {
            instance: Instance {
                id: 0,
                year,
                category,
            },
            correct_answers,
            answer_sheets,
        }
    }
}
