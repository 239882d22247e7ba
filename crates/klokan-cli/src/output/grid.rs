//! Text rendering of the review grid: chosen marks against correct answers.

use klokan_core::grid::{AnswerGrid, CHOICES, ROWS_PER_TABLE, TABLES};

const CHOICE_LABELS: [char; CHOICES] = ['a', 'b', 'c', 'd', 'e'];

/// One block per table, one line per question.
///
/// `X` marks a correct choice, `x` a wrong one, and `o` a correct answer the
/// student left unmarked.
#[must_use]
pub fn render_grid(chosen: &AnswerGrid, correct: &AnswerGrid) -> String {
    let mut lines = Vec::with_capacity(TABLES * (ROWS_PER_TABLE + 2));
    for table in 0..TABLES {
        if table > 0 {
            lines.push(String::new());
        }
        let header = CHOICE_LABELS
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("     {header}"));

        for row in 0..ROWS_PER_TABLE {
            let question = table * ROWS_PER_TABLE + row + 1;
            let cells = (0..CHOICES)
                .map(|column| {
                    match (
                        chosen.is_marked(table, row, column),
                        correct.is_marked(table, row, column),
                    ) {
                        (true, true) => "X",
                        (true, false) => "x",
                        (false, true) => "o",
                        (false, false) => ".",
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(format!("{question:>3}  {cells}"));
        }
    }
    lines.join("\n")
}
