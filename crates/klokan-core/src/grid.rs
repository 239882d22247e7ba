//! Answer-grid decoding for the review display.
//!
//! A sheet's 24 questions are laid out as 3 tables of 8 rows, each row
//! offering the 5 choices `a`..`e`. Question `i` sits in table `i / 8`, row
//! `i % 8`. The grid records which choice cell is marked.

use serde::{Deserialize, Serialize};

use crate::entities::{ChosenAnswer, CorrectAnswer};

pub const TABLES: usize = 3;
pub const ROWS_PER_TABLE: usize = 8;
pub const CHOICES: usize = 5;

const FIRST_CHOICE: u8 = b'a';

/// Which choice cell is marked, per table, row, and column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerGrid {
    cells: [[[bool; CHOICES]; ROWS_PER_TABLE]; TABLES],
}

impl AnswerGrid {
    /// Decode an ordered sequence of mark values.
    ///
    /// The table and row come from the sequence index alone; the value only
    /// picks the column. Values not starting with `a`..`e` mark nothing but
    /// still consume their index. Indexes past the last grid row are ignored.
    #[must_use]
    pub fn decode<S: AsRef<str>>(marks: &[S]) -> Self {
        Self::from_positions(
            marks
                .iter()
                .enumerate()
                .map(|(index, mark)| (index, mark.as_ref())),
        )
    }

    /// Decode chosen answers by their stored `position`, ignoring slice order.
    #[must_use]
    pub fn from_chosen(answers: &[ChosenAnswer]) -> Self {
        Self::from_positions(
            answers
                .iter()
                .map(|answer| (usize::from(answer.position), answer.value.as_str())),
        )
    }

    /// Decode an instance's correct answers by their stored `position`.
    #[must_use]
    pub fn from_correct(answers: &[CorrectAnswer]) -> Self {
        Self::from_positions(
            answers
                .iter()
                .map(|answer| (usize::from(answer.position), answer.value.as_str())),
        )
    }

    fn from_positions<'a>(marks: impl Iterator<Item = (usize, &'a str)>) -> Self {
        let mut grid = Self::default();
        for (index, value) in marks {
            let table = index / ROWS_PER_TABLE;
            let row = index % ROWS_PER_TABLE;
            if table >= TABLES {
                continue;
            }
            if let Some(column) = choice_column(value) {
                grid.cells[table][row][column] = true;
            }
        }
        grid
    }

    /// Whether the cell at `(table, row, column)` is marked. Out-of-range
    /// coordinates are never marked.
    #[must_use]
    pub fn is_marked(&self, table: usize, row: usize, column: usize) -> bool {
        self.cells
            .get(table)
            .and_then(|rows| rows.get(row))
            .and_then(|choices| choices.get(column))
            .copied()
            .unwrap_or(false)
    }

    /// The marked choice letter for a 0-based question index, if any.
    #[must_use]
    pub fn choice_for_question(&self, question: usize) -> Option<char> {
        let table = question / ROWS_PER_TABLE;
        let row = question % ROWS_PER_TABLE;
        let choices = self.cells.get(table)?.get(row)?;
        choices
            .iter()
            .position(|marked| *marked)
            .and_then(|column| u8::try_from(column).ok())
            .map(|column| char::from(FIRST_CHOICE + column))
    }

    /// Number of marked cells in the whole grid.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.cells.iter().flatten().flatten().filter(|c| **c).count()
    }
}

/// Column offset of a mark value: `Some(0)` for `a` through `Some(4)` for `e`.
///
/// Only the first character is inspected.
#[must_use]
pub fn choice_column(value: &str) -> Option<usize> {
    match value.as_bytes().first().copied() {
        Some(byte @ b'a'..=b'e') => Some(usize::from(byte - FIRST_CHOICE)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("a", Some(0))]
    #[case("c", Some(2))]
    #[case("e", Some(4))]
    #[case("f", None)]
    #[case("A", None)]
    #[case("", None)]
    #[case(" ", None)]
    #[case("bx", Some(1))]
    fn choice_column_reads_first_letter(#[case] value: &str, #[case] expected: Option<usize>) {
        assert_eq!(choice_column(value), expected);
    }

    #[test]
    fn empty_sequence_yields_blank_grid() {
        let grid = AnswerGrid::decode::<&str>(&[]);
        assert_eq!(grid, AnswerGrid::default());
        assert_eq!(grid.marked_count(), 0);
    }

    #[test]
    fn position_picks_table_and_row() {
        let mut marks = vec![""; 24];
        marks[0] = "a";
        marks[9] = "c";
        marks[23] = "e";
        let grid = AnswerGrid::decode(&marks);

        assert!(grid.is_marked(0, 0, 0));
        assert!(grid.is_marked(1, 1, 2));
        assert!(grid.is_marked(2, 7, 4));
        assert_eq!(grid.marked_count(), 3);
    }

    #[test]
    fn invalid_value_still_consumes_index() {
        let grid = AnswerGrid::decode(&["x", "b"]);
        assert!(!grid.is_marked(0, 0, 0));
        assert!(grid.is_marked(0, 1, 1));
        assert_eq!(grid.marked_count(), 1);
    }

    #[test]
    fn marks_past_last_row_are_ignored() {
        let marks = vec!["d"; 30];
        let grid = AnswerGrid::decode(&marks);
        assert_eq!(grid.marked_count(), 24);
    }

    #[test]
    fn out_of_range_lookup_is_unmarked() {
        let grid = AnswerGrid::decode(&vec!["a"; 24]);
        assert!(!grid.is_marked(3, 0, 0));
        assert!(!grid.is_marked(0, 8, 0));
        assert!(!grid.is_marked(0, 0, 5));
    }

    #[test]
    fn positioned_decoding_ignores_slice_order() {
        let answers = vec![
            ChosenAnswer {
                answer_sheet_id: 1,
                position: 10,
                value: "b".into(),
            },
            ChosenAnswer {
                answer_sheet_id: 1,
                position: 0,
                value: "a".into(),
            },
        ];
        let grid = AnswerGrid::from_chosen(&answers);

        let mut marks = vec![""; 11];
        marks[0] = "a";
        marks[10] = "b";
        assert_eq!(grid, AnswerGrid::decode(&marks));
    }

    #[test]
    fn choice_for_question_roundtrips_letters() {
        let marks = ["a", "b", "", "e"];
        let grid = AnswerGrid::decode(&marks);
        assert_eq!(grid.choice_for_question(0), Some('a'));
        assert_eq!(grid.choice_for_question(1), Some('b'));
        assert_eq!(grid.choice_for_question(2), None);
        assert_eq!(grid.choice_for_question(3), Some('e'));
        assert_eq!(grid.choice_for_question(40), None);
    }

    #[test]
    fn correct_answers_decode_like_chosen() {
        let correct: Vec<CorrectAnswer> = ["c", "d"]
            .iter()
            .enumerate()
            .map(|(i, v)| CorrectAnswer {
                instance_id: 3,
                position: u8::try_from(i).unwrap(),
                value: (*v).to_string(),
            })
            .collect();
        assert_eq!(AnswerGrid::from_correct(&correct), AnswerGrid::decode(&["c", "d"]));
    }
}
