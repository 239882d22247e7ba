//! `;`-delimited answer report.
//!
//! One header row, then one row per answer sheet:
//! `id;student;year;category;points;chosen_1;correct_1;...;chosen_24;correct_24;`.
//! Every field is followed by `;`, the last one included, so the output
//! matches existing report files byte for byte.

use std::collections::HashMap;
use std::io::Write;

use klokan_config::{ExportConfig, LineEnding};
use klokan_core::QUESTION_COUNT;
use klokan_core::entities::{ChosenAnswer, CorrectAnswer, InstanceKey};
use klokan_core::enums::Category;
use klokan_core::responses::ExportReport;
use thiserror::Error;

use crate::KlokanDb;
use crate::error::DatabaseError;
use crate::helpers::{get_i32, parse_category};

const FIELD_SEPARATOR: char = ';';

/// Which answer sheets to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// Sheets of one instance.
    Selection(InstanceKey),
    /// Every sheet in the store.
    All,
}

#[derive(Debug, Error)]
pub enum ExportError {
    /// A sheet or its instance does not carry exactly positions `0..24`.
    #[error(
        "answer sheet {answer_sheet_id} is malformed: {chosen} chosen and {correct} correct answers"
    )]
    MalformedSheet {
        answer_sheet_id: i64,
        chosen: usize,
        correct: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

struct SheetRow {
    id: i64,
    instance_id: i64,
    student_number: i64,
    year: i32,
    category: Category,
    points: i32,
}

fn row_to_sheet_row(row: &libsql::Row) -> Result<SheetRow, DatabaseError> {
    Ok(SheetRow {
        id: row.get::<i64>(0)?,
        instance_id: row.get::<i64>(1)?,
        student_number: row.get::<i64>(2)?,
        year: get_i32(row, 3)?,
        category: parse_category(&row.get::<String>(4)?)?,
        points: get_i32(row, 5)?,
    })
}

/// Writes the answer report for a scope of sheets.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerSheetExporter {
    line_ending: LineEnding,
}

impl AnswerSheetExporter {
    #[must_use]
    pub const fn new(line_ending: LineEnding) -> Self {
        Self { line_ending }
    }

    #[must_use]
    pub const fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.line_ending)
    }

    /// The header row, without its line terminator.
    #[must_use]
    pub fn header() -> String {
        let mut header = String::from("Answer Sheet ID;Student Number;Year;Category;Points;");
        for question in 1..=QUESTION_COUNT {
            header.push_str(&format!("{question} (Chosen);{question} (Correct);"));
        }
        header
    }

    /// Write the header and one row per sheet in `scope`, ordered by sheet id.
    ///
    /// Rows are validated before they are written. On
    /// [`ExportError::MalformedSheet`] the rows already written stay in
    /// `sink` and the offending row is not started.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` on a malformed sheet, a store error, or a write
    /// failure.
    pub async fn export<W: Write>(
        &self,
        db: &KlokanDb,
        scope: ExportScope,
        sink: &mut W,
    ) -> Result<ExportReport, ExportError> {
        let sheets = load_sheet_rows(db, scope).await?;
        let terminator = self.line_ending.as_str();

        write!(sink, "{}{terminator}", Self::header())?;

        let mut correct_cache: HashMap<i64, Vec<CorrectAnswer>> = HashMap::new();
        let mut rows_written: u32 = 0;
        for sheet in &sheets {
            if !correct_cache.contains_key(&sheet.instance_id) {
                let correct = db.correct_answers(sheet.instance_id).await?;
                correct_cache.insert(sheet.instance_id, correct);
            }
            let correct = correct_cache
                .get(&sheet.instance_id)
                .map_or(&[][..], Vec::as_slice);
            let chosen = db.chosen_answers(sheet.id).await?;

            if !covers_all_positions(chosen.iter().map(|a| a.position))
                || !covers_all_positions(correct.iter().map(|a| a.position))
            {
                tracing::warn!(
                    answer_sheet_id = sheet.id,
                    "malformed answer sheet, export stopped"
                );
                sink.flush()?;
                return Err(ExportError::MalformedSheet {
                    answer_sheet_id: sheet.id,
                    chosen: chosen.len(),
                    correct: correct.len(),
                });
            }

            let line = format_row(sheet, &chosen, correct);
            write!(sink, "{line}{terminator}")?;
            rows_written += 1;
        }
        sink.flush()?;

        tracing::info!(rows = rows_written, "export finished");
        Ok(ExportReport { rows_written })
    }
}

async fn load_sheet_rows(
    db: &KlokanDb,
    scope: ExportScope,
) -> Result<Vec<SheetRow>, DatabaseError> {
    let base = "SELECT s.id, s.instance_id, s.student_number, i.year, i.category, s.points
                FROM answer_sheets s
                JOIN instances i ON i.id = s.instance_id";
    let mut rows = match scope {
        ExportScope::Selection(key) => {
            db.conn()
                .query(
                    &format!("{base} WHERE i.year = ?1 AND i.category = ?2 ORDER BY s.id"),
                    libsql::params![i64::from(key.year), key.category.as_str()],
                )
                .await?
        }
        ExportScope::All => db.conn().query(&format!("{base} ORDER BY s.id"), ()).await?,
    };

    let mut sheets = Vec::new();
    while let Some(row) = rows.next().await? {
        sheets.push(row_to_sheet_row(&row)?);
    }
    Ok(sheets)
}

/// True when the positions are exactly `0..QUESTION_COUNT`, each once.
fn covers_all_positions(positions: impl Iterator<Item = u8>) -> bool {
    let mut seen = [false; QUESTION_COUNT];
    let mut count = 0;
    for position in positions {
        match seen.get_mut(usize::from(position)) {
            Some(slot) if !*slot => {
                *slot = true;
                count += 1;
            }
            _ => return false,
        }
    }
    count == QUESTION_COUNT
}

/// Format one data row. Both answer sets must already be known complete.
fn format_row(sheet: &SheetRow, chosen: &[ChosenAnswer], correct: &[CorrectAnswer]) -> String {
    let mut chosen_by_position = [""; QUESTION_COUNT];
    for answer in chosen {
        if let Some(slot) = chosen_by_position.get_mut(usize::from(answer.position)) {
            *slot = answer.value.as_str();
        }
    }
    let mut correct_by_position = [""; QUESTION_COUNT];
    for answer in correct {
        if let Some(slot) = correct_by_position.get_mut(usize::from(answer.position)) {
            *slot = answer.value.as_str();
        }
    }

    let mut fields = vec![
        sheet.id.to_string(),
        sheet.student_number.to_string(),
        sheet.year.to_string(),
        sheet.category.to_string(),
        sheet.points.to_string(),
    ];
    for (chosen, correct) in chosen_by_position.iter().zip(correct_by_position) {
        fields.push((*chosen).to_string());
        fields.push(correct.to_string());
    }

    let mut line = String::new();
    for field in fields {
        line.push_str(&field);
        line.push(FIELD_SEPARATOR);
    }
    line
}
