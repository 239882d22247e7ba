//! Chosen and correct answer repository.
//!
//! Reads always come back ordered by `position`.

use klokan_core::entities::{ChosenAnswer, CorrectAnswer};

use crate::KlokanDb;
use crate::error::DatabaseError;
use crate::helpers::get_position;

fn row_to_chosen(row: &libsql::Row) -> Result<ChosenAnswer, DatabaseError> {
    Ok(ChosenAnswer {
        answer_sheet_id: row.get::<i64>(0)?,
        position: get_position(row, 1)?,
        value: row.get::<String>(2)?,
    })
}

fn row_to_correct(row: &libsql::Row) -> Result<CorrectAnswer, DatabaseError> {
    Ok(CorrectAnswer {
        instance_id: row.get::<i64>(0)?,
        position: get_position(row, 1)?,
        value: row.get::<String>(2)?,
    })
}

impl KlokanDb {
    pub async fn chosen_answers(
        &self,
        answer_sheet_id: i64,
    ) -> Result<Vec<ChosenAnswer>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT answer_sheet_id, position, value FROM chosen_answers
                 WHERE answer_sheet_id = ?1 ORDER BY position",
                [answer_sheet_id],
            )
            .await?;

        let mut answers = Vec::new();
        while let Some(row) = rows.next().await? {
            answers.push(row_to_chosen(&row)?);
        }
        Ok(answers)
    }

    pub async fn correct_answers(
        &self,
        instance_id: i64,
    ) -> Result<Vec<CorrectAnswer>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT instance_id, position, value FROM correct_answers
                 WHERE instance_id = ?1 ORDER BY position",
                [instance_id],
            )
            .await?;

        let mut answers = Vec::new();
        while let Some(row) = rows.next().await? {
            answers.push(row_to_correct(&row)?);
        }
        Ok(answers)
    }
}

pub(crate) async fn insert_chosen_answer(
    conn: &libsql::Connection,
    answer_sheet_id: i64,
    answer: &ChosenAnswer,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO chosen_answers (answer_sheet_id, position, value) VALUES (?1, ?2, ?3)",
        libsql::params![answer_sheet_id, i64::from(answer.position), answer.value.as_str()],
    )
    .await?;
    Ok(())
}

pub(crate) async fn insert_correct_answer(
    conn: &libsql::Connection,
    instance_id: i64,
    answer: &CorrectAnswer,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO correct_answers (instance_id, position, value) VALUES (?1, ?2, ?3)",
        libsql::params![instance_id, i64::from(answer.position), answer.value.as_str()],
    )
    .await?;
    Ok(())
}
