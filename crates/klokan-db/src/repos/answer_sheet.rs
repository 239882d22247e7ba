//! Answer sheet repository: browse listing, review detail, and scans.

use klokan_core::entities::{AnswerSheet, AnswerSheetListing, AnswerSheetTree, InstanceKey};
use klokan_core::enums::EntityType;
use klokan_core::responses::AnswerSheetDetail;

use crate::KlokanDb;
use crate::error::DatabaseError;
use crate::helpers::get_i32;

fn row_to_answer_sheet(row: &libsql::Row) -> Result<AnswerSheet, DatabaseError> {
    Ok(AnswerSheet {
        id: row.get::<i64>(0)?,
        instance_id: row.get::<i64>(1)?,
        student_number: row.get::<i64>(2)?,
        points: get_i32(row, 3)?,
    })
}

fn row_to_listing(row: &libsql::Row) -> Result<AnswerSheetListing, DatabaseError> {
    Ok(AnswerSheetListing {
        id: row.get::<i64>(0)?,
        student_number: row.get::<i64>(1)?,
        points: get_i32(row, 2)?,
    })
}

impl KlokanDb {
    pub async fn get_answer_sheet(&self, id: i64) -> Result<AnswerSheet, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, instance_id, student_number, points FROM answer_sheets WHERE id = ?1",
                [id],
            )
            .await?;

        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity_type: EntityType::AnswerSheet,
            id,
        })?;
        row_to_answer_sheet(&row)
    }

    /// Sheets of one instance, best score first. An unknown key lists nothing.
    pub async fn list_answer_sheets(
        &self,
        key: InstanceKey,
    ) -> Result<Vec<AnswerSheetListing>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT s.id, s.student_number, s.points
                 FROM answer_sheets s
                 JOIN instances i ON i.id = s.instance_id
                 WHERE i.year = ?1 AND i.category = ?2
                 ORDER BY s.points DESC, s.id",
                libsql::params![i64::from(key.year), key.category.as_str()],
            )
            .await?;

        let mut sheets = Vec::new();
        while let Some(row) = rows.next().await? {
            sheets.push(row_to_listing(&row)?);
        }
        Ok(sheets)
    }

    pub async fn count_answer_sheets(&self) -> Result<u64, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT COUNT(*) FROM answer_sheets", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|_| DatabaseError::Query(format!("negative count {count}")))
    }

    /// The stored scan image of a sheet, as opaque bytes.
    pub async fn get_scan(&self, id: i64) -> Result<Vec<u8>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT scan FROM answer_sheets WHERE id = ?1", [id])
            .await?;

        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity_type: EntityType::AnswerSheet,
            id,
        })?;
        Ok(row.get::<Vec<u8>>(0)?)
    }

    /// Sheet, owning instance, and both answer sets for the review display.
    pub async fn answer_sheet_detail(&self, id: i64) -> Result<AnswerSheetDetail, DatabaseError> {
        let sheet = self.get_answer_sheet(id).await?;
        let instance = self.get_instance(sheet.instance_id).await?;
        let chosen_answers = self.chosen_answers(sheet.id).await?;
        let correct_answers = self.correct_answers(instance.id).await?;

        Ok(AnswerSheetDetail {
            sheet,
            instance,
            chosen_answers,
            correct_answers,
        })
    }

    pub(crate) async fn answer_sheet_trees(
        &self,
        instance_id: i64,
    ) -> Result<Vec<AnswerSheetTree>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, instance_id, student_number, points, scan FROM answer_sheets
                 WHERE instance_id = ?1 ORDER BY id",
                [instance_id],
            )
            .await?;

        let mut sheets = Vec::new();
        while let Some(row) = rows.next().await? {
            let sheet = row_to_answer_sheet(&row)?;
            let scan = row.get::<Vec<u8>>(4)?;
            sheets.push((sheet, scan));
        }

        let mut trees = Vec::with_capacity(sheets.len());
        for (sheet, scan) in sheets {
            let chosen_answers = self.chosen_answers(sheet.id).await?;
            trees.push(AnswerSheetTree {
                sheet,
                scan,
                chosen_answers,
            });
        }
        Ok(trees)
    }
}

/// Insert one sheet under `instance_id` and return its new id. Chosen
/// answers are inserted separately by the caller.
pub(crate) async fn insert_answer_sheet(
    conn: &libsql::Connection,
    instance_id: i64,
    tree: &AnswerSheetTree,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO answer_sheets (instance_id, student_number, points, scan)
         VALUES (?1, ?2, ?3, ?4)",
        libsql::params![
            instance_id,
            tree.sheet.student_number,
            i64::from(tree.sheet.points),
            tree.scan.clone()
        ],
    )
    .await?;
    Ok(conn.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{sample_tree, test_db};
    use klokan_core::enums::Category;
    use pretty_assertions::assert_eq;

    const CORRECT: &str = "eeeeeaaaaabbbbbcccccdddd";

    #[tokio::test]
    async fn listing_orders_by_points_descending() {
        let db = test_db().await;
        let tree = sample_tree(
            2020,
            Category::Benjamin,
            CORRECT,
            &[(1, 40, CORRECT), (2, 95, CORRECT), (3, 60, CORRECT)],
        );
        let instance = db.store_instance_tree(&tree).await.unwrap();

        let points: Vec<i32> = db
            .list_answer_sheets(instance.key())
            .await
            .unwrap()
            .iter()
            .map(|s| s.points)
            .collect();
        assert_eq!(points, vec![95, 60, 40]);
    }

    #[tokio::test]
    async fn listing_is_scoped_to_one_instance() {
        let db = test_db().await;
        db.store_instance_tree(&sample_tree(2020, Category::Kadet, CORRECT, &[(1, 1, CORRECT)]))
            .await
            .unwrap();
        db.store_instance_tree(&sample_tree(2020, Category::Student, CORRECT, &[(2, 2, CORRECT)]))
            .await
            .unwrap();

        let kadet = db
            .list_answer_sheets(InstanceKey::new(2020, Category::Kadet))
            .await
            .unwrap();
        assert_eq!(kadet.len(), 1);
        assert_eq!(kadet[0].student_number, 1);

        let absent = db
            .list_answer_sheets(InstanceKey::new(2001, Category::Kadet))
            .await
            .unwrap();
        assert!(absent.is_empty());
    }

    #[tokio::test]
    async fn detail_joins_sheet_instance_and_answers() {
        let db = test_db().await;
        let instance = db
            .store_instance_tree(&sample_tree(
                2023,
                Category::Cvrcek,
                CORRECT,
                &[(77, 33, "abcdeabcdeabcdeabcdeabcd")],
            ))
            .await
            .unwrap();
        let sheet_id = db.list_answer_sheets(instance.key()).await.unwrap()[0].id;

        let detail = db.answer_sheet_detail(sheet_id).await.unwrap();
        assert_eq!(detail.instance, instance);
        assert_eq!(detail.sheet.student_number, 77);
        assert_eq!(detail.sheet.points, 33);
        assert_eq!(detail.chosen_answers.len(), 24);
        assert_eq!(detail.correct_answers.len(), 24);
        assert_eq!(detail.chosen_grid().choice_for_question(1), Some('b'));
        assert_eq!(detail.correct_grid().choice_for_question(0), Some('e'));
    }

    #[tokio::test]
    async fn missing_sheet_is_not_found() {
        let db = test_db().await;
        assert!(matches!(
            db.answer_sheet_detail(9).await,
            Err(DatabaseError::NotFound {
                entity_type: EntityType::AnswerSheet,
                id: 9
            })
        ));
        assert!(matches!(
            db.get_scan(9).await,
            Err(DatabaseError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn scan_bytes_are_returned_verbatim() {
        let db = test_db().await;
        let mut tree = sample_tree(2024, Category::Kadet, CORRECT, &[(5, 0, CORRECT)]);
        tree.answer_sheets[0].scan = vec![0x89, b'P', b'N', b'G', 0x00, 0xff];
        let instance = db.store_instance_tree(&tree).await.unwrap();
        let sheet_id = db.list_answer_sheets(instance.key()).await.unwrap()[0].id;

        assert_eq!(
            db.get_scan(sheet_id).await.unwrap(),
            vec![0x89, b'P', b'N', b'G', 0x00, 0xff]
        );
    }
}
