//! Instance repository.
//!
//! An instance is identified by its (year, category) key; the UNIQUE index
//! on those columns keeps that true even across concurrent writers.

use klokan_core::entities::{Instance, InstanceKey, InstanceTree};
use klokan_core::enums::EntityType;

use crate::KlokanDb;
use crate::error::DatabaseError;
use crate::helpers::{get_i32, parse_category};
use crate::repos::answer::{insert_chosen_answer, insert_correct_answer};
use crate::repos::answer_sheet::insert_answer_sheet;

fn row_to_instance(row: &libsql::Row) -> Result<Instance, DatabaseError> {
    Ok(Instance {
        id: row.get::<i64>(0)?,
        year: get_i32(row, 1)?,
        category: parse_category(&row.get::<String>(2)?)?,
    })
}

impl KlokanDb {
    pub async fn get_instance(&self, id: i64) -> Result<Instance, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT id, year, category FROM instances WHERE id = ?1", [id])
            .await?;

        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity_type: EntityType::Instance,
            id,
        })?;
        row_to_instance(&row)
    }

    /// Look up an instance by its (year, category) key.
    pub async fn find_instance(&self, key: InstanceKey) -> Result<Option<Instance>, DatabaseError> {
        find_instance_with(self.conn(), key).await
    }

    /// All instances, newest year first.
    pub async fn list_instances(&self) -> Result<Vec<Instance>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, year, category FROM instances ORDER BY year DESC, id",
                (),
            )
            .await?;

        let mut instances = Vec::new();
        while let Some(row) = rows.next().await? {
            instances.push(row_to_instance(&row)?);
        }
        Ok(instances)
    }

    /// Persist a whole instance subtree in one transaction.
    ///
    /// Identifiers inside `tree` are ignored; fresh ones are assigned and the
    /// stored instance is returned. A key that already exists fails the
    /// UNIQUE index and nothing is written.
    pub async fn store_instance_tree(
        &self,
        tree: &InstanceTree,
    ) -> Result<Instance, DatabaseError> {
        let tx = self.conn().transaction().await?;
        match insert_instance_tree(&tx, tree).await {
            Ok(instance) => {
                tx.commit().await?;
                tracing::debug!(key = %instance.key(), id = instance.id, "stored instance");
                Ok(instance)
            }
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    tracing::warn!(%rollback_error, "rollback after failed store did not complete");
                }
                Err(error)
            }
        }
    }

    /// Load every instance with its correct answers, sheets, scans and chosen
    /// answers. Used to read an import source.
    pub async fn load_instance_trees(&self) -> Result<Vec<InstanceTree>, DatabaseError> {
        let instances = self.list_instances().await?;

        let mut trees = Vec::with_capacity(instances.len());
        for instance in instances {
            let correct_answers = self.correct_answers(instance.id).await?;
            let answer_sheets = self.answer_sheet_trees(instance.id).await?;
            trees.push(InstanceTree {
                instance,
                correct_answers,
                answer_sheets,
            });
        }
        Ok(trees)
    }
}

pub(crate) async fn find_instance_with(
    conn: &libsql::Connection,
    key: InstanceKey,
) -> Result<Option<Instance>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id, year, category FROM instances WHERE year = ?1 AND category = ?2",
            libsql::params![i64::from(key.year), key.category.as_str()],
        )
        .await?;

    match rows.next().await? {
        Some(row) => Ok(Some(row_to_instance(&row)?)),
        None => Ok(None),
    }
}

/// Insert an instance and everything under it. Runs on whatever connection or
/// transaction the caller passes; commit and rollback are the caller's job.
pub(crate) async fn insert_instance_tree(
    conn: &libsql::Connection,
    tree: &InstanceTree,
) -> Result<Instance, DatabaseError> {
    let key = tree.instance.key();
    conn.execute(
        "INSERT INTO instances (year, category) VALUES (?1, ?2)",
        libsql::params![i64::from(key.year), key.category.as_str()],
    )
    .await?;
    let instance_id = conn.last_insert_rowid();

    for answer in &tree.correct_answers {
        insert_correct_answer(conn, instance_id, answer).await?;
    }

    for sheet in &tree.answer_sheets {
        let sheet_id = insert_answer_sheet(conn, instance_id, sheet).await?;
        for answer in &sheet.chosen_answers {
            insert_chosen_answer(conn, sheet_id, answer).await?;
        }
    }

    Ok(Instance {
        id: instance_id,
        year: key.year,
        category: key.category,
    })
}
