//! Instance import from an external Klokan store.
//!
//! The source is opened read-only and fully materialized. Every instance
//! whose (year, category) key is new to the destination is inserted with its
//! whole subtree; the rest are skipped. All inserts share one `IMMEDIATE`
//! transaction, so a failure anywhere leaves the destination untouched.

use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use klokan_core::entities::{InstanceKey, InstanceTree};
use klokan_core::responses::ImportReport;
use libsql::TransactionBehavior;

use crate::KlokanDb;
use crate::error::DatabaseError;
use crate::repos::instance::{find_instance_with, insert_instance_tree};

/// Merges instance subtrees into a local store, deduplicating by key.
pub struct InstanceImporter;

#[derive(Default)]
struct MergeCounts {
    imported: u32,
    sheets: u32,
    skipped: Vec<InstanceKey>,
}

impl InstanceImporter {
    /// Import every new instance found in the store at `source_path`.
    ///
    /// The source is only read; its handle is dropped before returning.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the source is missing or lacks
    /// the Klokan schema, or any store error raised while merging. On error
    /// nothing is committed to `local`.
    pub async fn import(
        local: &KlokanDb,
        source_path: &Path,
    ) -> Result<ImportReport, DatabaseError> {
        let trees = {
            let source = KlokanDb::open_read_only(source_path).await?;
            source.load_instance_trees().await?
        };
        tracing::debug!(
            source = %source_path.display(),
            instances = trees.len(),
            "loaded import source"
        );
        Self::merge(local, &trees, &source_path.display().to_string()).await
    }

    /// Merge already loaded subtrees into `local` in one transaction.
    ///
    /// # Errors
    ///
    /// Returns the first store error; the whole batch is rolled back.
    pub async fn merge(
        local: &KlokanDb,
        trees: &[InstanceTree],
        source: &str,
    ) -> Result<ImportReport, DatabaseError> {
        let started = Instant::now();
        let tx = local
            .conn()
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .await?;

        let counts = match Self::merge_in(&tx, trees).await {
            Ok(counts) => counts,
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    tracing::warn!(
                        %rollback_error,
                        "rollback after failed import did not complete"
                    );
                }
                tracing::warn!(source, %error, "import rolled back");
                return Err(error);
            }
        };
        tx.commit().await?;

        let report = ImportReport {
            source: source.to_string(),
            instances_imported: counts.imported,
            instances_skipped: u32::try_from(counts.skipped.len()).unwrap_or(u32::MAX),
            answer_sheets_imported: counts.sheets,
            skipped: counts.skipped,
            duration_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        };
        tracing::info!(
            source,
            imported = report.instances_imported,
            skipped = report.instances_skipped,
            sheets = report.answer_sheets_imported,
            "import committed"
        );
        Ok(report)
    }

    async fn merge_in(
        conn: &libsql::Connection,
        trees: &[InstanceTree],
    ) -> Result<MergeCounts, DatabaseError> {
        let mut counts = MergeCounts::default();
        let mut seen = HashSet::new();

        for tree in trees {
            let key = tree.instance.key();
            if !seen.insert(key) {
                tracing::debug!(%key, "duplicate key inside import source");
                continue;
            }
            if find_instance_with(conn, key).await?.is_some() {
                tracing::debug!(%key, "instance already present, skipping");
                counts.skipped.push(key);
                continue;
            }

            let stored = insert_instance_tree(conn, tree).await?;
            tracing::debug!(%key, id = stored.id, sheets = tree.sheet_count(), "imported instance");
            counts.imported += 1;
            counts.sheets += u32::try_from(tree.sheet_count()).unwrap_or(u32::MAX);
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{sample_tree, test_db};
    use klokan_core::enums::Category;
    use pretty_assertions::assert_eq;

    const CORRECT: &str = "abcdeabcdeabcdeabcdeabcd";

    #[tokio::test]
    async fn merge_inserts_new_and_skips_existing() {
        let local = test_db().await;
        local
            .store_instance_tree(&sample_tree(
                2019,
                Category::Benjamin,
                CORRECT,
                &[(1, 10, CORRECT)],
            ))
            .await
            .unwrap();

        let trees = vec![
            sample_tree(2019, Category::Benjamin, CORRECT, &[(2, 20, CORRECT), (3, 30, CORRECT)]),
            sample_tree(2019, Category::Kadet, CORRECT, &[(4, 40, CORRECT)]),
        ];
        let report = InstanceImporter::merge(&local, &trees, "memory").await.unwrap();

        assert_eq!(report.instances_imported, 1);
        assert_eq!(report.instances_skipped, 1);
        assert_eq!(report.answer_sheets_imported, 1);
        assert_eq!(
            report.skipped,
            vec![InstanceKey::new(2019, Category::Benjamin)]
        );
        // No sheets are merged into an existing instance.
        let benjamin = local
            .list_answer_sheets(InstanceKey::new(2019, Category::Benjamin))
            .await
            .unwrap();
        assert_eq!(benjamin.len(), 1);
    }

    #[tokio::test]
    async fn repeated_key_in_source_imports_once() {
        let local = test_db().await;
        let trees = vec![
            sample_tree(2020, Category::Student, CORRECT, &[(1, 1, CORRECT)]),
            sample_tree(2020, Category::Student, CORRECT, &[(2, 2, CORRECT)]),
        ];
        let report = InstanceImporter::merge(&local, &trees, "memory").await.unwrap();

        assert_eq!(report.instances_imported, 1);
        assert!(report.skipped.is_empty());
        assert_eq!(local.list_instances().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failing_tree_rolls_back_the_batch() {
        let local = test_db().await;
        let mut broken = sample_tree(2021, Category::Kadet, CORRECT, &[(9, 9, CORRECT)]);
        broken.answer_sheets[0].chosen_answers[5].position = 30;
        let trees = vec![
            sample_tree(2021, Category::Benjamin, CORRECT, &[(1, 1, CORRECT)]),
            broken,
        ];

        assert!(InstanceImporter::merge(&local, &trees, "memory").await.is_err());
        assert!(local.list_instances().await.unwrap().is_empty());
        assert_eq!(local.count_answer_sheets().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn empty_batch_reports_nothing() {
        let local = test_db().await;
        let report = InstanceImporter::merge(&local, &[], "memory").await.unwrap();
        assert_eq!(report.instances_imported, 0);
        assert_eq!(report.instances_skipped, 0);
        assert_eq!(report.source, "memory");
    }
}
