//! Repository for the `run_partition_aliquots` table.
//!
//! Reads join the key entities and lookups so rows convert straight into
//! resolved [`RunPartitionAliquot`] records.

use runqc_core::run_aliquot::{RunAliquotKey, RunPartitionAliquot};
use runqc_core::types::DbId;
use sqlx::PgConnection;

use crate::models::run_aliquot::RunAliquotRow;

/// Joined select list; `rpa` is the run-aliquot table alias.
const SELECT: &str = "SELECT \
        rpa.run_id, r.name AS run_name, r.alias AS run_alias, \
        rpa.partition_id, p.container_id, p.partition_number, p.pool_id, \
        rpa.aliquot_id, la.name AS aliquot_name, la.library_id, \
        rpa.purpose_id, rp.alias AS purpose_alias, \
        rpa.qc_status_id, qs.description AS qc_status_description, qs.qc_passed, \
        rpa.qc_note, rpa.qc_user_id, rpa.qc_date, \
        rpa.data_review, rpa.data_reviewer_id, rpa.data_review_date, \
        rpa.last_modifier_id, rpa.created_at, rpa.updated_at \
    FROM run_partition_aliquots rpa \
    JOIN runs r ON r.id = rpa.run_id \
    JOIN partitions p ON p.id = rpa.partition_id \
    JOIN library_aliquots la ON la.id = rpa.aliquot_id \
    LEFT JOIN run_purposes rp ON rp.id = rpa.purpose_id \
    LEFT JOIN run_library_qc_statuses qs ON qs.id = rpa.qc_status_id";

const ORDER: &str = "ORDER BY rpa.run_id, p.partition_number, rpa.aliquot_id";

/// Provides reads and writes for run-partition-aliquot records.
pub struct RunAliquotRepo;

impl RunAliquotRepo {
    pub async fn find(
        conn: &mut PgConnection,
        key: RunAliquotKey,
    ) -> Result<Option<RunAliquotRow>, sqlx::Error> {
        let query = format!(
            "{SELECT} WHERE rpa.run_id = $1 AND rpa.partition_id = $2 AND rpa.aliquot_id = $3"
        );
        sqlx::query_as::<_, RunAliquotRow>(&query)
            .bind(key.run_id)
            .bind(key.partition_id)
            .bind(key.aliquot_id)
            .fetch_optional(conn)
            .await
    }

    pub async fn list_by_run(
        conn: &mut PgConnection,
        run_id: DbId,
    ) -> Result<Vec<RunAliquotRow>, sqlx::Error> {
        let query = format!("{SELECT} WHERE rpa.run_id = $1 {ORDER}");
        sqlx::query_as::<_, RunAliquotRow>(&query)
            .bind(run_id)
            .fetch_all(conn)
            .await
    }

    pub async fn list_by_aliquot(
        conn: &mut PgConnection,
        aliquot_id: DbId,
    ) -> Result<Vec<RunAliquotRow>, sqlx::Error> {
        let query = format!("{SELECT} WHERE rpa.aliquot_id = $1 {ORDER}");
        sqlx::query_as::<_, RunAliquotRow>(&query)
            .bind(aliquot_id)
            .fetch_all(conn)
            .await
    }

    /// Records for every aliquot derived from `library_id`.
    pub async fn list_by_library(
        conn: &mut PgConnection,
        library_id: DbId,
    ) -> Result<Vec<RunAliquotRow>, sqlx::Error> {
        let query = format!("{SELECT} WHERE la.library_id = $1 {ORDER}");
        sqlx::query_as::<_, RunAliquotRow>(&query)
            .bind(library_id)
            .fetch_all(conn)
            .await
    }

    /// Insert a new record. A duplicate key surfaces as a unique violation.
    pub async fn create(
        conn: &mut PgConnection,
        record: &RunPartitionAliquot,
        last_modifier_id: DbId,
    ) -> Result<(), sqlx::Error> {
        let key = record.key();
        sqlx::query(
            "INSERT INTO run_partition_aliquots
                (run_id, partition_id, aliquot_id, purpose_id, qc_status_id, qc_note,
                 qc_user_id, qc_date, data_review, data_reviewer_id, data_review_date,
                 last_modifier_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(key.run_id)
        .bind(key.partition_id)
        .bind(key.aliquot_id)
        .bind(record.purpose_id())
        .bind(record.qc_status_id())
        .bind(&record.qc_note)
        .bind(record.qc_user_id)
        .bind(record.qc_date)
        .bind(record.data_review)
        .bind(record.data_reviewer_id)
        .bind(record.data_review_date)
        .bind(last_modifier_id)
        .execute(conn)
        .await?;
        Ok(())
    }

    /// Overwrite every mutable column of an existing record.
    ///
    /// Returns `false` if no row with the record's key exists.
    pub async fn update(
        conn: &mut PgConnection,
        record: &RunPartitionAliquot,
        last_modifier_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let key = record.key();
        let result = sqlx::query(
            "UPDATE run_partition_aliquots SET
                purpose_id = $4,
                qc_status_id = $5,
                qc_note = $6,
                qc_user_id = $7,
                qc_date = $8,
                data_review = $9,
                data_reviewer_id = $10,
                data_review_date = $11,
                last_modifier_id = $12,
                updated_at = now()
             WHERE run_id = $1 AND partition_id = $2 AND aliquot_id = $3",
        )
        .bind(key.run_id)
        .bind(key.partition_id)
        .bind(key.aliquot_id)
        .bind(record.purpose_id())
        .bind(record.qc_status_id())
        .bind(&record.qc_note)
        .bind(record.qc_user_id)
        .bind(record.qc_date)
        .bind(record.data_review)
        .bind(record.data_reviewer_id)
        .bind(record.data_review_date)
        .bind(last_modifier_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete the records of `run_id` whose partitions sit in `container_id`.
    pub async fn delete_for_run_container(
        conn: &mut PgConnection,
        run_id: DbId,
        container_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM run_partition_aliquots rpa
             USING partitions p
             WHERE p.id = rpa.partition_id AND rpa.run_id = $1 AND p.container_id = $2",
        )
        .bind(run_id)
        .bind(container_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete the records of `aliquot_id` in partitions loaded with `pool_id`.
    pub async fn delete_for_pool_aliquot(
        conn: &mut PgConnection,
        pool_id: DbId,
        aliquot_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM run_partition_aliquots rpa
             USING partitions p
             WHERE p.id = rpa.partition_id AND p.pool_id = $1 AND rpa.aliquot_id = $2",
        )
        .bind(pool_id)
        .bind(aliquot_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }
}
