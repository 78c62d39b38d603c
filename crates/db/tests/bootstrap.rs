mod common;

use sqlx::PgPool;

/// Connect, migrate, and verify the lookup tables are seeded.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    runqc_db::health_check(&pool).await.unwrap();

    for table in ["run_purposes", "run_library_qc_statuses"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert!(count.0 > 0, "{table} should have seed data, got 0 rows");
    }
}

/// A review without a QC status is rejected by the schema as well.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_review_requires_qc_status_constraint(pool: PgPool) {
    let seed = common::seed(&pool).await;

    let err = sqlx::query(
        "INSERT INTO run_partition_aliquots (run_id, partition_id, aliquot_id, data_review, last_modifier_id)
         VALUES ($1, $2, $3, true, $4)",
    )
    .bind(seed.run)
    .bind(seed.lane1)
    .bind(seed.aliquot)
    .bind(seed.admin.id)
    .execute(&pool)
    .await
    .unwrap_err();

    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"));
    assert_eq!(db_err.constraint(), Some("ck_rpa_review_requires_qc_status"));
}
