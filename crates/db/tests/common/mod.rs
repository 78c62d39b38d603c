//! Shared seed data for database integration tests.

#![allow(dead_code)]

use runqc_core::actor::Actor;
use runqc_core::types::DbId;
use runqc_db::models::user::CreateUser;
use runqc_db::repositories::UserRepo;
use sqlx::PgPool;

/// Ids of the rows created by [`seed`].
pub struct Seed {
    pub admin: Actor,
    pub technician: Actor,
    pub reviewer: Actor,
    pub run: DbId,
    pub other_run: DbId,
    pub container: DbId,
    pub pool: DbId,
    pub other_pool: DbId,
    /// Lane 1 holds `pool`, lane 2 holds `other_pool`.
    pub lane1: DbId,
    pub lane2: DbId,
    pub library: DbId,
    pub aliquot: DbId,
    pub other_aliquot: DbId,
    pub passed: DbId,
    pub failed: DbId,
}

async fn user(pool: &PgPool, username: &str, is_admin: bool, is_run_reviewer: bool) -> Actor {
    let mut conn = pool.acquire().await.unwrap();
    UserRepo::create(
        &mut conn,
        &CreateUser {
            username: username.into(),
            is_admin,
            is_run_reviewer,
        },
    )
    .await
    .unwrap()
    .into()
}

async fn insert_id(pool: &PgPool, sql: &str) -> DbId {
    let row: (DbId,) = sqlx::query_as(sql).fetch_one(pool).await.unwrap();
    row.0
}

pub async fn seed(pool: &PgPool) -> Seed {
    let admin = user(pool, "admin", true, false).await;
    let technician = user(pool, "tech", false, false).await;
    let reviewer = user(pool, "alice", false, true).await;

    let run = insert_id(pool, "INSERT INTO runs (name) VALUES ('RUN_A') RETURNING id").await;
    let other_run = insert_id(pool, "INSERT INTO runs (name) VALUES ('RUN_B') RETURNING id").await;
    let container = insert_id(
        pool,
        "INSERT INTO containers (identification_barcode) VALUES ('FC001') RETURNING id",
    )
    .await;
    let pool_a = insert_id(pool, "INSERT INTO pools (name) VALUES ('IPO1') RETURNING id").await;
    let pool_b = insert_id(pool, "INSERT INTO pools (name) VALUES ('IPO2') RETURNING id").await;

    let lane = |number: i32, pool_id: DbId| {
        format!(
            "INSERT INTO partitions (container_id, partition_number, pool_id) \
             VALUES ({container}, {number}, {pool_id}) RETURNING id"
        )
    };
    let lane1 = insert_id(pool, &lane(1, pool_a)).await;
    let lane2 = insert_id(pool, &lane(2, pool_b)).await;

    let library = insert_id(pool, "INSERT INTO libraries (name) VALUES ('LIB1') RETURNING id").await;
    let aliquot_sql = |name: &str| {
        format!("INSERT INTO library_aliquots (name, library_id) VALUES ('{name}', {library}) RETURNING id")
    };
    let aliquot = insert_id(pool, &aliquot_sql("LDI1")).await;
    let other_aliquot = insert_id(pool, &aliquot_sql("LDI2")).await;

    let passed = insert_id(
        pool,
        "SELECT id FROM run_library_qc_statuses WHERE description = 'Passed'",
    )
    .await;
    let failed = insert_id(
        pool,
        "SELECT id FROM run_library_qc_statuses WHERE description = 'Failed'",
    )
    .await;

    Seed {
        admin,
        technician,
        reviewer,
        run,
        other_run,
        container,
        pool: pool_a,
        other_pool: pool_b,
        lane1,
        lane2,
        library,
        aliquot,
        other_aliquot,
        passed,
        failed,
    }
}
