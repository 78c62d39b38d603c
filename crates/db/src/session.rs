//! Postgres-backed [`Session`]: one database transaction per unit of work.

use async_trait::async_trait;
use runqc_core::entities::{LibraryAliquot, Partition, QcStatus, Run, RunPurpose};
use runqc_core::error::CoreError;
use runqc_core::reference::{not_found, Lookup};
use runqc_core::run_aliquot::{RunAliquotKey, RunPartitionAliquot};
use runqc_core::session::{RunAliquotStore, Session, SessionFactory};
use runqc_core::types::DbId;
use sqlx::{Postgres, Transaction};

use crate::models::run_aliquot::RunAliquotRow;
use crate::repositories::{
    LibraryAliquotRepo, PartitionRepo, QcStatusRepo, RunAliquotRepo, RunPurposeRepo, RunRepo,
};
use crate::DbPool;

/// Map a database error into the core error space.
///
/// Unique violations become [`CoreError::Conflict`]; everything else is a
/// storage failure.
pub fn storage_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.code().as_deref() == Some("23505") {
            return CoreError::Conflict(db_err.message().to_string());
        }
    }
    CoreError::Storage(err.to_string())
}

fn modifier(record: &RunPartitionAliquot) -> Result<DbId, CoreError> {
    record
        .last_modifier_id
        .ok_or_else(|| CoreError::Internal("run-aliquot written without a modifier".into()))
}

fn into_records(rows: Vec<RunAliquotRow>) -> Vec<RunPartitionAliquot> {
    rows.into_iter().map(RunPartitionAliquot::from).collect()
}

/// Opens a [`PgSession`] per call.
#[derive(Clone)]
pub struct PgSessionFactory {
    pool: DbPool,
}

impl PgSessionFactory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionFactory for PgSessionFactory {
    type Session = PgSession;

    async fn begin(&self) -> Result<PgSession, CoreError> {
        let tx = self.pool.begin().await.map_err(storage_error)?;
        Ok(PgSession { tx })
    }
}

/// An open transaction. Dropping it without committing rolls it back.
pub struct PgSession {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl RunAliquotStore for PgSession {
    async fn get(
        &mut self,
        key: RunAliquotKey,
    ) -> Result<Option<RunPartitionAliquot>, CoreError> {
        let row = RunAliquotRepo::find(&mut self.tx, key)
            .await
            .map_err(storage_error)?;
        Ok(row.map(RunPartitionAliquot::from))
    }

    async fn list_by_run(&mut self, run_id: DbId) -> Result<Vec<RunPartitionAliquot>, CoreError> {
        RunAliquotRepo::list_by_run(&mut self.tx, run_id)
            .await
            .map(into_records)
            .map_err(storage_error)
    }

    async fn list_by_aliquot(
        &mut self,
        aliquot_id: DbId,
    ) -> Result<Vec<RunPartitionAliquot>, CoreError> {
        RunAliquotRepo::list_by_aliquot(&mut self.tx, aliquot_id)
            .await
            .map(into_records)
            .map_err(storage_error)
    }

    async fn list_by_library(
        &mut self,
        library_id: DbId,
    ) -> Result<Vec<RunPartitionAliquot>, CoreError> {
        RunAliquotRepo::list_by_library(&mut self.tx, library_id)
            .await
            .map(into_records)
            .map_err(storage_error)
    }

    async fn create(&mut self, record: &RunPartitionAliquot) -> Result<(), CoreError> {
        let last_modifier_id = modifier(record)?;
        RunAliquotRepo::create(&mut self.tx, record, last_modifier_id)
            .await
            .map_err(storage_error)
    }

    async fn update(&mut self, record: &RunPartitionAliquot) -> Result<(), CoreError> {
        let last_modifier_id = modifier(record)?;
        let updated = RunAliquotRepo::update(&mut self.tx, record, last_modifier_id)
            .await
            .map_err(storage_error)?;
        if !updated {
            return Err(CoreError::Storage(format!(
                "run-aliquot {:?} vanished before update",
                record.key()
            )));
        }
        Ok(())
    }

    async fn delete_for_run_container(
        &mut self,
        run_id: DbId,
        container_id: DbId,
    ) -> Result<u64, CoreError> {
        RunAliquotRepo::delete_for_run_container(&mut self.tx, run_id, container_id)
            .await
            .map_err(storage_error)
    }

    async fn delete_for_pool_aliquot(
        &mut self,
        pool_id: DbId,
        aliquot_id: DbId,
    ) -> Result<u64, CoreError> {
        RunAliquotRepo::delete_for_pool_aliquot(&mut self.tx, pool_id, aliquot_id)
            .await
            .map_err(storage_error)
    }
}

/// Implement [`Lookup`] for an entity by delegating to its repository's
/// `find_by_id` and converting the row.
macro_rules! pg_lookup {
    ($($ty:ty => $repo:ident),* $(,)?) => {
        $(
            #[async_trait]
            impl Lookup<$ty> for PgSession {
                async fn fetch(&mut self, id: DbId) -> Result<$ty, CoreError> {
                    $repo::find_by_id(&mut self.tx, id)
                        .await
                        .map_err(storage_error)?
                        .map(<$ty>::from)
                        .ok_or_else(|| not_found::<$ty>(id))
                }
            }
        )*
    };
}

pg_lookup! {
    Run => RunRepo,
    Partition => PartitionRepo,
    LibraryAliquot => LibraryAliquotRepo,
    RunPurpose => RunPurposeRepo,
    QcStatus => QcStatusRepo,
}

#[async_trait]
impl Session for PgSession {
    async fn commit(self) -> Result<(), CoreError> {
        self.tx.commit().await.map_err(storage_error)
    }

    async fn rollback(self) -> Result<(), CoreError> {
        self.tx.rollback().await.map_err(storage_error)
    }
}
