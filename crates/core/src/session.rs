//! Persistence collaborators and the transaction boundary.
//!
//! A [`Session`] is one open unit of work: everything done through it is
//! committed or rolled back together. [`in_transaction`] is the only place
//! sessions are opened and closed.

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::entities::{LibraryAliquot, Partition, QcStatus, Run, RunPurpose};
use crate::error::CoreError;
use crate::reference::Lookup;
use crate::run_aliquot::{RunAliquotKey, RunPartitionAliquot};
use crate::types::DbId;

/// Storage for run-partition-aliquot records.
#[async_trait]
pub trait RunAliquotStore: Send {
    async fn get(&mut self, key: RunAliquotKey)
        -> Result<Option<RunPartitionAliquot>, CoreError>;

    async fn list_by_run(&mut self, run_id: DbId) -> Result<Vec<RunPartitionAliquot>, CoreError>;

    async fn list_by_aliquot(
        &mut self,
        aliquot_id: DbId,
    ) -> Result<Vec<RunPartitionAliquot>, CoreError>;

    async fn list_by_library(
        &mut self,
        library_id: DbId,
    ) -> Result<Vec<RunPartitionAliquot>, CoreError>;

    async fn create(&mut self, record: &RunPartitionAliquot) -> Result<(), CoreError>;

    async fn update(&mut self, record: &RunPartitionAliquot) -> Result<(), CoreError>;

    /// Delete every record for `run_id` whose partition belongs to `container_id`.
    /// Returns the number of records removed.
    async fn delete_for_run_container(
        &mut self,
        run_id: DbId,
        container_id: DbId,
    ) -> Result<u64, CoreError>;

    /// Delete every record for `aliquot_id` in partitions loaded with `pool_id`.
    /// Returns the number of records removed.
    async fn delete_for_pool_aliquot(
        &mut self,
        pool_id: DbId,
        aliquot_id: DbId,
    ) -> Result<u64, CoreError>;
}

/// An open unit of work with access to the record store and every lookup
/// the save workflow needs.
#[async_trait]
pub trait Session:
    RunAliquotStore
    + Lookup<Run>
    + Lookup<Partition>
    + Lookup<LibraryAliquot>
    + Lookup<RunPurpose>
    + Lookup<QcStatus>
    + Sized
{
    async fn commit(self) -> Result<(), CoreError>;

    async fn rollback(self) -> Result<(), CoreError>;
}

/// Opens sessions.
#[async_trait]
pub trait SessionFactory: Send + Sync {
    type Session: Session;

    async fn begin(&self) -> Result<Self::Session, CoreError>;
}

/// Run `op` inside a single session, committing on success and rolling back
/// on any error.
///
/// ```ignore
/// in_transaction(&factory, move |session| {
///     Box::pin(async move { session.get(key).await })
/// })
/// .await
/// ```
pub async fn in_transaction<F, T, Op>(factory: &F, op: Op) -> Result<T, CoreError>
where
    F: SessionFactory + ?Sized,
    T: Send,
    Op: for<'s> FnOnce(&'s mut F::Session) -> BoxFuture<'s, Result<T, CoreError>> + Send,
{
    let mut session = factory.begin().await?;
    match op(&mut session).await {
        Ok(value) => {
            session.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = session.rollback().await {
                tracing::error!(error = %rollback_err, "Transaction rollback failed");
            }
            Err(err)
        }
    }
}
