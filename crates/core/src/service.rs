//! Public operations on run-partition-aliquot records.
//!
//! Each call runs in exactly one transaction opened through
//! [`in_transaction`]; a batch save is all-or-nothing.

use chrono::Utc;

use crate::actor::Actor;
use crate::error::CoreError;
use crate::run_aliquot::{RunAliquotKey, RunPartitionAliquot};
use crate::session::{in_transaction, RunAliquotStore, SessionFactory};
use crate::types::DbId;
use crate::workflow;

pub struct RunAliquotService<F> {
    sessions: F,
}

impl<F: SessionFactory> RunAliquotService<F> {
    pub fn new(sessions: F) -> Self {
        Self { sessions }
    }

    pub async fn get(&self, key: RunAliquotKey) -> Result<Option<RunPartitionAliquot>, CoreError> {
        in_transaction(&self.sessions, move |session| {
            Box::pin(async move { session.get(key).await })
        })
        .await
    }

    pub async fn list_by_run(&self, run_id: DbId) -> Result<Vec<RunPartitionAliquot>, CoreError> {
        in_transaction(&self.sessions, move |session| {
            Box::pin(async move { session.list_by_run(run_id).await })
        })
        .await
    }

    pub async fn list_by_aliquot(
        &self,
        aliquot_id: DbId,
    ) -> Result<Vec<RunPartitionAliquot>, CoreError> {
        in_transaction(&self.sessions, move |session| {
            Box::pin(async move { session.list_by_aliquot(aliquot_id).await })
        })
        .await
    }

    pub async fn list_by_library(
        &self,
        library_id: DbId,
    ) -> Result<Vec<RunPartitionAliquot>, CoreError> {
        in_transaction(&self.sessions, move |session| {
            Box::pin(async move { session.list_by_library(library_id).await })
        })
        .await
    }

    pub async fn save(&self, actor: &Actor, candidate: RunPartitionAliquot) -> Result<(), CoreError> {
        self.save_all(actor, vec![candidate]).await
    }

    /// Save every candidate in order within one transaction. The first
    /// failure aborts the batch and nothing is committed.
    pub async fn save_all(
        &self,
        actor: &Actor,
        candidates: Vec<RunPartitionAliquot>,
    ) -> Result<(), CoreError> {
        let user_id = actor.id;
        let actor = actor.clone();
        let now = Utc::now();
        let count = candidates.len();
        in_transaction(&self.sessions, move |session| {
            Box::pin(async move {
                for candidate in candidates {
                    workflow::save(session, &actor, now, candidate).await?;
                }
                Ok(())
            })
        })
        .await?;
        tracing::debug!(user_id, count, "Run-aliquot batch committed");
        Ok(())
    }

    pub async fn delete_for_run_container(
        &self,
        run_id: DbId,
        container_id: DbId,
    ) -> Result<u64, CoreError> {
        let deleted = in_transaction(&self.sessions, move |session| {
            Box::pin(async move { session.delete_for_run_container(run_id, container_id).await })
        })
        .await?;
        tracing::info!(run_id, container_id, deleted, "Run-aliquots deleted for run container");
        Ok(deleted)
    }

    pub async fn delete_for_pool_aliquot(
        &self,
        pool_id: DbId,
        aliquot_id: DbId,
    ) -> Result<u64, CoreError> {
        let deleted = in_transaction(&self.sessions, move |session| {
            Box::pin(async move { session.delete_for_pool_aliquot(pool_id, aliquot_id).await })
        })
        .await?;
        tracing::info!(pool_id, aliquot_id, deleted, "Run-aliquots deleted for pool aliquot");
        Ok(deleted)
    }
}
