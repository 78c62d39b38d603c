//! Handlers for run-partition-aliquot QC records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use runqc_core::reference::Ref;
use runqc_core::run_aliquot::{RunAliquotKey, RunPartitionAliquot};
use runqc_core::types::DbId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, CurrentUser};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// One entry of a save request.
///
/// Related entities are sent by id only. Audit fields are computed on save
/// and are not accepted from clients.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveRunAliquot {
    pub run_id: DbId,
    pub partition_id: DbId,
    pub aliquot_id: DbId,
    pub purpose_id: Option<DbId>,
    pub qc_status_id: Option<DbId>,
    #[validate(length(max = 1024))]
    pub qc_note: Option<String>,
    pub data_review: Option<bool>,
}

impl From<SaveRunAliquot> for RunPartitionAliquot {
    fn from(input: SaveRunAliquot) -> Self {
        let mut record = RunPartitionAliquot::new(
            Ref::unresolved(input.run_id),
            Ref::unresolved(input.partition_id),
            Ref::unresolved(input.aliquot_id),
        );
        record.purpose = input.purpose_id.map(Ref::unresolved);
        record.qc_status = input.qc_status_id.map(Ref::unresolved);
        record.qc_note = input.qc_note;
        record.data_review = input.data_review;
        record
    }
}

/// Body of the bulk delete responses.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: u64,
}

/// GET /api/v1/run-aliquots/{run_id}/{partition_id}/{aliquot_id}
pub async fn get(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((run_id, partition_id, aliquot_id)): Path<(DbId, DbId, DbId)>,
) -> AppResult<Json<DataResponse<RunPartitionAliquot>>> {
    let key = RunAliquotKey {
        run_id,
        partition_id,
        aliquot_id,
    };
    let record = state.run_aliquots.get(key).await?.ok_or_else(|| {
        AppError::NotFound(format!(
            "No QC record for run {run_id}, partition {partition_id}, aliquot {aliquot_id}"
        ))
    })?;
    Ok(Json(DataResponse { data: record }))
}

/// PUT /api/v1/run-aliquots
///
/// Saves every entry in one transaction; the first failure rejects the batch.
pub async fn save_all(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Json(input): Json<Vec<SaveRunAliquot>>,
) -> AppResult<StatusCode> {
    for (index, entry) in input.iter().enumerate() {
        entry
            .validate()
            .map_err(|e| AppError::BadRequest(format!("Entry {index}: {e}")))?;
    }

    let count = input.len();
    let candidates = input.into_iter().map(RunPartitionAliquot::from).collect();
    state.run_aliquots.save_all(&actor, candidates).await?;

    tracing::info!(user_id = actor.id, count, "Run-aliquots saved");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/runs/{run_id}/run-aliquots
pub async fn list_by_run(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(run_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<RunPartitionAliquot>>>> {
    let records = state.run_aliquots.list_by_run(run_id).await?;
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/aliquots/{aliquot_id}/run-aliquots
pub async fn list_by_aliquot(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(aliquot_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<RunPartitionAliquot>>>> {
    let records = state.run_aliquots.list_by_aliquot(aliquot_id).await?;
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/libraries/{library_id}/run-aliquots
pub async fn list_by_library(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(library_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<RunPartitionAliquot>>>> {
    let records = state.run_aliquots.list_by_library(library_id).await?;
    Ok(Json(DataResponse { data: records }))
}

/// DELETE /api/v1/runs/{run_id}/containers/{container_id}/run-aliquots
pub async fn delete_for_run_container(
    State(state): State<AppState>,
    RequireAdmin(actor): RequireAdmin,
    Path((run_id, container_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Deleted>>> {
    let deleted = state
        .run_aliquots
        .delete_for_run_container(run_id, container_id)
        .await?;
    tracing::info!(user_id = actor.id, run_id, container_id, deleted, "Run container QC cleared");
    Ok(Json(DataResponse {
        data: Deleted { deleted },
    }))
}

/// DELETE /api/v1/pools/{pool_id}/aliquots/{aliquot_id}/run-aliquots
pub async fn delete_for_pool_aliquot(
    State(state): State<AppState>,
    RequireAdmin(actor): RequireAdmin,
    Path((pool_id, aliquot_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Deleted>>> {
    let deleted = state
        .run_aliquots
        .delete_for_pool_aliquot(pool_id, aliquot_id)
        .await?;
    tracing::info!(user_id = actor.id, pool_id, aliquot_id, deleted, "Pool aliquot QC cleared");
    Ok(Json(DataResponse {
        data: Deleted { deleted },
    }))
}
