//! Handlers for the read-only lookup tables a QC form offers as choices.

use axum::extract::State;
use axum::Json;
use runqc_db::models::qc_status::QcStatusRow;
use runqc_db::models::run_purpose::RunPurposeRow;
use runqc_db::repositories::{QcStatusRepo, RunPurposeRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/run-purposes
pub async fn list_run_purposes(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<RunPurposeRow>>>> {
    let mut conn = state.pool.acquire().await?;
    let purposes = RunPurposeRepo::list(&mut conn).await?;
    Ok(Json(DataResponse { data: purposes }))
}

/// GET /api/v1/qc-statuses
pub async fn list_qc_statuses(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<QcStatusRow>>>> {
    let mut conn = state.pool.acquire().await?;
    let statuses = QcStatusRepo::list(&mut conn).await?;
    Ok(Json(DataResponse { data: statuses }))
}
