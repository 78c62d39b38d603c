pub mod health;
pub mod run_aliquots;

use axum::routing::get;
use axum::Router;

use crate::handlers::lookups;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /run-aliquots                                              save batch (PUT)
/// /run-aliquots/{run_id}/{partition_id}/{aliquot_id}         get
///
/// /runs/{run_id}/run-aliquots                                list by run
/// /runs/{run_id}/containers/{container_id}/run-aliquots      delete (admin)
/// /aliquots/{aliquot_id}/run-aliquots                        list by aliquot
/// /libraries/{library_id}/run-aliquots                       list by library
/// /pools/{pool_id}/aliquots/{aliquot_id}/run-aliquots        delete (admin)
///
/// /run-purposes                                              purpose lookup
/// /qc-statuses                                               QC status lookup
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(run_aliquots::router())
        .route("/run-purposes", get(lookups::list_run_purposes))
        .route("/qc-statuses", get(lookups::list_qc_statuses))
}
