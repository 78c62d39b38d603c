//! Route definitions for run-partition-aliquot QC records.
//!
//! Records are reachable from each of the entities they join, so the routes
//! hang off several parent resources.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::run_aliquots;
use crate::state::AppState;

/// ```text
/// PUT    /run-aliquots                                          -> save_all
/// GET    /run-aliquots/{run_id}/{partition_id}/{aliquot_id}     -> get
/// GET    /runs/{run_id}/run-aliquots                            -> list_by_run
/// DELETE /runs/{run_id}/containers/{container_id}/run-aliquots  -> delete_for_run_container
/// GET    /aliquots/{aliquot_id}/run-aliquots                    -> list_by_aliquot
/// GET    /libraries/{library_id}/run-aliquots                   -> list_by_library
/// DELETE /pools/{pool_id}/aliquots/{aliquot_id}/run-aliquots    -> delete_for_pool_aliquot
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/run-aliquots", put(run_aliquots::save_all))
        .route(
            "/run-aliquots/{run_id}/{partition_id}/{aliquot_id}",
            get(run_aliquots::get),
        )
        .route("/runs/{run_id}/run-aliquots", get(run_aliquots::list_by_run))
        .route(
            "/runs/{run_id}/containers/{container_id}/run-aliquots",
            delete(run_aliquots::delete_for_run_container),
        )
        .route(
            "/aliquots/{aliquot_id}/run-aliquots",
            get(run_aliquots::list_by_aliquot),
        )
        .route(
            "/libraries/{library_id}/run-aliquots",
            get(run_aliquots::list_by_library),
        )
        .route(
            "/pools/{pool_id}/aliquots/{aliquot_id}/run-aliquots",
            delete(run_aliquots::delete_for_pool_aliquot),
        )
}
