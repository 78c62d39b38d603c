use std::sync::Arc;

use runqc_core::service::RunAliquotService;
use runqc_db::session::PgSessionFactory;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: runqc_db::DbPool,
    /// Server configuration (read by the auth extractors).
    pub config: Arc<ServerConfig>,
    /// Transactional run-aliquot operations.
    pub run_aliquots: Arc<RunAliquotService<PgSessionFactory>>,
}

impl AppState {
    pub fn new(pool: runqc_db::DbPool, config: ServerConfig) -> Self {
        let run_aliquots = RunAliquotService::new(PgSessionFactory::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            run_aliquots: Arc::new(run_aliquots),
        }
    }
}
