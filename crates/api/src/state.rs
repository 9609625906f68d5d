use std::sync::Arc;

use crate::config::ServerConfig;

/// What every handler and extractor can reach through `State<AppState>`:
/// the connection pool and the loaded config. Both members are handles, so
/// the per-request clone axum performs is two refcount bumps.
#[derive(Clone)]
pub struct AppState {
    pub pool: leadflow_db::DbPool,
    pub config: Arc<ServerConfig>,
}
