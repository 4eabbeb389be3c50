use sqlx::MySqlPool;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: MySqlPool,
    pub config: Config,
}
