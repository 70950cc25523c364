use bcard_auth::TokenService;

use std::sync::Arc;
use std::time::Instant;

use chrono::Duration;
use sqlx::SqlitePool;

/// Shared state threaded through every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenService>,
    /// Lifetime of tokens issued at login
    pub token_ttl: Duration,
    /// Process start, for the health endpoint's uptime report
    pub started_at: Instant,
}
