use std::sync::Arc;

use folio_core::error::CoreError;
use folio_mail::Mailer;

use crate::config::ServerConfig;
use crate::error::AppResult;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Document store pool. `None` when no `DATABASE_URL` was configured.
    pub pool: Option<folio_db::DbPool>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Contact notification mailer. `None` when SMTP is not configured.
    pub mailer: Option<Arc<dyn Mailer>>,
}

impl AppState {
    /// The store pool, or the "Database not configured" error.
    pub fn require_pool(&self) -> AppResult<&folio_db::DbPool> {
        self.pool
            .as_ref()
            .ok_or(CoreError::NotConfigured("Database").into())
    }
}
