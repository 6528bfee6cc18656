use axum::{routing::get, Router};

use crate::handlers::{diagnostics, meta};
use crate::state::AppState;

/// Mount the banner and diagnostics routes (root level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(meta::root))
        .route("/test", get(diagnostics::diagnostics))
}
