//! Store diagnostics for `GET /test`.
//!
//! Probes the document store on every call and reports what it found.
//! Probe failures are part of the report, never an error response.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// At most this many collection names are listed.
const MAX_LISTED_COLLECTIONS: i64 = 10;

/// Probe error messages are cut to this many characters.
const MAX_ERROR_CHARS: usize = 80;

/// Diagnostics response payload.
#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    /// Always "✅ Running" when this handler answers.
    pub backend: &'static str,
    /// Human-readable store state.
    pub database: String,
    /// Whether `DATABASE_URL` was set; `None` when no store exists.
    pub database_url: Option<&'static str>,
    pub database_name: Option<String>,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

/// GET /test
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let mut report = DiagnosticsReport {
        backend: "✅ Running",
        database: "❌ Not Available".to_string(),
        database_url: None,
        database_name: None,
        connection_status: "Not Connected",
        collections: Vec::new(),
    };

    let Some(pool) = state.pool.as_ref() else {
        report.database = "⚠️ Available but not initialized".to_string();
        return Json(report);
    };

    report.database = "✅ Available".to_string();
    report.database_url = Some(if state.config.database_url.is_some() {
        "✅ Set"
    } else {
        "❌ Not Set"
    });
    report.database_name = Some(
        folio_db::diagnostics::database_name(pool)
            .await
            .unwrap_or_else(|_| "Unknown".to_string()),
    );

    match folio_db::diagnostics::list_collections(pool, MAX_LISTED_COLLECTIONS).await {
        Ok(collections) => {
            report.collections = collections;
            report.database = "✅ Connected & Working".to_string();
            report.connection_status = "Connected";
        }
        Err(err) => {
            tracing::warn!(error = %err, "Diagnostics probe failed");
            report.database = format!("⚠️ Connected but Error: {}", truncate(&err.to_string()));
        }
    }

    Json(report)
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}
