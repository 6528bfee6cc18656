//! A stored document together with its store-managed columns.

use folio_core::types::{DocumentId, Timestamp};
use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::FromRow;

/// A row from any collection table.
///
/// Serializes as the original document's fields with `id`, `created_at`
/// and `updated_at` added alongside them; `id` is the plain string form of
/// the store id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoredDocument {
    pub id: DocumentId,
    #[sqlx(json)]
    #[serde(flatten)]
    pub document: Map<String, Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
