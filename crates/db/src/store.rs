//! Generic document insertion.

use folio_core::types::DocumentId;
use sqlx::types::Json;
use sqlx::{PgExecutor, PgPool};

use crate::collection::Document;

/// Inserts documents into the collection their type maps to.
pub struct DocumentStore;

impl DocumentStore {
    /// Insert one document and return its store-assigned id.
    ///
    /// Accepts a pool or an open transaction.
    pub async fn insert_one<'e, E, D>(executor: E, document: &D) -> Result<DocumentId, sqlx::Error>
    where
        E: PgExecutor<'e>,
        D: Document,
    {
        let query = format!(
            "INSERT INTO {} (document) VALUES ($1) RETURNING id",
            D::COLLECTION.name()
        );
        let id = sqlx::query_scalar::<_, DocumentId>(&query)
            .bind(Json(document))
            .fetch_one(executor)
            .await?;

        tracing::debug!(collection = %D::COLLECTION, %id, "Document inserted");
        Ok(id)
    }

    /// Insert documents one at a time, in order, inside a single transaction.
    ///
    /// Either every document is stored and the ids come back in input order,
    /// or the first failure rolls the whole batch back.
    pub async fn insert_many<D: Document>(
        pool: &PgPool,
        documents: &[D],
    ) -> Result<Vec<DocumentId>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut ids = Vec::with_capacity(documents.len());
        for document in documents {
            ids.push(Self::insert_one(&mut *tx, document).await?);
        }
        tx.commit().await?;

        tracing::debug!(
            collection = %D::COLLECTION,
            count = ids.len(),
            "Document batch inserted"
        );
        Ok(ids)
    }
}
