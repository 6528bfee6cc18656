//! Repository for the `portfolioitem` collection.

use folio_core::pagination::PageRequest;
use sqlx::PgPool;

use crate::collection::Collection;
use crate::models::document::StoredDocument;

/// Column list for collection queries.
const DOCUMENT_COLUMNS: &str = "id, document, created_at, updated_at";

/// Filter shared by the page and count queries. `$1` is the category or NULL.
const CATEGORY_FILTER: &str = "($1::text IS NULL OR document ->> 'category' = $1)";

/// Lists portfolio documents, newest first.
pub struct PortfolioRepo;

impl PortfolioRepo {
    /// One page of items, optionally restricted to a category label.
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
        page: &PageRequest,
    ) -> Result<Vec<StoredDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {DOCUMENT_COLUMNS} FROM {table} \
             WHERE {CATEGORY_FILTER} \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3",
            table = Collection::PortfolioItem.name(),
        );
        sqlx::query_as::<_, StoredDocument>(&query)
            .bind(category)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Number of items matching the same filter as [`Self::list`], ignoring paging.
    pub async fn count(pool: &PgPool, category: Option<&str>) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM {table} WHERE {CATEGORY_FILTER}",
            table = Collection::PortfolioItem.name(),
        );
        sqlx::query_scalar::<_, i64>(&query)
            .bind(category)
            .fetch_one(pool)
            .await
    }
}
