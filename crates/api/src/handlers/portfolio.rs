//! Handlers for portfolio listing and creation.

use axum::extract::{FromRequestParts, Query, State};
use axum::Json;
use folio_core::pagination::PageRequest;
use folio_core::portfolio::{PortfolioBatch, PortfolioCategory, PortfolioItem};
use folio_db::models::document::StoredDocument;
use folio_db::repositories::PortfolioRepo;
use folio_db::DocumentStore;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/portfolio`.
///
/// Extracted through [`Query`] with failures mapped to [`AppError`], so a
/// malformed `page` or `limit` gets the same JSON error body as a bad body.
#[derive(Debug, Deserialize, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct PortfolioQuery {
    pub category: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PortfolioPage {
    pub items: Vec<StoredDocument>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub categories: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct Created {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct BulkCreated {
    pub inserted: usize,
    pub ids: Vec<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/portfolio
///
/// Newest-first page of items, optionally restricted to one category. An
/// empty `category` is treated as no filter.
pub async fn list_portfolio(
    State(state): State<AppState>,
    params: PortfolioQuery,
) -> AppResult<Json<PortfolioPage>> {
    let pool = state.require_pool()?;
    let page = PageRequest::new(params.page, params.limit);
    let category = params.category.as_deref().filter(|c| !c.is_empty());

    let total = PortfolioRepo::count(pool, category).await?;
    let items = PortfolioRepo::list(pool, category, &page).await?;

    Ok(Json(PortfolioPage {
        items,
        total,
        page: page.page,
        limit: page.limit,
    }))
}

/// GET /api/portfolio/categories
pub async fn list_categories() -> Json<CategoryList> {
    Json(CategoryList {
        categories: PortfolioCategory::labels(),
    })
}

/// POST /api/portfolio
pub async fn create_item(
    State(state): State<AppState>,
    ValidatedJson(item): ValidatedJson<PortfolioItem>,
) -> AppResult<Json<Created>> {
    let pool = state.require_pool()?;
    let id = DocumentStore::insert_one(pool, &item).await?;

    tracing::info!(%id, category = item.category.label(), "Portfolio item created");

    Ok(Json(Created { id: id.to_string() }))
}

/// POST /api/portfolio/bulk
///
/// All items are validated before anything is written; the inserts then
/// run in order inside one transaction, so either every item is stored or
/// none is.
pub async fn create_bulk(
    State(state): State<AppState>,
    ValidatedJson(batch): ValidatedJson<PortfolioBatch>,
) -> AppResult<Json<BulkCreated>> {
    let pool = state.require_pool()?;
    let ids = DocumentStore::insert_many(pool, &batch.items).await?;

    tracing::info!(inserted = ids.len(), "Portfolio items created in bulk");

    Ok(Json(BulkCreated {
        inserted: ids.len(),
        ids: ids.iter().map(ToString::to_string).collect(),
    }))
}
