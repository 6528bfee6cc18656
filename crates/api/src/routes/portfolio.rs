use axum::routing::{get, post};
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// Portfolio routes, mounted at `/api/portfolio`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(portfolio::list_portfolio).post(portfolio::create_item),
        )
        .route("/categories", get(portfolio::list_categories))
        .route("/bulk", post(portfolio::create_bulk))
}
