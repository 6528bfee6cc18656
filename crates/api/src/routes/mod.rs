pub mod contact;
pub mod portfolio;
pub mod root;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hello                      static greeting (GET)
///
/// /portfolio                  list (GET), create one (POST)
/// /portfolio/categories       fixed category list (GET)
/// /portfolio/bulk             create many (POST)
///
/// /contact                    submit contact form (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(handlers::meta::hello))
        .nest("/portfolio", portfolio::router())
        .nest("/contact", contact::router())
}
