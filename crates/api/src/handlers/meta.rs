//! Static informational endpoints.

use axum::Json;
use serde::Serialize;

/// Endpoints advertised by the root banner.
const ADVERTISED_ENDPOINTS: [&str; 4] = [
    "/api/portfolio",
    "/api/portfolio/bulk",
    "/api/contact",
    "/test",
];

#[derive(Debug, Serialize)]
pub struct Banner {
    pub message: &'static str,
    pub endpoints: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// GET /
pub async fn root() -> Json<Banner> {
    Json(Banner {
        message: "Backend running",
        endpoints: ADVERTISED_ENDPOINTS.to_vec(),
    })
}

/// GET /api/hello
pub async fn hello() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello from the backend API!",
    })
}
