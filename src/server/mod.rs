pub mod error;
pub mod routes;

pub use error::{ApiError, ApiResult};

use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::history::SearchHistoryLog;
use crate::search::SearchService;

#[derive(Debug, Clone)]
pub struct AppState {
    pub search: SearchService,
    pub history: SearchHistoryLog,
}

/// Assembles the API router. CORS is wide open so a browser client served
/// from another origin can talk to the API directly.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route(
            "/search",
            get(routes::get_search).post(routes::post_search),
        )
        .route("/search/history", get(routes::get_search_history))
        .layer(cors)
        .with_state(Arc::new(state))
}
