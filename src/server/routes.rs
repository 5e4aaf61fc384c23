use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::history::SearchLogEntry;
use crate::search::SearchResponse;

const DEFAULT_PAGE: usize = 1;
const DEFAULT_LIMIT: usize = 10;
const DEFAULT_HISTORY_ITEMS: usize = 10;

#[derive(Debug, Deserialize)]
pub struct GetSearchParams {
    query: Option<String>,
    page: Option<String>,
    limit: Option<String>,
    history: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostSearchRequest {
    query: Option<String>,
    page: Option<u32>,
    limit: Option<u32>,
    #[serde(default)]
    history: bool,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    items: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub data: Vec<SearchLogEntry>,
}

/// GET /search?query=&page=&limit=&history=
///
/// Replayed history searches pass `history=true` and are served normally but
/// not logged again.
pub async fn get_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GetSearchParams>,
) -> ApiResult<Json<SearchResponse>> {
    let query = require_query(params.query.as_deref())?;
    let page_param = parse_positive_param(params.page.as_deref(), "page")?;
    let limit_param = parse_positive_param(params.limit.as_deref(), "limit")?;
    let from_history = params.history.as_deref() == Some("true");

    let result = state
        .search
        .search(
            &query,
            page_param.unwrap_or(DEFAULT_PAGE),
            limit_param.unwrap_or(DEFAULT_LIMIT),
        )
        .await?;

    if !from_history {
        store_history_entry(
            &state,
            SearchLogEntry {
                timestamp: Utc::now(),
                method: "GET".to_string(),
                search_query: query,
                page_number: page_param.map(|p| p as u32),
                limit_number: limit_param.map(|l| l as u32),
            },
        );
    }

    Ok(Json(result))
}

/// POST /search with a JSON body `{ query, page?, limit?, history? }`.
///
/// Numeric fields arrive already typed; a zero falls back to the default the
/// same way an absent field does.
pub async fn post_search(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PostSearchRequest>,
) -> ApiResult<Json<SearchResponse>> {
    let query = require_query(request.query.as_deref())?;
    let page = request
        .page
        .filter(|p| *p >= 1)
        .map(|p| p as usize)
        .unwrap_or(DEFAULT_PAGE);
    let limit = request
        .limit
        .filter(|l| *l >= 1)
        .map(|l| l as usize)
        .unwrap_or(DEFAULT_LIMIT);

    let result = state.search.search(&query, page, limit).await?;

    if !request.history {
        store_history_entry(
            &state,
            SearchLogEntry {
                timestamp: Utc::now(),
                method: "POST".to_string(),
                search_query: query,
                page_number: request.page,
                limit_number: request.limit,
            },
        );
    }

    Ok(Json(result))
}

/// GET /search/history?items=
pub async fn get_search_history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryParams>,
) -> ApiResult<Json<HistoryResponse>> {
    let items = parse_positive_param(params.items.as_deref(), "items")?
        .unwrap_or(DEFAULT_HISTORY_ITEMS);

    Ok(Json(HistoryResponse {
        data: state.history.recent(items),
    }))
}

fn require_query(query: Option<&str>) -> Result<String, ApiError> {
    match query {
        Some(q) if !q.trim().is_empty() => Ok(q.to_string()),
        _ => Err(ApiError::SearchQueryRequired),
    }
}

/// An absent or empty param falls back to its default; anything else must
/// parse as an integer >= 1.
fn parse_positive_param(
    value: Option<&str>,
    name: &'static str,
) -> Result<Option<usize>, ApiError> {
    match value {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(Some(n)),
            _ => Err(ApiError::ParamMustBeNumber(name)),
        },
    }
}

fn store_history_entry(state: &AppState, entry: SearchLogEntry) {
    // Best effort only: a failing log write never fails the request.
    if let Err(e) = state.history.append(&entry) {
        log::error!("Failed to store search history entry: {}", e);
    }
}
