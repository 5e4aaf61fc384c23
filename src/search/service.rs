use std::error::Error;

use super::client::DuckDuckGoClient;
use super::pagination::paginate;
use super::topics::flatten_related_topics;
use super::types::{Pagination, SearchResponse};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Search query is required!")]
    QueryRequired,
    #[error("Error trying get DuckDuckGo API data.")]
    Upstream(#[source] Box<dyn Error + Send + Sync>),
}

/// Orchestrates one search request: upstream fetch, flattening, pagination.
#[derive(Debug, Clone)]
pub struct SearchService {
    client: DuckDuckGoClient,
}

impl SearchService {
    pub fn new(client: DuckDuckGoClient) -> Self {
        Self { client }
    }

    /// Runs a search and returns one page of flattened results.
    ///
    /// `page` and `limit` are assumed validated (>= 1) by the request layer.
    /// A response without a usable `RelatedTopics` field short-circuits to an
    /// empty result set rather than an error.
    pub async fn search(
        &self,
        query: &str,
        page: usize,
        limit: usize,
    ) -> Result<SearchResponse, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::QueryRequired);
        }

        let document = self
            .client
            .instant_answer(query)
            .await
            .map_err(SearchError::Upstream)?;

        let related_topics = match document.get("RelatedTopics") {
            Some(value) if !value.is_null() => value,
            _ => {
                log::debug!("Upstream response carries no RelatedTopics for '{}'", query);
                return Ok(SearchResponse {
                    data: Vec::new(),
                    pagination: Pagination {
                        total_items: 0,
                        total_pages: 1,
                        current_page: 1,
                        page_size: 0,
                        has_next_page: false,
                        has_previous_page: false,
                    },
                });
            }
        };

        let all_topics = flatten_related_topics(related_topics);
        let result = paginate(all_topics, page, limit);

        Ok(SearchResponse {
            data: result.data,
            pagination: result.pagination,
        })
    }
}
