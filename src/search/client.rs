use std::error::Error;

use super::types::DuckDuckGoConfig;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; ducksearch/0.1)";

#[derive(Debug, Clone)]
pub struct DuckDuckGoClient {
    client: reqwest::Client,
    config: DuckDuckGoConfig,
}

impl DuckDuckGoClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: DuckDuckGoConfig {
                base_url,
                user_agent: DEFAULT_USER_AGENT.to_string(),
            },
        }
    }

    #[allow(dead_code)] // Future configuration support
    pub fn with_config(config: DuckDuckGoConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Fetches the Instant Answer document for a query.
    ///
    /// Returns the deserialized JSON body verbatim; the caller picks apart
    /// `RelatedTopics`. Any transport, status, or decode failure surfaces as
    /// an error for the request layer to map to a 502.
    pub async fn instant_answer(
        &self,
        query: &str,
    ) -> Result<serde_json::Value, Box<dyn Error + Send + Sync>> {
        if query.trim().is_empty() {
            return Err("Search query cannot be empty".into());
        }

        let url = format!("{}/", self.config.base_url.trim_end_matches('/'));
        let params = vec![("q", query.to_string()), ("format", "json".to_string())];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .header("Accept", "application/json")
            .header("User-Agent", &self.config.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(format!("DuckDuckGo API error {}: {}", status, error_body).into());
        }

        let json_response: serde_json::Value = response.json().await?;
        Ok(json_response)
    }
}
