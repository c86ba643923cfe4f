//! HTTP client for the backend history service.
//!
//! One `reqwest::Client` is built per `ApiClient`, carrying the JSON default
//! headers and the client-wide timeout. Both operations forward the raw JSON
//! payload to the caller; response shapes belong to the backend contract.

use once_cell::sync::Lazy;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::{ClientConfig, Mode};
use crate::error::ApiError;

/// Query parameters for the history listing endpoint.
///
/// An open mapping with no required keys and no client-side validation; the
/// backend recognizes `id`, `command`, `cwd`, `hostname`, `start_time`,
/// `end_time`, `exit`, `limit` and `offset`, and validates them itself.
/// Insertion order is preserved in the query string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HistoryFilters(Vec<(String, String)>);

impl HistoryFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter. Values are stringified, so numbers and strings
    /// serialize the same way they would from a loosely typed caller.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl ApiClient {
    /// Build a client for the given mode, resolving the base URL once.
    pub fn new(mode: Mode) -> Result<Self, ApiError> {
        Self::with_config(ClientConfig::for_mode(mode))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { config, client })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetch history entries matching the given filters. Issues exactly one
    /// `GET /history`; an empty filter set produces a URL with no query
    /// string.
    pub async fn get_history_entries(&self, filters: &HistoryFilters) -> Result<Value, ApiError> {
        let url = format!("{}/history", self.config.base_url);
        debug!(filters = filters.len(), %url, "listing history entries");

        let response = self.client.get(&url).query(filters).send().await?;
        Self::json_or_status_error(response).await
    }

    /// Delete the given history entries in one request. The id sequence is
    /// sent verbatim as `{"ids": [...]}`, order preserved.
    pub async fn batch_delete_history_entries<T: Serialize>(
        &self,
        ids: &[T],
    ) -> Result<Value, ApiError> {
        let url = format!("{}/history", self.config.base_url);
        debug!(count = ids.len(), %url, "batch deleting history entries");

        let response = self
            .client
            .delete(&url)
            .json(&serde_json::json!({ "ids": ids }))
            .send()
            .await?;
        Self::json_or_status_error(response).await
    }

    async fn json_or_status_error(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

static SHARED: Lazy<ApiClient> = Lazy::new(|| {
    ApiClient::new(Mode::from_env()).expect("failed to build HTTP client")
});

/// Process-wide client. The mode is read from the environment exactly once,
/// the first time this is called.
pub fn shared() -> &'static ApiClient {
    &SHARED
}
