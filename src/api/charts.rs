//! Charts API client: five operations against `{base_url}` and `{base_url}/{id}`.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::http::HttpClient;

use super::types::{Chart, ChartMeta, ChartUpdate, CreatedChart, NewChart};

/// Base URL of the charts backend when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/charts";

/// The five charts operations. Implementations issue exactly one request
/// per call and surface failures as rejected outcomes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChartsApi: Send + Sync {
    /// Lists all charts, in the order the backend returns them.
    async fn list_charts(&self) -> Result<Vec<ChartMeta>>;
    /// Fetches one chart by id. Non-2xx responses propagate as errors.
    async fn get_chart(&self, id: i64) -> Result<Chart>;
    /// Creates a chart and returns the backend-assigned id.
    async fn create_chart(&self, chart: &NewChart) -> Result<CreatedChart>;
    /// Updates a chart; the backend response body is returned verbatim.
    async fn update_chart(&self, id: i64, update: &ChartUpdate) -> Result<Value>;
    /// Deletes a chart; the backend response body is returned verbatim.
    async fn delete_chart(&self, id: i64) -> Result<Value>;
}

/// HTTP-backed implementation of [`ChartsApi`].
pub struct ChartsClient {
    http: HttpClient,
    base_url: String,
}

impl ChartsClient {
    /// Create a new charts client, falling back to [`DEFAULT_BASE_URL`].
    #[tracing::instrument(skip(client, base_url))]
    pub fn new(client: Client, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            http: HttpClient::new(client),
            base_url,
        }
    }

    /// Create from an existing HttpClient.
    pub fn from_http_client(http: HttpClient, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn chart_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

#[async_trait]
impl ChartsApi for ChartsClient {
    #[tracing::instrument(skip(self))]
    async fn list_charts(&self) -> Result<Vec<ChartMeta>> {
        debug!("Listing charts from {}...", self.base_url);
        self.http.get_json(&self.base_url).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_chart(&self, id: i64) -> Result<Chart> {
        let url = self.chart_url(id);
        debug!("Fetching chart from {}...", url);
        self.http.get_json(&url).await
    }

    #[tracing::instrument(skip(self, chart))]
    async fn create_chart(&self, chart: &NewChart) -> Result<CreatedChart> {
        debug!("Creating chart {:?} at {}...", chart.name, self.base_url);
        self.http.post_json(&self.base_url, chart).await
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_chart(&self, id: i64, update: &ChartUpdate) -> Result<Value> {
        let url = self.chart_url(id);
        debug!("Updating chart at {}...", url);
        self.http.put_json(&url, update).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_chart(&self, id: i64) -> Result<Value> {
        let url = self.chart_url(id);
        debug!("Deleting chart at {}...", url);
        self.http.delete_json(&url).await
    }
}
