//! Thin async client for the two Solr endpoints the gateway uses:
//! `/select` and `/schema/fields`.

use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;

use super::error::SolrError;
use super::query::SolrParams;
use crate::config::SolrConfig;

#[derive(Debug, Clone)]
pub struct SolrClient {
    http: reqwest::Client,
    base_url: String,
}

impl SolrClient {
    pub fn new(config: &SolrConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build Solr HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}/select` with `params` as the query string.
    pub async fn select(&self, params: &SolrParams) -> Result<Value, SolrError> {
        let url = format!("{}/select", self.base_url);
        tracing::debug!("Solr query parameters: {params:?}");
        self.get_json(&url, params.as_pairs()).await
    }

    /// GET `{base_url}/schema/fields`.
    pub async fn schema_fields(&self) -> Result<Value, SolrError> {
        let url = format!("{}/schema/fields", self.base_url);
        self.get_json(&url, &[("wt".to_string(), "json".to_string())])
            .await
    }

    async fn get_json(&self, url: &str, query: &[(String, String)]) -> Result<Value, SolrError> {
        let resp = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| SolrError::Unreachable {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        tracing::debug!("Solr response status: {status}");

        let body = resp.text().await.map_err(|source| SolrError::Unreachable {
            url: url.to_string(),
            source,
        })?;

        if !status.is_success() {
            return Err(SolrError::NonSuccess { status, body });
        }

        serde_json::from_str(&body).map_err(|e| SolrError::Malformed(e.to_string()))
    }
}
