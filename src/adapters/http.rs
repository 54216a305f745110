use crate::domain::model::NodeRecord;
use crate::domain::ports::{ConfigProvider, SearchIndex};
use crate::utils::error::{DiscoveryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Search index reached over HTTP: `GET {endpoint}/search/node?q={query}`
/// answering `{"rows": [...], "total": n}` where each row is one node's
/// attribute object.
pub struct HttpSearchIndex {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    rows: Vec<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    total: u64,
}

impl HttpSearchIndex {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: normalize_endpoint(endpoint.into()),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        Ok(Self {
            client,
            endpoint: normalize_endpoint(config.index_endpoint().to_string()),
        })
    }
}

fn normalize_endpoint(endpoint: String) -> String {
    endpoint.trim_end_matches('/').to_string()
}

#[async_trait]
impl SearchIndex for HttpSearchIndex {
    async fn search(&self, query: &str) -> Result<Vec<NodeRecord>> {
        let url = format!("{}/search/node", self.endpoint);
        tracing::debug!("GET {} q={}", url, query);

        let response = self.client.get(&url).query(&[("q", query)]).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DiscoveryError::SearchFailed {
                status: status.as_u16(),
                query: query.to_string(),
            });
        }

        let body: SearchResponse = response.json().await?;
        tracing::debug!("Index returned {} of {} row(s)", body.rows.len(), body.total);
        Ok(body.rows.into_iter().map(NodeRecord::from_object).collect())
    }
}
