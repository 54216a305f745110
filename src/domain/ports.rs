use crate::domain::model::NodeRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The external search facility over fleet metadata. Consumed, never
/// defined, by this crate: given a full query string, return the matching
/// node records. An empty result is valid.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<NodeRecord>>;
}

pub trait ConfigProvider: Send + Sync {
    fn index_endpoint(&self) -> &str;
    fn environment(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
