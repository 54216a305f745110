use crate::domain::model::NodeRecord;
use crate::domain::ports::SearchIndex;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// In-memory index serving a pre-seeded role -> nodes table. Useful as a
/// test double and for air-gapped runs where the fleet layout is known up
/// front.
#[derive(Debug, Clone, Default)]
pub struct StaticSearchIndex {
    roles: HashMap<String, Vec<NodeRecord>>,
}

impl StaticSearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(mut self, role: &str, nodes: Vec<NodeRecord>) -> Self {
        self.roles.insert(role.to_string(), nodes);
        self
    }
}

#[async_trait]
impl SearchIndex for StaticSearchIndex {
    async fn search(&self, query: &str) -> Result<Vec<NodeRecord>> {
        // only the roles:<name> term selects anything here; environment
        // scoping is the live backend's concern
        let role = query
            .split_whitespace()
            .find_map(|term| term.strip_prefix("roles:"));

        Ok(role
            .and_then(|r| self.roles.get(r))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> NodeRecord {
        match value {
            serde_json::Value::Object(map) => NodeRecord::from_object(map),
            other => panic!("node fixture must be an object, got {}", other),
        }
    }

    #[tokio::test]
    async fn serves_seeded_role() {
        let index = StaticSearchIndex::new().with_role(
            "cache",
            vec![node(json!({ "memcached": { "listen": "1.1.1.1" }}))],
        );

        let nodes = index
            .search("environment:_default AND roles:cache")
            .await
            .unwrap();

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].get_str("memcached.listen").unwrap(), "1.1.1.1");
    }

    #[tokio::test]
    async fn unknown_role_is_empty() {
        let index = StaticSearchIndex::new();

        let nodes = index
            .search("environment:_default AND roles:unknown")
            .await
            .unwrap();

        assert!(nodes.is_empty());
    }
}
