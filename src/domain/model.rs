use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One fleet member's attribute bag: a nested key/value mapping as published
/// to the search index. Attributes are addressed by dot-separated paths,
/// e.g. `memcached.listen` or `openstack.mq.port`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeRecord {
    pub attrs: HashMap<String, serde_json::Value>,
}

impl NodeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_object(obj: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            attrs: obj.into_iter().collect(),
        }
    }

    pub fn get(&self, path: &str) -> Option<&serde_json::Value> {
        let mut segments = path.split('.');
        let mut current = self.attrs.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Scalar attribute rendered as a string. Ports arrive as either JSON
    /// strings or integers depending on who published the node, so both
    /// render the same way.
    pub fn get_str(&self, path: &str) -> Option<String> {
        render_scalar(self.get(path)?)
    }

    /// List attribute with scalar elements; non-scalar elements are dropped.
    /// Returns `Some(vec![])` for a present-but-empty list, which callers
    /// treat differently from an absent attribute.
    pub fn get_list(&self, path: &str) -> Option<Vec<String>> {
        let items = self.get(path)?.as_array()?;
        Some(items.iter().filter_map(render_scalar).collect())
    }
}

fn render_scalar(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
