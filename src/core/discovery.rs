use crate::core::{ConfigProvider, NodeRecord, Result, SearchIndex};

/// Role the message-queue brokers are tagged with when the local node does
/// not override it.
pub const DEFAULT_MQ_ROLE: &str = "openstack-ops-mq";
pub const DEFAULT_MQ_PORT: &str = "5672";

const MEMCACHED_OVERRIDE_ATTR: &str = "openstack.memcached_servers";
const MQ_SERVERS_ATTR: &str = "openstack.mq.servers";
const MQ_HOST_ATTR: &str = "openstack.mq.host";
const MQ_ROLE_ATTR: &str = "openstack.mq.server_role";
const MQ_PORT_ATTR: &str = "openstack.mq.port";

/// Peer discovery over a fleet's metadata index. Holds the search port, the
/// configuration, and the local node's own attribute bag, which can override
/// discovery entirely.
pub struct Discovery<S: SearchIndex, C: ConfigProvider> {
    index: S,
    config: C,
    local: NodeRecord,
}

impl<S: SearchIndex, C: ConfigProvider> Discovery<S, C> {
    pub fn new(index: S, config: C, local: NodeRecord) -> Self {
        Self {
            index,
            config,
            local,
        }
    }

    /// Nodes tagged with `role` within the configured environment.
    pub async fn search_for(&self, role: &str) -> Result<Vec<NodeRecord>> {
        let query = format!(
            "environment:{} AND roles:{}",
            self.config.environment(),
            role
        );
        tracing::debug!("Searching fleet index: {}", query);

        let nodes = self.index.search(&query).await?;
        tracing::debug!("Role '{}' matched {} node(s)", role, nodes.len());
        Ok(nodes)
    }

    /// Memcached endpoints for `role`, as sorted `host:port` strings. A
    /// static `openstack.memcached_servers` list on the local node wins over
    /// discovery and is returned verbatim, even when empty.
    pub async fn memcached_servers(&self, role: &str) -> Result<Vec<String>> {
        if let Some(servers) = self.local.get_list(MEMCACHED_OVERRIDE_ATTR) {
            tracing::debug!(
                "Using {} statically configured memcached server(s)",
                servers.len()
            );
            return Ok(servers);
        }

        let mut servers: Vec<String> = self
            .search_for(role)
            .await?
            .iter()
            .filter_map(|n| endpoint_of(n, "memcached.listen", "memcached.port"))
            .collect();
        servers.sort();
        servers.dedup();
        Ok(servers)
    }

    /// All message-queue brokers as a comma-joined `host:port` list. A
    /// static `openstack.mq.servers` host list wins over discovery and keeps
    /// its configured order; discovered brokers are sorted and deduped.
    pub async fn rabbit_servers(&self) -> Result<String> {
        let port = self
            .local
            .get_str(MQ_PORT_ATTR)
            .unwrap_or_else(|| DEFAULT_MQ_PORT.to_string());

        if let Some(hosts) = self.local.get_list(MQ_SERVERS_ATTR) {
            tracing::debug!("Using {} statically configured broker(s)", hosts.len());
            let brokers: Vec<String> =
                hosts.iter().map(|h| format!("{}:{}", h, port)).collect();
            return Ok(brokers.join(","));
        }

        let role = self
            .local
            .get_str(MQ_ROLE_ATTR)
            .unwrap_or_else(|| DEFAULT_MQ_ROLE.to_string());

        let mut brokers: Vec<String> = self
            .search_for(&role)
            .await?
            .iter()
            .filter_map(|n| endpoint_of(n, "openstack.mq.listen", "openstack.mq.port"))
            .collect();
        brokers.sort();
        brokers.dedup();
        Ok(brokers.join(","))
    }

    /// A single broker: the legacy `openstack.mq.host` attribute when set,
    /// otherwise the first entry of [`rabbit_servers`](Self::rabbit_servers).
    pub async fn rabbit_server(&self) -> Result<String> {
        if let Some(host) = self.local.get_str(MQ_HOST_ATTR) {
            let port = self
                .local
                .get_str(MQ_PORT_ATTR)
                .unwrap_or_else(|| DEFAULT_MQ_PORT.to_string());
            return Ok(format!("{}:{}", host, port));
        }

        let servers = self.rabbit_servers().await?;
        Ok(servers
            .split(',')
            .next()
            .unwrap_or_default()
            .to_string())
    }
}

fn endpoint_of(node: &NodeRecord, host_path: &str, port_path: &str) -> Option<String> {
    match (node.get_str(host_path), node.get_str(port_path)) {
        (Some(host), Some(port)) => Some(format!("{}:{}", host, port)),
        _ => {
            tracing::warn!(
                "Skipping node without '{}'/'{}' attributes",
                host_path,
                port_path
            );
            None
        }
    }
}
