use serde::{Deserialize, Serialize};

/// Build metadata of the Alertmanager binary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: String,
    pub revision: String,
    pub branch: String,
    pub build_user: String,
    pub build_date: String,
    pub go_version: String,
}

/// A member of the Alertmanager gossip cluster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Peer {
    pub name: String,
    /// `host:port` the peer listens on for cluster traffic
    pub address: String,
}

/// Cluster membership as seen by the queried instance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ClusterStatus {
    pub name: String,
    /// Free text; `"ready"` is the common value but others exist
    pub status: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub peers: Vec<Peer>,
}

impl ClusterStatus {
    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

/// Payload of `GET /status`
///
/// `config_yaml` and `config_json` are two renderings of the same loaded
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(rename = "configYAML")]
    pub config_yaml: String,
    #[serde(rename = "configJSON")]
    pub config_json: serde_json::Value,
    pub version_info: VersionInfo,
    /// ISO-8601 time the instance started
    pub uptime: String,
    pub cluster_status: ClusterStatus,
}
