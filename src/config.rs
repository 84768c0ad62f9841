//! Client configuration

use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9093";
pub const DEFAULT_API_VERSION: &str = "v1";

/// Connection settings for [`crate::AlertmanagerClient`]
///
/// The library never reads the environment; callers resolve these values
/// and hand them over.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Base URL of the Alertmanager instance
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    /// API version segment inserted after `/api/`
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Per-request timeout (`"10s"`, `"500ms"`); none by default
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: default_api_version(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}
