//! Client configuration.
//!
//! The only required value is the wiki's subdomain; `host` and `scheme` have
//! defaults matching the public service.

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_HOST: &str = "wikia.com";
pub const DEFAULT_SCHEME: &str = "http";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    pub subdomain: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_scheme")]
    pub scheme: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

impl ClientConfig {
    pub fn new(subdomain: impl Into<String>) -> Self {
        Self {
            subdomain: subdomain.into(),
            host: default_host(),
            scheme: default_scheme(),
        }
    }

    /// `<scheme>://<subdomain>.<host>/api/v1/`
    pub fn base_url(&self) -> String {
        format!("{}://{}.{}/api/v1/", self.scheme, self.subdomain, self.host)
    }
}

/// Settings for the network-backed transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    #[serde(default)]
    pub timeout: Option<Duration>,
    #[serde(default)]
    pub connect_timeout: Option<Duration>,
    #[serde(default)]
    pub user_agent: Option<String>,
}
