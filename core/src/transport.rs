//! `reqwest`-backed transport.

use async_trait::async_trait;
use tracing::debug;

use crate::config::HttpConfig;
use crate::http::{HttpRequest, HttpResponse, Transport, TransportError, TransportReply};

/// Performs GETs with a shared `reqwest::Client`.
///
/// Non-2xx statuses are returned as responses, not errors.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::with_source("failed to build HTTP client", e))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, request: &HttpRequest) -> TransportReply {
        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(url = %request.url, error = %e, "request failed");
                return TransportReply::error(TransportError::with_source(e.to_string(), e));
            }
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.to_string(), v.to_str().ok()?.to_string())))
            .collect();

        // A failed body read still reports the status line it arrived with.
        match response.text().await {
            Ok(body) => TransportReply::response(HttpResponse {
                status,
                headers,
                body,
            }),
            Err(e) => TransportReply {
                error: Some(TransportError::with_source(e.to_string(), e)),
                response: Some(HttpResponse {
                    status,
                    headers,
                    body: String::new(),
                }),
            },
        }
    }
}
