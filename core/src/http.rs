//! HTTP transport types and the transport boundary.
//!
//! # Design
//! Requests and responses are plain data. `WikiaClient` builds `HttpRequest`
//! values and maps `TransportReply` values without touching the network;
//! something implementing `Transport` performs the actual GET. Redirects, TLS
//! and timeouts all live behind that trait.

use std::error::Error as StdError;

use async_trait::async_trait;
use thiserror::Error;

/// HTTP method for a request. The remote API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute and already carries the encoded query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// A transport-level failure: connection refused, DNS, TLS, body read, ...
#[derive(Debug, Error)]
#[error("transport error: {message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Everything a transport knows once a GET has completed or faulted.
///
/// Both fields may be set: a transport can fail while reading the body of a
/// response whose status line already arrived.
#[derive(Debug, Default)]
pub struct TransportReply {
    pub error: Option<TransportError>,
    pub response: Option<HttpResponse>,
}

impl TransportReply {
    pub fn response(response: HttpResponse) -> Self {
        Self {
            error: None,
            response: Some(response),
        }
    }

    pub fn error(error: TransportError) -> Self {
        Self {
            error: Some(error),
            response: None,
        }
    }
}

/// Performs one HTTP GET.
///
/// Implementations never fail out of band: every failure is reported in the
/// returned `TransportReply`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, request: &HttpRequest) -> TransportReply;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_exposes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = TransportError::with_source("connect failed", io);
        assert_eq!(err.to_string(), "transport error: connect failed");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("refused"));
        assert!(TransportError::new("plain").source().is_none());
    }

    #[test]
    fn reply_constructors_fill_one_side() {
        let reply = TransportReply::error(TransportError::new("boom"));
        assert!(reply.error.is_some());
        assert!(reply.response.is_none());

        let reply = TransportReply::response(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "{}".to_string(),
        });
        assert!(reply.error.is_none());
        assert_eq!(reply.response.map(|r| r.status), Some(200));
    }
}
