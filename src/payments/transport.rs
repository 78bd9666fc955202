//! HTTP transport
//!
//! The request layer hands a fully assembled [`TransportRequest`] to a
//! [`Transport`](crate::payments::traits::Transport) and gets raw bytes back.
//! [`ReqwestTransport`] is the default implementation.

use crate::payments::traits::Transport;
use crate::payments::types::HttpMethod;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// One outbound call, ready to put on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body. Sent with GET requests as well.
    pub body: String,
    pub timeout: Duration,
}

impl TransportRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// The call could not be completed.
///
/// Connectivity problems, non-2xx statuses (including authentication rejection)
/// and timeouts all land here.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    pub status: Option<u16>,
    pub timed_out: bool,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            timed_out: false,
        }
    }

    pub fn timeout(after: Duration) -> Self {
        Self {
            message: format!("request timed out after {} seconds", after.as_secs()),
            status: None,
            timed_out: true,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            message: format!("HTTP {}", status),
            status: Some(status),
            timed_out: false,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: format!("Request error: {}", err),
            status: err.status().map(|status| status.as_u16()),
            timed_out: err.is_timeout(),
        }
    }
}

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("eway-access-code/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::new(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<Vec<u8>, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self
            .client
            .request(method, &request.url)
            .timeout(request.timeout)
            .body(request.body);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::timeout(request.timeout)
            } else {
                TransportError::from(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Gateway answered {} for {}", status, request.url);
            return Err(TransportError::status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        debug!("Received {} bytes from {}", bytes.len(), request.url);
        Ok(bytes.to_vec())
    }
}
