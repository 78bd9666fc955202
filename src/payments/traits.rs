//! Gateway trait definitions
//!
//! Defines the seams between request builders, the HTTP collaborator and the
//! decoded responses.

use crate::error::EwayResult;
use crate::payments::codes;
use crate::payments::response::{JsonObject, ResponseModel};
use crate::payments::transport::{TransportError, TransportRequest};
use async_trait::async_trait;
use tracing::warn;

/// HTTP collaborator used by every request
///
/// Implementations perform exactly one attempt: no retries, no backoff. The
/// request's timeout must be honoured.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the call and return the raw response body.
    ///
    /// # Arguments
    /// * `request` - Method, URL, headers, serialized body and timeout
    ///
    /// # Returns
    /// * `Vec<u8>` - Body of a successful (2xx) response
    async fn execute(&self, request: TransportRequest) -> Result<Vec<u8>, TransportError>;
}

/// A request to one gateway endpoint
#[async_trait]
pub trait GatewayRequest: Send + Sync {
    /// Response type the decoded document is wrapped in
    type Response: GatewayResponse + From<JsonObject> + Send;

    /// Serialize the body, perform the call and decode the reply.
    ///
    /// Fails with `EncodeFailure` when the body cannot be serialized, with
    /// `TransportFailure` when the call cannot be completed and with
    /// `DecodeFailure` when the reply is not a JSON object.
    async fn send(&self, transport: &dyn Transport) -> EwayResult<JsonObject>;

    /// [`send`](Self::send) and wrap the document in [`Self::Response`].
    async fn execute(&self, transport: &dyn Transport) -> EwayResult<Self::Response> {
        let document = self.send(transport).await?;
        let response = Self::Response::from(document);
        if response.has_errors() {
            warn!(
                "Gateway response carries error codes: {}",
                response.error_codes().join(",")
            );
        }
        Ok(response)
    }
}

/// Shared error queries over a decoded response
pub trait GatewayResponse {
    fn model(&self) -> &ResponseModel;

    /// Code to description for every code in `Errors`, in first-seen order.
    fn errors(&self) -> Vec<(String, &'static str)> {
        self.model().errors()
    }

    /// True when `Errors` holds any code outside [`codes::CODES_FOR_SUCCESS`].
    fn has_errors(&self) -> bool {
        self.model().has_errors()
    }

    fn error_codes(&self) -> &[String] {
        self.model().error_codes()
    }

    /// Errors that are not success codes, with their descriptions.
    fn failures(&self) -> Vec<(String, &'static str)> {
        self.errors()
            .into_iter()
            .filter(|(code, _)| !codes::is_success_code(code))
            .collect()
    }
}
