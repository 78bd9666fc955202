//! Gateway request builders
//!
//! [`RequestModel`] holds what every request shares: credentials, endpoint,
//! timeout and the body tree. The two request types add their own fields and
//! endpoint path on top.

pub mod access_code;
pub mod access_code_result;

pub use access_code::AccessCodeRequest;
pub use access_code_result::AccessCodeResultRequest;

use crate::error::{EwayError, EwayResult};
use crate::payments::body::BodyObject;
use crate::payments::response::JsonObject;
use crate::payments::traits::Transport;
use crate::payments::transport::{TransportError, TransportRequest};
use crate::payments::types::{Credentials, Endpoint, HttpMethod};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

/// Timeout applied when none is given.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Failure messages for one operation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailureMessages {
    pub transport: &'static str,
    pub decode: &'static str,
}

#[derive(Debug, Clone)]
pub struct RequestModel {
    credentials: Credentials,
    endpoint: Endpoint,
    timeout: Duration,
    body: BodyObject,
}

impl RequestModel {
    pub fn new(api_key: &str, password: &str, is_sandbox: bool, timeout_secs: u64) -> Self {
        Self {
            credentials: Credentials::new(api_key, password),
            endpoint: Endpoint::from_sandbox(is_sandbox),
            timeout: Duration::from_secs(timeout_secs),
            body: BodyObject::new(),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn body(&self) -> &BodyObject {
        &self.body
    }

    pub(crate) fn body_mut(&mut self) -> &mut BodyObject {
        &mut self.body
    }

    /// The accumulated body as JSON, in field-set order.
    ///
    /// Fails with `EncodeFailure` when the body holds a NaN or infinite float.
    pub fn body_json(&self) -> EwayResult<String> {
        serde_json::to_string(&self.body)
            .map_err(|e| EwayError::encode_failure(e.to_string()))
    }

    /// Assemble the transport call for `path` under the endpoint base URL.
    pub fn transport_request(&self, method: HttpMethod, path: &str) -> EwayResult<TransportRequest> {
        Ok(TransportRequest {
            method,
            url: format!("{}{}", self.endpoint.base_url(), path),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                (
                    "Authorization".to_string(),
                    self.credentials.authorization_header(),
                ),
            ],
            body: self.body_json()?,
            timeout: self.timeout,
        })
    }

    pub(crate) async fn dispatch(
        &self,
        transport: &dyn Transport,
        method: HttpMethod,
        path: &str,
        messages: FailureMessages,
    ) -> EwayResult<JsonObject> {
        let request = self.transport_request(method, path)?;
        debug!(
            "Sending {} {} (timeout {}s)",
            request.method,
            request.url,
            request.timeout.as_secs()
        );

        let url = request.url.clone();
        let raw = transport.execute(request).await.map_err(|e: TransportError| {
            error!("{} from {}: {}", messages.transport, url, e);
            EwayError::transport_failure(messages.transport, e)
        })?;

        let document = decode_object(&raw).map_err(|reason| {
            error!("{} from {}: {}", messages.decode, url, reason);
            EwayError::decode_failure(messages.decode, reason)
        })?;

        info!("Decoded gateway response from {} ({} fields)", url, document.len());
        Ok(document)
    }
}

fn decode_object(raw: &[u8]) -> Result<JsonObject, String> {
    match serde_json::from_slice::<Value>(raw) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(other) => Err(format!("expected a JSON object, got {}", json_kind(&other))),
        Err(e) => Err(format!("JSON error: {}", e)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
