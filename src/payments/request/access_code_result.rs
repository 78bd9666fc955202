//! Fetch-access-code-result request

use crate::config::EwayConfig;
use crate::error::EwayResult;
use crate::payments::request::{FailureMessages, RequestModel, DEFAULT_TIMEOUT_SECS};
use crate::payments::response::{AccessCodeResultResponse, JsonObject};
use crate::payments::traits::{GatewayRequest, Transport};
use crate::payments::types::HttpMethod;
use async_trait::async_trait;
use tracing::info;

const MESSAGES: FailureMessages = FailureMessages {
    transport: "Unable to get the access code result",
    decode: "Unable to decode the access code result response",
};

/// `GET AccessCode/<code>`
///
/// The access code goes into the path. It is also the only body field, and the
/// body is transmitted even though the call is a GET.
#[derive(Debug, Clone)]
pub struct AccessCodeResultRequest {
    model: RequestModel,
    access_code: String,
}

impl AccessCodeResultRequest {
    pub fn new(api_key: &str, password: &str, access_code: impl Into<String>, is_sandbox: bool) -> Self {
        Self::with_timeout(api_key, password, access_code, is_sandbox, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(
        api_key: &str,
        password: &str,
        access_code: impl Into<String>,
        is_sandbox: bool,
        timeout_secs: u64,
    ) -> Self {
        let access_code = access_code.into();
        let mut model = RequestModel::new(api_key, password, is_sandbox, timeout_secs);
        model.body_mut().insert("AccessCode", access_code.as_str());
        Self { model, access_code }
    }

    pub fn from_config(config: &EwayConfig, access_code: impl Into<String>) -> Self {
        Self::with_timeout(
            &config.api_key,
            &config.password,
            access_code,
            config.sandbox,
            config.timeout_secs,
        )
    }

    pub fn model(&self) -> &RequestModel {
        &self.model
    }

    pub fn access_code(&self) -> &str {
        &self.access_code
    }

    fn path(&self) -> String {
        format!("AccessCode/{}", self.access_code)
    }
}

#[async_trait]
impl GatewayRequest for AccessCodeResultRequest {
    type Response = AccessCodeResultResponse;

    async fn send(&self, transport: &dyn Transport) -> EwayResult<JsonObject> {
        info!("Fetching access code result: access_code={}", self.access_code);
        self.model
            .dispatch(transport, HttpMethod::Get, &self.path(), MESSAGES)
            .await
    }
}
