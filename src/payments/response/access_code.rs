//! Response to a create-access-code call

use crate::error::EwayResult;
use crate::payments::response::{JsonObject, ResponseModel};
use crate::payments::traits::GatewayResponse;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct AccessCodeResponse {
    model: ResponseModel,
}

impl AccessCodeResponse {
    pub fn new(document: JsonObject) -> Self {
        Self {
            model: ResponseModel::new(document),
        }
    }

    /// Token identifying the checkout session.
    pub fn access_code(&self) -> EwayResult<&Value> {
        self.model.get("AccessCode")
    }

    /// URL the card form must be posted to.
    pub fn form_action_url(&self) -> EwayResult<&Value> {
        self.model.get("FormActionURL")
    }
}

impl From<JsonObject> for AccessCodeResponse {
    fn from(document: JsonObject) -> Self {
        Self::new(document)
    }
}

impl GatewayResponse for AccessCodeResponse {
    fn model(&self) -> &ResponseModel {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: Value) -> AccessCodeResponse {
        match value {
            Value::Object(document) => AccessCodeResponse::new(document),
            other => panic!("test document must be an object, got {other}"),
        }
    }

    #[test]
    fn test_get_access_code() {
        let response = response(json!({"AccessCode": "F9802j0-O7sdVLnOcb_3dq8rf1Rrj"}));
        assert_eq!(
            response.access_code().unwrap(),
            &json!("F9802j0-O7sdVLnOcb_3dq8rf1Rrj")
        );
    }

    #[test]
    fn test_get_access_code_missing() {
        let err = response(json!({})).access_code().unwrap_err();
        assert!(err.is_missing_field());
        assert_eq!(err.to_string(), "Response does not contain AccessCode");
    }

    #[test]
    fn test_get_form_action_url() {
        let response = response(json!({"FormActionURL": "https://secure.ewaypayments.com/Process"}));
        assert_eq!(
            response.form_action_url().unwrap(),
            &json!("https://secure.ewaypayments.com/Process")
        );
    }

    #[test]
    fn test_get_form_action_url_missing() {
        let err = response(json!({"AccessCode": "AC1"})).form_action_url().unwrap_err();
        assert_eq!(err.to_string(), "Response does not contain FormActionURL");
    }

    #[test]
    fn test_error_queries_through_trait() {
        let response = response(json!({"Errors": "A2000,F7008"}));
        assert!(response.has_errors());
        assert_eq!(response.error_codes(), ["A2000", "F7008"]);
        assert_eq!(response.failures(), vec![("F7008".to_string(), "Risk Score Fraud")]);
    }
}
