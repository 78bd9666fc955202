//! Response to a fetch-access-code-result call

use crate::error::EwayResult;
use crate::payments::codes;
use crate::payments::response::{JsonObject, ResponseModel};
use crate::payments::traits::GatewayResponse;
use serde_json::Value;

/// Outcome of the transaction behind an access code
#[derive(Debug, Clone, PartialEq)]
pub struct AccessCodeResultResponse {
    model: ResponseModel,
}

impl AccessCodeResultResponse {
    pub fn new(document: JsonObject) -> Self {
        Self {
            model: ResponseModel::new(document),
        }
    }

    /// Authorisation code issued by the bank.
    pub fn bank_auth_code(&self) -> EwayResult<&Value> {
        self.model.get("AuthorisationCode")
    }

    /// Two digit bank response code.
    pub fn bank_response_code(&self) -> EwayResult<&Value> {
        self.model.get("ResponseCode")
    }

    pub fn bank_response_message(&self) -> EwayResult<&Value> {
        self.model.get("ResponseMessage")
    }

    /// Echo of the merchant's invoice number.
    pub fn invoice_number(&self) -> EwayResult<&Value> {
        self.model.get("InvoiceNumber")
    }

    /// Echo of the merchant's invoice reference.
    pub fn invoice_reference(&self) -> EwayResult<&Value> {
        self.model.get("InvoiceReference")
    }

    /// Amount authorised, in the lowest denomination.
    pub fn total_amount_auth(&self) -> EwayResult<&Value> {
        self.model.get("TotalAmount")
    }

    pub fn transaction_id(&self) -> EwayResult<&Value> {
        self.model.get("TransactionID")
    }

    pub fn transaction_status(&self) -> EwayResult<&Value> {
        self.model.get("TransactionStatus")
    }

    /// Whether the bank returned one of the unambiguous approval codes.
    ///
    /// Only `00` and `08` count; a response without `ResponseCode` is never a
    /// bank success. A numeric `ResponseCode` compares by value, so `0` and `8`
    /// count too.
    pub fn has_bank_success(&self) -> bool {
        match self.model.get("ResponseCode") {
            Ok(Value::String(code)) => codes::is_bank_success_code(code),
            Ok(Value::Number(code)) => matches!(code.as_f64(), Some(value) if value == 0.0 || value == 8.0),
            _ => false,
        }
    }
}

impl From<JsonObject> for AccessCodeResultResponse {
    fn from(document: JsonObject) -> Self {
        Self::new(document)
    }
}

impl GatewayResponse for AccessCodeResultResponse {
    fn model(&self) -> &ResponseModel {
        &self.model
    }
}
