//! Create-access-code request
//!
//! Builds the body for `POST AccessCodes`. Setters store values in the order
//! they are called; nested sections accept either the typed structs from
//! [`models`](crate::payments::models) or any flat key/value iterator.

use crate::config::EwayConfig;
use crate::error::EwayResult;
use crate::payments::body::{BodyObject, Field};
use crate::payments::request::{FailureMessages, RequestModel, DEFAULT_TIMEOUT_SECS};
use crate::payments::response::{AccessCodeResponse, JsonObject};
use crate::payments::traits::{GatewayRequest, Transport};
use crate::payments::types::{HttpMethod, Method, TransactionType};
use async_trait::async_trait;
use tracing::info;

const PATH: &str = "AccessCodes";

const MESSAGES: FailureMessages = FailureMessages {
    transport: "Unable to get access code",
    decode: "Unable to decode the access code response",
};

#[derive(Debug, Clone)]
pub struct AccessCodeRequest {
    model: RequestModel,
}

impl AccessCodeRequest {
    pub fn new(api_key: &str, password: &str, is_sandbox: bool) -> Self {
        Self::with_timeout(api_key, password, is_sandbox, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(api_key: &str, password: &str, is_sandbox: bool, timeout_secs: u64) -> Self {
        Self {
            model: RequestModel::new(api_key, password, is_sandbox, timeout_secs),
        }
    }

    pub fn from_config(config: &EwayConfig) -> Self {
        Self::with_timeout(
            &config.api_key,
            &config.password,
            config.sandbox,
            config.timeout_secs,
        )
    }

    pub fn model(&self) -> &RequestModel {
        &self.model
    }

    pub fn set_customer(&mut self, customer: impl Into<BodyObject>) -> &mut Self {
        self.model.body_mut().insert("Customer", customer.into());
        self
    }

    pub fn set_customer_ip(&mut self, ip_address: impl Into<String>) -> &mut Self {
        self.model.body_mut().insert("CustomerIP", ip_address.into());
        self
    }

    /// Marks the payment as a PayPal/checkout payment and sets where to return to.
    /// Both fields are always written together.
    pub fn set_checkout_payment(&mut self, checkout_url: impl Into<String>) -> &mut Self {
        let body = self.model.body_mut();
        body.insert("CheckoutPayment", true);
        body.insert("CheckoutUrl", checkout_url.into());
        self
    }

    pub fn set_device_id(&mut self, device_id: impl Into<String>) -> &mut Self {
        self.model.body_mut().insert("DeviceID", device_id.into());
        self
    }

    /// Line items purchased by the customer, in order.
    ///
    /// The gateway accepts at most 99 items; that limit is checked server side.
    pub fn set_items<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<BodyObject>,
    {
        let items: Vec<BodyObject> = items.into_iter().map(Into::into).collect();
        self.model.body_mut().insert("Items", items);
        self
    }

    /// Fails with `InvalidArgument` for anything but the five gateway methods,
    /// leaving the body untouched.
    pub fn set_method(&mut self, method: impl AsRef<str>) -> EwayResult<&mut Self> {
        let method: Method = method.as_ref().parse()?;
        self.model.body_mut().insert("Method", method.as_str());
        Ok(self)
    }

    /// Opaque key/value option objects echoed back by the gateway.
    pub fn set_options<I>(&mut self, options: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<BodyObject>,
    {
        let options: Vec<BodyObject> = options.into_iter().map(Into::into).collect();
        self.model.body_mut().insert("Options", options);
        self
    }

    pub fn set_partner_id(&mut self, partner_id: impl Into<String>) -> &mut Self {
        self.model.body_mut().insert("PartnerID", partner_id.into());
        self
    }

    /// `TotalAmount` is the only field the gateway requires.
    pub fn set_payment(&mut self, payment: impl Into<BodyObject>) -> &mut Self {
        self.model.body_mut().insert("Payment", payment.into());
        self
    }

    pub fn set_redirect_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.model.body_mut().insert("RedirectUrl", url.into());
        self
    }

    pub fn set_shipping_address(&mut self, address: impl Into<BodyObject>) -> &mut Self {
        self.model.body_mut().insert("ShippingAddress", address.into());
        self
    }

    /// Fails with `InvalidArgument` for anything but `Purchase`, `MOTO` or
    /// `Recurring`, leaving the body untouched.
    pub fn set_transaction_type(&mut self, transaction_type: impl AsRef<str>) -> EwayResult<&mut Self> {
        let transaction_type: TransactionType = transaction_type.as_ref().parse()?;
        self.model
            .body_mut()
            .insert("TransactionType", transaction_type.as_str());
        Ok(self)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.model.body().get(name)
    }
}

#[async_trait]
impl GatewayRequest for AccessCodeRequest {
    type Response = AccessCodeResponse;

    async fn send(&self, transport: &dyn Transport) -> EwayResult<JsonObject> {
        info!(
            "Requesting access code (sandbox={})",
            self.model.endpoint().is_sandbox()
        );
        self.model
            .dispatch(transport, HttpMethod::Post, PATH, MESSAGES)
            .await
    }
}
