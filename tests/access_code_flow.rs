//! End-to-end tests for the access code workflow
//!
//! `RecordingTransport` captures the outbound call and replays a canned body.
//! `RedirectTransport` forwards to a real `ReqwestTransport` pointed at an
//! httpmock server instead of the gateway.

use async_trait::async_trait;
use eway_access_code::payments::models::{LineItem, Payment};
use eway_access_code::payments::transport::{TransportError, TransportRequest};
use eway_access_code::payments::types::{HttpMethod, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};
use eway_access_code::payments::{
    AccessCodeRequest, AccessCodeResultRequest, GatewayRequest, GatewayResponse,
    ReqwestTransport, Transport,
};
use eway_access_code::EwayError;
use httpmock::prelude::*;
use serde_json::json;
use std::sync::Mutex;
use std::time::Duration;

struct RecordingTransport {
    reply: Result<Vec<u8>, TransportError>,
    calls: Mutex<Vec<TransportRequest>>,
}

impl RecordingTransport {
    fn replying(body: &str) -> Self {
        Self {
            reply: Ok(body.as_bytes().to_vec()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing(error: TransportError) -> Self {
        Self {
            reply: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn only_call(&self) -> TransportRequest {
        let calls = self.calls.lock().unwrap();
        assert_eq!(calls.len(), 1, "exactly one call expected");
        calls[0].clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: TransportRequest) -> Result<Vec<u8>, TransportError> {
        self.calls.lock().unwrap().push(request);
        self.reply.clone()
    }
}

struct RedirectTransport {
    inner: ReqwestTransport,
    base_url: String,
}

#[async_trait]
impl Transport for RedirectTransport {
    async fn execute(&self, mut request: TransportRequest) -> Result<Vec<u8>, TransportError> {
        for base in [SANDBOX_BASE_URL, PRODUCTION_BASE_URL] {
            if let Some(path) = request.url.strip_prefix(base) {
                request.url = format!("{}/{}", self.base_url, path);
                break;
            }
        }
        self.inner.execute(request).await
    }
}

fn purchase_request() -> AccessCodeRequest {
    let mut request = AccessCodeRequest::new("apiKey", "pass", false);
    request.set_payment([("TotalAmount", 1234)]);
    request.set_redirect_url("http://eway.com.au");
    request.set_method("ProcessPayment").unwrap();
    request.set_transaction_type("Purchase").unwrap();
    request
}

#[tokio::test]
async fn test_access_code_request_wire_format() {
    let transport = RecordingTransport::replying("{}");

    let document = purchase_request().send(&transport).await.unwrap();
    assert!(document.is_empty());

    let call = transport.only_call();
    assert_eq!(call.method, HttpMethod::Post);
    assert_eq!(call.url, "https://api.ewaypayments.com/AccessCodes");
    assert_eq!(call.header("Content-Type"), Some("application/json"));
    assert_eq!(call.header("Authorization"), Some("Basic YXBpS2V5OnBhc3M="));
    assert_eq!(call.timeout, Duration::from_secs(60));
    assert_eq!(
        call.body,
        r#"{"Payment":{"TotalAmount":1234},"RedirectUrl":"http://eway.com.au","Method":"ProcessPayment","TransactionType":"Purchase"}"#
    );
}

#[tokio::test]
async fn test_checkout_payment_wire_format() {
    let transport = RecordingTransport::replying("{}");
    let mut request = purchase_request();
    request.set_checkout_payment("http://eway.com.au/paypal/landing/page/test");

    request.send(&transport).await.unwrap();

    assert_eq!(
        transport.only_call().body,
        r#"{"Payment":{"TotalAmount":1234},"RedirectUrl":"http://eway.com.au","Method":"ProcessPayment","TransactionType":"Purchase","CheckoutPayment":true,"CheckoutUrl":"http://eway.com.au/paypal/landing/page/test"}"#
    );
}

#[tokio::test]
async fn test_access_code_execute_wraps_response() {
    let transport = RecordingTransport::replying(
        r#"{"AccessCode":"AC1","FormActionURL":"https://secure.ewaypayments.com/Process","Errors":null}"#,
    );

    let response = purchase_request().execute(&transport).await.unwrap();

    assert_eq!(response.access_code().unwrap(), "AC1");
    assert_eq!(
        response.form_action_url().unwrap(),
        "https://secure.ewaypayments.com/Process"
    );
    assert!(!response.has_errors());
    assert!(response.errors().is_empty());
}

#[tokio::test]
async fn test_access_code_validation_errors_are_data() {
    let transport = RecordingTransport::replying(r#"{"AccessCode":null,"Errors":"V6011,V6047"}"#);

    let response = purchase_request().execute(&transport).await.unwrap();

    assert!(response.has_errors());
    assert_eq!(
        response.errors(),
        vec![
            ("V6011".to_string(), "Invalid Payment TotalAmount"),
            ("V6047".to_string(), "RedirectURL Required"),
        ]
    );
    assert!(response.access_code().unwrap_err().is_missing_field());
}

#[tokio::test]
async fn test_access_code_transport_failure() {
    let transport = RecordingTransport::failing(TransportError::status(401));

    let err = purchase_request().send(&transport).await.unwrap_err();

    assert!(err.is_transport_failure());
    assert!(err.to_string().starts_with("Unable to get access code"));
}

#[tokio::test]
async fn test_access_code_decode_failure() {
    let transport = RecordingTransport::replying("not json");

    let err = purchase_request().send(&transport).await.unwrap_err();

    assert!(err.is_decode_failure());
    assert!(err
        .to_string()
        .starts_with("Unable to decode the access code response"));
}

#[tokio::test]
async fn test_result_request_wire_format() {
    let transport = RecordingTransport::replying("{}");
    let request = AccessCodeResultRequest::with_timeout("apiKey", "pass", "AC1234", true, 20);

    request.send(&transport).await.unwrap();

    let call = transport.only_call();
    assert_eq!(call.method, HttpMethod::Get);
    assert_eq!(call.url, "https://api.sandbox.ewaypayments.com/AccessCode/AC1234");
    assert_eq!(call.header("Authorization"), Some("Basic YXBpS2V5OnBhc3M="));
    assert_eq!(call.body, r#"{"AccessCode":"AC1234"}"#);
    assert_eq!(call.timeout, Duration::from_secs(20));
}

#[tokio::test]
async fn test_result_request_failure_messages() {
    let request = AccessCodeResultRequest::new("apiKey", "pass", "AC1234", false);

    let err = request
        .send(&RecordingTransport::failing(TransportError::timeout(Duration::from_secs(60))))
        .await
        .unwrap_err();
    match err {
        EwayError::TransportFailure { message, source } => {
            assert_eq!(message, "Unable to get the access code result");
            assert!(source.timed_out);
        }
        other => panic!("unexpected error: {other}"),
    }

    for body in ["[]", "\"AC1234\"", "12", ""] {
        let err = request
            .send(&RecordingTransport::replying(body))
            .await
            .unwrap_err();
        match err {
            EwayError::DecodeFailure { message, .. } => {
                assert_eq!(message, "Unable to decode the access code result response")
            }
            other => panic!("unexpected error for {body:?}: {other}"),
        }
    }
}

#[tokio::test]
async fn test_result_execute_reports_bank_outcome() {
    let transport = RecordingTransport::replying(
        &json!({
            "AuthorisationCode": "382151",
            "ResponseCode": "00",
            "ResponseMessage": "A2000",
            "InvoiceNumber": "INV01234",
            "InvoiceReference": "REF-1",
            "TotalAmount": 1234,
            "TransactionID": 11299883,
            "TransactionStatus": true,
            "Errors": "A2000",
        })
        .to_string(),
    );

    let response = AccessCodeResultRequest::new("apiKey", "pass", "AC1234", false)
        .execute(&transport)
        .await
        .unwrap();

    assert!(response.has_bank_success());
    assert!(!response.has_errors());
    assert_eq!(
        response.errors(),
        vec![("A2000".to_string(), "Transaction Approved")]
    );
    assert_eq!(response.total_amount_auth().unwrap(), 1234);
    assert_eq!(response.transaction_id().unwrap(), 11299883);
    assert_eq!(response.transaction_status().unwrap(), true);
    assert_eq!(response.model().field::<String>("AuthorisationCode").unwrap(), "382151");
}

#[tokio::test]
async fn test_full_flow_over_http() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/AccessCodes")
            .header("authorization", "Basic YXBpS2V5OnBhc3M=")
            .json_body(json!({
                "Payment": {"TotalAmount": 1100},
                "Items": [{"SKU": "SKU-1", "Quantity": 1, "Total": 1100}],
                "RedirectUrl": "http://eway.com.au",
                "Method": "ProcessPayment",
                "TransactionType": "Purchase",
            }));
        then.status(200).json_body(json!({
            "AccessCode": "AC-HTTP",
            "FormActionURL": "https://secure.ewaypayments.com/Process",
            "Errors": null,
        }));
    });
    let fetch = server.mock(|when, then| {
        when.method(Method::GET)
            .path("/AccessCode/AC-HTTP")
            .json_body(json!({"AccessCode": "AC-HTTP"}));
        then.status(200).json_body(json!({
            "ResponseCode": "05",
            "TransactionStatus": false,
            "Errors": "D4405",
        }));
    });

    let transport = RedirectTransport {
        inner: ReqwestTransport::new().unwrap(),
        base_url: server.base_url(),
    };

    let mut request = AccessCodeRequest::new("apiKey", "pass", true);
    request
        .set_payment(Payment::new(1100))
        .set_items([LineItem {
            sku: Some("SKU-1".to_string()),
            quantity: Some(1),
            total: Some(1100),
            ..Default::default()
        }])
        .set_redirect_url("http://eway.com.au");
    request.set_method("ProcessPayment").unwrap();
    request.set_transaction_type("Purchase").unwrap();

    let created = request.execute(&transport).await.unwrap();
    let access_code = created.access_code().unwrap().as_str().unwrap().to_string();
    assert_eq!(access_code, "AC-HTTP");

    let result = AccessCodeResultRequest::new("apiKey", "pass", access_code, true)
        .execute(&transport)
        .await
        .unwrap();

    create.assert();
    fetch.assert();
    assert!(result.has_errors());
    assert!(!result.has_bank_success());
    assert_eq!(result.errors(), vec![("D4405".to_string(), "Do Not Honour")]);
}

#[tokio::test]
async fn test_gateway_rejection_over_http_is_transport_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/AccessCode/AC1");
        then.status(401);
    });

    let transport = RedirectTransport {
        inner: ReqwestTransport::new().unwrap(),
        base_url: server.base_url(),
    };

    let err = AccessCodeResultRequest::new("apiKey", "wrong", "AC1", false)
        .send(&transport)
        .await
        .unwrap_err();

    assert!(err.is_transport_failure());
}
