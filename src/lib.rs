//! Client-side model of the eWAY Rapid Access Code workflow.
//!
//! Build a request, send it through a [`Transport`](payments::Transport), and query
//! the decoded response:
//!
//! ```no_run
//! use eway_access_code::payments::models::Payment;
//! use eway_access_code::payments::{
//!     AccessCodeRequest, GatewayRequest, GatewayResponse, ReqwestTransport,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = ReqwestTransport::new()?;
//!
//! let mut request = AccessCodeRequest::new("api-key", "password", true);
//! request
//!     .set_payment(Payment::new(1234))
//!     .set_redirect_url("https://shop.example/return");
//! request.set_method("ProcessPayment")?;
//! request.set_transaction_type("Purchase")?;
//!
//! let response = request.execute(&transport).await?;
//! if response.has_errors() {
//!     for (code, description) in response.errors() {
//!         eprintln!("{code}: {description}");
//!     }
//! } else {
//!     println!("post card details to {}", response.form_action_url()?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Gateway codes inside a well-formed response are data, not errors: a declined
//! payment is reported through [`GatewayResponse::errors`](payments::GatewayResponse::errors)
//! and [`has_errors`](payments::GatewayResponse::has_errors). [`EwayError`] only
//! covers invalid arguments, failed calls, undecodable replies and missing fields.

pub mod config;
pub mod error;
pub mod payments;

pub use error::{EwayError, EwayResult};
