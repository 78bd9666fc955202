//! eWAY Rapid access code integration
//!
//! Request builders for creating an access code and fetching its result, the
//! decoded responses, and the gateway code registry used to describe errors.

pub mod body;
pub mod codes;
pub mod models;
pub mod request;
pub mod response;
pub mod traits;
pub mod transport;
pub mod types;

pub use request::{AccessCodeRequest, AccessCodeResultRequest};
pub use response::{AccessCodeResponse, AccessCodeResultResponse};
pub use traits::{GatewayRequest, GatewayResponse, Transport};
pub use transport::ReqwestTransport;
