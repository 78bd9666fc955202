//! Gateway enumerations, credentials and endpoints

use crate::error::{EwayError, EwayResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;
use std::str::FromStr;

pub const PRODUCTION_BASE_URL: &str = "https://api.ewaypayments.com/";
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.ewaypayments.com/";

/// Payment method requested when creating an access code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    ProcessPayment,
    CreateTokenCustomer,
    UpdateTokenCustomer,
    TokenPayment,
    Authorise,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::ProcessPayment,
        Method::CreateTokenCustomer,
        Method::UpdateTokenCustomer,
        Method::TokenPayment,
        Method::Authorise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProcessPayment => "ProcessPayment",
            Self::CreateTokenCustomer => "CreateTokenCustomer",
            Self::UpdateTokenCustomer => "UpdateTokenCustomer",
            Self::TokenPayment => "TokenPayment",
            Self::Authorise => "Authorise",
        }
    }
}

impl FromStr for Method {
    type Err = EwayError;

    fn from_str(value: &str) -> EwayResult<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == value)
            .ok_or_else(|| EwayError::invalid_argument("Method", value))
    }
}

impl AsRef<str> for Method {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the transaction was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Purchase,
    Moto,
    Recurring,
}

impl TransactionType {
    pub const ALL: [TransactionType; 3] = [
        TransactionType::Purchase,
        TransactionType::Moto,
        TransactionType::Recurring,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Purchase => "Purchase",
            Self::Moto => "MOTO",
            Self::Recurring => "Recurring",
        }
    }
}

impl FromStr for TransactionType {
    type Err = EwayError;

    fn from_str(value: &str) -> EwayResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| EwayError::invalid_argument("Transaction Type", value))
    }
}

impl AsRef<str> for TransactionType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API key and password, held only as the encoded Basic token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn new(api_key: &str, password: &str) -> Self {
        Self {
            token: STANDARD.encode(format!("{}:{}", api_key, password)),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn authorization_header(&self) -> String {
        format!("Basic {}", self.token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endpoint {
    #[default]
    Production,
    Sandbox,
}

impl Endpoint {
    pub fn from_sandbox(is_sandbox: bool) -> Self {
        if is_sandbox {
            Self::Sandbox
        } else {
            Self::Production
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Sandbox => SANDBOX_BASE_URL,
        }
    }

    pub fn is_sandbox(&self) -> bool {
        matches!(self, Self::Sandbox)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
