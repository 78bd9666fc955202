use crate::payments::transport::TransportError;
use thiserror::Error;

pub type EwayResult<T> = Result<T, EwayError>;

#[derive(Debug, Error)]
pub enum EwayError {
    /// A `Method` or `TransactionType` outside the enumerated set.
    #[error("Unknown {kind}: {value}")]
    InvalidArgument { kind: &'static str, value: String },

    #[error("{message}: {source}")]
    TransportFailure {
        message: String,
        #[source]
        source: TransportError,
    },

    #[error("Unable to encode the request body: {reason}")]
    EncodeFailure { reason: String },

    #[error("{message}: {reason}")]
    DecodeFailure { message: String, reason: String },

    #[error("Response does not contain {field}")]
    MissingField { field: String },

    #[error("Response field {field} has an unexpected shape: {reason}")]
    FieldType { field: String, reason: String },
}

impl EwayError {
    pub fn invalid_argument(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidArgument {
            kind,
            value: value.into(),
        }
    }

    pub fn transport_failure(message: impl Into<String>, source: TransportError) -> Self {
        Self::TransportFailure {
            message: message.into(),
            source,
        }
    }

    pub fn encode_failure(reason: impl Into<String>) -> Self {
        Self::EncodeFailure {
            reason: reason.into(),
        }
    }

    pub fn decode_failure(message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DecodeFailure {
            message: message.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn field_type(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FieldType {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::TransportFailure { .. })
    }

    pub fn is_encode_failure(&self) -> bool {
        matches!(self, Self::EncodeFailure { .. })
    }

    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::DecodeFailure { .. })
    }

    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = EwayError::invalid_argument("Method", "Refund");
        assert_eq!(err.to_string(), "Unknown Method: Refund");
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_missing_field_message_names_field() {
        let err = EwayError::missing_field("AccessCode");
        assert_eq!(err.to_string(), "Response does not contain AccessCode");
        assert!(err.is_missing_field());
        assert!(!err.is_transport_failure());
    }

    #[test]
    fn test_transport_failure_keeps_source() {
        let err = EwayError::transport_failure(
            "Unable to get access code",
            TransportError::new("connection refused"),
        );
        assert!(err.is_transport_failure());
        assert_eq!(err.to_string(), "Unable to get access code: connection refused");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_decode_failure_message() {
        let err = EwayError::decode_failure(
            "Unable to decode the access code result response",
            "expected a JSON object",
        );
        assert!(err.is_decode_failure());
        assert_eq!(
            err.to_string(),
            "Unable to decode the access code result response: expected a JSON object"
        );
    }
}
