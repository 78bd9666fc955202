//! Decoded gateway responses
//!
//! [`ResponseModel`] owns the decoded JSON object and the normalized `Errors`
//! list. The typed responses wrap it and expose their endpoint's fields.

pub mod access_code;
pub mod access_code_result;

pub use access_code::AccessCodeResponse;
pub use access_code_result::AccessCodeResultResponse;

use crate::error::{EwayError, EwayResult};
use crate::payments::codes;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decoded response document
pub type JsonObject = serde_json::Map<String, Value>;

pub(crate) const ERRORS_FIELD: &str = "Errors";

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseModel {
    document: JsonObject,
    errors: Vec<String>,
}

impl ResponseModel {
    /// Wrap a decoded document, turning the comma separated `Errors` string into a
    /// list of codes. The list replaces the string inside the document.
    pub fn new(mut document: JsonObject) -> Self {
        let errors = document
            .get(ERRORS_FIELD)
            .map(split_error_codes)
            .unwrap_or_default();

        if document.contains_key(ERRORS_FIELD) {
            document.insert(
                ERRORS_FIELD.to_string(),
                Value::Array(errors.iter().cloned().map(Value::String).collect()),
            );
        }

        Self { document, errors }
    }

    pub fn document(&self) -> &JsonObject {
        &self.document
    }

    pub fn into_document(self) -> JsonObject {
        self.document
    }

    /// Normalized `Errors` codes, in response order with duplicates kept.
    pub fn error_codes(&self) -> &[String] {
        &self.errors
    }

    /// Each code paired with its description.
    ///
    /// A repeated code keeps the position of its first occurrence.
    pub fn errors(&self) -> Vec<(String, &'static str)> {
        let mut described: Vec<(String, &'static str)> = Vec::with_capacity(self.errors.len());
        for code in &self.errors {
            let description = codes::describe(code);
            match described.iter_mut().find(|(existing, _)| existing == code) {
                Some(entry) => entry.1 = description,
                None => described.push((code.clone(), description)),
            }
        }
        described
    }

    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(|code| !codes::is_success_code(code))
    }

    /// Raw value of `field`. Absent and `null` fields are both missing.
    pub fn get(&self, field: &str) -> EwayResult<&Value> {
        match self.document.get(field) {
            Some(Value::Null) | None => Err(EwayError::missing_field(field)),
            Some(value) => Ok(value),
        }
    }

    /// `field` deserialized into `T`.
    pub fn field<T: DeserializeOwned>(&self, field: &str) -> EwayResult<T> {
        let value = self.get(field)?;
        T::deserialize(value).map_err(|e| EwayError::field_type(field, e.to_string()))
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_ok()
    }
}

impl From<JsonObject> for ResponseModel {
    fn from(document: JsonObject) -> Self {
        Self::new(document)
    }
}

/// Absent-like values (`null`, `false`, `""`, `"0"`, `0`, `[]`) give no codes.
/// Anything else is split on `,` with every piece kept as is, so a stray space or
/// trailing comma yields a code that resolves to "Unknown Error".
fn split_error_codes(value: &Value) -> Vec<String> {
    match value {
        Value::Null | Value::Bool(false) => Vec::new(),
        Value::String(joined) if joined.is_empty() || joined == "0" => Vec::new(),
        Value::String(joined) => split_joined(joined),
        Value::Number(number) if number.as_f64() == Some(0.0) => Vec::new(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(code) => code.clone(),
                other => other.to_string(),
            })
            .collect(),
        other => split_joined(&other.to_string()),
    }
}

fn split_joined(joined: &str) -> Vec<String> {
    joined.split(',').map(str::to_string).collect()
}
