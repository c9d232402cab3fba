//! Content Envelope
//!
//! The `data` object of a GraphQL response, keyed by root field name. A root
//! field that is absent or `null` is a valid "not found" outcome and surfaces as
//! `Ok(None)`; only a body that cannot be decoded, or a payload whose shape does
//! not match the requested type, is an error.

use crate::error::FetchError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlErrorDetail {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphqlErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            locations: None,
            extensions: None,
        }
    }
}

#[derive(Deserialize)]
struct RawResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphqlErrorDetail>>,
}

/// Decoded `data` of a successful response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentEnvelope {
    data: Map<String, Value>,
}

impl ContentEnvelope {
    /// Decode a response body. Any `errors` key fails the whole response, even
    /// when `data` is present alongside it.
    pub fn from_slice(body: &[u8]) -> Result<Self, FetchError> {
        let raw: RawResponse = serde_json::from_slice(body)
            .map_err(|e| FetchError::Decode(format!("Malformed response body: {}", e)))?;

        if let Some(errors) = raw.errors {
            return Err(FetchError::Api { errors });
        }

        match raw.data {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(Value::Object(data)) => Ok(Self { data }),
            Some(other) => Err(FetchError::Decode(format!(
                "Expected `data` to be an object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Raw value of a root field; `None` when absent or null.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field).filter(|v| !v.is_null())
    }

    /// Decode a root field into `T`.
    pub fn root<T: DeserializeOwned>(&self, field: &str) -> Result<Option<T>, FetchError> {
        self.path(&[field])
    }

    /// Decode a nested field (`["home", "temoignages"]`). Any missing or null
    /// segment yields `None`.
    pub fn path<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Option<T>, FetchError> {
        let Some((first, rest)) = segments.split_first() else {
            return Ok(None);
        };
        let mut current = match self.get(first) {
            Some(value) => value,
            None => return Ok(None),
        };
        for segment in rest {
            match current.get(segment) {
                Some(value) if !value.is_null() => current = value,
                _ => return Ok(None),
            }
        }
        T::deserialize(current).map(Some).map_err(|e| {
            FetchError::Decode(format!(
                "Field `{}` does not match the expected shape: {}",
                segments.join("."),
                e
            ))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
