//! Connector response envelope types
//!
//! Every connector reply is a JSON object carrying `responseCode` and
//! `message`, plus an operation-specific `content` object (single-resource
//! calls) or a `content` array with a `resultSet` summary (listing calls).
//! Jotform echoes paging values as strings, so `resultSet` fields stay
//! string-typed here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HarnessError;

/// `message` value the connector returns for every successful call.
pub const SUCCESS_MESSAGE: &str = "success";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "responseCode")]
    pub response_code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(rename = "resultSet", skip_serializing_if = "Option::is_none")]
    pub result_set: Option<ResultSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
}

impl Envelope {
    pub fn parse(body: &str) -> Result<Self, HarnessError> {
        serde_json::from_str(body).map_err(|e| HarnessError::Envelope {
            reason: e.to_string(),
        })
    }

    pub fn success(content: Value) -> Self {
        Envelope {
            response_code: 200,
            message: SUCCESS_MESSAGE.to_string(),
            content: Some(content),
            result_set: None,
        }
    }

    pub fn listing(content: Value, result_set: ResultSet) -> Self {
        Envelope {
            response_code: 200,
            message: SUCCESS_MESSAGE.to_string(),
            content: Some(content),
            result_set: Some(result_set),
        }
    }

    pub fn failure(response_code: i64, message: &str) -> Self {
        Envelope {
            response_code,
            message: message.to_string(),
            content: None,
            result_set: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.response_code == 200 && self.message == SUCCESS_MESSAGE
    }

    /// `content` as a JSON object, for single-resource operations.
    pub fn content_object(&self) -> Result<&serde_json::Map<String, Value>, HarnessError> {
        self.content
            .as_ref()
            .ok_or(HarnessError::MissingField {
                field: "content".to_string(),
            })?
            .as_object()
            .ok_or(HarnessError::Envelope {
                reason: "'content' is not a JSON object".to_string(),
            })
    }

    /// String field of the `content` object, e.g. `content.new`.
    pub fn content_str(&self, field: &str) -> Result<&str, HarnessError> {
        self.content_object()?
            .get(field)
            .and_then(Value::as_str)
            .ok_or(HarnessError::MissingField {
                field: format!("content.{field}"),
            })
    }

    pub fn result_set(&self) -> Result<&ResultSet, HarnessError> {
        self.result_set.as_ref().ok_or(HarnessError::MissingField {
            field: "resultSet".to_string(),
        })
    }
}
