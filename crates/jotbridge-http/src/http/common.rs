//! Wire-level types shared by the proxy client and the stub gateway

use serde::{Deserialize, Serialize};

// =============================================================================
// REQUEST HEADERS
// =============================================================================

pub mod headers {
    /// Operation selector understood by the ESB proxy.
    pub const ACTION: &str = "Action";
    pub const ACCEPT_CHARSET: &str = "Accept-Charset";
    pub const CHARSET_UTF8: &str = "UTF-8";
    pub const CONTENT_TYPE_JSON: &str = "application/json";
}

// =============================================================================
// REQUEST BODY
// =============================================================================

/// Body shape shared by every connector call.
///
/// Each operation reads the fields it needs and ignores the rest, the same
/// way the connector's payload mapping does. All values travel as strings;
/// Jotform treats numeric parameters (limit, question ids) as strings too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectorRequest {
    #[serde(rename = "apiUrl", skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(rename = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(rename = "formId", skip_serializing_if = "Option::is_none")]
    pub form_id: Option<String>,
    #[serde(rename = "submissionId", skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new: Option<String>,
    #[serde(rename = "firstQuestionId", skip_serializing_if = "Option::is_none")]
    pub first_question_id: Option<String>,
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "secondQuestionId", skip_serializing_if = "Option::is_none")]
    pub second_question_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ConnectorRequest {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

// =============================================================================
// GATEWAY METADATA
// =============================================================================

#[derive(Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub service: String,
    pub timestamp: u64,
}
