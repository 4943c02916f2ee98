//! Connector properties and the shared property bag
//!
//! Properties identify the target proxy and the Jotform resources the suite
//! exercises. They load from a JSON file, with `JOTBRIDGE_*` environment
//! variables taking precedence, and seed the property bag that fixture
//! placeholder expansion reads from.

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// Defaults that line up with the stub gateway's seed data, so the kit
/// verifies against a local gateway with no configuration at all.
pub mod defaults {
    pub const PROXY_URL: &str = "http://127.0.0.1:8280/services/jotform";
    pub const API_URL: &str = "https://api.jotform.com";
    pub const API_KEY: &str = "jb-demo-key";
    pub const FORM_ID: &str = "240010987654321";
    pub const SUBMISSION_ID: &str = "5810637521126235967";
    pub const LIMIT: &str = "3";
    pub const ORDERBY: &str = "created_at";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorProperties {
    #[serde(rename = "proxyUrl", default = "default_proxy_url")]
    pub proxy_url: String,
    #[serde(rename = "apiUrl", default = "default_api_url")]
    pub api_url: String,
    #[serde(rename = "apiKey", default = "default_api_key")]
    pub api_key: String,
    #[serde(rename = "formId", default = "default_form_id")]
    pub form_id: String,
    #[serde(rename = "submissionId", default = "default_submission_id")]
    pub submission_id: String,
    #[serde(default = "default_limit")]
    pub limit: String,
    #[serde(default = "default_orderby")]
    pub orderby: String,
}

fn default_proxy_url() -> String {
    defaults::PROXY_URL.to_string()
}
fn default_api_url() -> String {
    defaults::API_URL.to_string()
}
fn default_api_key() -> String {
    defaults::API_KEY.to_string()
}
fn default_form_id() -> String {
    defaults::FORM_ID.to_string()
}
fn default_submission_id() -> String {
    defaults::SUBMISSION_ID.to_string()
}
fn default_limit() -> String {
    defaults::LIMIT.to_string()
}
fn default_orderby() -> String {
    defaults::ORDERBY.to_string()
}

impl Default for ConnectorProperties {
    fn default() -> Self {
        ConnectorProperties {
            proxy_url: default_proxy_url(),
            api_url: default_api_url(),
            api_key: default_api_key(),
            form_id: default_form_id(),
            submission_id: default_submission_id(),
            limit: default_limit(),
            orderby: default_orderby(),
        }
    }
}

impl ConnectorProperties {
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let text = std::fs::read_to_string(path).map_err(|e| HarnessError::Properties {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| HarnessError::Properties {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Load from `path` when given, defaults otherwise, then apply
    /// `JOTBRIDGE_*` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, HarnessError> {
        let mut properties = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        properties.apply_env_overrides();
        Ok(properties)
    }

    fn apply_env_overrides(&mut self) {
        let overrides: [(&str, &mut String); 7] = [
            ("JOTBRIDGE_PROXY_URL", &mut self.proxy_url),
            ("JOTBRIDGE_API_URL", &mut self.api_url),
            ("JOTBRIDGE_API_KEY", &mut self.api_key),
            ("JOTBRIDGE_FORM_ID", &mut self.form_id),
            ("JOTBRIDGE_SUBMISSION_ID", &mut self.submission_id),
            ("JOTBRIDGE_LIMIT", &mut self.limit),
            ("JOTBRIDGE_ORDERBY", &mut self.orderby),
        ];
        for (var, slot) in overrides {
            if let Ok(value) = std::env::var(var) {
                debug!("Overriding {var} from environment");
                *slot = value;
            }
        }
    }
}

/// Mutable key/value store shared across a suite run.
///
/// Seeded from the connector properties at startup; capture scenarios add
/// to it as they discover values later scenarios need. Only the single
/// runner thread touches it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    entries: BTreeMap<String, String>,
}

impl PropertyBag {
    pub fn seeded(properties: &ConnectorProperties) -> Self {
        let mut bag = PropertyBag::default();
        bag.set("apiUrl", &properties.api_url);
        bag.set("apiKey", &properties.api_key);
        bag.set("formId", &properties.form_id);
        bag.set("submissionId", &properties.submission_id);
        bag.set("limit", &properties.limit);
        bag.set("orderby", &properties.orderby);
        bag
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn require(&self, key: &str) -> Result<&str, HarnessError> {
        self.get(key).ok_or(HarnessError::MissingProperty {
            key: key.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
