use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum HarnessError {
    Properties {
        path: String,
        reason: String,
    },
    MissingProperty {
        key: String,
    },
    Fixture {
        name: String,
        reason: String,
    },
    UnresolvedPlaceholder {
        fixture: String,
        key: String,
    },
    Transport {
        operation: String,
        reason: String,
    },
    Envelope {
        reason: String,
    },
    MissingField {
        field: String,
    },
    Capture {
        reason: String,
    },
    CaptureMissing {
        scenario: String,
    },
    Assertion {
        scenario: String,
        reason: String,
    },
    UnknownScenario {
        name: String,
    },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::Properties { path, reason } => {
                write!(f, "Failed to load properties from '{path}': {reason}")
            }
            HarnessError::MissingProperty { key } => {
                write!(f, "Property '{key}' is not set")
            }
            HarnessError::Fixture { name, reason } => {
                write!(f, "Failed to load fixture '{name}': {reason}")
            }
            HarnessError::UnresolvedPlaceholder { fixture, key } => {
                write!(
                    f,
                    "Fixture '{fixture}' references '%s({key})' but no such property is set"
                )
            }
            HarnessError::Transport { operation, reason } => {
                write!(f, "Request for '{operation}' failed: {reason}")
            }
            HarnessError::Envelope { reason } => {
                write!(f, "Malformed response envelope: {reason}")
            }
            HarnessError::MissingField { field } => {
                write!(f, "Response envelope is missing field '{field}'")
            }
            HarnessError::Capture { reason } => {
                write!(f, "Submission capture failed: {reason}")
            }
            HarnessError::CaptureMissing { scenario } => {
                write!(
                    f,
                    "Scenario '{scenario}' needs captured submission values, but no capture scenario has run"
                )
            }
            HarnessError::Assertion { scenario, reason } => {
                write!(f, "Scenario '{scenario}' failed: {reason}")
            }
            HarnessError::UnknownScenario { name } => {
                write!(f, "No scenario named '{name}' in the suite")
            }
        }
    }
}

impl std::error::Error for HarnessError {}

impl HarnessError {
    /// Failures caused by the target's response rather than by the harness.
    pub fn is_assertion(&self) -> bool {
        matches!(self, HarnessError::Assertion { .. })
    }

    pub fn fixture_io(name: &str, e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => HarnessError::Fixture {
                name: name.to_string(),
                reason: "file not found".to_string(),
            },
            _ => HarnessError::Fixture {
                name: name.to_string(),
                reason: e.to_string(),
            },
        }
    }
}
