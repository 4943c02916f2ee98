use std::fmt;

pub mod capture;
pub mod envelope;
pub mod error;
pub mod fixture;
pub mod properties;
pub mod report;
pub mod scenario;
pub mod telemetry;

pub use error::HarnessError;

// Re-export logging macros for consistent usage across the crate
pub use log::{debug, error, info, trace, warn};

// =============================================================================
// CORE DATA STRUCTURES
// =============================================================================

/// Connector operation selected by the `Action` request header.
///
/// The ESB proxy exposes a single endpoint; the `Action` header value
/// (`urn:<operation>`) decides which Jotform call the connector makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Operation {
    CloneForm,
    GetForm,
    GetSubmission,
    GetUserSubmissions,
    GetFormSubmissions,
    UpdateSubmission,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::CloneForm,
        Operation::GetForm,
        Operation::GetSubmission,
        Operation::GetUserSubmissions,
        Operation::GetFormSubmissions,
        Operation::UpdateSubmission,
    ];

    /// Value sent in the `Action` header for this operation.
    pub fn action(&self) -> &'static str {
        match self {
            Operation::CloneForm => "urn:cloneForm",
            Operation::GetForm => "urn:getForm",
            Operation::GetSubmission => "urn:getSubmission",
            Operation::GetUserSubmissions => "urn:getUserSubmissions",
            Operation::GetFormSubmissions => "urn:getFormSubmissions",
            Operation::UpdateSubmission => "urn:updateSubmission",
        }
    }

    /// Bare operation name as it appears in fixture file names.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CloneForm => "cloneForm",
            Operation::GetForm => "getForm",
            Operation::GetSubmission => "getSubmission",
            Operation::GetUserSubmissions => "getUserSubmissions",
            Operation::GetFormSubmissions => "getFormSubmissions",
            Operation::UpdateSubmission => "updateSubmission",
        }
    }

    /// Resolve an `Action` header value back to an operation.
    pub fn from_action(action: &str) -> Option<Operation> {
        Operation::ALL.iter().copied().find(|op| op.action() == action)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
