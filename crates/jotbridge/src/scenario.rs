//! Scenario definitions for the connector verification suite
//!
//! A scenario binds an operation to a fixture payload and an expected
//! outcome. The suite order matters: the capture scenario must run before
//! the update scenario that consumes its values.
//!
//! Variants with nothing to assert are left out, as in the upstream
//! connector suite: cloneForm, getForm and getSubmission have no optional
//! parameters, and getUserSubmissions has no parameter to drive a negative
//! case.

use crate::Operation;
use crate::error::HarnessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// `responseCode == 200` and `message == "success"`, plus optional
    /// `resultSet` echoes of the configured paging properties.
    Success {
        echoes_limit: bool,
        echoes_orderby: bool,
    },
    /// `responseCode` equals a documented failure code.
    Failure { response_code: i64 },
}

impl Expected {
    pub const fn success() -> Self {
        Expected::Success {
            echoes_limit: false,
            echoes_orderby: false,
        }
    }

    pub const fn failure(response_code: i64) -> Self {
        Expected::Failure { response_code }
    }
}

/// What a scenario contributes to later scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureStep {
    None,
    /// Store `content.new` in the bag as `submissionNew`.
    SubmissionNew,
    /// Full submission capture feeding the update-with-optional-parameters
    /// scenario.
    ForUpdate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub operation: Operation,
    pub fixture: &'static str,
    pub expected: Expected,
    pub capture: CaptureStep,
    /// Needs the values a `CaptureStep::ForUpdate` scenario produced.
    pub requires_capture: bool,
}

static SUITE: [Scenario; 15] = [
    Scenario {
        name: "cloneForm/mandatory",
        operation: Operation::CloneForm,
        fixture: "esb_cloneForm_mandatory.json",
        expected: Expected::success(),
        capture: CaptureStep::None,
        requires_capture: false,
    },
    Scenario {
        name: "cloneForm/negative",
        operation: Operation::CloneForm,
        fixture: "esb_cloneForm_negative.json",
        expected: Expected::failure(404),
        capture: CaptureStep::None,
        requires_capture: false,
    },
    Scenario {
        name: "getForm/mandatory",
        operation: Operation::GetForm,
        fixture: "esb_getForm_mandatory.json",
        expected: Expected::success(),
        capture: CaptureStep::None,
        requires_capture: false,
    },
    Scenario {
        name: "getForm/negative",
        operation: Operation::GetForm,
        fixture: "esb_getForm_negative.json",
        expected: Expected::failure(404),
        capture: CaptureStep::None,
        requires_capture: false,
    },
    Scenario {
        name: "getSubmission/mandatory",
        operation: Operation::GetSubmission,
        fixture: "esb_getSubmission_mandatory.json",
        expected: Expected::success(),
        capture: CaptureStep::SubmissionNew,
        requires_capture: false,
    },
    // Same fixture as the mandatory case; this pass exists to capture the
    // answer values the update scenario rewrites.
    Scenario {
        name: "getSubmission/forUpdate",
        operation: Operation::GetSubmission,
        fixture: "esb_getSubmission_mandatory.json",
        expected: Expected::success(),
        capture: CaptureStep::ForUpdate,
        requires_capture: false,
    },
    Scenario {
        name: "getSubmission/negative",
        operation: Operation::GetSubmission,
        fixture: "esb_getSubmission_negative.json",
        expected: Expected::failure(404),
        capture: CaptureStep::None,
        requires_capture: false,
    },
    Scenario {
        name: "getUserSubmissions/mandatory",
        operation: Operation::GetUserSubmissions,
        fixture: "esb_getUserSubmissions_mandatory.json",
        expected: Expected::success(),
        capture: CaptureStep::None,
        requires_capture: false,
    },
    Scenario {
        name: "getUserSubmissions/optional",
        operation: Operation::GetUserSubmissions,
        fixture: "esb_getUserSubmissions_optional.json",
        expected: Expected::Success {
            echoes_limit: true,
            echoes_orderby: false,
        },
        capture: CaptureStep::None,
        requires_capture: false,
    },
    Scenario {
        name: "getFormSubmissions/mandatory",
        operation: Operation::GetFormSubmissions,
        fixture: "esb_getFormSubmissions_mandatory.json",
        expected: Expected::success(),
        capture: CaptureStep::None,
        requires_capture: false,
    },
    Scenario {
        name: "getFormSubmissions/optional",
        operation: Operation::GetFormSubmissions,
        fixture: "esb_getFormSubmissions_optional.json",
        expected: Expected::Success {
            echoes_limit: true,
            echoes_orderby: true,
        },
        capture: CaptureStep::None,
        requires_capture: false,
    },
    Scenario {
        name: "getFormSubmissions/negative",
        operation: Operation::GetFormSubmissions,
        fixture: "esb_getFormSubmissions_negative.json",
        expected: Expected::failure(404),
        capture: CaptureStep::None,
        requires_capture: false,
    },
    Scenario {
        name: "updateSubmission/mandatory",
        operation: Operation::UpdateSubmission,
        fixture: "esb_updateSubmission_mandatory.json",
        expected: Expected::success(),
        capture: CaptureStep::None,
        requires_capture: false,
    },
    Scenario {
        name: "updateSubmission/optional",
        operation: Operation::UpdateSubmission,
        fixture: "esb_updateSubmission_optional.json",
        expected: Expected::success(),
        capture: CaptureStep::None,
        requires_capture: true,
    },
    // Update with only the submission id: the connector forwards no API
    // key, so the upstream rejects the write outright.
    Scenario {
        name: "updateSubmission/negative",
        operation: Operation::UpdateSubmission,
        fixture: "esb_updateSubmission_negative.json",
        expected: Expected::failure(401),
        capture: CaptureStep::None,
        requires_capture: false,
    },
];

/// The full suite in execution order.
pub fn suite() -> &'static [Scenario] {
    &SUITE
}

pub fn find(name: &str) -> Result<&'static Scenario, HarnessError> {
    SUITE
        .iter()
        .find(|scenario| scenario.name == name)
        .ok_or(HarnessError::UnknownScenario {
            name: name.to_string(),
        })
}
