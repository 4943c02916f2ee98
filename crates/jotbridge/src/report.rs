//! Suite run reporting
//!
//! One entry per executed scenario, in execution order. An assertion
//! mismatch and a harness fault (transport error, malformed envelope) both
//! fail the entry; the distinction is kept in the recorded reason.

use serde::Serialize;

use crate::error::HarnessError;
use crate::scenario::Scenario;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub scenario: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: String,
    pub results: Vec<ScenarioResult>,
}

impl RunReport {
    pub fn new() -> Self {
        RunReport {
            started_at: chrono::Utc::now().to_rfc3339(),
            results: Vec::new(),
        }
    }

    pub fn record(&mut self, scenario: &Scenario, result: &Result<(), HarnessError>) {
        let outcome = match result {
            Ok(()) => Outcome::Passed,
            Err(e) => Outcome::Failed {
                reason: e.to_string(),
            },
        };
        self.results.push(ScenarioResult {
            scenario: scenario.name.to_string(),
            outcome,
        });
    }

    pub fn passed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == Outcome::Passed)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}
