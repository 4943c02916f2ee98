//! Sequential scenario execution
//!
//! Scenarios run strictly one at a time: several depend on values produced
//! by an earlier scenario, so there is no parallelism to exploit. Captured
//! submission values are threaded explicitly through the runner rather than
//! discovered through hidden shared state; the property bag mirrors them
//! only so fixture placeholder expansion can see them.

use jotbridge::capture::SubmissionCapture;
use jotbridge::envelope::{Envelope, SUCCESS_MESSAGE};
use jotbridge::error::HarnessError;
use jotbridge::fixture::FixtureStore;
use jotbridge::properties::{ConnectorProperties, PropertyBag};
use jotbridge::report::RunReport;
use jotbridge::scenario::{self, CaptureStep, Expected, Scenario};
use log::{error, info};

use super::client::ProxyClient;

pub struct ScenarioRunner {
    client: ProxyClient,
    fixtures: FixtureStore,
    properties: ConnectorProperties,
    bag: PropertyBag,
    capture: Option<SubmissionCapture>,
}

impl ScenarioRunner {
    pub fn new(client: ProxyClient, fixtures: FixtureStore, properties: ConnectorProperties) -> Self {
        let bag = PropertyBag::seeded(&properties);
        ScenarioRunner {
            client,
            fixtures,
            properties,
            bag,
            capture: None,
        }
    }

    pub fn bag(&self) -> &PropertyBag {
        &self.bag
    }

    pub fn capture(&self) -> Option<&SubmissionCapture> {
        self.capture.as_ref()
    }

    /// Execute one scenario: expand its fixture, POST it, assert the
    /// envelope, then run its capture step.
    ///
    /// A scenario that needs captured values refuses to run until a capture
    /// scenario has; use [`run_named`](Self::run_named) to resolve the
    /// dependency automatically.
    #[tracing::instrument(level = "debug", skip(self, scenario), fields(scenario = %scenario.name))]
    pub async fn run_scenario(&mut self, scenario: &Scenario) -> Result<(), HarnessError> {
        if scenario.requires_capture && self.capture.is_none() {
            return Err(HarnessError::CaptureMissing {
                scenario: scenario.name.to_string(),
            });
        }

        info!("Running scenario '{}'", scenario.name);
        let body = self.fixtures.load(scenario.fixture, &self.bag)?;
        let response = self.client.send(scenario.operation, body).await?;
        self.assert_expected(scenario, &response.envelope)?;
        self.run_capture_step(scenario, &response.envelope)?;
        Ok(())
    }

    /// Run a scenario by suite name, running its capture dependency first
    /// when needed.
    pub async fn run_named(&mut self, name: &str) -> Result<(), HarnessError> {
        let target = scenario::find(name)?;
        if target.requires_capture && self.capture.is_none() {
            let capture_scenario = scenario::suite()
                .iter()
                .find(|s| s.capture == CaptureStep::ForUpdate)
                .ok_or(HarnessError::CaptureMissing {
                    scenario: target.name.to_string(),
                })?;
            self.run_scenario(capture_scenario).await?;
        }
        self.run_scenario(target).await
    }

    /// Run the whole suite in order, recording one result per scenario.
    /// A failed scenario does not stop the run; later scenarios with an
    /// unmet capture dependency fail on their own.
    pub async fn run_suite(&mut self) -> RunReport {
        let mut report = RunReport::new();
        for scenario in scenario::suite() {
            let result = self.run_scenario(scenario).await;
            if let Err(e) = &result {
                error!("Scenario '{}' failed: {e}", scenario.name);
            }
            report.record(scenario, &result);
        }
        report
    }

    fn assert_expected(&self, scenario: &Scenario, envelope: &Envelope) -> Result<(), HarnessError> {
        match scenario.expected {
            Expected::Success {
                echoes_limit,
                echoes_orderby,
            } => {
                if envelope.response_code != 200 {
                    return Err(self.fail(
                        scenario,
                        format!("expected responseCode 200, got {}", envelope.response_code),
                    ));
                }
                if envelope.message != SUCCESS_MESSAGE {
                    return Err(self.fail(
                        scenario,
                        format!(
                            "expected message '{SUCCESS_MESSAGE}', got '{}'",
                            envelope.message
                        ),
                    ));
                }
                if echoes_limit {
                    let limit = envelope.result_set()?.limit.as_deref();
                    if limit != Some(self.properties.limit.as_str()) {
                        return Err(self.fail(
                            scenario,
                            format!(
                                "expected resultSet.limit '{}', got {limit:?}",
                                self.properties.limit
                            ),
                        ));
                    }
                }
                if echoes_orderby {
                    let orderby = envelope.result_set()?.orderby.as_deref();
                    if orderby != Some(self.properties.orderby.as_str()) {
                        return Err(self.fail(
                            scenario,
                            format!(
                                "expected resultSet.orderby '{}', got {orderby:?}",
                                self.properties.orderby
                            ),
                        ));
                    }
                }
                Ok(())
            }
            Expected::Failure { response_code } => {
                if envelope.response_code != response_code {
                    return Err(self.fail(
                        scenario,
                        format!(
                            "expected responseCode {response_code}, got {}",
                            envelope.response_code
                        ),
                    ));
                }
                Ok(())
            }
        }
    }

    fn run_capture_step(
        &mut self,
        scenario: &Scenario,
        envelope: &Envelope,
    ) -> Result<(), HarnessError> {
        match scenario.capture {
            CaptureStep::None => {}
            CaptureStep::SubmissionNew => {
                let submission_new = envelope.content_str("new")?;
                self.bag.set("submissionNew", submission_new);
            }
            CaptureStep::ForUpdate => {
                let capture = SubmissionCapture::from_envelope(envelope)?;
                capture.apply_to(&mut self.bag);
                self.capture = Some(capture);
            }
        }
        Ok(())
    }

    fn fail(&self, scenario: &Scenario, reason: String) -> HarnessError {
        HarnessError::Assertion {
            scenario: scenario.name.to_string(),
            reason,
        }
    }
}
