use super::test_utilities::{TestServer, runner_for};
use jotbridge::report::Outcome;
use jotbridge::scenario;

#[tokio::test]
async fn test_full_suite_passes_in_order() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");
    let mut runner = runner_for(&server);

    let report = runner.run_suite().await;

    for result in &report.results {
        assert_eq!(
            result.outcome,
            Outcome::Passed,
            "scenario '{}' failed: {:?}",
            result.scenario,
            result.outcome
        );
    }
    assert_eq!(report.results.len(), scenario::suite().len());
    assert!(report.all_passed());
    assert_eq!(report.passed(), scenario::suite().len());

    // The capture chain ran: the bag ends up holding the submission values
    assert_eq!(runner.bag().get("submissionNew"), Some("1"));
    assert_eq!(runner.bag().get("firstName"), Some("Jan"));
    assert!(runner.capture().is_some());
}

#[tokio::test]
async fn test_suite_report_records_failures_without_stopping() {
    // Point the runner at a closed port: every scenario fails on transport,
    // but the report still covers the whole suite.
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");
    let mut runner = runner_for(&server);
    drop(server);

    let report = runner.run_suite().await;
    assert_eq!(report.results.len(), scenario::suite().len());
    assert_eq!(report.failed(), scenario::suite().len());
    assert!(!report.all_passed());
}
