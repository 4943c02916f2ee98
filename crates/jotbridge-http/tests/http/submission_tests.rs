use super::test_utilities::{TestServer, runner_for, send_fixture};
use jotbridge::Operation;
use jotbridge::capture::SubmissionCapture;

#[tokio::test]
async fn test_get_submission_with_mandatory_parameters() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");
    let mut runner = runner_for(&server);

    runner.run_named("getSubmission/mandatory").await.unwrap();

    // The scenario stores content.new for later scenarios
    assert_eq!(runner.bag().get("submissionNew"), Some("1"));
}

#[tokio::test]
async fn test_get_submission_for_update_captures_answers() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");
    let mut runner = runner_for(&server);

    runner.run_named("getSubmission/forUpdate").await.unwrap();

    // Question ids 2, 3 and 10 must order numerically: the name control is
    // first, the email control second, and 10 is neither.
    let capture = runner.capture().expect("capture recorded");
    assert_eq!(capture.first_question_id, "2");
    assert_eq!(capture.second_question_id, "3");
    assert_eq!(capture.first_name, "Jan");
    assert_eq!(capture.last_name, "Novak");
    assert_eq!(capture.email, "jan.novak@example.com");
    assert_eq!(capture.submission_new, "1");

    // The bag mirrors the capture for fixture expansion
    assert_eq!(runner.bag().get("firstQuestionId"), Some("2"));
    assert_eq!(runner.bag().get("email"), Some("jan.novak@example.com"));
}

#[tokio::test]
async fn test_capture_parses_the_raw_envelope() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");

    let response = send_fixture(
        &server,
        Operation::GetSubmission,
        "esb_getSubmission_mandatory.json",
    )
    .await;
    assert_eq!(response.envelope.response_code, 200);
    assert_eq!(response.envelope.message, "success");

    let capture = SubmissionCapture::from_envelope(&response.envelope).unwrap();
    assert_eq!(capture.first_question_id, "2");
    assert_eq!(capture.second_question_id, "3");
}

#[tokio::test]
async fn test_get_submission_with_negative_case() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");

    let response = send_fixture(
        &server,
        Operation::GetSubmission,
        "esb_getSubmission_negative.json",
    )
    .await;
    assert_eq!(response.envelope.response_code, 404);
    assert_eq!(response.status, 404);
}
