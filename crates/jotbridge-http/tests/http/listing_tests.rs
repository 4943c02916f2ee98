use super::test_utilities::{TestServer, runner_for, send_fixture, test_properties};
use jotbridge::Operation;

#[tokio::test]
async fn test_get_user_submissions_with_mandatory_parameters() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");

    let response = send_fixture(
        &server,
        Operation::GetUserSubmissions,
        "esb_getUserSubmissions_mandatory.json",
    )
    .await;
    assert_eq!(response.envelope.response_code, 200);
    assert_eq!(response.envelope.message, "success");

    let submissions = response.envelope.content.as_ref().unwrap().as_array().unwrap();
    assert!(!submissions.is_empty());
}

#[tokio::test]
async fn test_get_user_submissions_with_optional_parameters() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");
    let properties = test_properties(&server);

    let response = send_fixture(
        &server,
        Operation::GetUserSubmissions,
        "esb_getUserSubmissions_optional.json",
    )
    .await;
    assert_eq!(response.envelope.response_code, 200);
    assert_eq!(response.envelope.message, "success");

    let result_set = response.envelope.result_set().unwrap();
    assert_eq!(result_set.limit.as_deref(), Some(properties.limit.as_str()));
}

#[tokio::test]
async fn test_get_form_submissions_with_mandatory_parameters() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");

    let response = send_fixture(
        &server,
        Operation::GetFormSubmissions,
        "esb_getFormSubmissions_mandatory.json",
    )
    .await;
    assert_eq!(response.envelope.response_code, 200);
    assert_eq!(response.envelope.message, "success");
}

#[tokio::test]
async fn test_get_form_submissions_with_optional_parameters() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");
    let properties = test_properties(&server);

    let response = send_fixture(
        &server,
        Operation::GetFormSubmissions,
        "esb_getFormSubmissions_optional.json",
    )
    .await;
    assert_eq!(response.envelope.response_code, 200);
    assert_eq!(response.envelope.message, "success");

    let result_set = response.envelope.result_set().unwrap();
    assert_eq!(result_set.limit.as_deref(), Some(properties.limit.as_str()));
    assert_eq!(
        result_set.orderby.as_deref(),
        Some(properties.orderby.as_str())
    );
}

#[tokio::test]
async fn test_get_form_submissions_with_negative_case() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");

    let response = send_fixture(
        &server,
        Operation::GetFormSubmissions,
        "esb_getFormSubmissions_negative.json",
    )
    .await;
    assert_eq!(response.envelope.response_code, 404);
}

#[tokio::test]
async fn test_listing_scenarios_pass_through_the_runner() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");
    let mut runner = runner_for(&server);

    runner
        .run_named("getUserSubmissions/mandatory")
        .await
        .unwrap();
    runner
        .run_named("getUserSubmissions/optional")
        .await
        .unwrap();
    runner
        .run_named("getFormSubmissions/mandatory")
        .await
        .unwrap();
    runner
        .run_named("getFormSubmissions/optional")
        .await
        .unwrap();
    runner
        .run_named("getFormSubmissions/negative")
        .await
        .unwrap();
}
