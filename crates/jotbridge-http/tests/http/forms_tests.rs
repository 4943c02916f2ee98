use super::test_utilities::{TestServer, runner_for, send_fixture, test_properties};
use jotbridge::Operation;
use jotbridge::properties::defaults;
use jotbridge_http::http::client::ProxyClient;
use jotbridge_http::http::common::ConnectorRequest;

#[tokio::test]
async fn test_clone_form_with_mandatory_parameters() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");

    let response = send_fixture(
        &server,
        Operation::CloneForm,
        "esb_cloneForm_mandatory.json",
    )
    .await;
    assert_eq!(response.envelope.response_code, 200);
    assert_eq!(response.envelope.message, "success");

    // The clone comes back under a fresh id
    let cloned_form_id = response.envelope.content_str("id").unwrap();
    assert_ne!(cloned_form_id, defaults::FORM_ID);
}

#[tokio::test]
async fn test_cloned_form_is_retrievable() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");

    let response = send_fixture(
        &server,
        Operation::CloneForm,
        "esb_cloneForm_mandatory.json",
    )
    .await;
    let cloned_form_id = response.envelope.content_str("id").unwrap().to_string();

    let body = serde_json::to_string(&ConnectorRequest {
        api_key: Some(defaults::API_KEY.to_string()),
        form_id: Some(cloned_form_id.clone()),
        ..ConnectorRequest::default()
    })
    .unwrap();
    let properties = test_properties(&server);
    let response = ProxyClient::new(properties.proxy_url)
        .send(Operation::GetForm, body)
        .await
        .unwrap();

    assert_eq!(response.envelope.response_code, 200);
    assert_eq!(
        response.envelope.content_str("id").unwrap(),
        cloned_form_id
    );
}

#[tokio::test]
async fn test_clone_form_with_negative_case() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");

    let response =
        send_fixture(&server, Operation::CloneForm, "esb_cloneForm_negative.json").await;
    assert_eq!(response.envelope.response_code, 404);
    assert_eq!(response.status, 404);
}

#[tokio::test]
async fn test_get_form_with_mandatory_parameters() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");

    let response = send_fixture(&server, Operation::GetForm, "esb_getForm_mandatory.json").await;
    assert_eq!(response.envelope.response_code, 200);
    assert_eq!(response.envelope.message, "success");
    assert_eq!(
        response.envelope.content_str("id").unwrap(),
        defaults::FORM_ID
    );
}

#[tokio::test]
async fn test_get_form_with_negative_case() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");

    let response = send_fixture(&server, Operation::GetForm, "esb_getForm_negative.json").await;
    assert_eq!(response.envelope.response_code, 404);
}

#[tokio::test]
async fn test_form_scenarios_pass_through_the_runner() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");
    let mut runner = runner_for(&server);

    runner.run_named("cloneForm/mandatory").await.unwrap();
    runner.run_named("cloneForm/negative").await.unwrap();
    runner.run_named("getForm/mandatory").await.unwrap();
    runner.run_named("getForm/negative").await.unwrap();
}
