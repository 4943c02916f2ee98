use super::test_utilities::{TestServer, test_properties};
use jotbridge::envelope::Envelope;

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");

    let response = reqwest::get(format!("{}/health", server.base_url()))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let health_data: serde_json::Value = response.json().await.unwrap();
    assert_eq!(health_data["status"], "healthy");
    assert_eq!(health_data["service"], "jotbridge-gateway");
    assert!(health_data["timestamp"].as_u64().is_some());
}

#[tokio::test]
async fn test_unknown_action_is_404() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");
    let properties = test_properties(&server);

    let response = reqwest::Client::new()
        .post(properties.proxy_url)
        .header("Accept-Charset", "UTF-8")
        .header("Content-Type", "application/json")
        .header("Action", "urn:deleteForm")
        .body("{}")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let envelope = Envelope::parse(&response.text().await.unwrap()).unwrap();
    assert_eq!(envelope.response_code, 404);
    assert_eq!(envelope.message, "no such operation");
}

#[tokio::test]
async fn test_missing_action_header_is_404() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");
    let properties = test_properties(&server);

    let response = reqwest::Client::new()
        .post(properties.proxy_url)
        .header("Content-Type", "application/json")
        .body("{}")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_malformed_body_is_404() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test gateway");
    let properties = test_properties(&server);

    let response = reqwest::Client::new()
        .post(properties.proxy_url)
        .header("Accept-Charset", "UTF-8")
        .header("Content-Type", "application/json")
        .header("Action", "urn:getForm")
        .body("formId=240010987654321")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let envelope = Envelope::parse(&response.text().await.unwrap()).unwrap();
    assert_eq!(envelope.message, "invalid request body");
}
