use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use tokio::time::sleep;

use jotbridge::Operation;
use jotbridge::fixture::FixtureStore;
use jotbridge::properties::{ConnectorProperties, PropertyBag};
use jotbridge_http::http::client::{ProxyClient, ProxyResponse};
use jotbridge_http::http::runner::ScenarioRunner;

pub fn find_available_port() -> Result<u16, Box<dyn std::error::Error>> {
    // Bind to port 0 to let the OS choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    Ok(addr.port())
}

pub struct TestServer {
    process: Child,
    port: u16,
}

impl TestServer {
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let port = find_available_port()?;
        let gateway_binary = env!("CARGO_BIN_EXE_gateway");

        eprintln!("Starting gateway on port {port} using binary: {gateway_binary}");
        let mut process = Command::new(gateway_binary)
            .args([&port.to_string()])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Wait for the gateway to come up and answer its health endpoint
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        let health_url = format!("http://127.0.0.1:{port}/health");

        for _attempt in 0..50 {
            sleep(Duration::from_millis(100)).await;

            if let Ok(Some(exit_status)) = process.try_wait() {
                return Err(format!("Gateway process exited with status: {exit_status}").into());
            }

            if let Ok(response) = client.get(&health_url).send().await {
                if response.status().is_success() {
                    return Ok(TestServer { process, port });
                }
            }
        }

        let _ = process.kill();
        Err("Gateway failed to start within timeout".into())
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn proxy_url(&self) -> String {
        format!("{}/services/jotform", self.base_url())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

pub fn test_properties(server: &TestServer) -> ConnectorProperties {
    ConnectorProperties {
        proxy_url: server.proxy_url(),
        ..ConnectorProperties::default()
    }
}

pub fn runner_for(server: &TestServer) -> ScenarioRunner {
    let properties = test_properties(server);
    let client = ProxyClient::new(properties.proxy_url.clone());
    ScenarioRunner::new(client, FixtureStore::new(fixtures_dir()), properties)
}

/// Expand a fixture against the default properties and POST it, returning
/// the raw status + envelope for direct assertions.
pub async fn send_fixture(
    server: &TestServer,
    operation: Operation,
    fixture: &str,
) -> ProxyResponse {
    let properties = test_properties(server);
    let bag = PropertyBag::seeded(&properties);
    let body = FixtureStore::new(fixtures_dir())
        .load(fixture, &bag)
        .expect("fixture loads");
    ProxyClient::new(properties.proxy_url)
        .send(operation, body)
        .await
        .expect("request succeeds")
}
