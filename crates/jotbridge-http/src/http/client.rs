//! Proxy client for the connector verification suite

use jotbridge::Operation;
use jotbridge::envelope::Envelope;
use jotbridge::error::HarnessError;
use log::debug;

use super::common::headers;

/// Posts fixture payloads to the ESB proxy endpoint.
///
/// Every call carries the static header set plus the `Action` selector for
/// the operation. Failure statuses are not an error at this level: negative
/// scenarios expect them, so the envelope is decoded regardless of status.
pub struct ProxyClient {
    client: reqwest::Client,
    proxy_url: String,
}

#[derive(Debug, Clone)]
pub struct ProxyResponse {
    /// Transport-level status returned by the proxy.
    pub status: u16,
    /// Decoded connector envelope.
    pub envelope: Envelope,
}

impl ProxyClient {
    pub fn new(proxy_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), proxy_url)
    }

    pub fn with_client(client: reqwest::Client, proxy_url: impl Into<String>) -> Self {
        ProxyClient {
            client,
            proxy_url: proxy_url.into(),
        }
    }

    pub fn proxy_url(&self) -> &str {
        &self.proxy_url
    }

    pub async fn send(
        &self,
        operation: Operation,
        body: String,
    ) -> Result<ProxyResponse, HarnessError> {
        debug!("POST {} Action: {}", self.proxy_url, operation.action());

        let response = self
            .client
            .post(&self.proxy_url)
            .header(headers::ACCEPT_CHARSET, headers::CHARSET_UTF8)
            .header(reqwest::header::CONTENT_TYPE, headers::CONTENT_TYPE_JSON)
            .header(headers::ACTION, operation.action())
            .body(body)
            .send()
            .await
            .map_err(|e| HarnessError::Transport {
                operation: operation.name().to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| HarnessError::Transport {
            operation: operation.name().to_string(),
            reason: e.to_string(),
        })?;

        let envelope = Envelope::parse(&text)?;
        Ok(ProxyResponse { status, envelope })
    }
}
