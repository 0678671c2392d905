//! HTTP Transport
//!
//! The async seam between the block and the network. The block depends on
//! the `HttpTransport` trait only; production uses the reqwest-backed
//! implementation, tests substitute recording mocks. The dispatch-side
//! timeout budget bounds every implementation, so a transport does not
//! need its own deadline handling.

use async_trait::async_trait;

/// Raw response surface the block needs: status plus body text.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: u16,
    pub body: String,
}

impl WireResponse {
    /// Whether the status is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level errors (connection refused, DNS, TLS, malformed
/// response). A non-2xx status is not a transport error — it comes back
/// as a `WireResponse`.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}

/// Async trait for the outbound notification call.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST a form-encoded body with a bearer token, returning the
    /// response status and body text.
    async fn post_form(
        &self,
        url: &str,
        bearer_token: &str,
        form: &[(&str, &str)],
    ) -> Result<WireResponse, TransportError>;
}

/// Production transport over a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_form(
        &self,
        url: &str,
        bearer_token: &str,
        form: &[(&str, &str)],
    ) -> Result<WireResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .bearer_auth(bearer_token)
            .form(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        Ok(WireResponse { status, body })
    }
}
