//! HTTP transport behind a trait seam so service flows are testable
//! without a network.

use adgrid_core::{AdGridConfig, AdGridError, AdGridResult, ApiFailure};
use tracing::debug;

/// Sends one API call: a JSON body POSTed to a versioned path relative to
/// the endpoint, returning the raw JSON response.
pub trait Transport {
    fn call(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> impl std::future::Future<Output = AdGridResult<serde_json::Value>> + Send;
}

/// Production transport over `reqwest`, carrying the authentication
/// headers on every request.
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
    developer_token: String,
    access_token: String,
    login_customer_id: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &AdGridConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            developer_token: config.developer_token.clone(),
            access_token: config.access_token.clone(),
            login_customer_id: config.login_customer_id.clone(),
        }
    }
}

impl Transport for HttpTransport {
    async fn call(&self, path: &str, body: serde_json::Value) -> AdGridResult<serde_json::Value> {
        let url = format!("{}/{}", self.endpoint, path);
        debug!(%url, "issuing API call");

        let mut request = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .header("developer-token", &self.developer_token)
            .json(&body);
        if let Some(login_customer_id) = &self.login_customer_id {
            request = request.header("login-customer-id", login_customer_id);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AdGridError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return match ApiFailure::from_response_body(status.as_u16(), &text) {
                Some(failure) => Err(AdGridError::Api(failure)),
                None => Err(AdGridError::Transport(format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    text
                ))),
            };
        }

        response
            .json()
            .await
            .map_err(|e| AdGridError::Transport(e.to_string()))
    }
}
