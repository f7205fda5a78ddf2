//! Prediction API client.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use house_price_protocols::PredictionRequest;

use crate::error::DashboardError;

/// What the API sent back for one prediction call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply {
    /// 200 with a JSON body.
    Success(serde_json::Value),

    /// 200 whose body is not JSON.
    Malformed(String),

    /// Any non-200 status, with the body verbatim.
    Failure { status: u16, body: String },
}

/// Issues one `POST /predict` per call with a fixed timeout. Never retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DashboardError> {
        let parsed = Url::parse(base_url).map_err(|e| DashboardError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(DashboardError::InvalidUrl {
                url: base_url.to_string(),
                message: "URL cannot be used as a base".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("house-price-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DashboardError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the prediction endpoint.
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    /// Submit one request.
    ///
    /// Transport failures (timeout, refused connection, unreadable body) are
    /// errors; every HTTP status is a reply.
    pub async fn predict(&self, request: &PredictionRequest) -> Result<ApiReply, DashboardError> {
        let url = self.predict_url();
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("Prediction request to {} failed: {}", url, e);
                DashboardError::Unreachable {
                    url: url.clone(),
                    message: e.to_string(),
                }
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| DashboardError::Unreachable {
            url: url.clone(),
            message: format!("Failed to read body: {}", e),
        })?;

        if status != 200 {
            warn!("API returned {} for {}", status, url);
            return Ok(ApiReply::Failure { status, body });
        }

        Ok(match serde_json::from_str(&body) {
            Ok(value) => ApiReply::Success(value),
            Err(e) => {
                warn!("API returned a non-JSON body: {}", e);
                ApiReply::Malformed(body)
            }
        })
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
