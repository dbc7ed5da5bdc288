//! HTTP client for the HubSpot engagements API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication, error mapping,
//! and the note operations on the v1 engagements endpoints.

mod async_wrapper;
pub use async_wrapper::{AsyncHubSpotClient, AsyncHubSpotClientImpl};

use crate::config::Config;
use crate::error::{HubSpotApiError, HubSpotResult};
use crate::metrics::Metrics;
use crate::models::{CreateEngagementRequest, Engagement, EngagementsPage, NewNote, UpdateEngagementRequest};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Base path of the v1 engagements API.
const ENGAGEMENTS_PATH: &str = "/engagements/v1/engagements";

/// HTTP client for the HubSpot engagements API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct HubSpotClient {
    /// Base URL for the HubSpot API
    base_url: String,

    /// Private app access token
    access_token: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl HubSpotClient {
    /// Create a new HubSpotClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            access_token: config.access_token.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a HubSpotClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, access_token: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            access_token,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> Result<ureq::Response, HubSpotApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        let result = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", self.access_token))
            .set("Content-Type", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, HubSpotApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.access_token))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                self.metrics.record_http_request(duration);
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                self.metrics.record_http_error();
                self.metrics.record_http_request(duration);
            }
        }

        result
    }

    /// Execute a PATCH request with authentication and JSON body.
    fn patch(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<ureq::Response, HubSpotApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        let result = self
            .agent
            .request("PATCH", &url)
            .set("Authorization", &format!("Bearer {}", self.access_token))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Execute a DELETE request with authentication.
    fn delete(&self, path: &str) -> Result<ureq::Response, HubSpotApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        let result = self
            .agent
            .delete(&url)
            .set("Authorization", &format!("Bearer {}", self.access_token))
            .call()
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Map a ureq error to a HubSpotApiError.
    ///
    /// The remote status and response body pass through verbatim.
    fn map_error(&self, error: ureq::Error) -> HubSpotApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => HubSpotApiError::Unauthorized,
                    404 => HubSpotApiError::NotFound(message),
                    429 => HubSpotApiError::RateLimitExceeded,
                    _ => HubSpotApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    HubSpotApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    HubSpotApiError::Timeout
                } else {
                    HubSpotApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    // ========================= Note Operations =========================

    /// Fetch the most recent engagements and keep the notes.
    ///
    /// The window counts raw engagements before the type filter, so fewer
    /// than `limit` notes may come back. Anything past the window is
    /// invisible to callers; no further pages are requested.
    pub fn list_notes(&self, limit: usize) -> HubSpotResult<Vec<Engagement>> {
        let path = format!("{}/paged?limit={}", ENGAGEMENTS_PATH, limit);
        let response = self.get(&path)?;
        let body = response
            .into_string()
            .map_err(|e| HubSpotApiError::HttpError(e.to_string()))?;

        let page: EngagementsPage =
            serde_json::from_str(&body).map_err(HubSpotApiError::JsonError)?;

        let notes: Vec<Engagement> = page
            .results
            .into_iter()
            .filter(Engagement::is_note)
            .collect();

        self.metrics.record_notes_fetched(notes.len());
        Ok(notes)
    }

    /// Get a single engagement by ID.
    pub fn get_engagement(&self, id: u64) -> HubSpotResult<Engagement> {
        let path = format!("{}/{}", ENGAGEMENTS_PATH, id);
        let response = self.get(&path)?;
        let body = response
            .into_string()
            .map_err(|e| HubSpotApiError::HttpError(e.to_string()))?;
        serde_json::from_str::<Engagement>(&body).map_err(HubSpotApiError::JsonError)
    }

    /// Create a new note engagement.
    pub fn create_note(&self, note: &NewNote) -> HubSpotResult<Engagement> {
        tracing::info!("Creating note for contact: {}", note.contact_id);

        let request = CreateEngagementRequest::from(note);
        let body = serde_json::to_value(&request).map_err(HubSpotApiError::JsonError)?;

        let response = self.post(ENGAGEMENTS_PATH, &body)?;
        let response_body = response
            .into_string()
            .map_err(|e| HubSpotApiError::HttpError(e.to_string()))?;

        let created: Engagement =
            serde_json::from_str(&response_body).map_err(HubSpotApiError::JsonError)?;

        tracing::info!("Note created successfully with id: {}", created.id());
        Ok(created)
    }

    /// Replace the body of an existing note engagement.
    pub fn update_note_body(&self, id: u64, body: &str) -> HubSpotResult<Engagement> {
        let request = UpdateEngagementRequest::new(body);
        let payload = serde_json::to_value(&request).map_err(HubSpotApiError::JsonError)?;

        let path = format!("{}/{}", ENGAGEMENTS_PATH, id);
        let response = self.patch(&path, &payload)?;
        let response_body = response
            .into_string()
            .map_err(|e| HubSpotApiError::HttpError(e.to_string()))?;

        serde_json::from_str::<Engagement>(&response_body).map_err(HubSpotApiError::JsonError)
    }

    /// Delete an engagement.
    pub fn delete_engagement(&self, id: u64) -> HubSpotResult<()> {
        let path = format!("{}/{}", ENGAGEMENTS_PATH, id);
        self.delete(&path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = HubSpotClient::with_base_url(
            "https://api.hubapi.com".to_string(),
            "test-token".to_string(),
        );

        assert_eq!(
            client.build_url("/engagements/v1/engagements"),
            "https://api.hubapi.com/engagements/v1/engagements"
        );

        assert_eq!(
            client.build_url("engagements/v1/engagements"),
            "https://api.hubapi.com/engagements/v1/engagements"
        );

        let client_with_slash = HubSpotClient::with_base_url(
            "https://api.hubapi.com/".to_string(),
            "test-token".to_string(),
        );

        assert_eq!(
            client_with_slash.build_url("/engagements/v1/engagements"),
            "https://api.hubapi.com/engagements/v1/engagements"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            api_base_url: "https://api.hubapi.com".to_string(),
            access_token: "pat-na1-test".to_string(),
            contact_id: 247,
            request_timeout: 10,
            log_level: "error".to_string(),
        };

        let client = HubSpotClient::new(&config);
        assert_eq!(client.base_url, "https://api.hubapi.com");
        assert_eq!(client.access_token, "pat-na1-test");
    }
}
