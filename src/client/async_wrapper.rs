//! Async wrapper around the synchronous HubSpotClient.
//!
//! This module provides an async interface to the synchronous HubSpotClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::HubSpotClient;
use crate::error::{HubSpotApiError, HubSpotResult};
use crate::models::{Engagement, NewNote};
use async_trait::async_trait;
use std::sync::Arc;

/// Async wrapper trait for HubSpot client operations.
///
/// This trait provides async versions of all HubSpotClient methods,
/// internally using `tokio::task::spawn_blocking` to avoid
/// blocking the async runtime with synchronous HTTP calls.
#[async_trait]
pub trait AsyncHubSpotClient: Send + Sync {
    async fn list_notes(&self, limit: usize) -> HubSpotResult<Vec<Engagement>>;
    async fn get_engagement(&self, id: u64) -> HubSpotResult<Engagement>;
    async fn create_note(&self, note: &NewNote) -> HubSpotResult<Engagement>;
    async fn update_note_body(&self, id: u64, body: &str) -> HubSpotResult<Engagement>;
    async fn delete_engagement(&self, id: u64) -> HubSpotResult<()>;
}

/// Async wrapper around the synchronous HubSpotClient.
#[derive(Clone)]
pub struct AsyncHubSpotClientImpl {
    client: Arc<HubSpotClient>,
}

impl AsyncHubSpotClientImpl {
    pub fn new(client: HubSpotClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncHubSpotClient for AsyncHubSpotClientImpl {
    async fn list_notes(&self, limit: usize) -> HubSpotResult<Vec<Engagement>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.list_notes(limit))
            .await
            .map_err(|e| HubSpotApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_engagement(&self, id: u64) -> HubSpotResult<Engagement> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_engagement(id))
            .await
            .map_err(|e| HubSpotApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn create_note(&self, note: &NewNote) -> HubSpotResult<Engagement> {
        let client = self.client.clone();
        let note = note.clone();

        tokio::task::spawn_blocking(move || client.create_note(&note))
            .await
            .map_err(|e| HubSpotApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn update_note_body(&self, id: u64, body: &str) -> HubSpotResult<Engagement> {
        let client = self.client.clone();
        let body = body.to_string();

        tokio::task::spawn_blocking(move || client.update_note_body(id, &body))
            .await
            .map_err(|e| HubSpotApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn delete_engagement(&self, id: u64) -> HubSpotResult<()> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.delete_engagement(id))
            .await
            .map_err(|e| HubSpotApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
