use crate::client::AsyncHubSpotClient;
use crate::error::HubSpotResult;
use crate::models::{Engagement, NewNote};
use crate::repositories::traits::NoteRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Note repository implementation backed by the HubSpot API client.
///
/// This repository delegates all operations to the AsyncHubSpotClient,
/// providing a clean abstraction layer between business logic and
/// the underlying HTTP client.
pub struct HubSpotNoteRepository {
    client: Arc<dyn AsyncHubSpotClient>,
}

impl HubSpotNoteRepository {
    /// Create a new HubSpotNoteRepository with the given client.
    pub fn new(client: Arc<dyn AsyncHubSpotClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NoteRepository for HubSpotNoteRepository {
    async fn list_recent(&self, limit: usize) -> HubSpotResult<Vec<Engagement>> {
        self.client.list_notes(limit).await
    }

    async fn get(&self, id: u64) -> HubSpotResult<Engagement> {
        self.client.get_engagement(id).await
    }

    async fn create(&self, note: &NewNote) -> HubSpotResult<Engagement> {
        self.client.create_note(note).await
    }

    async fn update_body(&self, id: u64, body: &str) -> HubSpotResult<Engagement> {
        self.client.update_note_body(id, body).await
    }

    async fn delete(&self, id: u64) -> HubSpotResult<()> {
        self.client.delete_engagement(id).await
    }
}
