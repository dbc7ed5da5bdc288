use crate::error::HubSpotResult;
use crate::models::{Engagement, NewNote};
use async_trait::async_trait;

/// Repository for managing shared-summary notes.
///
/// Provides abstraction over note storage and retrieval,
/// enabling different implementations (API client, mock).
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Retrieve up to `limit` recent notes.
    async fn list_recent(&self, limit: usize) -> HubSpotResult<Vec<Engagement>>;

    /// Retrieve a single note by ID.
    async fn get(&self, id: u64) -> HubSpotResult<Engagement>;

    /// Create a new note.
    async fn create(&self, note: &NewNote) -> HubSpotResult<Engagement>;

    /// Replace the body of an existing note.
    async fn update_body(&self, id: u64, body: &str) -> HubSpotResult<Engagement>;

    /// Delete a note.
    async fn delete(&self, id: u64) -> HubSpotResult<()>;
}
