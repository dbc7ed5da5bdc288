use async_trait::async_trait;
use hubspot_notes_mcp_server::error::{HubSpotApiError, HubSpotResult};
use hubspot_notes_mcp_server::models::{Engagement, NewNote};
use hubspot_notes_mcp_server::repositories::NoteRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock note repository for testing.
///
/// Stores engagements in insertion order so tests can control the raw
/// ordering the filter engine receives.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockNoteRepository {
    notes: Arc<Mutex<Vec<Engagement>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    next_id: Arc<Mutex<u64>>,
}

#[allow(dead_code)]
impl MockNoteRepository {
    pub fn new() -> Self {
        Self {
            notes: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1000)),
        }
    }

    pub fn add_note(&self, note: Engagement) {
        let mut notes = self.notes.lock().unwrap();
        notes.push(note);
    }

    pub fn add_notes(&self, notes_list: Vec<Engagement>) {
        let mut notes = self.notes.lock().unwrap();
        notes.extend(notes_list);
    }

    /// Snapshot of the stored engagements.
    pub fn notes(&self) -> Vec<Engagement> {
        self.notes.lock().unwrap().clone()
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteRepository for MockNoteRepository {
    async fn list_recent(&self, limit: usize) -> HubSpotResult<Vec<Engagement>> {
        self.track_call("list_recent");

        let notes = self.notes.lock().unwrap();
        Ok(notes.iter().take(limit).cloned().collect())
    }

    async fn get(&self, id: u64) -> HubSpotResult<Engagement> {
        self.track_call("get");

        let notes = self.notes.lock().unwrap();
        notes
            .iter()
            .find(|note| note.id() == id)
            .cloned()
            .ok_or_else(|| HubSpotApiError::NotFound(format!("Engagement {} not found", id)))
    }

    async fn create(&self, note: &NewNote) -> HubSpotResult<Engagement> {
        self.track_call("create");

        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;

        let mut engagement = Engagement::note(id, note.timestamp, note.body.clone());
        engagement.associations.contact_ids = vec![note.contact_id];

        let mut notes = self.notes.lock().unwrap();
        notes.push(engagement.clone());
        Ok(engagement)
    }

    async fn update_body(&self, id: u64, body: &str) -> HubSpotResult<Engagement> {
        self.track_call("update_body");

        let mut notes = self.notes.lock().unwrap();
        let note = notes
            .iter_mut()
            .find(|note| note.id() == id)
            .ok_or_else(|| HubSpotApiError::NotFound(format!("Engagement {} not found", id)))?;

        note.metadata.body = body.to_string();
        Ok(note.clone())
    }

    async fn delete(&self, id: u64) -> HubSpotResult<()> {
        self.track_call("delete");

        let mut notes = self.notes.lock().unwrap();
        let position = notes
            .iter()
            .position(|note| note.id() == id)
            .ok_or_else(|| HubSpotApiError::NotFound(format!("Engagement {} not found", id)))?;

        notes.remove(position);
        Ok(())
    }
}
