//! Shared-summary service layer.
//!
//! Business logic for creating, listing, updating and deleting shared
//! summaries, including the resolver that turns filters or a free-text
//! query into a target record when no explicit id is supplied.

use crate::error::{HubSpotApiError, HubSpotResult};
use crate::filter::{filter_notes, sort_and_limit, FilterCriteria};
use crate::models::{Engagement, NewNote, NoteContent};
use crate::repositories::NoteRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Number of recent records fetched per request.
///
/// Filtering and resolution are best-effort over this recency window;
/// anything older is invisible to them.
pub const FETCH_WINDOW: usize = 100;

/// Caller-supplied field values for an update.
///
/// `None` fields keep their previous values.
#[derive(Debug, Clone, Default)]
pub struct SummaryUpdate {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub author: Option<String>,
}

/// Summary service trait for business operations.
#[async_trait]
pub trait SummaryService: Send + Sync {
    /// Create a new shared summary, returning its id.
    async fn create_summary(&self, content: NoteContent) -> HubSpotResult<u64>;

    /// List shared summaries matching the criteria, newest first.
    async fn get_summaries(&self, criteria: FilterCriteria) -> HubSpotResult<Vec<Engagement>>;

    /// Update a shared summary located by id or free-text query.
    async fn update_summary(
        &self,
        id: Option<u64>,
        query: Option<String>,
        update: SummaryUpdate,
    ) -> HubSpotResult<u64>;

    /// Delete a shared summary located by id or by date/day/time filters.
    async fn delete_summary(
        &self,
        id: Option<u64>,
        criteria: FilterCriteria,
    ) -> HubSpotResult<u64>;
}

/// Default implementation of SummaryService.
pub struct SummaryServiceImpl {
    note_repo: Arc<dyn NoteRepository>,

    /// Contact every created summary is associated with
    contact_id: u64,
}

impl SummaryServiceImpl {
    /// Create a new summary service.
    pub fn new(note_repo: Arc<dyn NoteRepository>, contact_id: u64) -> Self {
        Self {
            note_repo,
            contact_id,
        }
    }

    /// Resolve the engagement an update refers to.
    ///
    /// An explicit id wins; otherwise the most recent note whose body
    /// contains the query. Requests supplying neither are rejected.
    async fn resolve_update_target(
        &self,
        id: Option<u64>,
        query: Option<String>,
    ) -> HubSpotResult<Engagement> {
        if let Some(id) = id {
            return self.note_repo.get(id).await;
        }

        let query = match query {
            Some(q) if !q.trim().is_empty() => q,
            _ => {
                return Err(HubSpotApiError::InvalidRequest(
                    "Either id or query must be provided".to_string(),
                ))
            }
        };

        let notes = self.note_repo.list_recent(FETCH_WINDOW).await?;
        let criteria = FilterCriteria {
            query: Some(query.clone()),
            ..Default::default()
        };
        let matches = sort_and_limit(filter_notes(notes, &criteria)?, None);

        matches.into_iter().next().ok_or_else(|| {
            HubSpotApiError::NotFound(format!("No shared summary matched query: {}", query))
        })
    }
}

#[async_trait]
impl SummaryService for SummaryServiceImpl {
    async fn create_summary(&self, content: NoteContent) -> HubSpotResult<u64> {
        let note = NewNote {
            body: content.encode(),
            contact_id: self.contact_id,
            timestamp: chrono::Utc::now().timestamp_millis(),
        };

        let created = self.note_repo.create(&note).await?;
        Ok(created.id())
    }

    async fn get_summaries(&self, criteria: FilterCriteria) -> HubSpotResult<Vec<Engagement>> {
        criteria.validate()?;

        let notes = self.note_repo.list_recent(FETCH_WINDOW).await?;
        let filtered = filter_notes(notes, &criteria)?;
        Ok(sort_and_limit(filtered, criteria.limit))
    }

    async fn update_summary(
        &self,
        id: Option<u64>,
        query: Option<String>,
        update: SummaryUpdate,
    ) -> HubSpotResult<u64> {
        let target = self.resolve_update_target(id, query).await?;

        let content = NoteContent::decode(target.body()).merge(
            update.title,
            update.summary,
            update.author,
        );

        let updated = self
            .note_repo
            .update_body(target.id(), &content.encode())
            .await?;
        Ok(updated.id())
    }

    async fn delete_summary(
        &self,
        id: Option<u64>,
        criteria: FilterCriteria,
    ) -> HubSpotResult<u64> {
        criteria.validate()?;

        if let Some(id) = id {
            self.note_repo.delete(id).await?;
            return Ok(id);
        }

        let notes = self.note_repo.list_recent(FETCH_WINDOW).await?;
        let filtered = filter_notes(notes, &criteria)?;
        let candidates = sort_and_limit(filtered, Some(criteria.limit.unwrap_or(1).max(1)));

        // Only the most recent candidate is removed, even when limit sized
        // a larger target set.
        let target = candidates.into_iter().next().ok_or_else(|| {
            HubSpotApiError::NotFound("No shared summary matched the filters".to_string())
        })?;

        self.note_repo.delete(target.id()).await?;
        Ok(target.id())
    }
}
