//! Data models for HubSpot engagement notes.
//!
//! This module contains the wire-format structures for the HubSpot v1
//! engagements API and the decoded shared-summary note content.

pub mod engagement;
pub mod note;

pub use engagement::{
    CreateEngagementRequest, Engagement, EngagementsPage, NewNote, UpdateEngagementRequest,
};
pub use note::NoteContent;
