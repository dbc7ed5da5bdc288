mod hubspot_note_repository;
mod traits;

pub use hubspot_note_repository::HubSpotNoteRepository;
pub use traits::NoteRepository;
