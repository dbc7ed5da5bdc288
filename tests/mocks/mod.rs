mod mock_note_repository;

pub use mock_note_repository::MockNoteRepository;
