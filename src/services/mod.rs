//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! the filter engine and the data access layer. They provide a clean
//! boundary between the MCP handlers and the repositories.

mod summary_service;

pub use summary_service::{SummaryService, SummaryServiceImpl, SummaryUpdate, FETCH_WINDOW};
