//! HubSpot Notes MCP Server - A Rust implementation of the Model Context Protocol
//! server for shared summary notes stored in HubSpot.
//!
//! This library provides an MCP server that enables AI assistants to create,
//! list, update, and delete shared summary notes kept as HubSpot engagements
//! of type NOTE, with client-side filtering by date, day of week, time of day,
//! and free text.
//!
//! # Architecture
//!
//! - **models**: Wire structures for engagements and the note body codec
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the HubSpot engagements API
//! - **domain**: Validated value objects (day of week)
//! - **filter**: Client-side filter engine over fetched records
//! - **repositories**: Storage abstraction over the API client
//! - **services**: Business logic and the update/delete resolver
//! - **server**: MCP protocol server

// Re-export commonly used types
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use client::HubSpotClient;
pub use config::Config;
pub use domain::DayOfWeek;
pub use error::{ConfigError, HubSpotApiError};
pub use filter::{FilterCriteria, TimeRange};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{Engagement, NewNote, NoteContent};
pub use server::HubSpotMcpServer;
pub use services::{SummaryService, SummaryServiceImpl, SummaryUpdate};
