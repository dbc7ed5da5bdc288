//! MCP tool handlers for the HubSpot shared-summary server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::filter::{FilterCriteria, TimeRange};
use crate::models::NoteContent;
use crate::repositories::NoteRepository;
use crate::services::{SummaryService, SummaryServiceImpl, SummaryUpdate};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

/// The MCP server that exposes the shared-summary tools.
#[derive(Clone)]
pub struct HubSpotMcpServer {
    summary_service: Arc<dyn SummaryService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for HubSpotMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "hubspot-notes-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "MCP server for shared summary notes stored in HubSpot - provides tools to create, list, update, and delete summaries with date, day-of-week, time-range, and text filters.".into(),
            ),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct CreateSharedSummaryParams {
    title: String,
    summary: String,
    author: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct GetSummariesParams {
    /// Calendar date filter (YYYY-MM-DD)
    #[serde(default)]
    date: Option<String>,
    /// English day name, e.g. "friday"
    #[serde(default)]
    day_of_week: Option<String>,
    #[serde(default)]
    limit: Option<usize>,
    /// Inclusive local time-of-day range (HH:MM)
    #[serde(default)]
    time_range: Option<TimeRange>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct UpdateSharedSummaryParams {
    /// Engagement id of the summary to update
    #[serde(default)]
    id: Option<u64>,
    /// Free-text search used when no id is given; the most recent match wins
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    author: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct DeleteSharedSummaryParams {
    /// Engagement id of the summary to delete
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    day_of_week: Option<String>,
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    time_range: Option<TimeRange>,
}

// Helper function to convert errors to error-flagged tool results.
// Tool failures never surface as protocol faults; only an unrecognized
// tool name propagates through the router.
fn error_result(e: impl std::fmt::Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {}", e))])
}

// Tool router implementation
#[tool_router]
impl HubSpotMcpServer {
    /// Create a new HubSpot shared-summary MCP server.
    pub fn new(note_repo: Arc<dyn NoteRepository>, contact_id: u64) -> Self {
        let summary_service =
            Arc::new(SummaryServiceImpl::new(note_repo, contact_id)) as Arc<dyn SummaryService>;

        Self {
            summary_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Create a new shared summary note.
    #[tool(
        description = "Create a shared summary note with a title, summary text, and author. The note is stored in HubSpot and associated with the configured contact."
    )]
    async fn create_shared_summary(
        &self,
        params: Parameters<CreateSharedSummaryParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: create_shared_summary called");

        let content = NoteContent::new(params.title, params.summary, params.author);

        match self.summary_service.create_summary(content).await {
            Ok(id) => Ok(CallToolResult::success(vec![Content::text(format!(
                "Created shared summary with id {}",
                id
            ))])),
            Err(e) => {
                tracing::error!("Failed to create shared summary: {:?}", e);
                Ok(error_result(e))
            }
        }
    }

    /// List shared summaries matching optional filters.
    #[tool(
        description = "Get shared summaries, optionally filtered by date (YYYY-MM-DD), day of week, and local time range, sorted most recent first. Searches the 100 most recent notes."
    )]
    async fn get_summaries(
        &self,
        params: Parameters<GetSummariesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let criteria = FilterCriteria {
            date: params.date,
            day_of_week: params.day_of_week,
            time_range: params.time_range,
            query: None,
            limit: params.limit,
        };

        match self.summary_service.get_summaries(criteria).await {
            Ok(summaries) => match serde_json::to_string_pretty(&summaries) {
                Ok(json) => Ok(CallToolResult::success(vec![Content::text(json)])),
                Err(e) => Ok(error_result(e)),
            },
            Err(e) => {
                tracing::error!("Failed to list shared summaries: {:?}", e);
                Ok(error_result(e))
            }
        }
    }

    /// Update a shared summary located by id or free-text query.
    #[tool(
        description = "Update a shared summary's title, summary, or author. Locate it by id, or by a free-text query that selects the most recent matching note. Omitted fields keep their previous values."
    )]
    async fn update_shared_summary(
        &self,
        params: Parameters<UpdateSharedSummaryParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let update = SummaryUpdate {
            title: params.title,
            summary: params.summary,
            author: params.author,
        };

        match self
            .summary_service
            .update_summary(params.id, params.query, update)
            .await
        {
            Ok(id) => Ok(CallToolResult::success(vec![Content::text(format!(
                "Updated shared summary {}",
                id
            ))])),
            Err(e) => {
                tracing::error!("Failed to update shared summary: {:?}", e);
                Ok(error_result(e))
            }
        }
    }

    /// Delete a shared summary located by id or filters.
    #[tool(
        description = "Delete a shared summary. Locate it by id, or by date/day-of-week/time-range filters selecting the most recent match. Only one summary is deleted per call, even when limit is set."
    )]
    async fn delete_shared_summary(
        &self,
        params: Parameters<DeleteSharedSummaryParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let criteria = FilterCriteria {
            date: params.date,
            day_of_week: params.day_of_week,
            time_range: params.time_range,
            query: None,
            limit: params.limit,
        };

        match self.summary_service.delete_summary(params.id, criteria).await {
            Ok(id) => Ok(CallToolResult::success(vec![Content::text(format!(
                "Deleted shared summary {}",
                id
            ))])),
            Err(e) => {
                tracing::error!("Failed to delete shared summary: {:?}", e);
                Ok(error_result(e))
            }
        }
    }
}
