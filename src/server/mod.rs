//! MCP server implementation for HubSpot shared summaries.
//!
//! This module provides the MCP protocol server that exposes the shared
//! summary tools to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::HubSpotMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the HubSpot notes MCP server with stdio transport.
///
/// This function starts the MCP server and runs it until completion.
/// It communicates via stdin/stdout using the MCP protocol.
///
/// # Arguments
/// * `server` - The configured HubSpotMcpServer instance
///
/// # Returns
/// An error if the server fails to start or encounters a fatal error
pub async fn run_server(server: HubSpotMcpServer) -> Result<()> {
    // Serve the server with stdio transport
    let service = server.serve(stdio()).await?;

    // Wait for completion
    service.waiting().await?;

    Ok(())
}
