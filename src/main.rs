//! HubSpot Notes MCP Server - Main entry point
//!
//! This is the main executable for the HubSpot notes MCP server, which provides
//! a Model Context Protocol (MCP) interface to shared summary notes stored as
//! HubSpot engagements.

use anyhow::Result;
use hubspot_notes_mcp_server::client::{AsyncHubSpotClient, AsyncHubSpotClientImpl};
use hubspot_notes_mcp_server::repositories::{HubSpotNoteRepository, NoteRepository};
use hubspot_notes_mcp_server::{Config, HubSpotClient, HubSpotMcpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting HubSpot notes MCP server with API URL: {}",
        config.api_base_url
    );

    // Initialize HubSpot client
    let sync_client = HubSpotClient::new(&config);
    let client = Arc::new(AsyncHubSpotClientImpl::new(sync_client)) as Arc<dyn AsyncHubSpotClient>;

    // Initialize repository
    let note_repo = Arc::new(HubSpotNoteRepository::new(client)) as Arc<dyn NoteRepository>;

    // Create the MCP server (the summary service is constructed internally)
    let server = HubSpotMcpServer::new(note_repo, config.contact_id);

    info!("HubSpot notes MCP server initialized");

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    hubspot_notes_mcp_server::server::run_server(server).await?;

    info!("HubSpot notes MCP server shutdown complete");
    Ok(())
}
