//! MCP Server implementation and lifecycle management.
//!
//! `McpServer` is the explicit registration table: it is constructed once at
//! startup from a `Config` and then handed to the transport run loop.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (deserialized from the call arguments)
//! - `execute()` method (core logic, always returns a response envelope)
//! - `create_route()` method (rmcp route for STDIO/TCP transport)
//!
//! The HTTP transport dispatches through `ToolRegistry` instead.

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool_handler,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::tools::{
    ToolRegistry, ToolRequest, build_tool_router, definitions::OpenLibraryClient,
};

/// Instructions sent to clients on initialization.
pub const SERVER_INSTRUCTIONS: &str = "Use search_author to look up books on Open Library by \
     author name, and search_in_file to find the lines of a local text file that contain a keyword.";

/// The main MCP server handler.
///
/// Cloning is cheap; every TCP connection gets its own clone.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry used for direct dispatch (HTTP transport).
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails only if the Open Library client cannot be built from the config.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let config = Arc::new(config);
        let client = OpenLibraryClient::new(&config.open_library)?;

        info!(
            "Registered tools: {}",
            ToolRegistry::get_all_tools()
                .iter()
                .map(|t| t.name.as_ref())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self {
            tool_router: build_tool_router::<Self>(config.clone(), client.clone()),
            registry: Arc::new(ToolRegistry::new(config.clone(), client)),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// List all available tools as JSON (for HTTP transport).
    pub fn list_tools(&self) -> Vec<Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[instrument(skip(self, request), fields(tool = %request.name))]
    pub async fn call_tool(&self, request: ToolRequest) -> Result<CallToolResult, String> {
        info!("Dispatching tool call");
        self.registry.call_tool(&request).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: rmcp::model::Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..rmcp::model::Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
