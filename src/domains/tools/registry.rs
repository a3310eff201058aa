//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The list of available tools and their metadata
//! - Dispatch of a `ToolRequest` to the matching tool (used by the HTTP
//!   transport, which does not go through the rmcp router)

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use tracing::warn;

use super::ToolRequest;
use super::definitions::{
    AuthorSearchParams, AuthorSearchTool, FileKeywordSearchParams, FileKeywordSearchTool,
    OpenLibraryClient,
};
use crate::core::config::Config;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - the process-wide registration table.
///
/// Built once at startup and never mutated afterwards.
pub struct ToolRegistry {
    config: Arc<Config>,
    client: OpenLibraryClient,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>, client: OpenLibraryClient) -> Self {
        Self { config, client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![AuthorSearchTool::NAME, FileKeywordSearchTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![AuthorSearchTool::to_tool(), FileKeywordSearchTool::to_tool()]
    }

    /// Dispatch a tool call to the matching handler.
    ///
    /// `Err` is reserved for dispatch failures (unknown tool, arguments that
    /// do not fit the schema). Tool failures come back as `Ok` text responses.
    pub async fn call_tool(&self, request: &ToolRequest) -> Result<CallToolResult, String> {
        match request.name.as_str() {
            AuthorSearchTool::NAME => {
                let params: AuthorSearchParams = request.parse_arguments()?;
                Ok(AuthorSearchTool::execute(&params, &self.client).await)
            }
            FileKeywordSearchTool::NAME => {
                let params: FileKeywordSearchParams = request.parse_arguments()?;
                Ok(FileKeywordSearchTool::execute(&params, &self.config).await)
            }
            _ => {
                warn!("Unknown tool requested: {}", request.name);
                Err(format!("Unknown tool: {}", request.name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::first_text;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn test_registry() -> ToolRegistry {
        let config = Arc::new(Config::default());
        let client = OpenLibraryClient::new(&config.open_library).unwrap();
        ToolRegistry::new(config, client)
    }

    fn request(name: &str, arguments: serde_json::Value) -> ToolRequest {
        ToolRequest::new(name, arguments.as_object().cloned().unwrap_or_default())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = test_registry();
        assert_eq!(registry.tool_names(), vec!["search_author", "search_in_file"]);
    }

    #[test]
    fn test_all_tools_have_descriptions() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(tool.description.is_some_and(|d| !d.is_empty()));
        }
    }

    #[tokio::test]
    async fn test_registry_dispatches_file_search() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("notes.txt");
        fs::write(&file, "one\ntwo\n").unwrap();

        let registry = test_registry();
        let result = registry
            .call_tool(&request(
                "search_in_file",
                json!({ "filePath": file.to_string_lossy(), "keyword": "two" }),
            ))
            .await
            .unwrap();

        assert!(first_text(&result).unwrap().ends_with("Line 2: two"));
    }

    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = test_registry();
        let result = registry.call_tool(&request("unknown", json!({}))).await;
        assert_eq!(result.unwrap_err(), "Unknown tool: unknown");
    }

    #[tokio::test]
    async fn test_registry_rejects_missing_arguments() {
        let registry = test_registry();
        let result = registry
            .call_tool(&request("search_in_file", json!({ "filePath": "/tmp/x" })))
            .await;
        assert!(result.unwrap_err().contains("keyword"));
    }
}
