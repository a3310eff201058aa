//! Keyword search within a single file.
//!
//! Reads the whole file, keeps every line that contains the keyword as a
//! case-sensitive substring, and reports them with 1-based line numbers.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::core::config::Config;
use crate::core::security::validate_path;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{failure_result, text_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the file keyword search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileKeywordSearchParams {
    /// Path to the text file to search.
    #[schemars(description = "Path to the text file to search (absolute or relative)")]
    pub file_path: String,

    /// Keyword to look for.
    #[schemars(description = "Keyword to look for (case-sensitive substring)")]
    pub keyword: String,
}

/// A line that contains the keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatch {
    /// 1-based position of the line in the file.
    pub line_number: usize,

    /// The full line, without its terminator.
    pub text: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// File keyword search tool.
pub struct FileKeywordSearchTool;

impl FileKeywordSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_in_file";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for a specified keyword within a given file. \
        Returns the lines containing the keyword and their line numbers.";

    /// Execute the tool logic.
    ///
    /// Always returns a response; failures become an `Error reading file ...` text.
    #[instrument(skip_all, fields(path = %params.file_path))]
    pub async fn execute(params: &FileKeywordSearchParams, config: &Config) -> CallToolResult {
        info!(
            "File search tool called for '{}' in {}",
            params.keyword, params.file_path
        );

        match Self::search(&params.file_path, &params.keyword, config).await {
            Ok(matches) => {
                info!("Found {} matching line(s)", matches.len());
                text_result(format_report(&params.file_path, &params.keyword, &matches))
            }
            Err(e) => {
                let prefix = format!("Error reading file \"{}\"", params.file_path);
                failure_result(&prefix, &e)
            }
        }
    }

    /// Read `file_path` and collect the lines containing `keyword`.
    pub async fn search(
        file_path: &str,
        keyword: &str,
        config: &Config,
    ) -> Result<Vec<FileMatch>, ToolError> {
        let path = validate_path(file_path, config)?;
        debug!("Reading {:?}", path);

        let content = tokio::fs::read_to_string(&path).await?;

        Ok(find_matches(&content, keyword))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<FileKeywordSearchParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: FileKeywordSearchParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Collect the lines of `content` that contain `keyword`, in file order.
///
/// Lines end at `\n` or `\r\n`. Empty content has no lines, and a trailing
/// terminator does not start an extra empty line.
pub fn find_matches(content: &str, keyword: &str) -> Vec<FileMatch> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains(keyword))
        .map(|(index, line)| FileMatch {
            line_number: index + 1,
            text: line.to_string(),
        })
        .collect()
}

/// Render the response text for a completed search.
pub fn format_report(file_path: &str, keyword: &str, matches: &[FileMatch]) -> String {
    if matches.is_empty() {
        return format!(
            "No matches found for \"{}\" in file \"{}\".",
            keyword, file_path
        );
    }

    let lines = matches
        .iter()
        .map(|m| format!("Line {}: {}", m.line_number, m.text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Found {} match(es) for \"{}\" in \"{}\":\n\n{}",
        matches.len(),
        keyword,
        file_path,
        lines
    )
}

// ============================================================================
// Tests
// ============================================================================
