//! Open Library author search tool.
//!
//! Looks up books by author name and passes the API's JSON response through
//! verbatim, pretty-printed with two-space indentation.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::client::OpenLibraryClient;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{failure_result, text_result};

/// Parameters for the author search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AuthorSearchParams {
    /// Author name, free-form.
    #[schemars(description = "Author name to search for (e.g. \"Ursula K. Le Guin\")")]
    pub author: String,
}

/// Author search tool - queries `search.json` on Open Library.
pub struct AuthorSearchTool;

impl AuthorSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_author";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Search for books on the Open Library API by author name.";

    /// Prefix of every failure message returned by this tool.
    pub const ERROR_PREFIX: &'static str = "Error fetching data";

    /// Execute the tool logic.
    ///
    /// Always returns a response; failures become an `Error fetching data: ...` text.
    #[instrument(skip_all, fields(author = %params.author))]
    pub async fn execute(params: &AuthorSearchParams, client: &OpenLibraryClient) -> CallToolResult {
        info!("Author search tool called for: {}", params.author);

        match Self::search(&params.author, client).await {
            Ok(text) => text_result(text),
            Err(e) => failure_result(Self::ERROR_PREFIX, &e),
        }
    }

    /// Fetch results for `author` and pretty-print them.
    pub async fn search(author: &str, client: &OpenLibraryClient) -> Result<String, ToolError> {
        let json = client.search_by_author(author).await?;
        serde_json::to_string_pretty(&json).map_err(|e| ToolError::network_or_parse(e.to_string()))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AuthorSearchParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(client: OpenLibraryClient) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: AuthorSearchParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
