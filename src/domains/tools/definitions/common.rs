//! Helpers shared by the tool definitions.
//!
//! Every tool answers with a single text item. Failures use the same
//! envelope as successes: callers tell them apart by the message text.

use rmcp::model::{CallToolResult, Content, RawContent};
use serde_json::Value;
use tracing::warn;

use crate::domains::tools::ToolError;

/// Wrap `text` in the uniform response envelope.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Log a tool failure and render it as `"<prefix>: <message>"`.
pub fn failure_result(prefix: &str, err: &ToolError) -> CallToolResult {
    warn!("{}: {}", prefix, err);
    text_result(format!("{}: {}", prefix, err))
}

/// Serialize a result envelope for JSON-RPC transports that bypass rmcp.
pub fn result_to_json(result: &CallToolResult) -> Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}

/// Extract the text of the first content item (test and logging helper).
pub fn first_text(result: &CallToolResult) -> Option<&str> {
    match &result.content.first()?.raw {
        RawContent::Text(text) => Some(text.text.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_result_is_not_flagged() {
        let result = failure_result("Error fetching data", &ToolError::remote_request(500));
        assert_ne!(result.is_error, Some(true));
        assert_eq!(
            first_text(&result),
            Some("Error fetching data: HTTP error! Status: 500")
        );
    }

    #[test]
    fn test_result_to_json_shape() {
        let json = result_to_json(&text_result("hello"));
        assert_eq!(json["content"][0]["type"], "text");
        assert_eq!(json["content"][0]["text"], "hello");
        assert_eq!(json["isError"], false);
    }
}
