//! Tool request type used by dispatchers that bypass the rmcp router.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single named tool call and its argument payload.
///
/// Built per invocation from the incoming message and dropped once the
/// response has been produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRequest {
    /// The name of the tool to execute.
    pub name: String,

    /// Named arguments for the tool.
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl ToolRequest {
    /// Create a request for `name` with the given arguments.
    pub fn new(name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Deserialize the arguments into a tool's parameter struct.
    ///
    /// Returns a message suitable for an "invalid params" protocol error.
    pub fn parse_arguments<T>(&self) -> Result<T, String>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_value(Value::Object(self.arguments.clone()))
            .map_err(|e| format!("Invalid arguments for '{}': {}", self.name, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_from_json_defaults_arguments() {
        let request: ToolRequest = serde_json::from_value(json!({ "name": "search_author" })).unwrap();
        assert_eq!(request.name, "search_author");
        assert!(request.arguments.is_empty());
    }

    #[test]
    fn test_parse_arguments_reports_tool_name() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Params {
            author: String,
        }

        let request = ToolRequest::new("search_author", Map::new());
        let err = request.parse_arguments::<Params>().unwrap_err();
        assert!(err.starts_with("Invalid arguments for 'search_author'"));
        assert!(err.contains("author"));
    }
}
