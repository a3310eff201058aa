//! Tool Router - builds the rmcp ToolRouter used by the STDIO and TCP transports.
//!
//! Each tool definition creates its own route; this module only collects them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{AuthorSearchTool, FileKeywordSearchTool, OpenLibraryClient};
use crate::core::config::Config;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>, client: OpenLibraryClient) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AuthorSearchTool::create_route(client))
        .with_route(FileKeywordSearchTool::create_route(config))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_parts() -> (Arc<Config>, OpenLibraryClient) {
        let config = Arc::new(Config::default());
        let client = OpenLibraryClient::new(&config.open_library).unwrap();
        (config, client)
    }

    #[test]
    fn test_build_router() {
        let (config, client) = test_parts();
        let router: ToolRouter<TestServer> = build_tool_router(config, client);
        let tools = router.list_all();
        assert_eq!(tools.len(), 2);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"search_author"));
        assert!(names.contains(&"search_in_file"));
    }

    #[test]
    fn test_registry_matches_router() {
        let (config, client) = test_parts();
        let registry = ToolRegistry::new(config.clone(), client.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(config, client);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_file_search_schema_uses_camel_case() {
        let (config, client) = test_parts();
        let router: ToolRouter<TestServer> = build_tool_router(config, client);
        let tool = router
            .list_all()
            .into_iter()
            .find(|t| t.name == "search_in_file")
            .unwrap();

        let properties = tool.input_schema.get("properties").unwrap();
        assert!(properties.get("filePath").is_some());
        assert!(properties.get("keyword").is_some());
    }
}
