//! End-to-end tool calls through the server's dispatcher.
//!
//! The Open Library API is replaced by a local wiremock server; file
//! fixtures live in temporary directories.

use open_library_mcp_server::core::{Config, McpServer};
use open_library_mcp_server::domains::tools::ToolRequest;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_for(api: &MockServer) -> McpServer {
    let mut config = Config::default();
    config.open_library.base_url = api.uri();
    McpServer::new(config).unwrap()
}

fn request(name: &str, arguments: Value) -> ToolRequest {
    ToolRequest::new(name, arguments.as_object().cloned().unwrap())
}

fn text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1);
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        _ => panic!("Expected text content"),
    }
}

#[tokio::test]
async fn search_author_passes_json_through() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("author", "Octavia E. Butler"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"docs":[]}"#))
        .expect(1)
        .mount(&api)
        .await;

    let server = server_for(&api);
    let result = server
        .call_tool(request("search_author", json!({ "author": "Octavia E. Butler" })))
        .await
        .unwrap();

    let body = text(&result);
    assert_eq!(body, "{\n  \"docs\": []\n}");
    let reparsed: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(reparsed, json!({ "docs": [] }));
}

#[tokio::test]
async fn search_author_reports_server_errors() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&api)
        .await;

    let server = server_for(&api);
    let result = server
        .call_tool(request("search_author", json!({ "author": "Anyone" })))
        .await
        .unwrap();

    assert!(text(&result).starts_with("Error fetching data: HTTP error! Status: 503"));
}

#[tokio::test]
async fn search_author_without_arguments_is_rejected() {
    let api = MockServer::start().await;
    let server = server_for(&api);

    let result = server.call_tool(request("search_author", json!({}))).await;

    assert!(result.is_err());
    assert!(api.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn search_in_file_reports_matching_lines() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("reading-list.txt");
    fs::write(&file, "foo\nbar\nfoobar\n").unwrap();
    let file_path = file.to_string_lossy().to_string();

    let api = MockServer::start().await;
    let server = server_for(&api);
    let result = server
        .call_tool(request(
            "search_in_file",
            json!({ "filePath": file_path, "keyword": "foo" }),
        ))
        .await
        .unwrap();

    assert_eq!(
        text(&result),
        format!(
            "Found 2 match(es) for \"foo\" in \"{}\":\n\nLine 1: foo\nLine 3: foobar",
            file_path
        )
    );
}

#[tokio::test]
async fn search_in_file_without_matches() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("reading-list.txt");
    fs::write(&file, "Dune\nEarthsea\r\nKindred\n").unwrap();
    let file_path = file.to_string_lossy().to_string();

    let api = MockServer::start().await;
    let server = server_for(&api);
    let result = server
        .call_tool(request(
            "search_in_file",
            json!({ "filePath": file_path, "keyword": "dune" }),
        ))
        .await
        .unwrap();

    assert_eq!(
        text(&result),
        format!("No matches found for \"dune\" in file \"{}\".", file_path)
    );
}

#[tokio::test]
async fn search_in_file_missing_file() {
    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("gone.txt").to_string_lossy().to_string();

    let api = MockServer::start().await;
    let server = server_for(&api);
    let result = server
        .call_tool(request(
            "search_in_file",
            json!({ "filePath": file_path, "keyword": "foo" }),
        ))
        .await
        .unwrap();

    let body = text(&result);
    let prefix = format!("Error reading file \"{}\": ", file_path);
    assert!(body.starts_with(&prefix));
    assert!(!body[prefix.len()..].is_empty());
}

#[tokio::test]
async fn concurrent_calls_do_not_interfere() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    fs::write(&first, "alpha\nbeta\n").unwrap();
    fs::write(&second, "gamma\nalpha beta\n").unwrap();

    let api = MockServer::start().await;
    let server = server_for(&api);

    let (a, b) = tokio::join!(
        server.call_tool(request(
            "search_in_file",
            json!({ "filePath": first.to_string_lossy(), "keyword": "beta" }),
        )),
        server.call_tool(request(
            "search_in_file",
            json!({ "filePath": second.to_string_lossy(), "keyword": "beta" }),
        )),
    );

    assert!(text(&a.unwrap()).ends_with("Line 2: beta"));
    assert!(text(&b.unwrap()).ends_with("Line 2: alpha beta"));
}

#[cfg(unix)]
#[tokio::test]
async fn search_in_file_symlink_follows_allow_symlinks() {
    use std::os::unix::fs::symlink;

    let dir = TempDir::new().unwrap();
    let target = dir.path().join("shelf.txt");
    let link = dir.path().join("shelf-link.txt");
    fs::write(&target, "Solaris\n").unwrap();
    symlink(&target, &link).unwrap();
    let link_path = link.to_string_lossy().to_string();

    let api = MockServer::start().await;
    let mut results = Vec::new();
    for allow_symlinks in [true, false] {
        let mut config = Config::default();
        config.open_library.base_url = api.uri();
        config.security.root_path = Some(dir.path().to_path_buf());
        config.security.allow_symlinks = allow_symlinks;
        let server = McpServer::new(config).unwrap();

        let result = server
            .call_tool(request(
                "search_in_file",
                json!({ "filePath": link_path, "keyword": "Solaris" }),
            ))
            .await
            .unwrap();
        results.push(text(&result));
    }

    assert!(results[0].starts_with("Found 1 match(es)"));
    assert!(results[1].starts_with(&format!("Error reading file \"{}\": ", link_path)));
    assert!(results[1].contains("symlinks are disabled"));
}
