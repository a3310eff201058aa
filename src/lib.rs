//! Open Library MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing two tools:
//!
//! - `search_author`: search Open Library for books by author name
//! - `search_in_file`: find the lines of a local text file containing a keyword
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, path security, the server and
//!   its transports
//! - **domains**: business logic; currently the **tools** domain
//!
//! # Example
//!
//! ```rust,no_run
//! use open_library_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
