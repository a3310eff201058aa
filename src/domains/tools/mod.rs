//! Tools domain module.
//!
//! Tools are the named operations MCP clients can call:
//! - `search_author`: Open Library book search by author
//! - `search_in_file`: keyword search inside a local text file
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - rmcp ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Tool list and `ToolRequest` dispatch for HTTP transport
//! - `request.rs` - The `ToolRequest` type
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `execute()`,
//!    `to_tool()` and `create_route()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add its route in `router.rs`
//! 4. Add it to the name list and dispatch in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod request;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use request::ToolRequest;
pub use router::build_tool_router;
