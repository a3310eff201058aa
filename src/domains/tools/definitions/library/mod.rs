//! Open Library tools.
//!
//! - `client`: async HTTP client for the search API
//! - `author`: `search_author` tool

pub mod author;
pub mod client;

pub use author::{AuthorSearchParams, AuthorSearchTool};
pub use client::{OpenLibraryClient, SEARCH_LIMIT};
