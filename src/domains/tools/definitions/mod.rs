//! Tool definitions module.
//!
//! Each tool is defined in its own file and knows how to describe itself
//! (`to_tool`) and how to build its own route (`create_route`).

pub mod common;
pub mod fs;
pub mod library;

pub use fs::{FileKeywordSearchParams, FileKeywordSearchTool, FileMatch};
pub use library::{AuthorSearchParams, AuthorSearchTool, OpenLibraryClient};
