pub mod search_in_file;

pub use search_in_file::{FileKeywordSearchParams, FileKeywordSearchTool, FileMatch};
