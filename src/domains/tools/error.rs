//! Tool-specific error types.

use thiserror::Error;

/// Errors a tool can hit while doing its work.
///
/// Tools never return these to the dispatcher: each one is rendered into a
/// text response at the point of origin, so every variant must display as a
/// message a human can read.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The remote API answered with a non-success HTTP status.
    #[error("HTTP error! Status: {status}")]
    RemoteRequest { status: u16 },

    /// The request never completed, or the body was not valid JSON.
    #[error("{0}")]
    NetworkOrParse(String),

    /// The file could not be resolved, opened or decoded.
    #[error("{0}")]
    FileAccess(String),
}

impl ToolError {
    /// Create a "remote request" error from an HTTP status code.
    pub fn remote_request(status: u16) -> Self {
        Self::RemoteRequest { status }
    }

    /// Create a "network or parse" error.
    pub fn network_or_parse(msg: impl Into<String>) -> Self {
        Self::NetworkOrParse(msg.into())
    }

    /// Create a "file access" error.
    pub fn file_access(msg: impl Into<String>) -> Self {
        Self::FileAccess(msg.into())
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if !status.is_success() => Self::remote_request(status.as_u16()),
            _ => Self::network_or_parse(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        Self::file_access(err.to_string())
    }
}

impl From<crate::core::PathSecurityError> for ToolError {
    fn from(err: crate::core::PathSecurityError) -> Self {
        Self::file_access(err.to_string())
    }
}
