//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Default Open Library API base URL.
pub const DEFAULT_OPEN_LIBRARY_URL: &str = "https://openlibrary.org";

/// Main configuration structure for the MCP server.
///
/// Built once at startup and shared read-only (behind an `Arc`) by every
/// tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Open Library API client configuration.
    pub open_library: OpenLibraryConfig,

    /// Security and path validation configuration.
    pub security: SecurityConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the Open Library HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenLibraryConfig {
    /// Base URL of the API, without trailing path (e.g. `https://openlibrary.org`).
    pub base_url: String,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

/// Configuration for security and path validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Optional root directory for file access.
    /// If None, paths are used exactly as given.
    pub root_path: Option<PathBuf>,

    /// Whether a symlink may be opened at all. When false, any path that is
    /// itself a symlink is rejected. Followed symlinks stay confined to the
    /// root either way. Only meaningful when `root_path` is set.
    pub allow_symlinks: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL` (and `.env`) without logging anything.
    ///
    /// Called before the subscriber exists, so that the rest of
    /// `Config::from_env` can log through it.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        match std::env::var("MCP_LOG_LEVEL") {
            Ok(level) => Self { level },
            Err(_) => Self::default(),
        }
    }
}

impl Default for OpenLibraryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OPEN_LIBRARY_URL.to_string(),
            user_agent: format!("mcp-open-library/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            root_path: None,
            allow_symlinks: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mcp-open-library".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            open_library: OpenLibraryConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_OPEN_LIBRARY_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("MCP_OPEN_LIBRARY_URL") {
            config.open_library.base_url = base_url.trim_end_matches('/').to_string();
            info!("Open Library base URL overridden: {}", config.open_library.base_url);
        }

        if let Ok(user_agent) = std::env::var("MCP_USER_AGENT") {
            config.open_library.user_agent = user_agent;
        }

        if let Ok(root_path) = std::env::var("MCP_ROOT_PATH") {
            config.security.root_path = Some(PathBuf::from(root_path));
            info!("Path security enabled: root directory set to {:?}", config.security.root_path);
        } else {
            warn!(
                "MCP_ROOT_PATH not set - no path restrictions active. \
                 search_in_file may read any file the process can access."
            );
        }

        if let Ok(allow_symlinks) = std::env::var("MCP_ALLOW_SYMLINKS") {
            config.security.allow_symlinks = allow_symlinks.parse().unwrap_or(true);
            info!("Symlinks allowed: {}", config.security.allow_symlinks);
        }

        config
    }
}
