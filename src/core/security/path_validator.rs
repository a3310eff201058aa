use std::io;
use std::path::{Path, PathBuf};

use crate::core::config::Config;

/// Errors that can occur during path validation
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("Path '{path}' is outside allowed root directory '{root}'")]
    OutsideRootDirectory { path: PathBuf, root: PathBuf },

    #[error("Symlink '{path}' points outside allowed root directory")]
    SymlinkOutsideRoot { path: PathBuf },

    #[error("Symlink '{path}' rejected: symlinks are disabled")]
    SymlinkNotAllowed { path: PathBuf },

    #[error("Cannot canonicalize path '{path}': {error}")]
    CannotCanonicalize { path: PathBuf, error: io::Error },

    #[error("Path does not exist: '{path}'")]
    PathNotFound { path: PathBuf },

    #[error("IO error for path '{path}': {error}")]
    IoError { path: PathBuf, error: io::Error },
}

/// Resolves a user-supplied path against the configured security boundaries.
///
/// Without a configured root the path is returned untouched, so that a
/// subsequent read reports the operating system's own error. With a root:
/// 1. the root and the input are canonicalized (resolving `.`, `..` and symlinks),
/// 2. a symlink is rejected outright when `allow_symlinks` is false,
/// 3. the canonical path must lie within the canonical root.
///
/// # Examples
///
/// ```rust,ignore
/// let config = Config::from_env();
/// let safe_path = validate_path("notes/reading-list.txt", &config)?;
/// ```
pub fn validate_path(input_path: &str, config: &Config) -> Result<PathBuf, PathSecurityError> {
    let path = Path::new(input_path);

    let Some(ref root) = config.security.root_path else {
        return Ok(path.to_path_buf());
    };

    let canonical_root = root.canonicalize().map_err(|e| PathSecurityError::IoError {
        path: root.clone(),
        error: e,
    })?;

    // Relative inputs are resolved against the root, not the process cwd
    let path = if path.is_relative() {
        canonical_root.join(path)
    } else {
        path.to_path_buf()
    };

    if !path.exists() {
        return Err(PathSecurityError::PathNotFound { path });
    }

    if path.is_symlink() && !config.security.allow_symlinks {
        return Err(PathSecurityError::SymlinkNotAllowed { path });
    }

    let canonical_path = path
        .canonicalize()
        .map_err(|e| PathSecurityError::CannotCanonicalize {
            path: path.clone(),
            error: e,
        })?;

    if !is_within_root(&canonical_path, &canonical_root) {
        // A followed symlink is reported as such rather than as a plain escape
        if path.is_symlink() {
            return Err(PathSecurityError::SymlinkOutsideRoot { path });
        }
        return Err(PathSecurityError::OutsideRootDirectory {
            path: canonical_path,
            root: canonical_root,
        });
    }

    Ok(canonical_path)
}

/// Checks if a path is within (or equal to) a root directory
fn is_within_root(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}
