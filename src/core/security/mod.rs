// Security module for path validation and access control
//
// When a root directory is configured, file reads are confined to it,
// preventing path traversal out of the allowed tree.

pub mod path_validator;

pub use path_validator::{PathSecurityError, validate_path};
