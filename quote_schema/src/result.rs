//! Result type alias used across the workspace.
//!
//! Defaults the error type to `SchemaError`, so functions can simply return
//! `Result<T>`.
use crate::error::SchemaError;

/// Workspace-wide `Result` alias with `SchemaError` as the default error.
pub type Result<T, E = SchemaError> = std::result::Result<T, E>;
