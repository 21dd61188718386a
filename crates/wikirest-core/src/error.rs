//! Error types for route resolution

use thiserror::Error;

/// Errors that can occur while resolving a resource route
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown resource kind: {0}")]
    UnknownResourceKind(String),

    #[error("Missing route parameter ':{name}' for resource kind '{kind}'")]
    MissingParameter { kind: &'static str, name: String },
}
