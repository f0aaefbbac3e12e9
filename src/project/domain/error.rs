//! Error types for project domain parsing.

use thiserror::Error;

/// Error returned while parsing a project status from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);
