//! Setup failures raised while installing wrappers.

use thiserror::Error;

/// Fatal error produced when wrapper installation cannot proceed.
///
/// These are wiring mistakes, not runtime conditions: the embedder must
/// surface them instead of continuing with a half-wrapped namespace. They
/// are disjoint from call-time failures, which pass through the wrapper
/// untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    /// The namespace has no export under the requested name.
    #[error("no export named `{0}` to wrap")]
    MissingExport(String),
    /// The export exists but is plain data, not a callable.
    #[error("`{0}` must be callable")]
    NotCallable(String),
}
