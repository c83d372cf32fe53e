//! Error types for template compilation.

use thiserror::Error;

/// Errors surfaced when obtaining template source.
///
/// Compilation itself is total: malformed `{...}` constructs degrade to
/// plain text. The only failure a caller can see is the source being
/// unreadable, which is deliberately distinct from any markup condition.
#[derive(Debug, Error)]
pub enum Error {
    /// The template source could not be read.
    #[error("template source unavailable")]
    Source(#[from] std::io::Error),
}
