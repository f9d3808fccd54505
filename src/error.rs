//! Error types for fastanchor
//!
//! Resolution itself never fails: anomalous inputs (detached nodes, missing
//! ancestors, absent shadow content) degrade to the window fallback instead
//! of raising. Errors only arise from the style keyword parsers, which
//! reject values outside their fixed CSS vocabularies.
//!
//! All errors use the `thiserror` crate for minimal boilerplate and proper
//! error trait implementations.

use thiserror::Error;

/// Result type alias for fastanchor operations
///
/// # Examples
///
/// ```
/// use fastanchor::{Position, Result};
///
/// fn position_of(raw: &str) -> Result<Position> {
///   Position::parse(raw)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for fastanchor
///
/// Every variant carries the rejected input verbatim so hosts can report
/// which computed-style string failed to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// A `position` value outside the CSS keyword vocabulary
  #[error("invalid position value: '{0}'")]
  InvalidPosition(String),

  /// A `contain` value outside the CSS keyword vocabulary
  #[error("invalid contain value: '{0}'")]
  InvalidContain(String),
}
