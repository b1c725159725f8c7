//! Error types for match evaluation.
//!
//! Incompatible patterns, incomplete coverage and bad arities are all caught at
//! compile time; the only runtime failure is a subject no arm accepts.

use thiserror::Error;

/// Result of a match.
pub type MatchResult<T> = Result<T, NoMatch>;

/// No pattern in the match accepted the subject.
///
/// Returned by [`smatch!`](crate::smatch!) after every arm was tried, and for
/// a match with no arms at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Error)]
#[error("no pattern matched the subject")]
pub struct NoMatch;
