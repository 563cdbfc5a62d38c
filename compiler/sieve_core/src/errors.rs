//! Error types for matching.
//!
//! # Error Categories
//!
//! Every failure the matcher can report is a `MatchError`. `ErrorClass`
//! splits them in two:
//!
//! - **Programmer** errors mean a pattern and its handler do not fit
//!   together (an ambiguous sentinel, an unbound identifier, a value
//!   forwarded twice). Arm construction reports the first two before any
//!   value is matched.
//! - **Exhaustiveness** is the one user-visible outcome: no candidate arm
//!   accepted the subject.
//!
//! A pattern or handler declining is *not* an error. It travels as
//! `MatchResult::NoMatch`.

use thiserror::Error;

use crate::Index;

/// Typed category of a `MatchError`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// A malformed pattern/handler pairing or misuse of a single-use value.
    Programmer,
    /// Every candidate arm rejected the subject.
    Exhaustiveness,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error(
        "reference to the {sentinel} capture is ambiguous: the pattern contains {count} of them"
    )]
    AmbiguousSentinel { sentinel: Index, count: usize },

    #[error("identifier {index} is not bound by the pattern")]
    UnboundIdentifier { index: Index },

    #[error("captured value was already forwarded")]
    DoubleForward,

    #[error("match result value already extracted")]
    AlreadyExtracted,

    #[error("cannot extract a value from a result that did not match")]
    NotMatched,

    /// `Pattern::bind` was handed a subject its own `test` would reject.
    #[error("{pattern} pattern cannot bind a subject of this shape")]
    BindMismatch { pattern: &'static str },

    #[error("handler expects {expected} arguments, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("no candidate pattern matched {subject} (of type `{type_name}`)")]
    NoCandidateMatched {
        type_name: &'static str,
        subject: String,
    },
}

impl MatchError {
    /// The category this error belongs to.
    pub fn class(&self) -> ErrorClass {
        match self {
            MatchError::NoCandidateMatched { .. } => ErrorClass::Exhaustiveness,
            MatchError::AmbiguousSentinel { .. }
            | MatchError::UnboundIdentifier { .. }
            | MatchError::DoubleForward
            | MatchError::AlreadyExtracted
            | MatchError::NotMatched
            | MatchError::BindMismatch { .. }
            | MatchError::ArityMismatch { .. } => ErrorClass::Programmer,
        }
    }

    /// Whether this error indicates a malformed pattern/handler pairing.
    #[inline]
    pub fn is_programmer_error(&self) -> bool {
        self.class() == ErrorClass::Programmer
    }

    /// Build the exhaustiveness error for a subject nothing matched.
    pub fn no_candidate<V: std::fmt::Debug>(subject: Option<&V>) -> Self {
        MatchError::NoCandidateMatched {
            type_name: std::any::type_name::<V>(),
            subject: subject.map_or_else(|| "<moved subject>".to_string(), |v| format!("{v:?}")),
        }
    }
}

#[cfg(test)]
mod tests;
