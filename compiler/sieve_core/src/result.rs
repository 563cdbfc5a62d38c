//! The outcome of running a handler after a structural match.

use crate::MatchError;

/// Result of one match attempt.
///
/// `NoMatch` is its own state, never an encoding of an empty or falsy value:
/// `Matched(Vec::new())`, `Matched(false)` and `Matched(())` all count as
/// matches. Handlers return `NoMatch` to ask the dispatch loop to try
/// later candidates.
///
/// Any plain value converts into `Matched` through `From`, while a
/// `MatchResult` converts into itself unchanged, so a handler's result is
/// never wrapped twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchResult<T> {
    Matched(T),
    NoMatch,
}

impl<T> MatchResult<T> {
    #[inline]
    pub const fn matched(value: T) -> Self {
        MatchResult::Matched(value)
    }

    #[inline]
    pub const fn no_match() -> Self {
        MatchResult::NoMatch
    }

    #[inline]
    pub const fn is_matched(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    #[inline]
    pub const fn is_no_match(&self) -> bool {
        matches!(self, MatchResult::NoMatch)
    }

    /// Consume the result and return the matched value.
    pub fn extract(self) -> Result<T, MatchError> {
        match self {
            MatchResult::Matched(value) => Ok(value),
            MatchResult::NoMatch => Err(MatchError::NotMatched),
        }
    }

    pub fn as_ref(&self) -> MatchResult<&T> {
        match self {
            MatchResult::Matched(value) => MatchResult::Matched(value),
            MatchResult::NoMatch => MatchResult::NoMatch,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> MatchResult<U> {
        match self {
            MatchResult::Matched(value) => MatchResult::Matched(f(value)),
            MatchResult::NoMatch => MatchResult::NoMatch,
        }
    }

    /// Chain a step that may itself decline. The inner result is not re-wrapped.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> MatchResult<U>) -> MatchResult<U> {
        match self {
            MatchResult::Matched(value) => f(value),
            MatchResult::NoMatch => MatchResult::NoMatch,
        }
    }

    /// Fall through to `f` when this attempt did not match.
    pub fn or_else(self, f: impl FnOnce() -> MatchResult<T>) -> MatchResult<T> {
        match self {
            MatchResult::NoMatch => f(),
            matched @ MatchResult::Matched(_) => matched,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            MatchResult::Matched(value) => Some(value),
            MatchResult::NoMatch => None,
        }
    }
}

impl<T> Default for MatchResult<T> {
    fn default() -> Self {
        MatchResult::NoMatch
    }
}

impl<T> From<T> for MatchResult<T> {
    fn from(value: T) -> Self {
        MatchResult::Matched(value)
    }
}

enum Slot<T> {
    Ready(MatchResult<T>),
    Taken,
}

/// A match result whose value can be taken out in place, at most once.
///
/// After a successful [`Extraction::take`] the result still reports
/// `is_matched()`, and every later `take` fails with
/// `MatchError::AlreadyExtracted`.
pub struct Extraction<T> {
    slot: Slot<T>,
}

impl<T> Extraction<T> {
    pub fn new(result: MatchResult<T>) -> Self {
        Extraction {
            slot: Slot::Ready(result),
        }
    }

    /// Whether the underlying attempt matched, including after the value was taken.
    pub fn is_matched(&self) -> bool {
        match &self.slot {
            Slot::Ready(result) => result.is_matched(),
            Slot::Taken => true,
        }
    }

    pub fn is_extracted(&self) -> bool {
        matches!(self.slot, Slot::Taken)
    }

    /// Take the matched value out, leaving this extraction spent.
    pub fn take(&mut self) -> Result<T, MatchError> {
        match std::mem::replace(&mut self.slot, Slot::Taken) {
            Slot::Ready(MatchResult::Matched(value)) => Ok(value),
            Slot::Ready(MatchResult::NoMatch) => {
                self.slot = Slot::Ready(MatchResult::NoMatch);
                Err(MatchError::NotMatched)
            }
            Slot::Taken => Err(MatchError::AlreadyExtracted),
        }
    }
}

impl<T> From<MatchResult<T>> for Extraction<T> {
    fn from(result: MatchResult<T>) -> Self {
        Extraction::new(result)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Extraction<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.slot {
            Slot::Ready(result) => f.debug_tuple("Extraction").field(result).finish(),
            Slot::Taken => f.write_str("Extraction(taken)"),
        }
    }
}
