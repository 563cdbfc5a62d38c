//! The dispatch loop: try arms in order until one produces a value.

use std::fmt;

use sieve_core::{Forwarded, MatchError, MatchResult};
use sieve_eval::Arm;

/// An ordered list of arms over subjects of type `V`.
///
/// The first arm whose pattern accepts the subject and whose handler returns
/// `Matched` wins. A handler returning `NoMatch` hands the subject on to the
/// next arm. When no arm produces a value the match fails with
/// [`MatchError::NoCandidateMatched`].
pub struct Match<'h, V, R> {
    arms: Vec<Arm<'h, V, R>>,
}

impl<'h, V: 'h, R> Match<'h, V, R> {
    pub fn new() -> Self {
        Match { arms: Vec::new() }
    }

    #[must_use]
    pub fn arm(mut self, arm: Arm<'h, V, R>) -> Self {
        self.arms.push(arm);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Match a borrowed subject. Captures are forwarded as shared borrows.
    #[tracing::instrument(level = "trace", skip_all, fields(arms = self.arms.len()))]
    pub fn eval_ref(self, subject: &V) -> Result<R, MatchError>
    where
        V: fmt::Debug,
    {
        for (position, arm) in self.arms.into_iter().enumerate() {
            if !arm.test(subject) {
                tracing::trace!(arm = position, "pattern rejected subject");
                continue;
            }
            if let Some(value) = accept(position, arm.run(Forwarded::Shared(subject))?) {
                return Ok(value);
            }
        }
        Err(MatchError::no_candidate(Some(subject)))
    }

    /// Match a mutably borrowed subject. Captures are forwarded as unique
    /// borrows, so handlers may write through them.
    #[tracing::instrument(level = "trace", skip_all, fields(arms = self.arms.len()))]
    pub fn eval_mut(self, subject: &mut V) -> Result<R, MatchError>
    where
        V: fmt::Debug,
    {
        for (position, arm) in self.arms.into_iter().enumerate() {
            if !arm.test(subject) {
                tracing::trace!(arm = position, "pattern rejected subject");
                continue;
            }
            if let Some(value) = accept(position, arm.run(Forwarded::Unique(&mut *subject))?) {
                return Ok(value);
            }
        }
        Err(MatchError::no_candidate(Some(&*subject)))
    }

    /// Match a borrowed subject whose captures are forwarded as copies.
    ///
    /// Every accepting arm receives its own clone, so handlers are free to
    /// mutate or keep their captures and `subject` is never modified.
    #[tracing::instrument(level = "trace", skip_all, fields(arms = self.arms.len()))]
    pub fn eval_copied(self, subject: &V) -> Result<R, MatchError>
    where
        V: Clone + fmt::Debug,
    {
        for (position, arm) in self.arms.into_iter().enumerate() {
            if !arm.test(subject) {
                tracing::trace!(arm = position, "pattern rejected subject");
                continue;
            }
            if let Some(value) = accept(position, arm.run(Forwarded::Copied(subject.clone()))?) {
                return Ok(value);
            }
        }
        Err(MatchError::no_candidate(Some(subject)))
    }

    /// Match an owned subject. Captures are forwarded as owned values.
    ///
    /// An accepting arm other than the last receives a clone, so the subject
    /// is still available if its handler declines. The last arm receives the
    /// subject itself.
    #[tracing::instrument(level = "trace", skip_all, fields(arms = self.arms.len()))]
    pub fn eval(self, subject: V) -> Result<R, MatchError>
    where
        V: Clone + fmt::Debug,
    {
        let last = self.arms.len().saturating_sub(1);
        let mut subject = Some(subject);
        for (position, arm) in self.arms.into_iter().enumerate() {
            match subject.as_ref() {
                Some(current) if arm.test(current) => {}
                Some(_) => {
                    tracing::trace!(arm = position, "pattern rejected subject");
                    continue;
                }
                None => break,
            }
            let owned = if position == last {
                subject.take()
            } else {
                subject.clone()
            };
            let Some(owned) = owned else { break };
            if let Some(value) = accept(position, arm.run(Forwarded::Owned(owned))?) {
                return Ok(value);
            }
        }
        Err(MatchError::no_candidate(subject.as_ref()))
    }
}

fn accept<R>(position: usize, result: MatchResult<R>) -> Option<R> {
    match result {
        MatchResult::Matched(value) => {
            tracing::debug!(arm = position, "arm matched");
            Some(value)
        }
        MatchResult::NoMatch => {
            tracing::debug!(arm = position, "handler declined, falling through");
            None
        }
    }
}

impl<'h, V: 'h, R> Default for Match<'h, V, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, R> fmt::Debug for Match<'_, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match").field("arms", &self.arms).finish()
    }
}

#[cfg(test)]
mod tests;
