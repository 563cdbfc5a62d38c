//! Arms: a pattern paired with a validated handler.

use std::fmt;

use sieve_core::{BindingTable, CaptureSites, Forwarded, MatchError, MatchResult, Pattern};

use crate::eval::resolve_all;
use crate::node::{Identifier, Node};

type Handler<'h, V, R> = Box<
    dyn for<'a> FnOnce(&mut BindingTable<'a, V>) -> Result<MatchResult<R>, MatchError> + 'h,
>;

/// One candidate of a match: a pattern and the handler to run when it
/// accepts the subject.
///
/// Construction walks the pattern's capture sites once and rejects a handler
/// that refers to an index the pattern never binds, or to a sentinel the
/// pattern binds more than once. Nothing is resolved until [`Arm::run`].
pub struct Arm<'h, V, R> {
    pattern: Box<dyn Pattern<V> + 'h>,
    sites: CaptureSites,
    handler: Handler<'h, V, R>,
}

impl<'h, V: 'h, R> Arm<'h, V, R> {
    /// An arm whose handler returns anything convertible into a `MatchResult`.
    ///
    /// A plain value is wrapped as `Matched`, so a handler returning `()`
    /// produces `Matched(())`. A handler that already returns a
    /// `MatchResult<R>` has it passed through unchanged, never nested. When
    /// the handler returns a `MatchResult` and nothing else fixes `R`, name
    /// it at the call site.
    pub fn new<P, F, H, const N: usize>(
        pattern: P,
        args: [Node<'h, V>; N],
        handler: F,
    ) -> Result<Self, MatchError>
    where
        P: Pattern<V> + 'h,
        F: for<'a> FnOnce([Forwarded<'a, V>; N]) -> H + 'h,
        H: Into<MatchResult<R>>,
    {
        Self::with_result(pattern, args, move |args| handler(args).into())
    }

    /// An arm whose handler returns its own `MatchResult`, passed through
    /// unchanged. Returning `NoMatch` makes the dispatch loop try the next arm.
    pub fn with_result<P, F, const N: usize>(
        pattern: P,
        args: [Node<'h, V>; N],
        handler: F,
    ) -> Result<Self, MatchError>
    where
        P: Pattern<V> + 'h,
        F: for<'a> FnOnce([Forwarded<'a, V>; N]) -> MatchResult<R> + 'h,
    {
        Self::build(pattern, Vec::from(args), move |resolved| {
            let got = resolved.len();
            let args = <[_; N]>::try_from(resolved)
                .map_err(|_| MatchError::ArityMismatch { expected: N, got })?;
            Ok(handler(args))
        })
    }

    /// An arm whose handler receives every positional capture, in index order.
    /// Conversion of the handler's result follows [`Arm::new`].
    pub fn bindings<P, F, H>(pattern: P, handler: F) -> Result<Self, MatchError>
    where
        P: Pattern<V> + 'h,
        F: for<'a> FnOnce(Vec<Forwarded<'a, V>>) -> H + 'h,
        H: Into<MatchResult<R>>,
    {
        let args = CaptureSites::of::<V, _>(&pattern)
            .positions()
            .into_iter()
            .map(|index| Node::from(Identifier::new(index)))
            .collect();
        Self::build(pattern, args, move |resolved| Ok(handler(resolved).into()))
    }

    fn build<P, F>(pattern: P, args: Vec<Node<'h, V>>, invoke: F) -> Result<Self, MatchError>
    where
        P: Pattern<V> + 'h,
        F: for<'a> FnOnce(Vec<Forwarded<'a, V>>) -> Result<MatchResult<R>, MatchError> + 'h,
    {
        let sites = CaptureSites::of::<V, _>(&pattern);
        let mut references = Vec::new();
        for node in &args {
            node.references(&mut references);
        }
        for index in references {
            sites.check_reference(index)?;
        }

        let handler: Handler<'h, V, R> = Box::new(move |table: &mut BindingTable<'_, V>| {
            match resolve_all(args, table)? {
                MatchResult::Matched(resolved) => invoke(resolved),
                MatchResult::NoMatch => Ok(MatchResult::NoMatch),
            }
        });

        Ok(Arm {
            pattern: Box::new(pattern),
            sites,
            handler,
        })
    }

    /// Whether this arm's pattern accepts `subject`. No side effects.
    #[inline]
    pub fn test(&self, subject: &V) -> bool {
        self.pattern.test(subject)
    }

    pub fn capture_sites(&self) -> &CaptureSites {
        &self.sites
    }

    /// Match `subject` and, on success, run the handler over its captures.
    pub fn run(self, subject: Forwarded<'_, V>) -> Result<MatchResult<R>, MatchError> {
        let Arm {
            pattern, handler, ..
        } = self;
        let mut table = match pattern.destructure(subject)? {
            MatchResult::Matched(table) => table,
            MatchResult::NoMatch => return Ok(MatchResult::NoMatch),
        };
        handler(&mut table)
    }
}

impl<V, R> fmt::Debug for Arm<'_, V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arm")
            .field("captures", &self.sites.iter().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
