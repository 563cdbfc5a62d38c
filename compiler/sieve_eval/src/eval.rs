//! Resolution of handler expressions against a binding table.
//!
//! Every node resolves to a `Forwarded` value, or to `NoMatch` when a nested
//! pattern rejects the capture it was given. Resolution moves captures out
//! of the table, so each index can be resolved once per attempt.

use sieve_core::{BindingTable, Forwarded, MatchError, MatchResult};

use crate::node::{LazyExpr, NestedIdentifier, Node};

/// Resolve one node.
///
/// Plain values resolve to themselves, owned. Identifiers forward their
/// capture. Nested identifiers and lazy expressions are evaluated.
pub fn resolve<'a, V>(
    node: Node<'_, V>,
    table: &mut BindingTable<'a, V>,
) -> Result<MatchResult<Forwarded<'a, V>>, MatchError> {
    ensure_sufficient_stack(|| match node {
        Node::Plain(value) => Ok(MatchResult::Matched(Forwarded::Owned(value))),
        Node::Ident(id) => table.forward(id.index()).map(MatchResult::Matched),
        Node::Nested(nested) => resolve_nested(*nested, table),
        Node::Lazy(expr) => evaluate(expr, table),
    })
}

/// Resolve `nodes` left to right into handler arguments.
///
/// Stops at the first node that declines.
pub fn resolve_all<'a, 'h, V>(
    nodes: impl IntoIterator<Item = Node<'h, V>>,
    table: &mut BindingTable<'a, V>,
) -> Result<MatchResult<Vec<Forwarded<'a, V>>>, MatchError> {
    let nodes = nodes.into_iter();
    let mut resolved = Vec::with_capacity(nodes.size_hint().0);
    for node in nodes {
        match resolve(node, table)? {
            MatchResult::Matched(value) => resolved.push(value),
            MatchResult::NoMatch => return Ok(MatchResult::NoMatch),
        }
    }
    Ok(MatchResult::Matched(resolved))
}

/// Run a lazy expression against `table`.
pub fn evaluate<'a, V>(
    expr: LazyExpr<'_, V>,
    table: &mut BindingTable<'a, V>,
) -> Result<MatchResult<Forwarded<'a, V>>, MatchError> {
    match expr {
        LazyExpr::Deferred { compute, .. } => compute(table).map(MatchResult::Matched),
        LazyExpr::Composite { operands, combine } => Ok(resolve_all(operands, table)?
            .map(|values| Forwarded::Owned(combine(values)))),
    }
}

fn resolve_nested<'a, V>(
    nested: NestedIdentifier<'_, V>,
    table: &mut BindingTable<'a, V>,
) -> Result<MatchResult<Forwarded<'a, V>>, MatchError> {
    let (index, pattern, expr) = nested.into_parts();
    let captured = table.forward(index)?;
    let mut child = match pattern.destructure(captured)? {
        MatchResult::Matched(child) => child,
        MatchResult::NoMatch => {
            tracing::debug!(%index, "nested pattern rejected its capture");
            return Ok(MatchResult::NoMatch);
        }
    };
    evaluate(expr, &mut child)
}

/// Equality base case: run `f` if `expected` equals `value`.
///
/// This is the whole protocol in miniature: test without side effects, and
/// only on success produce a `Matched` result.
pub fn try_match<E, V, R>(expected: &E, value: &V, f: impl FnOnce() -> R) -> MatchResult<R>
where
    E: PartialEq<V> + ?Sized,
    V: ?Sized,
{
    if expected.eq(value) {
        MatchResult::Matched(f())
    } else {
        MatchResult::NoMatch
    }
}

/// Grow the stack before recursing into nested expressions.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    const RED_ZONE: usize = 64 * 1024;
    const GROW_BY: usize = 512 * 1024;

    stacker::maybe_grow(RED_ZONE, GROW_BY, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
