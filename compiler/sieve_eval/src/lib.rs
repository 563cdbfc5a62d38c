//! Sieve Eval - handler expressions and their evaluation.
//!
//! A handler is described by an expression tree of [`Node`]s. Once a pattern
//! has produced a `BindingTable`, the evaluator resolves every node against
//! it, in order, and hands the resolved values to the handler.
//!
//! # Node kinds
//!
//! - `Plain`: a value supplied by the handler itself
//! - `Ident`: substitute the capture at an index
//! - `Nested`: destructure a capture further and evaluate against that
//! - `Lazy`: a deferred computation that runs only once bindings exist
//!
//! [`Arm`] pairs a pattern with a handler and validates, at construction,
//! that every index the handler refers to is bound exactly once by the
//! pattern (sentinels) or at all (positions).

mod arm;
mod eval;
mod node;

pub use arm::Arm;
pub use eval::{evaluate, resolve, resolve_all, try_match};
pub use node::{CombineFn, DeferredFn, Identifier, LazyExpr, NestedIdentifier, Node};
