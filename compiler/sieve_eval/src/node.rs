//! Handler expression nodes.

use std::fmt;

use smallvec::SmallVec;

use sieve_core::{BindingTable, CaptureSites, Forwarded, Index, MatchError, Pattern};

/// Deferred computation over the current binding table.
pub type DeferredFn<'h, V> = Box<
    dyn for<'a> FnOnce(&mut BindingTable<'a, V>) -> Result<Forwarded<'a, V>, MatchError> + 'h,
>;

/// Combines the resolved operands of a composite expression.
pub type CombineFn<'h, V> = Box<dyn for<'a> FnOnce(Vec<Forwarded<'a, V>>) -> V + 'h>;

/// A reference to the capture at `index`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    index: Index,
}

impl Identifier {
    pub const fn new(index: Index) -> Self {
        Identifier { index }
    }

    pub const fn position(position: usize) -> Self {
        Identifier::new(Index::Position(position))
    }

    pub const fn wildcard() -> Self {
        Identifier::new(Index::Wildcard)
    }

    pub const fn arg() -> Self {
        Identifier::new(Index::Arg)
    }

    #[inline]
    pub const fn index(self) -> Index {
        self.index
    }
}

/// A deferred expression over bindings.
///
/// Constructing one never runs it; it runs when resolved against a table.
pub enum LazyExpr<'h, V> {
    /// A closure over the table. `reads` lists the indices it looks up, so
    /// arm construction can validate them before any match.
    Deferred {
        reads: SmallVec<[Index; 2]>,
        compute: DeferredFn<'h, V>,
    },
    /// Operand nodes resolved left to right, then combined.
    Composite {
        operands: Vec<Node<'h, V>>,
        combine: CombineFn<'h, V>,
    },
}

impl<'h, V> LazyExpr<'h, V> {
    /// A closure over the binding table that reads the indices in `reads`.
    ///
    /// Arm and nested-identifier construction check only the declared
    /// `reads`. A lookup the closure makes without declaring it is caught
    /// when the expression runs, as `UnboundIdentifier` or
    /// `AmbiguousSentinel` from the table.
    pub fn deferred<F>(reads: impl IntoIterator<Item = Index>, compute: F) -> Self
    where
        F: for<'a> FnOnce(&mut BindingTable<'a, V>) -> Result<Forwarded<'a, V>, MatchError> + 'h,
    {
        LazyExpr::Deferred {
            reads: reads.into_iter().collect(),
            compute: Box::new(compute),
        }
    }

    pub fn composite<F>(operands: Vec<Node<'h, V>>, combine: F) -> Self
    where
        F: for<'a> FnOnce(Vec<Forwarded<'a, V>>) -> V + 'h,
    {
        LazyExpr::Composite {
            operands,
            combine: Box::new(combine),
        }
    }

    /// Indices this expression reads from the table it is resolved against.
    pub fn references(&self, out: &mut Vec<Index>) {
        match self {
            LazyExpr::Deferred { reads, .. } => out.extend(reads.iter().copied()),
            LazyExpr::Composite { operands, .. } => {
                for operand in operands {
                    operand.references(out);
                }
            }
        }
    }
}

impl<V> fmt::Debug for LazyExpr<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LazyExpr::Deferred { reads, .. } => {
                f.debug_struct("Deferred").field("reads", reads).finish()
            }
            LazyExpr::Composite { operands, .. } => f
                .debug_struct("Composite")
                .field("operands", &operands.len())
                .finish(),
        }
    }
}

/// An identifier whose capture is destructured further before use.
///
/// Resolution forwards the capture at `index`, binds it with `pattern` into
/// a child table and evaluates `expr` against the child. `expr` only sees
/// the child's captures.
pub struct NestedIdentifier<'h, V> {
    index: Index,
    pattern: Box<dyn Pattern<V> + 'h>,
    expr: LazyExpr<'h, V>,
}

impl<'h, V> NestedIdentifier<'h, V> {
    /// Validates `expr` against the captures of `pattern`.
    pub fn new(
        index: Index,
        pattern: impl Pattern<V> + 'h,
        expr: LazyExpr<'h, V>,
    ) -> Result<Self, MatchError> {
        let sites = CaptureSites::of::<V, _>(&pattern);
        let mut reads = Vec::new();
        expr.references(&mut reads);
        for index in reads {
            sites.check_reference(index)?;
        }
        Ok(NestedIdentifier {
            index,
            pattern: Box::new(pattern),
            expr,
        })
    }

    #[inline]
    pub fn index(&self) -> Index {
        self.index
    }

    pub(crate) fn into_parts(self) -> (Index, Box<dyn Pattern<V> + 'h>, LazyExpr<'h, V>) {
        (self.index, self.pattern, self.expr)
    }
}

/// One node of a handler expression tree.
pub enum Node<'h, V> {
    Plain(V),
    Ident(Identifier),
    Nested(Box<NestedIdentifier<'h, V>>),
    Lazy(LazyExpr<'h, V>),
}

impl<'h, V> Node<'h, V> {
    pub fn plain(value: V) -> Self {
        Node::Plain(value)
    }

    pub fn ident(index: impl Into<Index>) -> Self {
        Node::Ident(Identifier::new(index.into()))
    }

    pub fn nested(nested: NestedIdentifier<'h, V>) -> Self {
        Node::Nested(Box::new(nested))
    }

    pub fn lazy(expr: LazyExpr<'h, V>) -> Self {
        Node::Lazy(expr)
    }

    /// Indices of the enclosing table this node reads.
    ///
    /// A nested identifier reads only its own index here; its inner
    /// expression is checked against the nested pattern.
    pub fn references(&self, out: &mut Vec<Index>) {
        match self {
            Node::Plain(_) => {}
            Node::Ident(id) => out.push(id.index()),
            Node::Nested(nested) => out.push(nested.index()),
            Node::Lazy(expr) => expr.references(out),
        }
    }
}

impl<V> From<Identifier> for Node<'_, V> {
    fn from(id: Identifier) -> Self {
        Node::Ident(id)
    }
}

impl<'h, V> From<LazyExpr<'h, V>> for Node<'h, V> {
    fn from(expr: LazyExpr<'h, V>) -> Self {
        Node::Lazy(expr)
    }
}

impl<V: fmt::Debug> fmt::Debug for Node<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Plain(value) => f.debug_tuple("Plain").field(value).finish(),
            Node::Ident(id) => f.debug_tuple("Ident").field(&id.index()).finish(),
            Node::Nested(nested) => f
                .debug_struct("Nested")
                .field("index", &nested.index)
                .field("expr", &nested.expr)
                .finish(),
            Node::Lazy(expr) => f.debug_tuple("Lazy").field(expr).finish(),
        }
    }
}
