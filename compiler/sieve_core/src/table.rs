//! Binding tables: the captures one successful pattern produced.

use smallvec::SmallVec;

use crate::{Forwarded, Forwarder, Index, MatchError};

/// One capture: the site's index and the forwarder holding its value.
#[derive(Debug)]
pub struct BoundIdentifier<'a, T> {
    index: Index,
    forwarder: Forwarder<'a, T>,
}

impl<'a, T> BoundIdentifier<'a, T> {
    pub fn new(index: Index, forwarder: Forwarder<'a, T>) -> Self {
        BoundIdentifier { index, forwarder }
    }

    #[inline]
    pub fn index(&self) -> Index {
        self.index
    }

    #[inline]
    pub fn forwarder(&self) -> &Forwarder<'a, T> {
        &self.forwarder
    }
}

/// Ordered captures of one match attempt, in pattern-traversal order.
///
/// A table lives for exactly one attempt. Lookups by sentinel index fail
/// with `AmbiguousSentinel` when more than one entry carries it; lookups of
/// an index nothing captured fail with `UnboundIdentifier`. A repeated
/// positional index resolves to its first entry that has not been forwarded.
#[derive(Debug)]
pub struct BindingTable<'a, T> {
    entries: SmallVec<[BoundIdentifier<'a, T>; 4]>,
}

impl<'a, T> BindingTable<'a, T> {
    pub fn new() -> Self {
        BindingTable {
            entries: SmallVec::new(),
        }
    }

    /// Append one capture.
    pub fn push(&mut self, index: impl Into<Index>, forwarder: impl Into<Forwarder<'a, T>>) {
        let index = index.into();
        let forwarder = forwarder.into();
        tracing::trace!(%index, ownership = ?forwarder.ownership(), "capture");
        self.entries.push(BoundIdentifier::new(index, forwarder));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoundIdentifier<'a, T>> {
        self.entries.iter()
    }

    /// Number of entries carrying `index`.
    pub fn count(&self, index: Index) -> usize {
        self.entries.iter().filter(|e| e.index == index).count()
    }

    fn position(&self, index: Index) -> Result<usize, MatchError> {
        if index.is_sentinel() {
            let count = self.count(index);
            if count > 1 {
                return Err(MatchError::AmbiguousSentinel {
                    sentinel: index,
                    count,
                });
            }
        }
        let mut fallback = None;
        for (pos, entry) in self.entries.iter().enumerate() {
            if entry.index != index {
                continue;
            }
            if !entry.forwarder.is_spent() {
                return Ok(pos);
            }
            if fallback.is_none() {
                fallback = Some(pos);
            }
        }
        fallback.ok_or(MatchError::UnboundIdentifier { index })
    }

    /// The forwarder bound to `index`.
    pub fn lookup(&mut self, index: Index) -> Result<&mut Forwarder<'a, T>, MatchError> {
        let pos = self.position(index)?;
        Ok(&mut self.entries[pos].forwarder)
    }

    /// Look up `index` and forward its value.
    pub fn forward(&mut self, index: Index) -> Result<Forwarded<'a, T>, MatchError> {
        self.lookup(index)?.forward()
    }

    /// Borrow the value bound to `index` without forwarding it.
    pub fn peek(&self, index: Index) -> Result<&T, MatchError> {
        let pos = self.position(index)?;
        self.entries[pos].forwarder.peek()
    }
}

impl<T> Default for BindingTable<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}
