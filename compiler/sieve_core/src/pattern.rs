//! The matching protocol every pattern kind implements.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{BindingTable, Forwarded, Index, MatchError, MatchResult};

/// A structural predicate with capture sites.
///
/// Matching is split in two so that a rejected pattern has no side effects:
/// `test` inspects the subject by reference, and `bind` runs only after
/// `test` accepted it, moving or borrowing the captured pieces into the table
/// according to the subject's ownership.
pub trait Pattern<V> {
    /// Whether `subject` has the shape this pattern describes.
    fn test(&self, subject: &V) -> bool;

    /// Append this pattern's captures of an accepted `subject` to `table`.
    ///
    /// Returns `MatchError::BindMismatch` if `subject` is one `test` rejects.
    fn bind<'a>(
        &self,
        subject: Forwarded<'a, V>,
        table: &mut BindingTable<'a, V>,
    ) -> Result<(), MatchError>;

    /// Record every capture site, in traversal order.
    fn capture_sites(&self, sites: &mut CaptureSites);

    /// Test and, on success, bind into a fresh table.
    fn destructure<'a>(
        &self,
        subject: Forwarded<'a, V>,
    ) -> Result<MatchResult<BindingTable<'a, V>>, MatchError> {
        if !self.test(&*subject) {
            return Ok(MatchResult::NoMatch);
        }
        let mut table = BindingTable::new();
        self.bind(subject, &mut table)?;
        Ok(MatchResult::Matched(table))
    }
}

impl<V, P: Pattern<V> + ?Sized> Pattern<V> for Box<P> {
    fn test(&self, subject: &V) -> bool {
        (**self).test(subject)
    }

    fn bind<'a>(
        &self,
        subject: Forwarded<'a, V>,
        table: &mut BindingTable<'a, V>,
    ) -> Result<(), MatchError> {
        (**self).bind(subject, table)
    }

    fn capture_sites(&self, sites: &mut CaptureSites) {
        (**self).capture_sites(sites);
    }
}

impl<V, P: Pattern<V> + ?Sized> Pattern<V> for &P {
    fn test(&self, subject: &V) -> bool {
        (**self).test(subject)
    }

    fn bind<'a>(
        &self,
        subject: Forwarded<'a, V>,
        table: &mut BindingTable<'a, V>,
    ) -> Result<(), MatchError> {
        (**self).bind(subject, table)
    }

    fn capture_sites(&self, sites: &mut CaptureSites) {
        (**self).capture_sites(sites);
    }
}

/// The static capture structure of a pattern.
///
/// Built once per pattern, before any subject is seen, and used to reject
/// handler expressions that reference an index the pattern never binds or a
/// sentinel the pattern binds more than once.
#[derive(Clone, Debug, Default)]
pub struct CaptureSites {
    order: SmallVec<[Index; 8]>,
    counts: FxHashMap<Index, usize>,
}

impl CaptureSites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the capture sites of `pattern`.
    pub fn of<V, P: Pattern<V> + ?Sized>(pattern: &P) -> Self {
        let mut sites = CaptureSites::new();
        pattern.capture_sites(&mut sites);
        sites
    }

    pub fn record(&mut self, index: Index) {
        self.order.push(index);
        *self.counts.entry(index).or_insert(0) += 1;
    }

    pub fn count(&self, index: Index) -> usize {
        self.counts.get(&index).copied().unwrap_or(0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sites in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = Index> + '_ {
        self.order.iter().copied()
    }

    /// Distinct positional indices in ascending order.
    pub fn positions(&self) -> Vec<Index> {
        let mut positions: Vec<_> = self
            .counts
            .keys()
            .copied()
            .filter(|index| !index.is_sentinel())
            .collect();
        positions.sort_unstable();
        positions
    }

    /// Check that a handler may refer to `index`.
    pub fn check_reference(&self, index: Index) -> Result<(), MatchError> {
        match self.count(index) {
            0 => Err(MatchError::UnboundIdentifier { index }),
            count if count > 1 && index.is_sentinel() => Err(MatchError::AmbiguousSentinel {
                sentinel: index,
                count,
            }),
            _ => Ok(()),
        }
    }
}
