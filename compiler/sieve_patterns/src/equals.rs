//! Equality (expression) patterns.

use sieve_core::{BindingTable, CaptureSites, Forwarded, MatchError, Pattern};

/// Matches subjects equal to the expected expression. Captures nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Equals<E>(pub E);

pub fn eq<E>(expected: E) -> Equals<E> {
    Equals(expected)
}

impl<V, E: PartialEq<V>> Pattern<V> for Equals<E> {
    fn test(&self, subject: &V) -> bool {
        self.0.eq(subject)
    }

    fn bind<'a>(
        &self,
        subject: Forwarded<'a, V>,
        _table: &mut BindingTable<'a, V>,
    ) -> Result<(), MatchError> {
        if self.0.eq(&*subject) {
            Ok(())
        } else {
            Err(MatchError::BindMismatch { pattern: "equality" })
        }
    }

    fn capture_sites(&self, _sites: &mut CaptureSites) {}
}
