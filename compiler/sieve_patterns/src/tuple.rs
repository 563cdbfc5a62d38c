//! Tuple destructuring.

use sieve_core::{BindingTable, CaptureSites, Forwarded, MatchError, Pattern};

use crate::Destructure;

/// Matches a `Destructure` value with exactly as many elements as there are
/// sub-patterns, each element matching its sub-pattern.
///
/// Captures are produced left to right. Element ownership follows the
/// subject's: an owned subject is split and its elements moved, a borrowed
/// subject yields borrows of its elements.
pub struct Tuple<'p, V> {
    elements: Vec<Box<dyn Pattern<V> + 'p>>,
}

/// An empty tuple pattern; add sub-patterns with [`Tuple::with`].
pub fn tuple<'p, V>() -> Tuple<'p, V> {
    Tuple {
        elements: Vec::new(),
    }
}

impl<'p, V> Tuple<'p, V> {
    #[must_use]
    pub fn with(mut self, element: impl Pattern<V> + 'p) -> Self {
        self.elements.push(Box::new(element));
        self
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn bind_each<'a>(
        &self,
        elements: impl ExactSizeIterator<Item = Forwarded<'a, V>>,
        table: &mut BindingTable<'a, V>,
    ) -> Result<(), MatchError> {
        if elements.len() != self.elements.len() {
            return Err(MatchError::BindMismatch { pattern: "tuple" });
        }
        for (pattern, element) in self.elements.iter().zip(elements) {
            pattern.bind(element, table)?;
        }
        Ok(())
    }
}

impl<V: Destructure> Pattern<V> for Tuple<'_, V> {
    fn test(&self, subject: &V) -> bool {
        subject.elements().is_some_and(|elements| {
            elements.len() == self.elements.len()
                && self
                    .elements
                    .iter()
                    .zip(elements)
                    .all(|(pattern, element)| pattern.test(element))
        })
    }

    fn bind<'a>(
        &self,
        subject: Forwarded<'a, V>,
        table: &mut BindingTable<'a, V>,
    ) -> Result<(), MatchError> {
        let mismatch = MatchError::BindMismatch { pattern: "tuple" };
        match subject {
            Forwarded::Shared(value) => {
                let elements = value.elements().ok_or(mismatch)?;
                self.bind_each(elements.iter().map(Forwarded::Shared), table)
            }
            Forwarded::Unique(value) => {
                let elements = value.elements_mut().ok_or(mismatch)?;
                self.bind_each(elements.iter_mut().map(Forwarded::Unique), table)
            }
            Forwarded::Owned(value) => {
                let elements = value.into_elements().map_err(|_| mismatch)?;
                self.bind_each(elements.into_iter().map(Forwarded::Owned), table)
            }
            Forwarded::Copied(value) => {
                let elements = value.into_elements().map_err(|_| mismatch)?;
                self.bind_each(elements.into_iter().map(Forwarded::Copied), table)
            }
        }
    }

    fn capture_sites(&self, sites: &mut CaptureSites) {
        for pattern in &self.elements {
            pattern.capture_sites(sites);
        }
    }
}

#[cfg(test)]
mod tests;
