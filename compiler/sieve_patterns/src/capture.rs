//! Capturing patterns.

use sieve_core::{BindingTable, CaptureSites, Forwarded, Index, MatchError, Pattern};

/// Matches any subject and captures it under `index`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Capture {
    index: Index,
}

impl Capture {
    pub const fn new(index: Index) -> Self {
        Capture { index }
    }

    pub const fn index(self) -> Index {
        self.index
    }
}

/// Positional capture `#i`.
pub const fn bind(position: usize) -> Capture {
    Capture::new(Index::Position(position))
}

/// The anonymous `_` capture.
pub const fn wildcard() -> Capture {
    Capture::new(Index::Wildcard)
}

/// The anonymous `arg` capture: the whole subject it is applied to.
pub const fn arg() -> Capture {
    Capture::new(Index::Arg)
}

impl<V> Pattern<V> for Capture {
    fn test(&self, _subject: &V) -> bool {
        true
    }

    fn bind<'a>(
        &self,
        subject: Forwarded<'a, V>,
        table: &mut BindingTable<'a, V>,
    ) -> Result<(), MatchError> {
        table.push(self.index, subject);
        Ok(())
    }

    fn capture_sites(&self, sites: &mut CaptureSites) {
        sites.record(self.index);
    }
}
