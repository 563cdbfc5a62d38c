//! Capture-site indices.

use std::fmt;

/// Identifies a capture site inside one pattern.
///
/// `Position(i)` is the i-th named capture. `Wildcard` and `Arg` are the two
/// anonymous sentinels: a pattern may contain several of them, but a handler
/// may only refer to one when exactly one exists.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Index {
    Position(usize),
    Wildcard,
    Arg,
}

impl Index {
    /// Whether this is one of the anonymous sentinel indices.
    #[inline]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Index::Wildcard | Index::Arg)
    }

    /// The position of a named capture, `None` for sentinels.
    #[inline]
    pub const fn position(self) -> Option<usize> {
        match self {
            Index::Position(i) => Some(i),
            Index::Wildcard | Index::Arg => None,
        }
    }
}

impl From<usize> for Index {
    fn from(position: usize) -> Self {
        Index::Position(position)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::Position(i) => write!(f, "#{i}"),
            Index::Wildcard => f.write_str("`_`"),
            Index::Arg => f.write_str("`arg`"),
        }
    }
}
