//! Ownership-aware, single-use forwarding of captured values.
//!
//! When a pattern binds part of a subject it records *how* the subject was
//! supplied. A subject handed over by value is captured `Owned` and its
//! pieces are moved into the handler. A subject matched through `&T` or
//! `&mut T` is captured as a reference of the same mutability and nothing is
//! moved; the caller keeps the value alive for the duration of the match.
//!
//! A `Forwarder` yields its value at most once. `into_forwarded` makes that a
//! type-level guarantee; `forward` is the in-place variant used by binding
//! tables and reports `MatchError::DoubleForward` on reuse.

use std::fmt;
use std::ops::Deref;

use crate::MatchError;

/// How a captured value is handed to its consumer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// The subject was a temporary; forwarding moves the value.
    Owned,
    /// The subject was borrowed immutably; forwarding yields `&T`.
    Shared,
    /// The subject was borrowed mutably; forwarding yields `&mut T`.
    Unique,
    /// The value was cloned at capture time; forwarding moves the clone.
    Copied,
}

impl Ownership {
    /// Whether forwarding yields a reference into the caller's subject.
    #[inline]
    pub const fn is_borrowed(self) -> bool {
        matches!(self, Ownership::Shared | Ownership::Unique)
    }
}

/// A value that has been forwarded, tagged with its ownership.
///
/// Dereferences to the underlying value regardless of the tag.
pub enum Forwarded<'a, T> {
    Owned(T),
    Shared(&'a T),
    Unique(&'a mut T),
    Copied(T),
}

impl<'a, T> Forwarded<'a, T> {
    pub fn ownership(&self) -> Ownership {
        match self {
            Forwarded::Owned(_) => Ownership::Owned,
            Forwarded::Shared(_) => Ownership::Shared,
            Forwarded::Unique(_) => Ownership::Unique,
            Forwarded::Copied(_) => Ownership::Copied,
        }
    }

    /// Mutable access, unless the value is an immutable borrow.
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Forwarded::Owned(v) | Forwarded::Copied(v) => Some(v),
            Forwarded::Unique(v) => Some(&mut **v),
            Forwarded::Shared(_) => None,
        }
    }

    /// Take the value by move if this forward carries ownership.
    ///
    /// Borrowed forwards are handed back unchanged in `Err`.
    pub fn try_into_owned(self) -> Result<T, Self> {
        match self {
            Forwarded::Owned(v) | Forwarded::Copied(v) => Ok(v),
            borrowed @ (Forwarded::Shared(_) | Forwarded::Unique(_)) => Err(borrowed),
        }
    }

    /// Take the value by move, cloning only when it was borrowed.
    pub fn into_owned(self) -> T
    where
        T: Clone,
    {
        match self {
            Forwarded::Owned(v) | Forwarded::Copied(v) => v,
            Forwarded::Shared(v) => v.clone(),
            Forwarded::Unique(v) => v.clone(),
        }
    }

    /// Apply `f` to an owned value, keeping the ownership tag.
    ///
    /// Borrowed values cannot be mapped without cloning and are returned in `Err`.
    pub fn map_owned(self, f: impl FnOnce(T) -> T) -> Result<Self, Self> {
        match self {
            Forwarded::Owned(v) => Ok(Forwarded::Owned(f(v))),
            Forwarded::Copied(v) => Ok(Forwarded::Copied(f(v))),
            borrowed @ (Forwarded::Shared(_) | Forwarded::Unique(_)) => Err(borrowed),
        }
    }
}

impl<T> Deref for Forwarded<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Forwarded::Owned(v) | Forwarded::Copied(v) => v,
            Forwarded::Shared(v) => v,
            Forwarded::Unique(v) => v,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Forwarded<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(match self.ownership() {
            Ownership::Owned => "Owned",
            Ownership::Shared => "Shared",
            Ownership::Unique => "Unique",
            Ownership::Copied => "Copied",
        })
        .field(&**self)
        .finish()
    }
}

impl<T: PartialEq> PartialEq<T> for Forwarded<'_, T> {
    fn eq(&self, other: &T) -> bool {
        **self == *other
    }
}

enum Slot<'a, T> {
    Ready(Forwarded<'a, T>),
    Spent(Ownership),
}

/// Single-use holder for one captured value.
pub struct Forwarder<'a, T> {
    slot: Slot<'a, T>,
}

impl<'a, T> Forwarder<'a, T> {
    /// Capture a temporary by value.
    pub fn owned(value: T) -> Self {
        Forwarded::Owned(value).into()
    }

    /// Capture through a shared borrow of the subject.
    pub fn shared(value: &'a T) -> Self {
        Forwarded::Shared(value).into()
    }

    /// Capture through a mutable borrow of the subject.
    pub fn unique(value: &'a mut T) -> Self {
        Forwarded::Unique(value).into()
    }

    /// Capture a clone of `value`, leaving the subject untouched.
    pub fn copied(value: &T) -> Self
    where
        T: Clone,
    {
        Forwarded::Copied(value.clone()).into()
    }

    /// Ownership of the captured value. Kept after forwarding.
    pub fn ownership(&self) -> Ownership {
        match &self.slot {
            Slot::Ready(v) => v.ownership(),
            Slot::Spent(ownership) => *ownership,
        }
    }

    pub fn is_spent(&self) -> bool {
        matches!(self.slot, Slot::Spent(_))
    }

    /// Borrow the captured value without forwarding it.
    pub fn peek(&self) -> Result<&T, MatchError> {
        match &self.slot {
            Slot::Ready(v) => Ok(&**v),
            Slot::Spent(_) => Err(MatchError::DoubleForward),
        }
    }

    /// Yield the captured value, leaving this forwarder spent.
    pub fn forward(&mut self) -> Result<Forwarded<'a, T>, MatchError> {
        let spent = Slot::Spent(self.ownership());
        match std::mem::replace(&mut self.slot, spent) {
            Slot::Ready(v) => Ok(v),
            Slot::Spent(_) => Err(MatchError::DoubleForward),
        }
    }

    /// Consume the forwarder and yield its value.
    pub fn into_forwarded(mut self) -> Result<Forwarded<'a, T>, MatchError> {
        self.forward()
    }
}

impl<'a, T> From<Forwarded<'a, T>> for Forwarder<'a, T> {
    fn from(value: Forwarded<'a, T>) -> Self {
        Forwarder {
            slot: Slot::Ready(value),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Forwarder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Ready(v) => f.debug_tuple("Forwarder").field(v).finish(),
            Slot::Spent(ownership) => write!(f, "Forwarder(spent {ownership:?})"),
        }
    }
}
