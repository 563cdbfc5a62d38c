//! Sieve Patterns - the reference pattern vocabulary.
//!
//! The matcher core only knows the `Pattern` protocol. This crate provides
//! the smallest useful set of patterns implementing it:
//!
//! - `eq(expected)`: equality against an expression
//! - `wildcard()`, `arg()`: anonymous captures of the whole subject
//! - `bind(i)`: positional capture
//! - `tuple()`: element-wise destructuring of `Destructure` values
//!
//! and `Value`, a small dynamic value type for tests and demos.

mod capture;
mod equals;
mod tuple;
mod value;

pub use capture::{arg, bind, wildcard, Capture};
pub use equals::{eq, Equals};
pub use tuple::{tuple, Tuple};
pub use value::{Destructure, Value};
