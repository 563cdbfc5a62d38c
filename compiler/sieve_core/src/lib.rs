//! Sieve Core - the data model shared by every part of the matcher.
//!
//! This crate provides:
//! - `MatchResult`, the matched / no-match container handlers produce
//! - `Extraction`, a match result whose value can be taken out once
//! - `Forwarder` and `Forwarded`, single-use holders that remember how a
//!   captured value is owned
//! - `BindingTable`, the ordered set of captures a pattern produces
//! - The `Pattern` protocol and `CaptureSites` validation
//! - `MatchError`, the one error type of the matcher
//!
//! # Architecture
//!
//! A pattern is tested against a subject by reference first. Only when the
//! test passes does it bind, appending one `BoundIdentifier` per capture site
//! to a fresh `BindingTable`. A rejected pattern therefore never creates a
//! forwarder. The evaluator (`sieve_eval`) then drains the table into handler
//! arguments.

mod errors;
mod forward;
mod index;
mod pattern;
mod result;
mod table;

pub use errors::{ErrorClass, MatchError};
pub use forward::{Forwarded, Forwarder, Ownership};
pub use index::Index;
pub use pattern::{CaptureSites, Pattern};
pub use result::{Extraction, MatchResult};
pub use table::{BindingTable, BoundIdentifier};
