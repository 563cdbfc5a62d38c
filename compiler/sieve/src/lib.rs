//! Sieve - structural pattern matching with ownership-preserving captures.
//!
//! A [`Match`] is an ordered list of [`Arm`]s. Each arm pairs a [`Pattern`]
//! with a handler described by [`Node`]s. Dispatch tests each pattern against
//! the subject, binds the captures of the first one that accepts it, resolves
//! the handler's arguments and calls the handler. A handler may decline by
//! returning [`MatchResult::NoMatch`], and dispatch moves on to the next arm.
//!
//! Captures keep the ownership of the subject they came from: matching a
//! `&V` forwards shared borrows, matching a `&mut V` forwards unique borrows
//! and matching a `V` forwards owned values. [`Match::eval_copied`] hands
//! each accepting arm its own clone of a borrowed subject.
//!
//! ```
//! use sieve::{eq, wildcard, Arm, Forwarded, Match, MatchError, Value};
//!
//! fn describe(subject: &Value) -> Result<&'static str, MatchError> {
//!     Match::new()
//!         .arm(Arm::new(eq(0_i64), [], |[]: [Forwarded<'_, Value>; 0]| "zero")?)
//!         .arm(Arm::new(wildcard(), [], |[]: [Forwarded<'_, Value>; 0]| "other")?)
//!         .eval_ref(subject)
//! }
//!
//! assert_eq!(describe(&Value::int(0)), Ok("zero"));
//! assert_eq!(describe(&Value::int(5)), Ok("other"));
//! ```

mod dispatch;

use std::sync::Once;

pub use dispatch::Match;
pub use sieve_core::{
    BindingTable, BoundIdentifier, CaptureSites, ErrorClass, Extraction, Forwarded, Forwarder,
    Index, MatchError, MatchResult, Ownership, Pattern,
};
pub use sieve_eval::{
    evaluate, resolve, resolve_all, try_match, Arm, CombineFn, DeferredFn, Identifier, LazyExpr,
    NestedIdentifier, Node,
};
pub use sieve_patterns::{
    arg, bind, eq, tuple, wildcard, Capture, Destructure, Equals, Tuple, Value,
};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, and nothing after the first call.
///
/// ```bash
/// RUST_LOG=sieve=trace cargo test
/// RUST_LOG=sieve_eval=debug cargo test
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
