use std::cell::Cell;

use pretty_assertions::assert_eq;
use sieve_core::Ownership;
use sieve_eval::Node;
use sieve_patterns::{bind, eq, tuple, wildcard, Value};

use super::*;

type Args<'a, const N: usize> = [Forwarded<'a, Value>; N];

fn arm<'h, R>(arm: Result<Arm<'h, Value, R>, MatchError>) -> Arm<'h, Value, R> {
    match arm {
        Ok(arm) => arm,
        Err(err) => panic!("arm construction failed: {err}"),
    }
}

fn zero_or_other<'h>() -> Match<'h, Value, &'static str> {
    Match::new()
        .arm(arm(Arm::new(eq(0_i64), [], |[]: Args<'_, 0>| "zero")))
        .arm(arm(Arm::new(wildcard(), [], |[]: Args<'_, 0>| "other")))
}

// Ordering

#[test]
fn first_accepting_arm_wins() {
    assert_eq!(zero_or_other().eval_ref(&Value::int(0)), Ok("zero"));
    assert_eq!(zero_or_other().eval_ref(&Value::int(5)), Ok("other"));
}

#[test]
fn later_arms_never_run_after_a_match() {
    let runs = Cell::new(0);
    let result = Match::new()
        .arm(arm(Arm::new(wildcard(), [], |[]: Args<'_, 0>| 1)))
        .arm(arm(Arm::new(wildcard(), [], |[]: Args<'_, 0>| {
            runs.set(runs.get() + 1);
            2
        })))
        .eval_ref(&Value::Unit);
    assert_eq!(result, Ok(1));
    assert_eq!(runs.get(), 0);
}

// Fallthrough

#[test]
fn declining_handler_falls_through() {
    let positive_only = Match::new()
        .arm(arm(Arm::with_result(
            bind(0),
            [Node::ident(0)],
            |[n]: Args<'_, 1>| match n.as_int() {
                Some(n) if n > 0 => MatchResult::Matched("positive"),
                _ => MatchResult::NoMatch,
            },
        )))
        .arm(arm(Arm::new(wildcard(), [], |[]: Args<'_, 0>| "not positive")));
    assert_eq!(positive_only.eval_ref(&Value::int(-1)), Ok("not positive"));
}

#[test]
fn exhausted_arms_report_the_subject() {
    let only_zero = Match::new().arm(arm(Arm::new(eq(0_i64), [], |[]: Args<'_, 0>| ())));
    let err = only_zero.eval_ref(&Value::int(3)).err();
    assert_eq!(
        err,
        Some(MatchError::NoCandidateMatched {
            type_name: std::any::type_name::<Value>(),
            subject: "Int(3)".to_string(),
        })
    );
}

#[test]
fn empty_match_fails() {
    let empty = Match::<Value, ()>::new();
    assert!(empty.is_empty());
    let err = empty.eval_ref(&Value::Unit).err();
    assert!(matches!(err, Some(MatchError::NoCandidateMatched { .. })));
}

#[test]
fn declining_result_from_new_falls_through() {
    let result: Result<&str, MatchError> = Match::new()
        .arm(arm(Arm::new(eq(0_i64), [], |[]: Args<'_, 0>| {
            MatchResult::<&str>::NoMatch
        })))
        .arm(arm(Arm::new(wildcard(), [], |[]: Args<'_, 0>| {
            MatchResult::Matched("other")
        })))
        .eval_ref(&Value::int(0));
    assert_eq!(result, Ok("other"));
}

// Ownership of captures

#[test]
fn ownership_follows_the_subject() {
    fn captured_ownership<'h>() -> Match<'h, Value, Ownership> {
        Match::new().arm(arm(Arm::new(
            tuple().with(bind(0)).with(wildcard()),
            [Node::ident(0)],
            |[first]: Args<'_, 1>| first.ownership(),
        )))
    }

    let mut subject = Value::tuple(vec![Value::int(1), Value::int(2)]);
    assert_eq!(captured_ownership().eval_ref(&subject), Ok(Ownership::Shared));
    assert_eq!(captured_ownership().eval_copied(&subject), Ok(Ownership::Copied));
    assert_eq!(captured_ownership().eval_mut(&mut subject), Ok(Ownership::Unique));
    assert_eq!(captured_ownership().eval(subject), Ok(Ownership::Owned));
}

#[test]
fn eval_mut_writes_through_captures() {
    let mut subject = Value::tuple(vec![Value::int(1), Value::int(2)]);
    let result = Match::new()
        .arm(arm(Arm::new(
            tuple().with(bind(0)).with(bind(1)),
            [Node::ident(1)],
            |[mut second]: Args<'_, 1>| {
                if let Some(slot) = second.as_mut() {
                    *slot = Value::string("written");
                }
            },
        )))
        .eval_mut(&mut subject);
    assert_eq!(result, Ok(()));
    assert_eq!(
        subject,
        Value::tuple(vec![Value::int(1), Value::string("written")])
    );
}

#[test]
fn eval_copied_leaves_the_subject_untouched() {
    let subject = Value::tuple(vec![Value::int(1), Value::int(2)]);
    let result = Match::new()
        .arm(arm(Arm::new(
            tuple().with(bind(0)).with(bind(1)),
            [Node::ident(1)],
            |[mut second]: Args<'_, 1>| {
                if let Some(slot) = second.as_mut() {
                    *slot = Value::string("written");
                }
                second.into_owned()
            },
        )))
        .eval_copied(&subject);
    assert_eq!(result, Ok(Value::string("written")));
    assert_eq!(subject, Value::tuple(vec![Value::int(1), Value::int(2)]));
}

#[test]
fn eval_copied_clones_for_each_accepting_arm() {
    let subject = Value::int(5);
    let result = Match::new()
        .arm(arm(Arm::with_result(
            bind(0),
            [Node::ident(0)],
            |[_]: Args<'_, 1>| MatchResult::<Value>::NoMatch,
        )))
        .arm(arm(Arm::new(bind(0), [Node::ident(0)], |[v]: Args<'_, 1>| {
            v.into_owned()
        })))
        .eval_copied(&subject);
    assert_eq!(result, Ok(Value::int(5)));
}

#[test]
fn eval_by_value_survives_a_declining_arm() {
    let result = Match::new()
        .arm(arm(Arm::with_result(
            bind(0),
            [Node::ident(0)],
            |[_]: Args<'_, 1>| MatchResult::<Value>::NoMatch,
        )))
        .arm(arm(Arm::new(bind(0), [Node::ident(0)], |[v]: Args<'_, 1>| {
            v.into_owned()
        })))
        .eval(Value::string("kept"));
    assert_eq!(result, Ok(Value::string("kept")));
}

#[test]
fn eval_by_value_reports_moved_subject() {
    let result = Match::new()
        .arm(arm(Arm::with_result(
            bind(0),
            [Node::ident(0)],
            |[_]: Args<'_, 1>| MatchResult::<()>::NoMatch,
        )))
        .eval(Value::int(1));
    assert_eq!(
        result,
        Err(MatchError::NoCandidateMatched {
            type_name: std::any::type_name::<Value>(),
            subject: "<moved subject>".to_string(),
        })
    );
}

#[test]
fn debug_lists_arms() {
    let rendered = format!("{:?}", zero_or_other());
    assert_eq!(
        rendered,
        "Match { arms: [Arm { captures: [], .. }, Arm { captures: [Wildcard], .. }] }"
    );
}
