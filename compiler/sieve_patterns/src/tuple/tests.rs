use pretty_assertions::assert_eq;
use sieve_core::{Index, MatchResult, Ownership};

use super::*;
use crate::{arg, bind, eq, wildcard, Value};

fn triple() -> Value {
    Value::tuple(vec![Value::int(1), Value::string("two"), Value::Bool(true)])
}

fn three_bindings<'p>() -> Tuple<'p, Value> {
    tuple().with(bind(0)).with(bind(1)).with(bind(2))
}

// test

#[test]
fn arity_must_match() {
    let pattern = tuple().with(bind(0)).with(bind(1));
    assert!(!pattern.test(&triple()));
    assert!(three_bindings().test(&triple()));
}

#[test]
fn non_tuple_subject_is_rejected() {
    assert!(!three_bindings().test(&Value::int(1)));
}

#[test]
fn element_patterns_are_tested() {
    let pattern = tuple().with(eq(1_i64)).with(wildcard()).with(eq(false));
    assert!(!pattern.test(&triple()));
    let pattern = tuple().with(eq(1_i64)).with(wildcard()).with(eq(true));
    assert!(pattern.test(&triple()));
}

#[test]
fn empty_tuple_matches_empty_subject() {
    let pattern: Tuple<'_, Value> = tuple();
    assert!(pattern.is_empty());
    assert!(pattern.test(&Value::tuple(vec![])));
}

// bind

#[test]
fn shared_subject_binds_borrows_in_order() {
    let subject = triple();
    let table = match three_bindings().destructure(Forwarded::Shared(&subject)) {
        Ok(MatchResult::Matched(table)) => table,
        other => panic!("expected a match, got {other:?}"),
    };
    let seen: Vec<_> = table
        .iter()
        .map(|e| (e.index(), e.forwarder().ownership()))
        .collect();
    assert_eq!(
        seen,
        vec![
            (Index::Position(0), Ownership::Shared),
            (Index::Position(1), Ownership::Shared),
            (Index::Position(2), Ownership::Shared),
        ]
    );
    assert_eq!(table.peek(Index::Position(1)), Ok(&Value::string("two")));
}

#[test]
fn owned_subject_moves_elements() {
    let table = match three_bindings().destructure(Forwarded::Owned(triple())) {
        Ok(MatchResult::Matched(table)) => table,
        other => panic!("expected a match, got {other:?}"),
    };
    assert!(table
        .iter()
        .all(|e| e.forwarder().ownership() == Ownership::Owned));
}

#[test]
fn unique_subject_allows_mutation() {
    let mut subject = triple();
    {
        let mut table = match three_bindings().destructure(Forwarded::Unique(&mut subject)) {
            Ok(MatchResult::Matched(table)) => table,
            other => panic!("expected a match, got {other:?}"),
        };
        if let Ok(mut first) = table.forward(Index::Position(0)) {
            if let Some(v) = first.as_mut() {
                *v = Value::int(100);
            }
        }
    }
    assert_eq!(
        subject,
        Value::tuple(vec![Value::int(100), Value::string("two"), Value::Bool(true)])
    );
}

#[test]
fn nested_tuple_captures_left_to_right() {
    let subject = Value::tuple(vec![
        Value::tuple(vec![Value::int(1), Value::int(2)]),
        Value::int(3),
    ]);
    let pattern = tuple()
        .with(tuple().with(bind(0)).with(wildcard()))
        .with(arg());
    let sites = CaptureSites::of::<Value, _>(&pattern);
    assert_eq!(
        sites.iter().collect::<Vec<_>>(),
        vec![Index::Position(0), Index::Wildcard, Index::Arg]
    );
    let table = match pattern.destructure(Forwarded::Shared(&subject)) {
        Ok(MatchResult::Matched(table)) => table,
        other => panic!("expected a match, got {other:?}"),
    };
    assert_eq!(table.peek(Index::Wildcard), Ok(&Value::int(2)));
    assert_eq!(table.peek(Index::Arg), Ok(&Value::int(3)));
}

#[test]
fn bind_without_test_reports_mismatch() {
    let mut table = BindingTable::new();
    let err = three_bindings().bind(Forwarded::Owned(Value::int(1)), &mut table);
    assert_eq!(err, Err(MatchError::BindMismatch { pattern: "tuple" }));
    assert!(table.is_empty());
}
