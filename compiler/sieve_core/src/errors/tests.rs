use pretty_assertions::assert_eq;

use super::*;

// Classification

#[test]
fn construction_errors_are_programmer_class() {
    let ambiguous = MatchError::AmbiguousSentinel {
        sentinel: Index::Wildcard,
        count: 2,
    };
    let unbound = MatchError::UnboundIdentifier {
        index: Index::Position(3),
    };
    assert_eq!(ambiguous.class(), ErrorClass::Programmer);
    assert_eq!(unbound.class(), ErrorClass::Programmer);
    assert!(MatchError::DoubleForward.is_programmer_error());
    assert!(MatchError::AlreadyExtracted.is_programmer_error());
}

#[test]
fn no_candidate_is_exhaustiveness_class() {
    let err = MatchError::no_candidate(Some(&5_i64));
    assert_eq!(err.class(), ErrorClass::Exhaustiveness);
    assert!(!err.is_programmer_error());
}

// Messages

#[test]
fn ambiguous_wildcard_message() {
    let err = MatchError::AmbiguousSentinel {
        sentinel: Index::Wildcard,
        count: 3,
    };
    assert_eq!(
        err.to_string(),
        "reference to the `_` capture is ambiguous: the pattern contains 3 of them"
    );
}

#[test]
fn unbound_identifier_message() {
    let err = MatchError::UnboundIdentifier {
        index: Index::Position(1),
    };
    assert_eq!(err.to_string(), "identifier #1 is not bound by the pattern");
}

#[test]
fn no_candidate_describes_subject() {
    let err = MatchError::no_candidate(Some(&42_i64));
    assert_eq!(
        err,
        MatchError::NoCandidateMatched {
            type_name: "i64",
            subject: "42".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "no candidate pattern matched 42 (of type `i64`)"
    );
}

#[test]
fn no_candidate_without_subject() {
    let err = MatchError::no_candidate::<String>(None);
    assert!(err.to_string().starts_with("no candidate pattern matched <moved subject>"));
}
