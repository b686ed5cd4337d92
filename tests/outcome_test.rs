#![allow(missing_docs)]

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use kinded::panic::catch_unwrap;
use kinded::{KindedError, Optional, Outcome, OutcomeKind};

#[derive(Debug, Clone, PartialEq)]
struct DiskFull {
    free: u64,
}

impl fmt::Display for DiskFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk full ({} bytes free)", self.free)
    }
}

impl Error for DiskFull {}

type Out = Outcome<i32, String>;

fn ok(v: i32) -> Out {
    Outcome::ok(v)
}

fn err(e: &str) -> Out {
    Outcome::err(e.to_string())
}

// --- CONSTRUCTION ---

#[test]
fn test_kind_and_predicates() {
    assert_eq!(ok(1).kind(), OutcomeKind::Ok);
    assert_eq!(err("e").kind(), OutcomeKind::Err);
    assert!(ok(1).is_ok() && !ok(1).is_err());
    assert!(err("e").is_err() && !err("e").is_ok());
    assert!(ok(2).is_ok_and(|v| v == 2));
    assert!(err("boom").is_err_and(|e| e.starts_with('b')));
}

#[test]
fn test_try_constructors_reject_null() {
    assert_eq!(Out::try_ok(Some(3)).unwrap(), ok(3));
    assert!(Out::try_err(Some("e".into())).unwrap().is_err());

    match Out::try_ok(None) {
        Err(KindedError::Argument(msg)) => assert_eq!(msg, "cannot create Ok with null value"),
        other => panic!("expected argument error, got {other:?}"),
    }
    match Out::try_err(None) {
        Err(KindedError::Argument(msg)) => assert_eq!(msg, "cannot create Err with null value"),
        other => panic!("expected argument error, got {other:?}"),
    }
}

// --- EQUALITY ---

/// Failures compare equal whatever their payload; successes need equal payloads.
#[test]
fn test_equality_boundary() {
    assert_eq!(err("a"), err("b"));
    assert_eq!(ok(1), ok(1));
    assert_ne!(ok(1), ok(2));
    assert_ne!(ok(1), err("1"));
}

#[test]
fn test_hash_is_consistent_with_equality() {
    let mut set = HashSet::new();
    set.insert(err("a"));
    set.insert(err("b"));
    set.insert(ok(1));
    set.insert(ok(1));
    set.insert(ok(2));
    assert_eq!(set.len(), 3);
}

/// The error type needs no `PartialEq` at all.
#[test]
fn test_equality_ignores_error_type_capabilities() {
    struct Opaque;
    let a: Outcome<u8, Opaque> = Outcome::err(Opaque);
    let b: Outcome<u8, Opaque> = Outcome::err(Opaque);
    assert!(a == b);
}

// --- PANICS ---

#[test]
fn test_unwrap_on_err_includes_payload() {
    let e = catch_unwrap(|| err("bad input").unwrap()).unwrap_err();
    assert_eq!(e.message(), r#"called unwrap on an err outcome: "bad input""#);
}

#[test]
fn test_unwrap_err_on_ok_includes_payload() {
    let e = catch_unwrap(|| ok(42).unwrap_err()).unwrap_err();
    assert_eq!(e.message(), "called unwrap_err on an ok outcome: 42");
    assert_eq!(err("x").unwrap_err(), "x");
}

#[test]
fn test_expect_formats_message_and_payload() {
    let e = catch_unwrap(|| err("timeout").expect("fetch failed")).unwrap_err();
    assert_eq!(e.message(), r#"fetch failed: "timeout""#);

    let e = catch_unwrap(|| ok(7).expect_err("should have failed")).unwrap_err();
    assert_eq!(e.message(), "should have failed: 7");

    assert_eq!(ok(7).expect("unused"), 7);
    assert_eq!(err("z").expect_err("unused"), "z");
}

#[test]
fn test_expect_with_source_wraps_error_payload() {
    let out: Outcome<(), DiskFull> = Outcome::err(DiskFull { free: 12 });
    let e = catch_unwrap(|| out.expect_with_source("write failed")).unwrap_err();

    assert_eq!(e.message(), "write failed");
    let cause = e.cause().expect("cause should be attached");
    assert_eq!(cause.to_string(), "disk full (12 bytes free)");
    assert!(e.source().is_some());
}

/// Panics that are not unwrap errors pass through `catch_unwrap` untouched.
#[test]
fn test_foreign_panics_are_resumed() {
    let result = std::panic::catch_unwind(|| {
        let _ = catch_unwrap(|| -> i32 { panic!("not ours") });
    });
    let payload = result.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"not ours"));
}

// --- COMBINATORS ---

#[test]
fn test_and_truth_table() {
    let other: Outcome<&str, String> = Outcome::ok("x");
    assert_eq!(ok(1).and(other.clone()), other);
    assert!(err("e").and(other).is_err_and(|e| e == "e"));
    assert!(ok(1).and(Outcome::<&str, String>::err("late".into())).is_err_and(|e| e == "late"));
}

#[test]
fn test_and_returns_right_operand_exactly() {
    assert_eq!(ok(1).and(ok(2)), ok(2));
}

#[test]
fn test_or_truth_table() {
    assert_eq!(ok(1).or(ok(2)), ok(1));
    assert_eq!(ok(1).or(err("r")), ok(1));
    assert_eq!(err("l").or(ok(2)), ok(2));
    assert!(err("l").or(err("r")).is_err_and(|e| e == "r"));
}

#[test]
fn test_lazy_chaining() {
    let parse = |s: &str| -> Outcome<i32, String> {
        s.parse::<i32>().map_err(|e| e.to_string()).into()
    };

    let doubled = Outcome::<&str, String>::ok("21").and_then(parse).map(|v| v * 2);
    assert_eq!(doubled, ok(42));

    let mut called = false;
    let failed = Outcome::<&str, String>::err("early".into()).and_then(|s| {
        called = true;
        parse(s)
    });
    assert!(!called);
    assert!(failed.is_err_and(|e| e == "early"));

    let recovered: Outcome<i32, ()> = err("nan").or_else(|e| Outcome::ok(e.len() as i32));
    assert!(recovered.is_ok_and(|v| v == 3));
}

#[test]
fn test_map_family() {
    assert_eq!(ok(2).map(|v| v + 1), ok(3));
    assert!(err("e").map(|v| v + 1).is_err_and(|e| e == "e"));
    assert_eq!(ok(2).map_err(|e| e.len()), Outcome::ok(2));
    assert!(err("four").map_err(|e| e.len()).is_err_and(|n| n == 4));
    assert_eq!(ok(2).map_or(0, |v| v * 10), 20);
    assert_eq!(err("e").map_or(0, |v| v * 10), 0);
    assert_eq!(err("abc").map_or_else(|e| e.len() as i32, |v| v), 3);
    assert_eq!(ok(9).map_or_else(|e| e.len() as i32, |v| v), 9);
}

#[test]
fn test_functor_laws() {
    let f = |v: i32| v + 4;
    let g = |v: i32| v * -2;

    for x in [ok(5), err("e")] {
        assert_eq!(x.clone().map(|v| v), x);
        assert_eq!(x.clone().map(f).map(g), x.map(|v| g(f(v))));
    }
}

#[test]
fn test_unwrap_fallbacks() {
    assert_eq!(err("e").unwrap_or(1), 1);
    assert_eq!(ok(5).unwrap_or(1), 5);
    assert_eq!(err("long").unwrap_or_else(|e| e.len() as i32), 4);
    assert_eq!(err("e").unwrap_or_default(), 0);
}

#[test]
fn test_projections() {
    assert_eq!(ok(1).ok_value(), Optional::some(1));
    assert_eq!(err("e").ok_value(), Optional::none());
    assert_eq!(err("e").err_value(), Optional::some("e".to_string()));
    assert_eq!(ok(1).err_value(), Optional::none());
}

#[test]
fn test_iter_yields_exactly_one_item() {
    let success = ok(3);
    assert_eq!(success.iter().collect::<Vec<_>>(), vec![Optional::some(&3)]);
    // Restartable: every call is a fresh sequence.
    assert_eq!(success.iter().count(), 1);

    let failure = err("e");
    assert_eq!(failure.iter().collect::<Vec<_>>(), vec![Optional::none()]);
}

#[test]
fn test_transpose() {
    let some: Outcome<Optional<i32>, String> = Outcome::ok(Optional::some(5));
    assert_eq!(some.transpose(), Optional::some(Outcome::ok(5)));

    let none: Outcome<Optional<i32>, String> = Outcome::ok(Optional::none());
    assert_eq!(none.transpose(), Optional::none());

    let failed: Outcome<Optional<i32>, String> = Outcome::err("x".into());
    let transposed = failed.transpose();
    assert_eq!(transposed, Optional::some(Outcome::err("x".to_string())));
    assert!(transposed.unwrap().is_err_and(|e| e == "x"));
}

#[test]
fn test_transpose_round_trip() {
    let values: [Outcome<Optional<i32>, String>; 3] = [
        Outcome::ok(Optional::some(1)),
        Outcome::ok(Optional::none()),
        Outcome::err("e".into()),
    ];
    for v in values {
        assert_eq!(v.clone().transpose().transpose(), v);
    }
}

#[test]
fn test_flatten() {
    let nested: Outcome<Out, String> = Outcome::ok(ok(1));
    assert_eq!(nested.flatten(), ok(1));
    let inner_err: Outcome<Out, String> = Outcome::ok(err("inner"));
    assert!(inner_err.flatten().is_err_and(|e| e == "inner"));
}

#[test]
fn test_collect_stops_at_first_failure() {
    let all: Outcome<Vec<i32>, String> = vec![ok(1), ok(2)].into_iter().collect();
    assert_eq!(all, Outcome::ok(vec![1, 2]));

    let mixed: Outcome<Vec<i32>, String> =
        vec![ok(1), err("first"), err("second")].into_iter().collect();
    assert!(mixed.is_err_and(|e| e == "first"));
}

#[test]
fn test_inspect_hooks() {
    let mut seen = Vec::new();
    let _ = ok(1).inspect(|v| seen.push(format!("ok {v}")));
    let _ = err("e").inspect_err(|e| seen.push(format!("err {e}")));
    let _ = ok(2).inspect_err(|e| seen.push(format!("never {e}")));
    assert_eq!(seen, vec!["ok 1", "err e"]);
}

#[test]
fn test_native_conversions_and_display() {
    let native: Result<i32, String> = ok(4).into();
    assert_eq!(native, Ok(4));
    let back: Out = Err::<i32, String>("e".into()).into();
    assert!(back.is_err());
    assert_eq!(ok(4).as_result(), Ok(&4));

    assert_eq!(ok(4).to_string(), "Ok(4)");
    assert_eq!(err("no").to_string(), "Err(no)");
    assert_eq!(format!("{:?}", err("no")), r#"Err("no")"#);
}
