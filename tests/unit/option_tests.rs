//! Unit tests for optional container combinators.

use std::any::Any;
use std::cell::Cell;

use outcome::func::identity;
use outcome::option::{cast, cast_ref, flat_map, if_some, map, none, some};
use outcome::{Error, OptionExt};

#[test]
fn some_is_present_and_unwraps() {
    for v in [0, 1, -7, i32::MAX] {
        assert!(some(v).is_some());
        assert_eq!(some(v).unwrap(), v);
    }
}

#[test]
fn none_is_absent_and_matches_zero_value() {
    assert!(none::<i32>().is_none());
    assert_eq!(none::<String>(), Option::<String>::default());
}

#[test]
fn unwrap_or_returns_default_only_when_absent() {
    assert_eq!(some(3).unwrap_or(99), 3);
    assert_eq!(none::<i32>().unwrap_or(99), 99);
}

#[test]
fn unwrap_or_else_only_runs_when_absent() {
    let calls = Cell::new(0);
    let expensive = || {
        calls.set(calls.get() + 1);
        99
    };

    assert_eq!(some(3).unwrap_or_else(expensive), 3);
    assert_eq!(calls.get(), 0);
    assert_eq!(none::<i32>().unwrap_or_else(expensive), 99);
    assert_eq!(calls.get(), 1);
}

#[test]
#[should_panic(expected = "config value required")]
fn expect_on_none_panics_with_message() {
    let _ = none::<i32>().expect("config value required");
}

#[test]
fn if_some_runs_exactly_one_branch() {
    let some_calls = Cell::new(0);
    let none_calls = Cell::new(0);

    let out = if_some(
        some(2),
        |v| {
            some_calls.set(some_calls.get() + 1);
            v * 2
        },
        || {
            none_calls.set(none_calls.get() + 1);
            0
        },
    );
    assert_eq!(out, 4);
    assert_eq!((some_calls.get(), none_calls.get()), (1, 0));

    let out = none::<i32>().fold(|v| v * 2, || -1);
    assert_eq!(out, -1);
}

#[test]
fn map_identity_law() {
    for opt in [some(5), none()] {
        assert_eq!(map(opt, identity), opt);
    }
}

#[test]
fn map_skips_function_on_none() {
    let called = Cell::new(false);
    let out = map(none::<i32>(), |v| {
        called.set(true);
        v.to_string()
    });
    assert_eq!(out, None);
    assert!(!called.get());
}

#[test]
fn flat_map_does_not_double_wrap() {
    let half = |v: i32| if v % 2 == 0 { some(v / 2) } else { none() };
    let out: Option<i32> = flat_map(some(8), half);
    assert_eq!(out, Some(4));
    assert_eq!(flat_map(some(3), half), None);
    assert_eq!(flat_map(none(), half), None);
}

#[test]
fn flat_map_is_associative() {
    let f = |v: i32| if v > 0 { some(v - 1) } else { none() };
    let g = |v: i32| if v % 2 == 0 { some(v * 10) } else { none() };

    for opt in [some(3), some(2), some(0), none()] {
        let left = flat_map(flat_map(opt, f), g);
        let right = flat_map(opt, |x| flat_map(f(x), g));
        assert_eq!(left, right);
    }
}

#[test]
fn cast_narrows_matching_type() {
    assert_eq!(cast::<i32>(Box::new("hello")), None);
    assert_eq!(cast::<&str>(Box::new("hello")), Some("hello"));
    assert_eq!(cast::<String>(Box::new(String::from("owned"))), Some("owned".into()));
}

#[test]
fn cast_ref_borrows_without_consuming() {
    let value: Box<dyn Any> = Box::new(42_u8);
    assert_eq!(cast_ref::<u8>(value.as_ref()), Some(&42));
    assert_eq!(cast_ref::<u16>(value.as_ref()), None);
}

#[test]
fn some_into_writes_only_when_present() {
    let mut slot = 0;
    assert!(some(7).some_into(&mut slot));
    assert_eq!(slot, 7);

    assert!(!none::<i32>().some_into(&mut slot));
    assert_eq!(slot, 7);
}

#[test]
fn ok_or_empty_uses_sentinel() {
    assert_eq!(some(1).ok_or_empty(), Ok(1));
    assert_eq!(none::<i32>().ok_or_empty(), Err(Error::EmptyResult));
}
