//! Unit tests for the fluent sequencer.

use std::cell::Cell;

use outcome::chain::{chain, chain2};
use outcome::result::{err, ok};
use outcome::{Result, Sentinel};

static INVALID_INPUT: Sentinel = Sentinel::new("invalid input");
static NOT_FOUND: Sentinel = Sentinel::new("user not found");

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: u32,
    name: String,
}

fn find_user(id: u32) -> Result<User> {
    if id == 0 {
        return err(NOT_FOUND.error());
    }
    ok(User {
        id,
        name: format!("user{id}"),
    })
}

fn validate_name(name: String) -> Result<String> {
    if name.is_empty() {
        err(INVALID_INPUT.error())
    } else {
        ok(name)
    }
}

#[test]
fn map_transforms_value() {
    let res = chain::<String, _>(ok(42)).map(|x: i32| format!("value: {x}"));
    assert_eq!(res, Ok("value: 42".to_owned()));
}

#[test]
fn map_propagates_error_without_calling() {
    let called = Cell::new(false);
    let res = chain::<String, i32>(err(INVALID_INPUT.error())).map(|x| {
        called.set(true);
        x.to_string()
    });
    assert_eq!(res, Err(INVALID_INPUT.error()));
    assert!(!called.get());
}

#[test]
fn and_then_sequences_fallible_step() {
    let res = chain::<String, _>(find_user(7)).and_then(|u| validate_name(u.name));
    assert_eq!(res, Ok("user7".to_owned()));
}

#[test]
fn and_then_returns_step_error() {
    let res = chain::<String, _>(ok(String::new())).and_then(validate_name);
    assert_eq!(res, Err(INVALID_INPUT.error()));
}

#[test]
fn map_error_keeps_chaining() {
    let res = chain::<User, _>(find_user(0))
        .map_error(|e| e.context("profile page"))
        .unwrap();
    let e = res.unwrap_err();
    assert!(e.is(&NOT_FOUND.error()));
    assert_eq!(e.to_string(), "profile page: user not found");
}

#[test]
fn map_error_leaves_success_untouched() {
    let res = chain::<User, _>(find_user(3))
        .map_error(|_| INVALID_INPUT.error())
        .unwrap();
    assert_eq!(res.map(|u| u.id), Ok(3));
}

#[test]
fn or_else_terminals() {
    assert_eq!(chain::<i32, _>(ok(5)).or_else(0), 5);
    assert_eq!(chain::<i32, i32>(err(NOT_FOUND.error())).or_else(0), 0);
    assert_eq!(
        chain::<String, String>(err(NOT_FOUND.error())).or_else_get(|e| format!("guest ({e})")),
        "guest (user not found)"
    );
}

#[test]
fn chain2_runs_two_steps() {
    let res = chain2::<String, String, _>(find_user(9))
        .map(|u| u.name)
        .and_then(validate_name);
    assert_eq!(res, Ok("user9".to_owned()));
}

#[test]
fn chain2_short_circuits_second_step() {
    let called = Cell::new(false);
    let res = chain2::<usize, String, _>(find_user(9))
        .and_then(|_| err(INVALID_INPUT.error()))
        .map(|name| {
            called.set(true);
            name.len()
        });
    assert_eq!(res, Err(INVALID_INPUT.error()));
    assert!(!called.get());
}

#[test]
fn chain2_map_error_keeps_shape() {
    let res = chain2::<String, u32, _>(find_user(0))
        .map_error(|e| e.context("lookup"))
        .map(|u| u.id)
        .map(|id| format!("#{id}"));
    assert_eq!(res.unwrap_err().to_string(), "lookup: user not found");
}
