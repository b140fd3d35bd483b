//! Unit tests for `Error` identity, wrapping and display.

use std::error::Error as _;

use outcome::{Error, Sentinel};

static CACHE_MISS: Sentinel = Sentinel::new("cache miss");
static TIMEOUT: Sentinel = Sentinel::new("timeout");
static TIMEOUT_TWIN: Sentinel = Sentinel::new("timeout");

#[test]
fn sentinel_is_identical_to_itself() {
    assert!(CACHE_MISS.error().is(&CACHE_MISS.error()));
    assert_eq!(CACHE_MISS.error(), Error::from(&CACHE_MISS));
}

fn shared_cache_miss() -> &'static Sentinel {
    &CACHE_MISS
}

#[test]
fn static_sentinel_keeps_identity_across_references() {
    let first = shared_cache_miss();
    let second = shared_cache_miss();
    assert!(std::ptr::eq(first, second));
    assert!(first.error().context("profile").is(&second.error()));
    assert!(Error::from(first).is(&CACHE_MISS.error()));
}

#[test]
fn sentinels_with_same_name_are_distinct() {
    assert_eq!(TIMEOUT.error().to_string(), TIMEOUT_TWIN.error().to_string());
    assert!(!TIMEOUT.error().is(&TIMEOUT_TWIN.error()));
    assert_ne!(TIMEOUT.error(), TIMEOUT_TWIN.error());
}

#[test]
fn context_keeps_wrapped_error_reachable() {
    let err = CACHE_MISS
        .error()
        .context("loading profile")
        .context("handling request");

    assert!(err.is(&CACHE_MISS.error()));
    assert!(!err.is(&TIMEOUT.error()));
    assert_eq!(err.root(), &CACHE_MISS.error());
    assert_eq!(
        err.to_string(),
        "handling request: loading profile: cache miss"
    );
}

#[test]
fn runtime_messages_compare_by_allocation_not_text() {
    let first = Error::msg("boom");
    let second = Error::msg("boom");

    assert!(first.is(&first.clone()));
    assert!(!first.is(&second));
}

#[test]
fn is_any_matches_one_of_many() {
    let err = TIMEOUT.error().context("remote call");
    assert!(err.is_any(&[CACHE_MISS.error(), TIMEOUT.error()]));
    assert!(!err.is_any(&[CACHE_MISS.error()]));
    assert!(!err.is_any(&[]));
}

#[test]
fn empty_result_sentinel_is_constant() {
    assert_eq!(Error::EmptyResult, Error::EmptyResult);
    assert!(Error::EmptyResult.is(&Error::EmptyResult));
    assert!(Error::EmptyResult.to_string().starts_with("empty result:"));
}

#[test]
fn nil_value_is_distinct_from_empty_result() {
    assert_ne!(Error::NilValue, Error::EmptyResult);
    assert!(Error::NilValue.to_string().starts_with("nil value:"));
}

#[test]
fn foreign_error_keeps_display_and_identity() {
    let io = Error::from(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "missing file",
    ));
    assert_eq!(io.to_string(), "missing file");
    assert!(io.is(&io.clone()));
    assert!(!io.is(&Error::from(std::io::Error::other("missing file"))));
}

#[test]
fn source_walks_context_chain() {
    let err = CACHE_MISS.error().context("outer");
    let source = err.source().expect("context has a source");
    assert_eq!(source.to_string(), "cache miss");
    assert!(CACHE_MISS.error().source().is_none());
}

#[test]
fn error_messages_have_no_trailing_period() {
    for err in [
        Error::EmptyResult,
        Error::NilValue,
        Error::Empty("user".into()),
        CACHE_MISS.error(),
    ] {
        let s = err.to_string();
        assert!(!s.ends_with('.'), "error message must not end with a period: {s}");
    }
}

#[test]
fn error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
    assert_send_sync::<outcome::Result<String>>();
}
