//! Optional container combinators.
//!
//! The container is the native [`Option`]. Its zero value is `None`
//! (`Option::default()`), so a zero-initialized slot always reads as
//! absent. This module adds the eliminator every other combinator
//! reduces to, a checked downcast from untyped values, and bridges to
//! the fallible container.

use std::any::Any;

use crate::{Error, Result};

/// Wrap a present value.
#[must_use]
pub fn some<T>(value: T) -> Option<T> {
    Some(value)
}

/// The absent value; identical to `Option::default()`.
#[must_use]
pub fn none<T>() -> Option<T> {
    None
}

/// Eliminate an option: exactly one of the two functions runs, chosen
/// by the tag alone.
#[must_use]
pub fn if_some<T, Out>(
    opt: Option<T>,
    some_fn: impl FnOnce(T) -> Out,
    none_fn: impl FnOnce() -> Out,
) -> Out {
    match opt {
        Some(value) => some_fn(value),
        None => none_fn(),
    }
}

/// Apply `f` to a present value and wrap the output in `Some`.
#[must_use]
pub fn map<T, U>(opt: Option<T>, f: impl FnOnce(T) -> U) -> Option<U> {
    if_some(opt, |value| Some(f(value)), none)
}

/// Apply an option-returning `f` to a present value without nesting.
#[must_use]
pub fn flat_map<T, U>(opt: Option<T>, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
    if_some(opt, f, none)
}

/// Narrow an untyped value to `T`; a mismatch yields `None`.
///
/// ```
/// use outcome::option::cast;
///
/// assert_eq!(cast::<i32>(Box::new("hello")), None);
/// assert_eq!(cast::<&str>(Box::new("hello")), Some("hello"));
/// ```
#[must_use]
pub fn cast<T: Any>(value: Box<dyn Any>) -> Option<T> {
    value.downcast::<T>().ok().map(|boxed| *boxed)
}

/// Borrowing variant of [`cast`].
#[must_use]
pub fn cast_ref<T: Any>(value: &dyn Any) -> Option<&T> {
    value.downcast_ref::<T>()
}

/// Combinators the native [`Option`] lacks.
pub trait OptionExt<T> {
    /// Method form of [`if_some`].
    fn fold<Out>(self, some_fn: impl FnOnce(T) -> Out, none_fn: impl FnOnce() -> Out) -> Out;

    /// Write a present value into `out` and return `true`; leave `out`
    /// untouched and return `false` when absent.
    fn some_into(self, out: &mut T) -> bool;

    /// Convert to a result, using [`Error::EmptyResult`] for absence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyResult`] when the option is `None`.
    fn ok_or_empty(self) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn fold<Out>(self, some_fn: impl FnOnce(T) -> Out, none_fn: impl FnOnce() -> Out) -> Out {
        if_some(self, some_fn, none_fn)
    }

    fn some_into(self, out: &mut T) -> bool {
        if_some(
            self,
            |value| {
                *out = value;
                true
            },
            || false,
        )
    }

    fn ok_or_empty(self) -> Result<T> {
        self.ok_or(Error::EmptyResult)
    }
}
