//! Fallible container combinators and legacy-pair adapters.
//!
//! The container is [`Result<T>`](crate::Result), the native result with
//! its error slot fixed to [`Error`]. Every combinator here short-circuits
//! on the first failure: once an `Err` enters, no further function runs
//! and that error is what surfaces.

use crate::bubble::{Bubble, Flow};
use crate::func::is_zero;
use crate::{Error, Result};

/// Wrap a success value.
///
/// # Errors
///
/// Never; the signature matches the other constructors.
pub fn ok<T>(value: T) -> Result<T> {
    Ok(value)
}

/// Wrap a failure.
///
/// # Errors
///
/// Always returns `error`.
pub fn err<T>(error: Error) -> Result<T> {
    Err(error)
}

/// Wrap a failure whose cause may be missing.
///
/// # Errors
///
/// Always fails; an absent `error` becomes [`Error::EmptyResult`] so a
/// failure never travels without a cause.
pub fn err_or_empty<T>(error: Option<Error>) -> Result<T> {
    Err(error.unwrap_or(Error::EmptyResult))
}

/// Convert a legacy `(value, error)` pair.
///
/// # Errors
///
/// Returns `error` when it is present; `value` is then discarded.
pub fn wrap<T>(value: T, error: Option<Error>) -> Result<T> {
    match error {
        Some(error) => Err(error),
        None => Ok(value),
    }
}

/// Convert a legacy `(pointer, error)` pair where the pointer may be null.
///
/// # Errors
///
/// Returns `error` when present, or [`Error::NilValue`] when both the
/// value and the error are absent.
pub fn wrap_ptr<T>(value: Option<T>, error: Option<Error>) -> Result<T> {
    match (value, error) {
        (_, Some(error)) => Err(error),
        (Some(value), None) => Ok(value),
        (None, None) => Err(Error::NilValue),
    }
}

/// Lift a zero-argument legacy function into one returning a result.
#[must_use]
pub fn wrap_fn<T>(f: impl FnOnce() -> (T, Option<Error>)) -> impl FnOnce() -> Result<T> {
    move || {
        let (value, error) = f();
        wrap(value, error)
    }
}

/// Lift a one-argument legacy function into one returning a result.
#[must_use]
pub fn wrap_fn1<A, T>(f: impl Fn(A) -> (T, Option<Error>)) -> impl Fn(A) -> Result<T> {
    move |arg| {
        let (value, error) = f(arg);
        wrap(value, error)
    }
}

/// Pointer-style variant of [`wrap_fn`].
#[must_use]
pub fn wrap_ptr_fn<T>(
    f: impl FnOnce() -> (Option<T>, Option<Error>),
) -> impl FnOnce() -> Result<T> {
    move || {
        let (value, error) = f();
        wrap_ptr(value, error)
    }
}

/// Pointer-style variant of [`wrap_fn1`].
#[must_use]
pub fn wrap_ptr_fn1<A, T>(
    f: impl Fn(A) -> (Option<T>, Option<Error>),
) -> impl Fn(A) -> Result<T> {
    move |arg| {
        let (value, error) = f(arg);
        wrap_ptr(value, error)
    }
}

/// Adopt a result whose error comes from another library.
///
/// # Errors
///
/// Returns the converted error when `res` failed.
pub fn lift<T, E: Into<Error>>(res: std::result::Result<T, E>) -> Result<T> {
    res.map_err(Into::into)
}

/// Eliminate a result: exactly one of the two functions runs.
#[must_use]
pub fn if_ok<T, Out>(
    res: Result<T>,
    ok_fn: impl FnOnce(T) -> Out,
    err_fn: impl FnOnce(Error) -> Out,
) -> Out {
    match res {
        Ok(value) => ok_fn(value),
        Err(error) => err_fn(error),
    }
}

/// Transform the success value.
///
/// # Errors
///
/// Propagates the original error without calling `f`.
pub fn map<T, U>(res: Result<T>, f: impl FnOnce(T) -> U) -> Result<U> {
    if_ok(res, |value| Ok(f(value)), Err)
}

/// Sequence a result-returning step without nesting.
///
/// # Errors
///
/// Propagates the original error without calling `f`, or the error `f`
/// returns.
pub fn flat_map<T, U>(res: Result<T>, f: impl FnOnce(T) -> Result<U>) -> Result<U> {
    if_ok(res, f, Err)
}

/// Same as [`flat_map`]; the preferred name for business steps.
///
/// # Errors
///
/// See [`flat_map`].
pub fn and_then<T, U>(res: Result<T>, f: impl FnOnce(T) -> Result<U>) -> Result<U> {
    flat_map(res, f)
}

/// Transform only the error arm.
///
/// # Errors
///
/// Returns `f(error)` when `res` failed.
pub fn map_error<T>(res: Result<T>, f: impl FnOnce(Error) -> Error) -> Result<T> {
    if_ok(res, Ok, |error| Err(f(error)))
}

/// Combine two independently computed results.
///
/// # Errors
///
/// Returns the first `Err` in argument order; `f` is not called.
pub fn map2<T, U, V>(r: Result<T>, s: Result<U>, f: impl FnOnce(T, U) -> V) -> Result<V> {
    let t = r?;
    let u = s?;
    Ok(f(t, u))
}

/// Combine three independently computed results.
///
/// # Errors
///
/// Returns the first `Err` in argument order; `f` is not called.
pub fn map3<T, U, V, W>(
    r: Result<T>,
    s: Result<U>,
    t: Result<V>,
    f: impl FnOnce(T, U, V) -> W,
) -> Result<W> {
    let a = r?;
    let b = s?;
    let c = t?;
    Ok(f(a, b, c))
}

/// Normalize a legacy pair, treating the zero value as a failure.
///
/// # Errors
///
/// See [`ensure_by`].
pub fn ensure<T: Default + PartialEq>(value: T, error: Option<Error>, msg: &str) -> Result<T> {
    ensure_by(value, error, msg, is_zero)
}

/// Normalize a legacy pair with a caller-supplied emptiness test.
///
/// # Errors
///
/// - `error` when present, wrapped with `msg` as context if `msg` is
///   non-empty.
/// - [`Error::Empty`] carrying `msg` when `is_empty(&value)` holds, or
///   [`Error::EmptyResult`] if `msg` is empty.
pub fn ensure_by<T>(
    value: T,
    error: Option<Error>,
    msg: &str,
    is_empty: impl FnOnce(&T) -> bool,
) -> Result<T> {
    if let Some(error) = error {
        return Err(if msg.is_empty() {
            error
        } else {
            error.context(msg)
        });
    }
    if is_empty(&value) {
        return Err(if msg.is_empty() {
            Error::EmptyResult
        } else {
            Error::Empty(msg.to_owned())
        });
    }
    Ok(value)
}

/// Combinators the native result lacks.
pub trait ResultExt<T> {
    /// The success value, discarding any error detail.
    fn value(self) -> Option<T>;

    /// The error, if any.
    fn error(&self) -> Option<&Error>;

    /// Write a success value into `out` and return `None`; on failure
    /// leave `out` untouched and return the error.
    fn ok_into(self, out: &mut T) -> Option<Error>;

    /// Method form of [`if_ok`].
    fn fold<Out>(self, ok_fn: impl FnOnce(T) -> Out, err_fn: impl FnOnce(Error) -> Out) -> Out;

    /// Pass a success value through, or raise the recovery signal.
    ///
    /// Only usable inside a body whose return type is a [`Flow`], which
    /// ties every raised signal to a recovery point on the same stack.
    ///
    /// # Errors
    ///
    /// Returns a [`Bubble`] carrying the error when `self` failed.
    fn bubble_up(self) -> Flow<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn value(self) -> Option<T> {
        self.ok()
    }

    fn error(&self) -> Option<&Error> {
        self.as_ref().err()
    }

    fn ok_into(self, out: &mut T) -> Option<Error> {
        match self {
            Ok(value) => {
                *out = value;
                None
            }
            Err(error) => Some(error),
        }
    }

    fn fold<Out>(self, ok_fn: impl FnOnce(T) -> Out, err_fn: impl FnOnce(Error) -> Out) -> Out {
        if_ok(self, ok_fn, err_fn)
    }

    fn bubble_up(self) -> Flow<T> {
        self.map_err(Bubble::raise)
    }
}
