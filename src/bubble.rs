//! Early-return propagation with typed recovery points.
//!
//! A step that fails inside a recovery scope raises a [`Bubble`] with
//! [`bubble_up`](crate::result::ResultExt::bubble_up) and `?`. The signal
//! travels outward as an ordinary return value until a recovery point
//! turns it back into a [`Result`]:
//!
//! - [`catch_with`] and [`fallback`] react only to the errors they are
//!   given (or to every error when given none) and otherwise pass the
//!   slot through untouched;
//! - [`catch`] is terminal and converts any remaining signal into `Err`;
//! - [`catch_err`] is the terminal for legacy `(value, error)` signatures.
//!
//! Recovery points are applied innermost first, each at most once. A
//! handler may itself bubble, which hands a new error to the next point
//! outward and never back to one already passed.
//!
//! ```
//! use outcome::bubble::Recovery;
//! use outcome::result::{wrap, ResultExt};
//! use outcome::Sentinel;
//!
//! static MEMORY_MISS: Sentinel = Sentinel::new("memory miss");
//! static DATABASE_DOWN: Sentinel = Sentinel::new("database down");
//!
//! let user = Recovery::run(|| Ok(Err(MEMORY_MISS.error())))
//!     .catch_with(|_| Err::<String, _>(DATABASE_DOWN.error()).bubble_up(), &[MEMORY_MISS.error()])
//!     .catch_with(|_| wrap("user-7".to_owned(), None).bubble_up(), &[DATABASE_DOWN.error()])
//!     .catch();
//! assert_eq!(user, Ok("user-7".to_owned()));
//! ```
//!
//! Panics are not signals. A panic inside a scope is never intercepted
//! here and keeps unwinding as usual.

use std::fmt::{Display, Formatter};

use tracing::{debug, trace};

use crate::func::zero;
use crate::{Error, Result};

/// The signal raised by a failing step inside a recovery scope.
///
/// It can only be created by
/// [`bubble_up`](crate::result::ResultExt::bubble_up) and only consumed by
/// the recovery points in this module.
#[derive(Debug)]
pub struct Bubble {
    error: Error,
}

impl Bubble {
    pub(crate) fn raise(error: Error) -> Self {
        Self { error }
    }
}

impl Display for Bubble {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "bubbled: {}", self.error)
    }
}

/// Return type of a recovery scope body: `Err` means a signal is in flight.
pub type Flow<T> = std::result::Result<T, Bubble>;

/// Terminal recovery point.
///
/// A signal in flight becomes `Err(error)`; a normal completion, `Ok` or
/// `Err`, is returned unchanged.
///
/// # Errors
///
/// Returns the bubbled error, or the error the body returned.
pub fn catch<T>(slot: Flow<Result<T>>) -> Result<T> {
    match slot {
        Ok(res) => res,
        Err(signal) => {
            debug!(error = %signal.error, "recovered bubbled error");
            Err(signal.error)
        }
    }
}

/// Run `body` under a terminal [`catch`].
///
/// # Errors
///
/// See [`catch`].
pub fn recover<T>(body: impl FnOnce() -> Flow<Result<T>>) -> Result<T> {
    catch(body())
}

/// Conditional recovery point.
///
/// When the slot holds an error, raised or returned, and `when` is empty
/// or the error [`is`](Error::is) one of `when`, the handler's value
/// becomes the new `Ok`. A handler that bubbles raises its own error
/// outward. Anything else passes through unchanged.
///
/// # Errors
///
/// Returns a signal when the slot carried an unmatched raised error or
/// when the handler bubbled.
pub fn catch_with<T>(
    slot: Flow<Result<T>>,
    handler: impl FnOnce(Error) -> Flow<T>,
    when: &[Error],
) -> Flow<Result<T>> {
    let (error, raised) = match slot {
        Ok(Ok(value)) => return Ok(Ok(value)),
        Ok(Err(error)) => (error, false),
        Err(signal) => (signal.error, true),
    };

    if !when.is_empty() && !error.is_any(when) {
        return if raised {
            Err(Bubble::raise(error))
        } else {
            Ok(Err(error))
        };
    }

    trace!(error = %error, raised, "recovery point handling error");
    handler(error).map(Ok)
}

/// [`catch_with`] using a constant value as the handler.
///
/// # Errors
///
/// Passes an unmatched raised error through as a signal.
pub fn fallback<T>(slot: Flow<Result<T>>, value: T, when: &[Error]) -> Flow<Result<T>> {
    catch_with(slot, move |_| Ok(value), when)
}

/// Terminal recovery point for legacy `(value, error)` signatures.
///
/// A signal in flight yields the zero value and the error; a normal
/// completion is returned as the body produced it.
#[must_use]
pub fn catch_err<T: Default>(slot: Flow<(T, Option<Error>)>) -> (T, Option<Error>) {
    match slot {
        Ok(pair) => pair,
        Err(signal) => {
            debug!(error = %signal.error, "recovered bubbled error into pair");
            (zero(), Some(signal.error))
        }
    }
}

/// Builder that lists recovery points innermost first.
///
/// Each `catch_with`/`fallback` call wraps the points declared before
/// it, so the declaration order is the order errors are checked in.
#[derive(Debug)]
#[must_use = "a recovery scope does nothing until it is caught"]
pub struct Recovery<T> {
    slot: Flow<Result<T>>,
}

impl<T> Recovery<T> {
    /// Run `body` and hold its outcome for the recovery points that follow.
    pub fn run(body: impl FnOnce() -> Flow<Result<T>>) -> Self {
        Self { slot: body() }
    }

    /// Start from an already computed result.
    pub fn from_result(res: Result<T>) -> Self {
        Self { slot: Ok(res) }
    }

    /// Add a [`catch_with`] point.
    pub fn catch_with(self, handler: impl FnOnce(Error) -> Flow<T>, when: &[Error]) -> Self {
        Self {
            slot: catch_with(self.slot, handler, when),
        }
    }

    /// Add a [`fallback`] point.
    pub fn fallback(self, value: T, when: &[Error]) -> Self {
        Self {
            slot: fallback(self.slot, value, when),
        }
    }

    /// Finish with a terminal [`catch`].
    ///
    /// # Errors
    ///
    /// Returns any error no recovery point resolved.
    pub fn catch(self) -> Result<T> {
        catch(self.slot)
    }

    /// Finish with [`catch_err`], returning a legacy pair.
    #[must_use]
    pub fn catch_err(self) -> (T, Option<Error>)
    where
        T: Default,
    {
        let slot = self.slot.map(|res| match res {
            Ok(value) => (value, None),
            Err(error) => (zero(), Some(error)),
        });
        catch_err(slot)
    }

    /// Hand the unresolved outcome to an enclosing scope.
    ///
    /// # Errors
    ///
    /// Returns the signal still in flight, if any.
    pub fn into_flow(self) -> Flow<Result<T>> {
        self.slot
    }
}
