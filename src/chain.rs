//! Fluent sequencing over [`Result`].
//!
//! A pipeline reads top to bottom instead of nesting combinator calls:
//!
//! ```
//! use outcome::chain::chain2;
//!
//! let label = chain2::<String, usize, _>(Ok("  forty-two "))
//!     .map(|raw: &str| raw.trim().len())
//!     .map(|len| format!("{len} chars"));
//! assert_eq!(label, Ok("9 chars".to_owned()));
//! ```
//!
//! The builders only delegate to [`crate::result`]; a failure short-circuits
//! every later step exactly as the free combinators do.

use std::marker::PhantomData;

use crate::{result, Error, Result};

/// One-step pipeline from `Result<In>` to `Result<Out>`.
#[must_use]
pub struct Chain<Out, In> {
    result: Result<In>,
    out: PhantomData<fn() -> Out>,
}

/// Start a one-step pipeline whose output type is `Out`.
pub fn chain<Out, In>(result: Result<In>) -> Chain<Out, In> {
    Chain {
        result,
        out: PhantomData,
    }
}

impl<Out, In> Chain<Out, In> {
    /// Transform the success value.
    ///
    /// # Errors
    ///
    /// Propagates the held error without calling `f`.
    pub fn map(self, f: impl FnOnce(In) -> Out) -> Result<Out> {
        result::map(self.result, f)
    }

    /// Run a step that can fail.
    ///
    /// # Errors
    ///
    /// Propagates the held error without calling `f`, or returns the
    /// error `f` produced.
    pub fn and_then(self, f: impl FnOnce(In) -> Result<Out>) -> Result<Out> {
        result::and_then(self.result, f)
    }

    /// Transform the held error and keep chaining.
    pub fn map_error(self, f: impl FnOnce(Error) -> Error) -> Self {
        Self {
            result: result::map_error(self.result, f),
            out: PhantomData,
        }
    }
}

impl<T> Chain<T, T> {
    /// End the pipeline and return the held result.
    ///
    /// # Errors
    ///
    /// Returns the held error.
    pub fn unwrap(self) -> Result<T> {
        self.result
    }

    /// End the pipeline with a fallback value.
    #[must_use]
    pub fn or_else(self, fallback: T) -> T {
        self.result.unwrap_or(fallback)
    }

    /// End the pipeline with a fallback computed from the error.
    #[must_use]
    pub fn or_else_get(self, f: impl FnOnce(Error) -> T) -> T {
        self.result.unwrap_or_else(f)
    }
}

/// Two-step pipeline: `In` to `Out1`, then `Out1` to `Out2`.
#[must_use]
pub struct Chain2<Out1, Out2, In> {
    result: Result<In>,
    out: PhantomData<fn() -> (Out1, Out2)>,
}

/// Start a two-step pipeline ending in `Out2` with intermediate `Out1`.
pub fn chain2<Out2, Out1, In>(result: Result<In>) -> Chain2<Out1, Out2, In> {
    Chain2 {
        result,
        out: PhantomData,
    }
}

impl<Out1, Out2, In> Chain2<Out1, Out2, In> {
    /// First step as a plain transformation.
    pub fn map(self, f: impl FnOnce(In) -> Out1) -> Chain<Out2, Out1> {
        chain(result::map(self.result, f))
    }

    /// First step as a fallible transformation.
    pub fn and_then(self, f: impl FnOnce(In) -> Result<Out1>) -> Chain<Out2, Out1> {
        chain(result::and_then(self.result, f))
    }

    /// Transform the held error and keep chaining.
    pub fn map_error(self, f: impl FnOnce(Error) -> Error) -> Self {
        Self {
            result: result::map_error(self.result, f),
            out: PhantomData,
        }
    }
}
