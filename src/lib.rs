#![forbid(unsafe_code)]

//! Combinators for optional and fallible values, typed recovery points
//! for early-return pipelines, and a fluent sequencer.
//!
//! - [`option`] and [`result`] extend the native containers; every
//!   [`Result`] carries the crate's [`Error`].
//! - [`bubble`] lets a sequence of fallible steps return early with `?`
//!   and intercept chosen failures on the way out.
//! - [`chain`] reads multi-step pipelines top to bottom.
//! - [`config`] and [`lookup`] drive the `outcome-demo` cascade.

pub mod bubble;
pub mod chain;
pub mod config;
pub mod errors;
pub mod func;
pub mod lookup;
pub mod option;
pub mod result;

pub use bubble::{Bubble, Flow, Recovery};
pub use errors::{Error, Result, Sentinel};
pub use option::OptionExt;
pub use result::ResultExt;
