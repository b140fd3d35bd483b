//! The single error type carried by every [`Result`](crate::Result).
//!
//! Errors are compared by identity, never by their rendered text. A
//! [`Sentinel`] declared as a `static` is identical only to itself, a
//! runtime [`Error::msg`] is identical only to its clones, and
//! [`Error::context`] layers keep the wrapped error reachable through
//! [`Error::is`].

use std::fmt::{Display, Formatter};
use std::ptr;
use std::sync::Arc;

/// Shared result type; the error slot is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// A named business failure declared once as a `static`.
///
/// Identity is the address of the static, so a sentinel must be declared
/// with `static`, never `const`. Each use of a `const` item may produce a
/// fresh promoted copy, and [`Error::is`] would then miss it.
///
/// ```
/// use outcome::Sentinel;
///
/// static CACHE_MISS: Sentinel = Sentinel::new("cache miss");
///
/// let err = CACHE_MISS.error().context("loading profile");
/// assert!(err.is(&CACHE_MISS.error()));
/// ```
#[derive(Debug)]
pub struct Sentinel {
    name: &'static str,
}

impl Sentinel {
    /// Declare a sentinel with a human-readable name. Bind the result to a
    /// `static` item.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Name used when the sentinel is displayed.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The [`Error`] whose identity is this sentinel.
    #[must_use]
    pub fn error(&'static self) -> Error {
        Error::Sentinel(self)
    }
}

/// Error enumeration covering every failure a container can carry.
#[derive(Debug, Clone)]
pub enum Error {
    /// A failure was constructed without an underlying cause.
    EmptyResult,
    /// A pointer-style adapter received neither a value nor an error.
    NilValue,
    /// A value failed the emptiness check applied by [`ensure`](crate::result::ensure).
    Empty(String),
    /// A statically declared business failure.
    Sentinel(&'static Sentinel),
    /// An ad-hoc failure created at runtime.
    Message(Arc<str>),
    /// An error produced by another library.
    Foreign(Arc<dyn std::error::Error + Send + Sync>),
    /// An error wrapped with additional context.
    Context {
        /// Text prepended when displayed.
        context: String,
        /// The wrapped error.
        source: Box<Error>,
    },
}

impl Error {
    /// Create an ad-hoc failure. Each call yields a distinct identity.
    #[must_use]
    pub fn msg(message: impl Into<Arc<str>>) -> Self {
        Self::Message(message.into())
    }

    /// Adopt an error from another library.
    #[must_use]
    pub fn foreign(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Foreign(Arc::new(err))
    }

    /// Wrap `self` with context; the result still [`is`](Self::is) `self`.
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether `self`, or any error it wraps, is identical to `target`.
    #[must_use]
    pub fn is(&self, target: &Error) -> bool {
        let mut current = self;
        loop {
            if current == target {
                return true;
            }
            match current {
                Self::Context { source, .. } => current = source,
                _ => return false,
            }
        }
    }

    /// Whether `self` matches any of `targets` under [`is`](Self::is).
    #[must_use]
    pub fn is_any(&self, targets: &[Error]) -> bool {
        targets.iter().any(|target| self.is(target))
    }

    /// The innermost error beneath every context layer.
    #[must_use]
    pub fn root(&self) -> &Error {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmptyResult, Self::EmptyResult) | (Self::NilValue, Self::NilValue) => true,
            (Self::Empty(a), Self::Empty(b)) => a == b,
            (Self::Sentinel(a), Self::Sentinel(b)) => ptr::eq(*a, *b),
            (Self::Message(a), Self::Message(b)) => Arc::ptr_eq(a, b),
            (Self::Foreign(a), Self::Foreign(b)) => Arc::ptr_eq(a, b),
            (
                Self::Context {
                    context: c1,
                    source: s1,
                },
                Self::Context {
                    context: c2,
                    source: s2,
                },
            ) => c1 == c2 && s1 == s2,
            _ => false,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyResult => write!(f, "empty result: failure constructed without an error"),
            Self::NilValue => write!(f, "nil value: neither a value nor an error was returned"),
            Self::Empty(msg) => write!(f, "empty value: {msg}"),
            Self::Sentinel(sentinel) => write!(f, "{}", sentinel.name),
            Self::Message(msg) => write!(f, "{msg}"),
            Self::Foreign(err) => write!(f, "{err}"),
            Self::Context { context, source } => write!(f, "{context}: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Context { source, .. } => Some(source.as_ref()),
            Self::Foreign(err) => err.source(),
            _ => None,
        }
    }
}

impl From<&'static Sentinel> for Error {
    fn from(sentinel: &'static Sentinel) -> Self {
        Self::Sentinel(sentinel)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::foreign(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::foreign(err).context("invalid config")
    }
}
