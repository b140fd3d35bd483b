//! Small functional helpers used by the containers' default-value paths.

/// Return the input unchanged.
#[must_use]
pub fn identity<T>(t: T) -> T {
    t
}

/// A function of one argument that ignores its input and yields `t`.
#[must_use]
pub fn constant<In, T: Clone>(t: T) -> impl Fn(In) -> T {
    move |_| t.clone()
}

/// A zero-argument function that yields `t`, for lazy defaults.
#[must_use]
pub fn constant0<T: Clone>(t: T) -> impl Fn() -> T {
    move || t.clone()
}

/// The zero value of `T`.
#[must_use]
pub fn zero<T: Default>() -> T {
    T::default()
}

/// Apply `first`, then `second`.
///
/// ```
/// use outcome::func::compose;
///
/// let shout = compose(|s: &str| s.trim().to_owned(), |s: String| s.to_uppercase());
/// assert_eq!(shout("  hi "), "HI");
/// ```
#[must_use]
pub fn compose<T, U, V>(first: impl Fn(T) -> U, second: impl Fn(U) -> V) -> impl Fn(T) -> V {
    move |t| second(first(t))
}

/// Whether `t` equals the zero value of its type.
///
/// Default emptiness test for [`ensure`](crate::result::ensure).
#[must_use]
pub fn is_zero<T: Default + PartialEq>(t: &T) -> bool {
    *t == T::default()
}
