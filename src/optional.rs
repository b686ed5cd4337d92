//! The optional container: a value that is either present or absent.
//!
//! [`Optional<T>`] stores its payload in a native `Option<T>`; the wrapper adds the
//! tagged-union wire format, the [`UnwrapError`](crate::panic::UnwrapError) panic
//! contract and the conversions to [`Outcome`].
//!
//! Values are immutable. In-place mutation (`insert`, `take`, `replace`, ...) lives on
//! [`OptionalCell`](crate::OptionalCell), which has to be owned exclusively.

use std::fmt;

use crate::error::{KindedError, Result};
use crate::kind::OptionalKind;
use crate::outcome::Outcome;
use crate::panic::{self, UnwrapError};

/// Either `Some(T)` or `None`.
///
/// ```rust
/// use kinded::Optional;
///
/// let port = Optional::some("8080")
///     .and_then(|s| s.parse::<u16>().ok().into())
///     .filter(|p| *p > 1024);
/// assert_eq!(port, Optional::some(8080));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Optional<T> {
    pub(crate) inner: Option<T>,
}

impl<T> Optional<T> {
    /// A present value.
    pub const fn some(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// The absent value.
    pub const fn none() -> Self {
        Self { inner: None }
    }

    /// Builds a present value from a nullable input.
    ///
    /// # Errors
    /// Returns [`KindedError::Argument`] when `value` is `None`: a present
    /// optional never wraps a null.
    pub fn try_some(value: Option<T>) -> Result<Self> {
        match value {
            Some(v) => Ok(Self::some(v)),
            None => Err(KindedError::Argument(
                "cannot create Some with null value".into(),
            )),
        }
    }

    /// The branch tag.
    pub const fn kind(&self) -> OptionalKind {
        match self.inner {
            Some(_) => OptionalKind::Some,
            None => OptionalKind::None,
        }
    }

    /// Returns `true` if a payload is present.
    pub const fn is_some(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns `true` if no payload is present.
    pub const fn is_none(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns `true` if a payload is present and satisfies `predicate`.
    pub fn is_some_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        self.inner.is_some_and(predicate)
    }

    /// Returns `true` if absent, or present and satisfying `predicate`.
    pub fn is_none_or(self, predicate: impl FnOnce(T) -> bool) -> bool {
        self.inner.is_none_or(predicate)
    }

    /// Borrows the payload.
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional {
            inner: self.inner.as_ref(),
        }
    }

    /// Views the payload as a native `Option`.
    pub const fn as_option(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    /// Converts into a native `Option`.
    pub fn into_option(self) -> Option<T> {
        self.inner
    }

    /// Returns the payload.
    ///
    /// # Panics
    /// Raises an [`UnwrapError`] with the message
    /// `called unwrap on an absent optional` if the value is absent.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.inner {
            Some(v) => v,
            None => panic::raise(UnwrapError::new("called unwrap on an absent optional")),
        }
    }

    /// Returns the payload.
    ///
    /// # Panics
    /// Raises an [`UnwrapError`] carrying `message` if the value is absent.
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self.inner {
            Some(v) => v,
            None => panic::raise(UnwrapError::new(message)),
        }
    }

    /// Returns the payload or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        self.inner.unwrap_or(default)
    }

    /// Returns the payload or computes one from `f`.
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        self.inner.unwrap_or_else(f)
    }

    /// Returns the payload or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.inner.unwrap_or_default()
    }

    /// Absent if `self` is absent, otherwise `other`.
    ///
    /// The payload of `self` is discarded; the payload type may change.
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self.inner {
            Some(_) => other,
            None => Optional::none(),
        }
    }

    /// Absent if `self` is absent, otherwise the result of `f(payload)`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self.inner {
            Some(v) => f(v),
            None => Optional::none(),
        }
    }

    /// `self` if present, otherwise `other`.
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        match self.inner {
            Some(_) => self,
            None => other,
        }
    }

    /// `self` if present, otherwise the result of `f()`.
    pub fn or_else(self, f: impl FnOnce() -> Optional<T>) -> Optional<T> {
        match self.inner {
            Some(_) => self,
            None => f(),
        }
    }

    /// Whichever side is present, or absent if both or neither are.
    pub fn xor(self, other: Optional<T>) -> Optional<T> {
        match (self.inner, other.inner) {
            (Some(v), None) | (None, Some(v)) => Optional::some(v),
            _ => Optional::none(),
        }
    }

    /// `self` if present and `predicate` holds for the payload, otherwise absent.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Optional<T> {
        Optional {
            inner: self.inner.filter(predicate),
        }
    }

    /// Transforms the payload; absence propagates untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        Optional {
            inner: self.inner.map(f),
        }
    }

    /// Applies `f` to the payload, or returns `default` when absent.
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        self.inner.map_or(default, f)
    }

    /// Applies `f` to the payload, or computes a fallback with `default`.
    pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
        self.inner.map_or_else(default, f)
    }

    /// Calls `f` with a reference to the payload, if any, and returns `self`.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Some(v) = &self.inner {
            f(v);
        }
        self
    }

    /// Pairs two optionals; absent if either side is absent.
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        Optional {
            inner: self.inner.zip(other.inner),
        }
    }

    /// Combines two present payloads with `f`; absent if either side is absent.
    pub fn zip_with<U, R>(self, other: Optional<U>, f: impl FnOnce(T, U) -> R) -> Optional<R> {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Converts to an [`Outcome`], mapping absence to `Err(err)`.
    pub fn ok_or<E>(self, err: E) -> Outcome<T, E> {
        match self.inner {
            Some(v) => Outcome::ok(v),
            None => Outcome::err(err),
        }
    }

    /// Converts to an [`Outcome`], mapping absence to `Err(f())`.
    pub fn ok_or_else<E>(self, f: impl FnOnce() -> E) -> Outcome<T, E> {
        match self.inner {
            Some(v) => Outcome::ok(v),
            None => Outcome::err(f()),
        }
    }

    /// Iterates over the payload (zero or one item).
    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Optional<T> {
        match self.inner {
            Some(inner) => inner,
            None => Optional::none(),
        }
    }
}

impl<T, U> Optional<(T, U)> {
    /// Splits an optional pair into a pair of optionals.
    pub fn unzip(self) -> (Optional<T>, Optional<U>) {
        match self.inner {
            Some((a, b)) => (Optional::some(a), Optional::some(b)),
            None => (Optional::none(), Optional::none()),
        }
    }
}

impl<T, E> Optional<Outcome<T, E>> {
    /// Swaps an optional outcome into an outcome of an optional.
    ///
    /// - `None` becomes `Ok(None)`
    /// - `Some(Ok(v))` becomes `Ok(Some(v))`
    /// - `Some(Err(e))` becomes `Err(e)`
    pub fn transpose(self) -> Outcome<Optional<T>, E> {
        match self.inner {
            None => Outcome::ok(Optional::none()),
            Some(outcome) => outcome.map(Optional::some),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.inner
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects an iterator of optionals, stopping at the first absent item.
impl<A, V: FromIterator<A>> FromIterator<Optional<A>> for Optional<V> {
    fn from_iter<I: IntoIterator<Item = Optional<A>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Optional::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(v) => f.debug_tuple("Some").field(v).finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(v) => write!(f, "Some({v})"),
            None => f.write_str("None"),
        }
    }
}
