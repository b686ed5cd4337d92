//! The result container: either a success payload or a failure payload.
//!
//! [`Outcome<T, E>`] mirrors the algebra of [`Optional`] with a success/failure
//! split. The `and`/`and_then` family short-circuits on `Err`, the `or`/`or_else`
//! family short-circuits on `Ok`.
//!
//! # Equality
//!
//! Two `Ok` outcomes are equal when their payloads are equal. Two `Err` outcomes
//! are **always** equal, whatever their error payloads: `Err("a") == Err("b")`.
//! This is observed behavior that downstream code relies on, so `E` needs neither
//! `PartialEq` nor `Hash`, and hashing skips the error payload to stay consistent.

use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{KindedError, Result};
use crate::kind::OutcomeKind;
use crate::optional::Optional;
use crate::panic::{self, UnwrapError};

/// Either `Ok(T)` or `Err(E)`.
#[derive(Clone, Copy)]
pub struct Outcome<T, E> {
    inner: std::result::Result<T, E>,
}

impl<T, E> Outcome<T, E> {
    /// A success.
    pub const fn ok(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    /// A failure.
    pub const fn err(error: E) -> Self {
        Self { inner: Err(error) }
    }

    /// Builds a success from a nullable input.
    ///
    /// # Errors
    /// Returns [`KindedError::Argument`] when `value` is `None`.
    pub fn try_ok(value: Option<T>) -> Result<Self> {
        value
            .map(Self::ok)
            .ok_or_else(|| KindedError::Argument("cannot create Ok with null value".into()))
    }

    /// Builds a failure from a nullable input.
    ///
    /// # Errors
    /// Returns [`KindedError::Argument`] when `error` is `None`.
    pub fn try_err(error: Option<E>) -> Result<Self> {
        error
            .map(Self::err)
            .ok_or_else(|| KindedError::Argument("cannot create Err with null value".into()))
    }

    /// The branch tag.
    pub const fn kind(&self) -> OutcomeKind {
        match self.inner {
            Ok(_) => OutcomeKind::Ok,
            Err(_) => OutcomeKind::Err,
        }
    }

    /// Returns `true` on success.
    pub const fn is_ok(&self) -> bool {
        self.inner.is_ok()
    }

    /// Returns `true` on failure.
    pub const fn is_err(&self) -> bool {
        self.inner.is_err()
    }

    /// Returns `true` on success when the payload satisfies `predicate`.
    pub fn is_ok_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        self.inner.is_ok_and(predicate)
    }

    /// Returns `true` on failure when the error satisfies `predicate`.
    pub fn is_err_and(self, predicate: impl FnOnce(E) -> bool) -> bool {
        self.inner.is_err_and(predicate)
    }

    /// Borrows both payloads.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        Outcome {
            inner: self.inner.as_ref(),
        }
    }

    /// Views the outcome as a native `Result`.
    pub const fn as_result(&self) -> std::result::Result<&T, &E> {
        self.inner.as_ref()
    }

    /// Converts into a native `Result`.
    pub fn into_result(self) -> std::result::Result<T, E> {
        self.inner
    }

    /// Returns the success payload.
    ///
    /// # Panics
    /// Raises an [`UnwrapError`] whose message includes the error payload.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self.inner {
            Ok(v) => v,
            Err(e) => panic::raise(UnwrapError::new(format!(
                "called unwrap on an err outcome: {e:?}"
            ))),
        }
    }

    /// Returns the error payload.
    ///
    /// # Panics
    /// Raises an [`UnwrapError`] whose message includes the success payload.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self.inner {
            Ok(v) => panic::raise(UnwrapError::new(format!(
                "called unwrap_err on an ok outcome: {v:?}"
            ))),
            Err(e) => e,
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    /// Raises an [`UnwrapError`] with the message `{message}: {error:?}`.
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: fmt::Debug,
    {
        match self.inner {
            Ok(v) => v,
            Err(e) => panic::raise(UnwrapError::new(format!("{message}: {e:?}"))),
        }
    }

    /// Returns the success payload, keeping the error as the panic's cause.
    ///
    /// Use this instead of [`expect`](Self::expect) when `E` is itself an error
    /// type: the message stays `message` and the error is reachable through
    /// [`UnwrapError::cause`].
    ///
    /// # Panics
    /// Raises an [`UnwrapError`] wrapping the error payload.
    #[track_caller]
    pub fn expect_with_source(self, message: &str) -> T
    where
        E: Error + Send + Sync + 'static,
    {
        match self.inner {
            Ok(v) => v,
            Err(e) => panic::raise(UnwrapError::with_source(message, e)),
        }
    }

    /// Returns the error payload.
    ///
    /// # Panics
    /// Raises an [`UnwrapError`] with the message `{message}: {value:?}`.
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E
    where
        T: fmt::Debug,
    {
        match self.inner {
            Ok(v) => panic::raise(UnwrapError::new(format!("{message}: {v:?}"))),
            Err(e) => e,
        }
    }

    /// Returns the success payload or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        self.inner.unwrap_or(default)
    }

    /// Returns the success payload or computes one from the error.
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        self.inner.unwrap_or_else(f)
    }

    /// Returns the success payload or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.inner.unwrap_or_default()
    }

    /// `other` on success, the failure of `self` otherwise.
    ///
    /// When both sides are `Ok` the result is exactly `other`; nothing is merged.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self.inner {
            Ok(_) => other,
            Err(e) => Outcome::err(e),
        }
    }

    /// Chains a fallible step on the success payload.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self.inner {
            Ok(v) => f(v),
            Err(e) => Outcome::err(e),
        }
    }

    /// `self` on success, `other` otherwise.
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self.inner {
            Ok(v) => Outcome::ok(v),
            Err(_) => other,
        }
    }

    /// `self` on success, otherwise recovers from the error with `f`.
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self.inner {
            Ok(v) => Outcome::ok(v),
            Err(e) => f(e),
        }
    }

    /// Transforms the success payload.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        Outcome {
            inner: self.inner.map(f),
        }
    }

    /// Transforms the error payload.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        Outcome {
            inner: self.inner.map_err(f),
        }
    }

    /// Applies `f` to the success payload, or returns `default` on failure.
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        self.inner.map_or(default, f)
    }

    /// Applies `f` to the success payload, or derives a fallback from the error.
    pub fn map_or_else<U>(self, default: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
        self.inner.map_or_else(default, f)
    }

    /// Calls `f` with the success payload, if any.
    pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
        if let Ok(v) = &self.inner {
            f(v);
        }
        self
    }

    /// Calls `f` with the error payload, if any.
    pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
        if let Err(e) = &self.inner {
            f(e);
        }
        self
    }

    /// The success payload as an [`Optional`]; the error is discarded.
    pub fn ok_value(self) -> Optional<T> {
        self.inner.ok().into()
    }

    /// The error payload as an [`Optional`]; the success payload is discarded.
    pub fn err_value(self) -> Optional<E> {
        self.inner.err().into()
    }

    /// A one-element sequence holding the success payload, or absent on failure.
    ///
    /// Each call starts a fresh sequence.
    pub fn iter(&self) -> std::iter::Once<Optional<&T>> {
        std::iter::once(self.as_ref().ok_value())
    }
}

impl<T, E> Outcome<Optional<T>, E> {
    /// Swaps an outcome of an optional into an optional outcome.
    ///
    /// - `Ok(None)` becomes `None`
    /// - `Ok(Some(v))` becomes `Some(Ok(v))`
    /// - `Err(e)` becomes `Some(Err(e))`
    pub fn transpose(self) -> Optional<Outcome<T, E>> {
        match self.inner {
            Ok(opt) => opt.map(Outcome::ok),
            Err(e) => Optional::some(Outcome::err(e)),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    fn from(inner: std::result::Result<T, E>) -> Self {
        Self { inner }
    }
}

impl<T, E> From<Outcome<T, E>> for std::result::Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        value.inner
    }
}

/// Collects an iterator of outcomes, stopping at the first failure.
impl<A, E, V: FromIterator<A>> FromIterator<Outcome<A, E>> for Outcome<V, E> {
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_result)
            .collect::<std::result::Result<V, E>>()
            .into()
    }
}

impl<T: PartialEq, E> PartialEq for Outcome<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (Ok(a), Ok(b)) => a == b,
            (Err(_), Err(_)) => true,
            _ => false,
        }
    }
}

impl<T: Eq, E> Eq for Outcome<T, E> {}

impl<T: Hash, E> Hash for Outcome<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        if let Ok(v) = &self.inner {
            v.hash(state);
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(v) => f.debug_tuple("Ok").field(v).finish(),
            Err(e) => f.debug_tuple("Err").field(e).finish(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(v) => write!(f, "Ok({v})"),
            Err(e) => write!(f, "Err({e})"),
        }
    }
}
