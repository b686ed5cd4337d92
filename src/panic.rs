//! The fatal-error signal raised by `unwrap`-style operations.
//!
//! [`Optional::unwrap`](crate::Optional::unwrap), [`Outcome::unwrap`](crate::Outcome::unwrap)
//! and their `expect` variants do not return an error when the container is on the
//! wrong branch: they unwind with an [`UnwrapError`] payload. Keeping this apart from
//! [`Outcome::Err`](crate::Outcome) and from [`KindedError`](crate::KindedError) means
//! a caller can always tell "the library's own failure branch" from "the caller broke
//! its own contract".
//!
//! Code that wants to observe the panic as a value can use [`catch_unwrap`].

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{self, UnwindSafe};
use std::sync::Arc;

/// Payload carried by the panic raised from an `unwrap`-family operation.
#[derive(Debug, Clone)]
pub struct UnwrapError {
    message: String,
    source: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

impl UnwrapError {
    /// Creates an error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error that wraps `source` as its inner cause.
    pub fn with_source<S>(message: impl Into<String>, source: S) -> Self
    where
        S: Error + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped inner cause, if the failure payload was itself an error.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

impl fmt::Display for UnwrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for UnwrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}

/// Unwinds with `err` as the panic payload.
///
/// The message is also logged at `error` level: the default panic hook only
/// prints string payloads.
#[track_caller]
pub(crate) fn raise(err: UnwrapError) -> ! {
    let location = panic::Location::caller();
    tracing::error!(%location, message = %err.message, "unwrap failed");
    panic::panic_any(err)
}

/// Runs `f` and converts an [`UnwrapError`] panic into an `Err`.
///
/// Panics with any other payload are resumed untouched.
///
/// ```rust
/// use kinded::{Optional, panic::catch_unwrap};
///
/// let err = catch_unwrap(|| Optional::<i32>::none().unwrap()).unwrap_err();
/// assert_eq!(err.message(), "called unwrap on an absent optional");
/// ```
pub fn catch_unwrap<R, F>(f: F) -> Result<R, UnwrapError>
where
    F: FnOnce() -> R + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(value) => Ok(value),
        Err(payload) => match downcast(payload) {
            Ok(err) => Err(err),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

fn downcast(payload: Box<dyn Any + Send>) -> Result<UnwrapError, Box<dyn Any + Send>> {
    payload.downcast::<UnwrapError>().map(|err| *err)
}
