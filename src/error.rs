//! Centralized error handling for kinded.
//!
//! Two failure channels exist and they never mix:
//!
//! 1. **Recoverable errors** ([`KindedError`]): returned through [`Result`] by the
//!    validating constructors, the codec and the converter factory.
//! 2. **Panics** ([`crate::panic::UnwrapError`]): raised by the `unwrap`/`expect`
//!    family when the caller's assumption about a container's branch is wrong.
//!
//! ## Error Categories
//!
//! - **Argument Errors** ([`KindedError::Argument`]): a null payload was handed to a
//!   validating constructor such as [`crate::Optional::try_some`].
//! - **Structural Errors** ([`KindedError::Structural`]): the token stream was well
//!   formed JSON but did not describe a valid tagged union (no start-object token,
//!   an illegal `Kind`, a missing payload, a payload of the wrong type).
//! - **Syntax Errors** ([`KindedError::Syntax`]): the input was not JSON at all.
//! - **Configuration Errors** ([`KindedError::Configuration`]): the converter factory
//!   was asked for a type it cannot handle. This is a programming mistake and is
//!   reported as soon as the converter is requested.
//! - **I/O Errors** ([`KindedError::Io`]): reading or writing through `std::io`.
//!
//! ## Usage
//!
//! ```rust
//! use kinded::{KindedError, Optional};
//!
//! let err = kinded::codec::json::from_str::<Optional<i32>>(r#"{"Kind":"Maybe"}"#)
//!     .unwrap_err();
//! match err {
//!     KindedError::Structural(msg) => assert!(msg.contains("illegal kind value")),
//!     other => panic!("unexpected error: {other}"),
//! }
//! ```

use std::fmt;
use std::io;
use std::sync::Arc;

/// A specialized `Result` type for kinded operations.
///
/// Equivalent to `std::result::Result<T, KindedError>`.
pub type Result<T> = std::result::Result<T, KindedError>;

/// The error enum covering every recoverable failure in kinded.
///
/// This type is `Clone`; I/O errors are wrapped in `Arc` to keep cloning cheap.
#[derive(Debug, Clone)]
pub enum KindedError {
    /// A required argument was null (an absent `Option` handed to a constructor
    /// that needs a payload).
    Argument(String),

    /// The token stream did not describe a valid tagged union.
    ///
    /// The message is one of the fixed templates produced by the codec reader:
    ///
    /// - `expected a start-object token`
    /// - `illegal kind value: {text}`
    /// - `missing Kind field`
    /// - `cannot create {Kind} with null value`
    ///
    /// or the payload's own type-mismatch message from `serde`. The writer raises
    /// `cannot create {Kind} with null value` too, for a payload that would
    /// serialize to `null`.
    Structural(String),

    /// The input text was not well-formed JSON (unexpected character, EOF).
    Syntax(String),

    /// The converter factory was asked to handle a type outside the two
    /// supported container constructors, or a converter was handed a value of
    /// the wrong concrete type.
    Configuration(String),

    /// Low-level I/O failure while reading or writing a document.
    Io(Arc<io::Error>),
}

impl KindedError {
    /// Returns `true` for errors caused by the content of a document rather than
    /// by the caller or the environment.
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::Structural(_) | Self::Syntax(_))
    }
}

impl fmt::Display for KindedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument(s) => write!(f, "Argument Error: {s}"),
            Self::Structural(s) => write!(f, "Structural Error: {s}"),
            Self::Syntax(s) => write!(f, "Syntax Error: {s}"),
            Self::Configuration(s) => write!(f, "Configuration Error: {s}"),
            Self::Io(e) => write!(f, "I/O Error: {e}"),
        }
    }
}

impl std::error::Error for KindedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for KindedError {
    fn from(err: io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for KindedError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Io => Self::Io(Arc::new(err.into())),
            Category::Syntax | Category::Eof => Self::Syntax(err.to_string()),
            Category::Data => {
                tracing::debug!(
                    line = err.line(),
                    column = err.column(),
                    "structural error in document"
                );
                Self::Structural(without_position(&err))
            }
        }
    }
}

/// Structural messages are fixed templates; the position goes to the log instead.
fn without_position(err: &serde_json::Error) -> String {
    let text = err.to_string();
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    match text.strip_suffix(&suffix) {
        Some(message) => message.to_owned(),
        None => text,
    }
}
