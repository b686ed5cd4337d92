//! # kinded
//!
//! Two algebraic containers with a rich combinator surface, and a tagged-union
//! JSON codec for both.
//!
//! ## Overview
//!
//! *   **[`Optional<T>`]**: a value that is present (`Some`) or absent (`None`).
//! *   **[`Outcome<T, E>`]**: a success (`Ok`) or a failure (`Err`).
//! *   **[`OptionalCell<T>`]**: the only place an optional is mutated in place
//!     (`insert`, `take`, `replace`, `get_or_insert`).
//!
//! Both containers offer `map`, `and_then`, `or_else`, `filter`, `zip`, `xor`,
//! `transpose`, `flatten`, `unwrap`/`expect` and friends.
//!
//! ## Failure Channels
//!
//! Recoverable failures are [`KindedError`] values returned through [`Result`].
//! Calling `unwrap` or `expect` on the wrong branch is a contract violation and
//! unwinds with an [`UnwrapError`](panic::UnwrapError) payload; see [`panic`].
//!
//! ## Wire Format
//!
//! ```text
//! {"Kind":"Some","Some":1}        {"Kind":"None"}
//! {"Kind":"Ok","Ok":"value"}      {"Kind":"Err","Err":-1}
//! ```
//!
//! Writers put `Kind` first, readers accept the fields in any order and skip
//! unknown ones. Payloads are encoded through `serde`, so nesting works:
//!
//! ```rust
//! use kinded::{Optional, codec::json};
//!
//! let nested = Optional::some(Optional::some(1));
//! let text = json::to_string(&nested)?;
//! assert_eq!(text, r#"{"Kind":"Some","Some":{"Kind":"Some","Some":1}}"#);
//! assert_eq!(json::from_str::<Optional<Optional<i32>>>(&text)?, nested);
//! # Ok::<(), kinded::KindedError>(())
//! ```
//!
//! For hosts that only know a type at runtime, [`factory::ConverterFactory`]
//! resolves a converter from a [`factory::TypeDescriptor`].
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`debug` in the codec and factory, `error`
//! when an unwrap fails) and never installs a subscriber itself.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod codec;
pub mod error;
pub mod factory;
pub mod kind;
pub mod panic;

mod cell;
mod optional;
mod outcome;

pub use cell::OptionalCell;
pub use error::{KindedError, Result};
pub use kind::{ContainerKind, OptionalKind, OutcomeKind};
pub use optional::Optional;
pub use outcome::Outcome;
pub use panic::UnwrapError;
