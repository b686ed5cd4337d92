//! Tagged-union wire codec.
//!
//! Both containers serialize to a JSON object with a `Kind` discriminator and at
//! most one payload field:
//!
//! ```text
//! {"Kind":"Some","Some":<payload>}    {"Kind":"None"}
//! {"Kind":"Ok","Ok":<payload>}        {"Kind":"Err","Err":<payload>}
//! ```
//!
//! The `Serialize`/`Deserialize` impls in [`optional`] and [`outcome`] are the
//! per-container converters. Payloads go back through `serde`, so nested
//! containers and user structs compose without extra work. The reader walks the
//! object key by key: field order is not assumed and unknown keys are skipped.
//!
//! A payload must not itself serialize to `null` (`()`, a unit struct, a `None`):
//! the reader could not tell it from a missing payload, so the writer refuses it
//! with the same `cannot create {Kind} with null value` error.
//!
//! [`json`] wraps `serde_json` with [`CodecOptions`] and maps its errors onto
//! [`KindedError`](crate::KindedError).

mod guard;
pub mod json;
pub mod optional;
pub mod options;
pub mod outcome;

pub use options::CodecOptions;

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};

/// Name of the discriminator field.
pub const KIND_FIELD: &str = "Kind";

/// Message used when input does not open with `{`.
pub(crate) const EXPECTING_OBJECT: &str = "a start-object token";

/// Message for a tag that needs a payload but has none (or a `null` one).
pub(crate) fn null_payload_text(tag: &str) -> String {
    format!("cannot create {tag} with null value")
}

/// Builds the error raised when a tag needing a payload arrives without one.
pub(crate) fn null_payload<E: de::Error>(tag: &str) -> E {
    E::custom(null_payload_text(tag))
}

/// Builds the error raised when no `Kind` field was seen.
pub(crate) fn missing_kind<E: de::Error>() -> E {
    E::custom(format_args!("missing {KIND_FIELD} field"))
}

/// Object keys the readers care about. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Kind,
    Some,
    Ok,
    Err,
    Other,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldVisitor;

        impl Visitor<'_> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a property name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Field, E> {
                Ok(match v {
                    "Kind" => Field::Kind,
                    "Some" => Field::Some,
                    "Ok" => Field::Ok,
                    "Err" => Field::Err,
                    _ => Field::Other,
                })
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}
