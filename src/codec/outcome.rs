//! Converter for [`Outcome`].

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::guard::NonNull;
use super::{EXPECTING_OBJECT, Field, KIND_FIELD, missing_kind, null_payload};
use crate::kind::OutcomeKind;
use crate::outcome::Outcome;

const NAME: &str = "Outcome";

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();

        let mut state = serializer.serialize_struct(NAME, 2)?;
        state.serialize_field(KIND_FIELD, kind.as_str())?;
        match self.as_result() {
            Ok(value) => {
                let tag = OutcomeKind::Ok.as_str();
                state.serialize_field(tag, &NonNull::new(value, tag))?;
            }
            Err(error) => {
                let tag = OutcomeKind::Err.as_str();
                state.serialize_field(tag, &NonNull::new(error, tag))?;
            }
        }
        state.end()
    }
}

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for Outcome<T, E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OutcomeVisitor(PhantomData))
    }
}

struct OutcomeVisitor<T, E>(PhantomData<fn() -> (T, E)>);

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Visitor<'de> for OutcomeVisitor<T, E> {
    type Value = Outcome<T, E>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(EXPECTING_OBJECT)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut kind: Option<OutcomeKind> = None;
        let mut value: Option<T> = None;
        let mut error: Option<E> = None;

        while let Some(field) = map.next_key::<Field>()? {
            match field {
                Field::Kind => {
                    if kind.is_some() {
                        return Err(de::Error::duplicate_field(KIND_FIELD));
                    }
                    let text: String = map.next_value()?;
                    let parsed = text
                        .parse::<OutcomeKind>()
                        .map_err(<A::Error as de::Error>::custom)?;
                    kind = Some(parsed);
                }
                Field::Ok => value = map.next_value::<Option<T>>()?,
                Field::Err => error = map.next_value::<Option<E>>()?,
                _ => {
                    tracing::trace!(?field, "skipping field not used by Outcome");
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        match kind.ok_or_else(missing_kind::<A::Error>)? {
            OutcomeKind::Ok => {
                Outcome::try_ok(value).map_err(|_| null_payload(OutcomeKind::Ok.as_str()))
            }
            OutcomeKind::Err => {
                Outcome::try_err(error).map_err(|_| null_payload(OutcomeKind::Err.as_str()))
            }
        }
    }
}
