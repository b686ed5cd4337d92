//! Converter for [`Optional`].

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::guard::NonNull;
use super::{EXPECTING_OBJECT, Field, KIND_FIELD, missing_kind, null_payload};
use crate::kind::OptionalKind;
use crate::optional::Optional;

const NAME: &str = "Optional";

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.kind();
        let len = if kind.has_payload() { 2 } else { 1 };

        let mut state = serializer.serialize_struct(NAME, len)?;
        state.serialize_field(KIND_FIELD, kind.as_str())?;
        if let Some(value) = self.as_option() {
            let tag = OptionalKind::Some.as_str();
            state.serialize_field(tag, &NonNull::new(value, tag))?;
        }
        state.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OptionalVisitor(PhantomData))
    }
}

struct OptionalVisitor<T>(PhantomData<fn() -> T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for OptionalVisitor<T> {
    type Value = Optional<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(EXPECTING_OBJECT)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut kind: Option<OptionalKind> = None;
        let mut payload: Option<T> = None;

        while let Some(field) = map.next_key::<Field>()? {
            match field {
                Field::Kind => {
                    if kind.is_some() {
                        return Err(de::Error::duplicate_field(KIND_FIELD));
                    }
                    let text: String = map.next_value()?;
                    let parsed = text
                        .parse::<OptionalKind>()
                        .map_err(<A::Error as de::Error>::custom)?;
                    kind = Some(parsed);
                }
                Field::Some => {
                    payload = map.next_value::<Option<T>>()?;
                }
                _ => {
                    tracing::trace!(?field, "skipping field not used by Optional");
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        match kind.ok_or_else(missing_kind::<A::Error>)? {
            OptionalKind::None => Ok(Optional::none()),
            OptionalKind::Some => Optional::try_some(payload)
                .map_err(|_| null_payload(OptionalKind::Some.as_str())),
        }
    }
}
