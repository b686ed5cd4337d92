//! Branch tags for the two containers.
//!
//! The textual form of each tag is what travels in the `Kind` field of the
//! wire envelope, so `as_str` and `FromStr` must stay exact inverses.

use std::fmt;
use std::str::FromStr;

/// Branch tag of an [`Optional`](crate::Optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionalKind {
    /// A payload is present.
    Some,
    /// No payload.
    None,
}

/// Branch tag of an [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutcomeKind {
    /// Success, carrying the success payload.
    Ok,
    /// Failure, carrying the error payload.
    Err,
}

/// Which of the two container constructors a type is an instantiation of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// `Optional<T>`.
    Optional,
    /// `Outcome<T, E>`.
    Outcome,
}

/// Returned when `Kind` text does not name a known tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalKind(pub String);

impl fmt::Display for IllegalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal kind value: {}", self.0)
    }
}

impl std::error::Error for IllegalKind {}

impl OptionalKind {
    /// Wire name of the tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Some => "Some",
            Self::None => "None",
        }
    }

    /// Whether this branch carries a payload field on the wire.
    pub const fn has_payload(self) -> bool {
        matches!(self, Self::Some)
    }
}

impl OutcomeKind {
    /// Wire name of the tag, which is also the payload field name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "Ok",
            Self::Err => "Err",
        }
    }

    /// Both branches of an outcome carry a payload.
    pub const fn has_payload(self) -> bool {
        true
    }
}

impl FromStr for OptionalKind {
    type Err = IllegalKind;

    fn from_str(s: &str) -> Result<Self, IllegalKind> {
        match s {
            "Some" => Ok(Self::Some),
            "None" => Ok(Self::None),
            other => Err(IllegalKind(other.to_owned())),
        }
    }
}

impl FromStr for OutcomeKind {
    type Err = IllegalKind;

    fn from_str(s: &str) -> Result<Self, IllegalKind> {
        match s {
            "Ok" => Ok(Self::Ok),
            "Err" => Ok(Self::Err),
            other => Err(IllegalKind(other.to_owned())),
        }
    }
}

impl fmt::Display for OptionalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Optional => f.write_str("Optional"),
            Self::Outcome => f.write_str("Outcome"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_case_sensitively() {
        assert_eq!("Some".parse::<OptionalKind>(), Ok(OptionalKind::Some));
        assert_eq!("Err".parse::<OutcomeKind>(), Ok(OutcomeKind::Err));
        assert_eq!(
            "some".parse::<OptionalKind>(),
            Err(IllegalKind("some".into()))
        );
        assert!("Some".parse::<OutcomeKind>().is_err());
    }

    #[test]
    fn illegal_kind_message() {
        let err = "Maybe".parse::<OptionalKind>().unwrap_err();
        assert_eq!(err.to_string(), "illegal kind value: Maybe");
    }

    #[test]
    fn outcome_tags_round_trip_through_display() {
        for kind in [OutcomeKind::Ok, OutcomeKind::Err] {
            assert_eq!(kind.to_string().parse::<OutcomeKind>(), Ok(kind));
        }
        assert_eq!(
            "Ok ".parse::<OutcomeKind>(),
            Err(IllegalKind("Ok ".into()))
        );
    }
}
