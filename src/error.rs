use std::error::Error as StdError;
use std::fmt;

use crate::json::JsonError;

/// The common result type between most library functions.
///
/// The library exposes functions which, for a result type, exposes only one type, rather than the
/// usual 2 (`Result<T, Error>`). This is because all functions that return a result return a
/// [`DecodeError`], so this is implied, and a "simpler" result is used.
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// The path of a field within the event payload, such as `member_container.invite.role`.
///
/// Paths name the fields of [`EventPayload`] and its sub-records rather than the raw JSON keys,
/// so that `me.channel_mutes[0]` is reported as `current_user.muted_channels[0]`.
///
/// [`EventPayload`]: crate::model::payload::EventPayload
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FieldPath(String);

impl FieldPath {
    /// The path of the payload object itself.
    #[must_use]
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Returns the path of a field nested within this one.
    #[must_use]
    pub fn join(&self, field: &str) -> Self {
        if self.0.is_empty() {
            Self(field.to_owned())
        } else {
            Self(format!("{}.{field}", self.0))
        }
    }

    /// Returns the path of an element of the list at this path.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self(path.to_owned())
    }
}

impl PartialEq<str> for FieldPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An error returned while decoding a frame into an [`Event`].
///
/// All of these are local to the frame being decoded: the caller may drop the frame and carry on
/// with the next one. [`DecodeError::UnknownEventType`] in particular is expected whenever the
/// server speaks a newer protocol version than this library, and should be logged and dropped
/// rather than surfaced; see [`DecodeError::is_forward_compatible`]. The other variants indicate a
/// break in the protocol contract.
///
/// [`Event`]: crate::model::event::Event
#[derive(Debug)]
#[non_exhaustive]
pub enum DecodeError {
    /// The raw frame is not a JSON object.
    Malformed(JsonError),
    /// The frame has no `type` tag.
    MissingEventKind,
    /// The `type` tag is not one of the known event kinds.
    UnknownEventType(String),
    /// A field is present, but does not have the expected shape.
    TypeMismatch {
        /// The path of the offending field.
        path: FieldPath,
        /// A description of the shape the field was expected to have.
        expected: &'static str,
    },
    /// A field required by the event kind is absent.
    MissingRequiredField(FieldPath),
    /// A field is present, but violates a precondition of the event kind.
    InvariantViolated(&'static str),
}

impl DecodeError {
    /// Whether the error stems from the server being newer than the client, rather than from a
    /// broken frame. Such frames are safe to drop silently.
    #[must_use]
    pub fn is_forward_compatible(&self) -> bool {
        matches!(self, Self::UnknownEventType(_))
    }

    pub(crate) fn missing(path: &str) -> Self {
        Self::MissingRequiredField(FieldPath::from(path))
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(inner) => write!(f, "Malformed event payload: {inner}"),
            Self::MissingEventKind => f.write_str("Event payload has no `type` field"),
            Self::UnknownEventType(kind) => write!(f, "Unknown event type `{kind}`"),
            Self::TypeMismatch {
                path,
                expected,
            } => write!(f, "Field `{path}` is not {expected}"),
            Self::MissingRequiredField(path) => write!(f, "Required field `{path}` is missing"),
            Self::InvariantViolated(description) => {
                write!(f, "Event invariant violated: {description}")
            },
        }
    }
}

impl StdError for DecodeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Malformed(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<JsonError> for DecodeError {
    fn from(e: JsonError) -> Self {
        Self::Malformed(e)
    }
}
