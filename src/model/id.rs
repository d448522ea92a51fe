//! A collection of newtypes defining type-strong IDs.

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, Serializer};

use crate::internal::prelude::*;

string_newtype! {
    /// An identifier for a user.
    UserId;
    /// An identifier for a message.
    MessageId;
}

string_enum! {
    /// The type of a channel, which is the first half of a [`ChannelId`].
    ChannelType {
        /// Sensible defaults for a messaging app.
        Messaging = "messaging",
        /// Sensible defaults for livestream-style chat.
        Livestream = "livestream",
        /// Sensible defaults for team chat.
        Team = "team",
        /// Sensible defaults for in-game chat.
        Gaming = "gaming",
        /// Sensible defaults for customer support chat.
        Commerce = "commerce",
    }
}

/// An identifier for a channel, made of the channel's type and its id within that type.
///
/// On the wire this is represented as `type:id`, e.g. `messaging:general`.
///
/// ```
/// # use chat_events::model::id::{ChannelId, ChannelType};
/// let cid: ChannelId = "messaging:general".parse().unwrap();
///
/// assert_eq!(cid, ChannelId::new(ChannelType::Messaging, "general"));
/// assert_eq!(cid.to_string(), "messaging:general");
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ChannelId {
    pub kind: ChannelType,
    pub id: String,
}

impl ChannelId {
    #[must_use]
    pub fn new(kind: ChannelType, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// The error returned when a string is not a valid [`ChannelId`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChannelIdParseError(String);

impl fmt::Display for ChannelIdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid channel id `{}`, expected `type:id`", self.0)
    }
}

impl std::error::Error for ChannelIdParseError {}

impl FromStr for ChannelId {
    type Err = ChannelIdParseError;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        match s.split_once(':') {
            Some((kind, id)) if !kind.is_empty() && !id.is_empty() => {
                Ok(Self::new(ChannelType::from(kind), id))
            },
            _ => Err(ChannelIdParseError(s.to_owned())),
        }
    }
}

impl<'de> Deserialize<'de> for ChannelId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;

        raw.parse().map_err(DeError::custom)
    }
}

impl Serialize for ChannelId {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
