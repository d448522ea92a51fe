//! Message and reaction objects carried by event payloads.

use super::prelude::*;
use super::utils::{Fields, FromFields};
use crate::internal::prelude::*;

string_newtype! {
    /// The kind of a reaction, such as `like` or `love`.
    ///
    /// Reaction kinds are application-defined, so this is not an enum.
    ReactionType;
}

/// A message, as embedded in an event payload.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct MessagePayload {
    pub id: Option<MessageId>,
    pub text: Option<String>,
    /// The message type, such as `regular`, `system` or `deleted`.
    pub kind: Option<String>,
    /// The author of the message.
    pub user: Option<UserPayload>,
    /// The id of the thread root, for messages posted in a thread.
    pub parent_id: Option<MessageId>,
    pub reply_count: Option<u64>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
    /// Fields of the message object this library does not know about, including custom message
    /// data.
    pub extra_data: JsonMap,
}

impl FromFields for MessagePayload {
    fn from_fields(mut fields: Fields) -> Result<Self> {
        Ok(Self {
            id: fields.take("id")?,
            text: fields.take("text")?,
            kind: fields.take_as("type", "kind")?,
            user: fields.take_object("user", "user")?,
            parent_id: fields.take("parent_id")?,
            reply_count: fields.take("reply_count")?,
            created_at: fields.take("created_at")?,
            updated_at: fields.take("updated_at")?,
            deleted_at: fields.take("deleted_at")?,
            extra_data: fields.into_rest(),
        })
    }
}

/// A reaction to a message, as embedded in an event payload.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ReactionPayload {
    pub kind: Option<ReactionType>,
    pub score: Option<i64>,
    pub message_id: Option<MessageId>,
    pub user: Option<UserPayload>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl FromFields for ReactionPayload {
    fn from_fields(mut fields: Fields) -> Result<Self> {
        Ok(Self {
            kind: fields.take_as("type", "kind")?,
            score: fields.take("score")?,
            message_id: fields.take("message_id")?,
            user: fields.take_object("user", "user")?,
            created_at: fields.take("created_at")?,
            updated_at: fields.take("updated_at")?,
        })
    }
}
