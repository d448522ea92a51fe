//! The generic payload every event frame decodes into.
//!
//! One wire shape serves every event kind: the server populates whichever of these fields the
//! kind needs. [`EventPayload`] therefore never enforces which fields are present; that is left
//! to the construction of the concrete [`Event`] variant, which extracts and validates only the
//! fields it needs.
//!
//! [`Event`]: super::event::Event

use super::prelude::*;
use super::utils::{Fields, FromFields};
use crate::internal::prelude::*;
use crate::json;

/// The decoded contents of one event frame.
///
/// Each [`Event`] keeps a shared reference to the payload it was built from, for callers that
/// need data beyond the event's typed fields.
///
/// [`Event`]: super::event::Event
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct EventPayload {
    /// The `type` tag of the frame. The only field every frame must carry.
    pub event_type: EventType,
    pub cid: Option<ChannelId>,
    /// The id of the WebSocket connection, sent with health checks.
    pub connection_id: Option<String>,
    pub user: Option<UserPayload>,
    pub current_user: Option<CurrentUserPayload>,
    pub created_by: Option<UserPayload>,
    pub channel: Option<ChannelPayload>,
    pub message: Option<MessagePayload>,
    pub member_container: Option<MemberContainerPayload>,
    pub reaction: Option<ReactionPayload>,
    pub watcher_count: Option<u64>,
    pub unread_count: Option<UnreadCount>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
    pub ban_reason: Option<String>,
    pub ban_expired_at: Option<Timestamp>,
}

impl EventPayload {
    /// Decodes a payload from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Malformed`] if the bytes are not a JSON object, and otherwise the
    /// same errors as [`Self::from_value`].
    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        Self::from_value(json::from_slice(raw)?)
    }

    /// Decodes a payload from an already parsed JSON value.
    ///
    /// Decoding is purely structural. Absent and `null` fields decode to `None`.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Malformed`] if the value is not an object.
    /// - [`DecodeError::MissingEventKind`] if there is no `type` field.
    /// - [`DecodeError::TypeMismatch`] if a present field has the wrong shape.
    pub fn from_value(value: Value) -> Result<Self> {
        let map = json::into_object(value)?;

        Self::from_fields(Fields::new(map, FieldPath::root()))
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&UserId> {
        self.user.as_ref()?.id.as_ref()
    }

    #[must_use]
    pub fn current_user_id(&self) -> Option<&UserId> {
        self.current_user.as_ref()?.id()
    }

    #[must_use]
    pub fn created_by_id(&self) -> Option<&UserId> {
        self.created_by.as_ref()?.id.as_ref()
    }

    #[must_use]
    pub fn channel_cid(&self) -> Option<&ChannelId> {
        self.channel.as_ref()?.cid.as_ref()
    }

    #[must_use]
    pub fn message_id(&self) -> Option<&MessageId> {
        self.message.as_ref()?.id.as_ref()
    }

    /// The author of the embedded message.
    #[must_use]
    pub fn message_user_id(&self) -> Option<&UserId> {
        self.message.as_ref()?.user.as_ref()?.id.as_ref()
    }

    /// The user of the embedded channel membership.
    #[must_use]
    pub fn member_user_id(&self) -> Option<&UserId> {
        self.member_container.as_ref()?.member.as_ref()?.user.as_ref()?.id.as_ref()
    }

    #[must_use]
    pub fn invite(&self) -> Option<&InvitePayload> {
        self.member_container.as_ref()?.invite.as_ref()
    }
}

impl FromFields for EventPayload {
    fn from_fields(mut fields: Fields) -> Result<Self> {
        let event_type = fields
            .take_as::<EventType>("type", "event_type")?
            .ok_or(DecodeError::MissingEventKind)?;
        let unread_count = UnreadCount::take(&mut fields)?;

        Ok(Self {
            event_type,
            cid: fields.take("cid")?,
            connection_id: fields.take("connection_id")?,
            user: fields.take_object("user", "user")?,
            current_user: fields.take_object("me", "current_user")?,
            created_by: fields.take_object("created_by", "created_by")?,
            channel: fields.take_object("channel", "channel")?,
            message: fields.take_object("message", "message")?,
            member_container: fields.take_object("member", "member_container")?,
            reaction: fields.take_object("reaction", "reaction")?,
            watcher_count: fields.take("watcher_count")?,
            unread_count,
            created_at: fields.take("created_at")?,
            updated_at: fields.take("updated_at")?,
            deleted_at: fields.take("deleted_at")?,
            ban_reason: fields.take_as("reason", "ban_reason")?,
            ban_expired_at: fields.take_as("expiration", "ban_expired_at")?,
        })
    }
}
