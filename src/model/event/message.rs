//! Events about messages and their reactions.

use super::FromEventPayload;
use crate::internal::prelude::*;
use crate::model::capability::HasReaction;
use crate::model::prelude::*;
use crate::model::utils::required;

/// A new message was posted in a channel the current user is watching.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct MessageNewEvent {
    /// The author of the message.
    pub user_id: UserId,
    pub cid: ChannelId,
    pub message_id: MessageId,
    pub created_at: Timestamp,
    /// The number of users watching the channel, if the server sent it.
    pub watcher_count: Option<u64>,
    pub unread_count: Option<UnreadCount>,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for MessageNewEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            user_id: required(payload.user_id().cloned(), "user.id")?,
            cid: required(payload.cid.clone(), "cid")?,
            message_id: required(payload.message_id().cloned(), "message.id")?,
            created_at: required(
                payload.message.as_ref().and_then(|m| m.created_at),
                "message.created_at",
            )?,
            watcher_count: payload.watcher_count,
            unread_count: payload.unread_count,
            payload,
        })
    }
}

event_capabilities!(MessageNewEvent: HasUser(user_id), HasChannel(cid), HasMessage(message_id));

/// A message was edited.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct MessageUpdatedEvent {
    pub user_id: UserId,
    pub cid: ChannelId,
    pub message_id: MessageId,
    pub updated_at: Timestamp,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for MessageUpdatedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            user_id: required(payload.user_id().cloned(), "user.id")?,
            cid: required(payload.cid.clone(), "cid")?,
            message_id: required(payload.message_id().cloned(), "message.id")?,
            updated_at: required(
                payload.message.as_ref().and_then(|m| m.updated_at),
                "message.updated_at",
            )?,
            payload,
        })
    }
}

event_capabilities!(MessageUpdatedEvent: HasUser(user_id), HasChannel(cid), HasMessage(message_id));

/// A message was deleted.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct MessageDeletedEvent {
    pub user_id: UserId,
    pub cid: ChannelId,
    pub message_id: MessageId,
    pub deleted_at: Timestamp,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for MessageDeletedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            user_id: required(payload.user_id().cloned(), "user.id")?,
            cid: required(payload.cid.clone(), "cid")?,
            message_id: required(payload.message_id().cloned(), "message.id")?,
            deleted_at: required(
                payload.message.as_ref().and_then(|m| m.deleted_at),
                "message.deleted_at",
            )?,
            payload,
        })
    }
}

event_capabilities!(MessageDeletedEvent: HasUser(user_id), HasChannel(cid), HasMessage(message_id));

/// A user marked a channel as read.
///
/// The server does not say up to which message the channel was read, only when.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct MessageReadEvent {
    /// The user who read the channel.
    pub user_id: UserId,
    pub cid: ChannelId,
    pub read_at: Timestamp,
    pub unread_count: Option<UnreadCount>,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for MessageReadEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            user_id: required(payload.user_id().cloned(), "user.id")?,
            cid: required(payload.cid.clone(), "cid")?,
            read_at: required(payload.created_at, "created_at")?,
            unread_count: payload.unread_count,
            payload,
        })
    }
}

event_capabilities!(MessageReadEvent: HasUser(user_id), HasChannel(cid));

/// A reaction was added to, changed on, or removed from a message.
///
/// Shared by [`Event::ReactionNew`], [`Event::ReactionUpdated`] and [`Event::ReactionDeleted`];
/// the variant tells which of these happened.
///
/// [`Event::ReactionNew`]: super::Event::ReactionNew
/// [`Event::ReactionUpdated`]: super::Event::ReactionUpdated
/// [`Event::ReactionDeleted`]: super::Event::ReactionDeleted
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ReactionEvent {
    /// The user who reacted.
    pub user_id: UserId,
    pub cid: ChannelId,
    /// The message reacted to.
    pub message_id: MessageId,
    pub reaction_type: ReactionType,
    pub reaction_score: i64,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for ReactionEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        let reaction = payload.reaction.as_ref();

        Ok(Self {
            user_id: required(payload.user_id().cloned(), "user.id")?,
            cid: required(payload.cid.clone(), "cid")?,
            message_id: required(payload.message_id().cloned(), "message.id")?,
            reaction_type: required(reaction.and_then(|r| r.kind.clone()), "reaction.kind")?,
            reaction_score: required(reaction.and_then(|r| r.score), "reaction.score")?,
            payload,
        })
    }
}

event_capabilities!(
    ReactionEvent: HasUser(user_id),
    HasChannel(cid),
    HasMessage(message_id),
    HasReaction(_),
);

impl HasReaction for ReactionEvent {
    fn reaction_type(&self) -> &ReactionType {
        &self.reaction_type
    }

    fn reaction_score(&self) -> i64 {
        self.reaction_score
    }
}

impl ReactionEvent {
    /// The full reaction object, as sent by the server.
    #[must_use]
    pub fn reaction(&self) -> Option<&ReactionPayload> {
        self.payload.reaction.as_ref()
    }
}
