use std::fmt;

use serde::de::{Deserialize, Deserializer, Error as DeError, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::internal::prelude::*;

/// The type of event received over the WebSocket connection.
///
/// This is read from the `type` tag of every frame, and decides which [`Event`] variant the frame
/// is decoded into. Tags this version of the library does not know about are kept as
/// [`EventType::Unknown`] so the payload can still be inspected.
///
/// [`Event`]: super::Event
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum EventType {
    /// `message.new`, mapping to [`MessageNewEvent`].
    ///
    /// [`MessageNewEvent`]: super::MessageNewEvent
    MessageNew,
    /// `message.updated`, mapping to [`MessageUpdatedEvent`].
    ///
    /// [`MessageUpdatedEvent`]: super::MessageUpdatedEvent
    MessageUpdated,
    /// `message.deleted`, mapping to [`MessageDeletedEvent`].
    ///
    /// [`MessageDeletedEvent`]: super::MessageDeletedEvent
    MessageDeleted,
    /// `message.read`, mapping to [`MessageReadEvent`].
    ///
    /// [`MessageReadEvent`]: super::MessageReadEvent
    MessageRead,
    /// `reaction.new`, mapping to [`ReactionEvent`].
    ///
    /// [`ReactionEvent`]: super::ReactionEvent
    ReactionNew,
    /// `reaction.updated`, mapping to [`ReactionEvent`].
    ///
    /// [`ReactionEvent`]: super::ReactionEvent
    ReactionUpdated,
    /// `reaction.deleted`, mapping to [`ReactionEvent`].
    ///
    /// [`ReactionEvent`]: super::ReactionEvent
    ReactionDeleted,
    NotificationMessageNew,
    NotificationMarkRead,
    NotificationMarkAllRead,
    NotificationAddedToChannel,
    NotificationRemovedFromChannel,
    NotificationInvited,
    NotificationInviteAccepted,
    NotificationInviteRejected,
    NotificationMutesUpdated,
    NotificationChannelMutesUpdated,
    MemberAdded,
    MemberUpdated,
    MemberRemoved,
    UserPresenceChanged,
    UserUpdated,
    /// `user.watching.start`, mapping to [`UserWatchingEvent`].
    ///
    /// [`UserWatchingEvent`]: super::UserWatchingEvent
    UserWatchingStart,
    /// `user.watching.stop`, mapping to [`UserWatchingEvent`].
    ///
    /// [`UserWatchingEvent`]: super::UserWatchingEvent
    UserWatchingStop,
    UserBanned,
    UserUnbanned,
    UserGloballyBanned,
    UserGloballyUnbanned,
    /// `typing.start`, mapping to [`TypingEvent`].
    ///
    /// [`TypingEvent`]: super::TypingEvent
    TypingStart,
    /// `typing.stop`, mapping to [`TypingEvent`].
    ///
    /// [`TypingEvent`]: super::TypingEvent
    TypingStop,
    ChannelUpdated,
    ChannelDeleted,
    ChannelTruncated,
    ChannelHidden,
    ChannelVisible,
    /// `health.check`, sent periodically by the server and once the connection is established.
    HealthCheck,
    /// An event type not known to this version of the library.
    ///
    /// This should be logged so that support for it can be added in the library.
    Unknown(String),
}

impl EventType {
    /// Every known event type, in the order the tags are matched.
    pub const KNOWN: &'static [EventType] = &[
        Self::MessageNew,
        Self::MessageUpdated,
        Self::MessageDeleted,
        Self::MessageRead,
        Self::ReactionNew,
        Self::ReactionUpdated,
        Self::ReactionDeleted,
        Self::NotificationMessageNew,
        Self::NotificationMarkRead,
        Self::NotificationMarkAllRead,
        Self::NotificationAddedToChannel,
        Self::NotificationRemovedFromChannel,
        Self::NotificationInvited,
        Self::NotificationInviteAccepted,
        Self::NotificationInviteRejected,
        Self::NotificationMutesUpdated,
        Self::NotificationChannelMutesUpdated,
        Self::MemberAdded,
        Self::MemberUpdated,
        Self::MemberRemoved,
        Self::UserPresenceChanged,
        Self::UserUpdated,
        Self::UserWatchingStart,
        Self::UserWatchingStop,
        Self::UserBanned,
        Self::UserUnbanned,
        Self::UserGloballyBanned,
        Self::UserGloballyUnbanned,
        Self::TypingStart,
        Self::TypingStop,
        Self::ChannelUpdated,
        Self::ChannelDeleted,
        Self::ChannelTruncated,
        Self::ChannelHidden,
        Self::ChannelVisible,
        Self::HealthCheck,
    ];

    /// Maps a raw `type` tag to the event type.
    ///
    /// Both the dotted (`user.watching.start`) and underscored (`user.watching_start`) spellings
    /// of the watching tags are accepted.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "message.new" => Self::MessageNew,
            "message.updated" => Self::MessageUpdated,
            "message.deleted" => Self::MessageDeleted,
            "message.read" => Self::MessageRead,
            "reaction.new" => Self::ReactionNew,
            "reaction.updated" => Self::ReactionUpdated,
            "reaction.deleted" => Self::ReactionDeleted,
            "notification.message_new" => Self::NotificationMessageNew,
            "notification.mark_read" => Self::NotificationMarkRead,
            "notification.mark_all_read" => Self::NotificationMarkAllRead,
            "notification.added_to_channel" => Self::NotificationAddedToChannel,
            "notification.removed_from_channel" => Self::NotificationRemovedFromChannel,
            "notification.invited" => Self::NotificationInvited,
            "notification.invite_accepted" => Self::NotificationInviteAccepted,
            "notification.invite_rejected" => Self::NotificationInviteRejected,
            "notification.mutes_updated" => Self::NotificationMutesUpdated,
            "notification.channel_mutes_updated" => Self::NotificationChannelMutesUpdated,
            "member.added" => Self::MemberAdded,
            "member.updated" => Self::MemberUpdated,
            "member.removed" => Self::MemberRemoved,
            "user.presence.changed" | "user.presence_changed" => Self::UserPresenceChanged,
            "user.updated" => Self::UserUpdated,
            "user.watching.start" | "user.watching_start" => Self::UserWatchingStart,
            "user.watching.stop" | "user.watching_stop" => Self::UserWatchingStop,
            "user.banned" => Self::UserBanned,
            "user.unbanned" => Self::UserUnbanned,
            "user.global_banned" => Self::UserGloballyBanned,
            "user.global_unbanned" => Self::UserGloballyUnbanned,
            "typing.start" => Self::TypingStart,
            "typing.stop" => Self::TypingStop,
            "channel.updated" => Self::ChannelUpdated,
            "channel.deleted" => Self::ChannelDeleted,
            "channel.truncated" => Self::ChannelTruncated,
            "channel.hidden" => Self::ChannelHidden,
            "channel.visible" => Self::ChannelVisible,
            "health.check" => Self::HealthCheck,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// The tag of the event type, as sent by the server.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::MessageNew => "message.new",
            Self::MessageUpdated => "message.updated",
            Self::MessageDeleted => "message.deleted",
            Self::MessageRead => "message.read",
            Self::ReactionNew => "reaction.new",
            Self::ReactionUpdated => "reaction.updated",
            Self::ReactionDeleted => "reaction.deleted",
            Self::NotificationMessageNew => "notification.message_new",
            Self::NotificationMarkRead => "notification.mark_read",
            Self::NotificationMarkAllRead => "notification.mark_all_read",
            Self::NotificationAddedToChannel => "notification.added_to_channel",
            Self::NotificationRemovedFromChannel => "notification.removed_from_channel",
            Self::NotificationInvited => "notification.invited",
            Self::NotificationInviteAccepted => "notification.invite_accepted",
            Self::NotificationInviteRejected => "notification.invite_rejected",
            Self::NotificationMutesUpdated => "notification.mutes_updated",
            Self::NotificationChannelMutesUpdated => "notification.channel_mutes_updated",
            Self::MemberAdded => "member.added",
            Self::MemberUpdated => "member.updated",
            Self::MemberRemoved => "member.removed",
            Self::UserPresenceChanged => "user.presence.changed",
            Self::UserUpdated => "user.updated",
            Self::UserWatchingStart => "user.watching.start",
            Self::UserWatchingStop => "user.watching.stop",
            Self::UserBanned => "user.banned",
            Self::UserUnbanned => "user.unbanned",
            Self::UserGloballyBanned => "user.global_banned",
            Self::UserGloballyUnbanned => "user.global_unbanned",
            Self::TypingStart => "typing.start",
            Self::TypingStop => "typing.stop",
            Self::ChannelUpdated => "channel.updated",
            Self::ChannelDeleted => "channel.deleted",
            Self::ChannelTruncated => "channel.truncated",
            Self::ChannelHidden => "channel.hidden",
            Self::ChannelVisible => "channel.visible",
            Self::HealthCheck => "health.check",
            Self::Unknown(tag) => tag,
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EventTypeVisitor;

        impl<'de> Visitor<'de> for EventTypeVisitor {
            type Value = EventType;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("event type str")
            }

            fn visit_str<E>(self, v: &str) -> StdResult<Self::Value, E>
            where
                E: DeError,
            {
                Ok(EventType::from_tag(v))
            }
        }

        deserializer.deserialize_str(EventTypeVisitor)
    }
}

impl Serialize for EventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
