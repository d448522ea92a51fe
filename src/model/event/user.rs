//! Events about users: presence, profile updates, watching, bans and typing.

use super::FromEventPayload;
use crate::internal::prelude::*;
use crate::model::prelude::*;
use crate::model::utils::required;

/// A user went online or offline.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct UserPresenceChangedEvent {
    pub user_id: UserId,
    pub created_at: Option<Timestamp>,
    payload: Arc<EventPayload>,
}

impl UserPresenceChangedEvent {
    /// Whether the user is now online, if the server sent it.
    #[must_use]
    pub fn is_online(&self) -> Option<bool> {
        self.payload.user.as_ref()?.is_online
    }
}

impl FromEventPayload for UserPresenceChangedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            user_id: required(payload.user_id().cloned(), "user.id")?,
            created_at: payload.created_at,
            payload,
        })
    }
}

event_capabilities!(UserPresenceChangedEvent: HasUser(user_id));

/// The profile of a user changed.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct UserUpdatedEvent {
    pub user_id: UserId,
    pub created_at: Option<Timestamp>,
    payload: Arc<EventPayload>,
}

impl UserUpdatedEvent {
    /// The updated user.
    #[must_use]
    pub fn user(&self) -> Option<&UserPayload> {
        self.payload.user.as_ref()
    }
}

impl FromEventPayload for UserUpdatedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            user_id: required(payload.user_id().cloned(), "user.id")?,
            created_at: payload.created_at,
            payload,
        })
    }
}

event_capabilities!(UserUpdatedEvent: HasUser(user_id));

/// A user started or stopped watching a channel.
///
/// Decoded from both `user.watching.start` and `user.watching.stop` frames.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct UserWatchingEvent {
    pub cid: ChannelId,
    pub user_id: UserId,
    pub created_at: Timestamp,
    /// The number of users watching the channel after the change.
    pub watcher_count: u64,
    /// Whether the user started watching, as opposed to stopped.
    pub is_started: bool,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for UserWatchingEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            cid: required(payload.cid.clone(), "cid")?,
            user_id: required(payload.user_id().cloned(), "user.id")?,
            created_at: required(payload.created_at, "created_at")?,
            watcher_count: required(payload.watcher_count, "watcher_count")?,
            is_started: payload.event_type == EventType::UserWatchingStart,
            payload,
        })
    }
}

event_capabilities!(UserWatchingEvent: HasUser(user_id), HasChannel(cid));

/// A user was banned from a channel.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct UserBannedEvent {
    pub cid: ChannelId,
    /// The banned user.
    pub user_id: UserId,
    /// The user who issued the ban.
    pub owner_id: UserId,
    pub created_at: Option<Timestamp>,
    pub reason: Option<String>,
    /// When the ban ends. Bans without an expiration are permanent.
    pub expired_at: Option<Timestamp>,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for UserBannedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            cid: required(payload.cid.clone(), "cid")?,
            user_id: required(payload.user_id().cloned(), "user.id")?,
            owner_id: required(payload.created_by_id().cloned(), "created_by.id")?,
            created_at: payload.created_at,
            reason: payload.ban_reason.clone(),
            expired_at: payload.ban_expired_at,
            payload,
        })
    }
}

event_capabilities!(UserBannedEvent: HasUser(user_id), HasChannel(cid));

/// A ban of a user from a channel was lifted.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct UserUnbannedEvent {
    pub cid: ChannelId,
    pub user_id: UserId,
    pub created_at: Option<Timestamp>,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for UserUnbannedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            cid: required(payload.cid.clone(), "cid")?,
            user_id: required(payload.user_id().cloned(), "user.id")?,
            created_at: payload.created_at,
            payload,
        })
    }
}

event_capabilities!(UserUnbannedEvent: HasUser(user_id), HasChannel(cid));

/// A user was banned from the whole application.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct UserGloballyBannedEvent {
    pub user_id: UserId,
    pub created_at: Option<Timestamp>,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for UserGloballyBannedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            user_id: required(payload.user_id().cloned(), "user.id")?,
            created_at: payload.created_at,
            payload,
        })
    }
}

event_capabilities!(UserGloballyBannedEvent: HasUser(user_id));

/// An application-wide ban of a user was lifted.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct UserGloballyUnbannedEvent {
    pub user_id: UserId,
    pub created_at: Option<Timestamp>,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for UserGloballyUnbannedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            user_id: required(payload.user_id().cloned(), "user.id")?,
            created_at: payload.created_at,
            payload,
        })
    }
}

event_capabilities!(UserGloballyUnbannedEvent: HasUser(user_id));

/// A user started or stopped typing in a channel.
///
/// Decoded from both `typing.start` and `typing.stop` frames.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct TypingEvent {
    pub cid: ChannelId,
    pub user_id: UserId,
    pub is_typing: bool,
    pub created_at: Option<Timestamp>,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for TypingEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            cid: required(payload.cid.clone(), "cid")?,
            user_id: required(payload.user_id().cloned(), "user.id")?,
            is_typing: payload.event_type == EventType::TypingStart,
            created_at: payload.created_at,
            payload,
        })
    }
}

event_capabilities!(
    TypingEvent: HasUser(user_id),
    HasChannel(cid),
    HasTypingState(is_typing),
);
