//! Notifications, which the server sends to the current user about channels it is a member of
//! but not necessarily watching.

use super::FromEventPayload;
use crate::internal::prelude::*;
use crate::model::prelude::*;
use crate::model::utils::required;

/// A new message was posted in a channel the current user is a member of.
///
/// Unlike [`MessageNewEvent`], this carries the channel as an object rather than a bare `cid`.
///
/// [`MessageNewEvent`]: super::MessageNewEvent
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct NotificationMessageNewEvent {
    /// The author of the message.
    pub user_id: UserId,
    pub cid: ChannelId,
    pub message_id: MessageId,
    pub created_at: Timestamp,
    pub unread_count: Option<UnreadCount>,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for NotificationMessageNewEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            user_id: required(payload.message_user_id().cloned(), "message.user.id")?,
            cid: required(payload.channel_cid().cloned(), "channel.cid")?,
            message_id: required(payload.message_id().cloned(), "message.id")?,
            created_at: required(
                payload.message.as_ref().and_then(|m| m.created_at),
                "message.created_at",
            )?,
            unread_count: payload.unread_count,
            payload,
        })
    }
}

event_capabilities!(
    NotificationMessageNewEvent: HasUser(user_id),
    HasChannel(cid),
    HasMessage(message_id),
);

/// The current user marked a channel as read.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct NotificationMarkReadEvent {
    pub user_id: UserId,
    pub cid: ChannelId,
    pub read_at: Timestamp,
    /// The unread counters of the current user after the channel was read.
    pub unread_count: UnreadCount,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for NotificationMarkReadEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            user_id: required(payload.user_id().cloned(), "user.id")?,
            cid: required(payload.channel_cid().cloned(), "channel.cid")?,
            read_at: required(payload.created_at, "created_at")?,
            unread_count: required(payload.unread_count, "unread_count")?,
            payload,
        })
    }
}

event_capabilities!(NotificationMarkReadEvent: HasUser(user_id), HasChannel(cid));

/// The current user marked all channels as read.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct NotificationMarkAllReadEvent {
    pub user_id: UserId,
    pub read_at: Timestamp,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for NotificationMarkAllReadEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            user_id: required(payload.user_id().cloned(), "user.id")?,
            read_at: required(payload.created_at, "created_at")?,
            payload,
        })
    }
}

event_capabilities!(NotificationMarkAllReadEvent: HasUser(user_id));

/// The current user was added to a channel.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct NotificationAddedToChannelEvent {
    pub cid: ChannelId,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for NotificationAddedToChannelEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            cid: required(payload.cid.clone(), "cid")?,
            payload,
        })
    }
}

event_capabilities!(NotificationAddedToChannelEvent: HasChannel(cid));

/// The current user was removed from a channel.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct NotificationRemovedFromChannelEvent {
    pub cid: ChannelId,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for NotificationRemovedFromChannelEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            cid: required(payload.cid.clone(), "cid")?,
            payload,
        })
    }
}

event_capabilities!(NotificationRemovedFromChannelEvent: HasChannel(cid));

/// Fails unless the member container of the payload is flagged as an invite.
///
/// Checked before anything else is extracted for the invite notifications.
fn ensure_invited(payload: &EventPayload) -> Result<()> {
    match payload.invite().and_then(|invite| invite.is_invited) {
        Some(true) => Ok(()),
        _ => Err(DecodeError::InvariantViolated("invited flag not set")),
    }
}

/// The channel, user and role shared by the invite notifications.
fn invite_fields(payload: &EventPayload) -> Result<(ChannelId, UserId, MemberRole)> {
    ensure_invited(payload)?;

    Ok((
        required(payload.channel_cid().cloned(), "channel.cid")?,
        required(payload.user_id().cloned(), "user.id")?,
        required(
            payload.invite().and_then(|invite| invite.role.clone()),
            "member_container.invite.role",
        )?,
    ))
}

/// The current user was invited to a channel.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct NotificationInvitedEvent {
    pub cid: ChannelId,
    /// The invited user.
    pub user_id: UserId,
    /// The role the user was invited with.
    pub member_role: MemberRole,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for NotificationInvitedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        let (cid, user_id, member_role) = invite_fields(&payload)?;

        Ok(Self {
            cid,
            user_id,
            member_role,
            payload,
        })
    }
}

event_capabilities!(NotificationInvitedEvent: HasUser(user_id), HasChannel(cid));

/// An invite to a channel was accepted.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct NotificationInviteAcceptedEvent {
    pub cid: ChannelId,
    pub user_id: UserId,
    pub member_role: MemberRole,
    pub accepted_at: Timestamp,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for NotificationInviteAcceptedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        let (cid, user_id, member_role) = invite_fields(&payload)?;
        let accepted_at = required(
            payload.invite().and_then(|invite| invite.invite_accepted_at),
            "member_container.invite.invite_accepted_at",
        )?;

        Ok(Self {
            cid,
            user_id,
            member_role,
            accepted_at,
            payload,
        })
    }
}

event_capabilities!(NotificationInviteAcceptedEvent: HasUser(user_id), HasChannel(cid));

/// An invite to a channel was rejected.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct NotificationInviteRejectedEvent {
    pub cid: ChannelId,
    pub user_id: UserId,
    pub member_role: MemberRole,
    pub rejected_at: Timestamp,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for NotificationInviteRejectedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        let (cid, user_id, member_role) = invite_fields(&payload)?;
        let rejected_at = required(
            payload.invite().and_then(|invite| invite.invite_rejected_at),
            "member_container.invite.invite_rejected_at",
        )?;

        Ok(Self {
            cid,
            user_id,
            member_role,
            rejected_at,
            payload,
        })
    }
}

event_capabilities!(NotificationInviteRejectedEvent: HasUser(user_id), HasChannel(cid));

/// The list of users muted by the current user changed.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct NotificationMutesUpdatedEvent {
    pub current_user_id: UserId,
    payload: Arc<EventPayload>,
}

impl NotificationMutesUpdatedEvent {
    /// The updated mutes, if the server sent them.
    #[must_use]
    pub fn muted_users(&self) -> Option<&[UserMutePayload]> {
        self.payload.current_user.as_ref()?.muted_users.as_deref()
    }
}

impl FromEventPayload for NotificationMutesUpdatedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            current_user_id: required(payload.current_user_id().cloned(), "current_user.id")?,
            payload,
        })
    }
}

event_capabilities!(NotificationMutesUpdatedEvent: HasCurrentUser(current_user_id));

/// The list of channels muted by the current user changed.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct NotificationChannelMutesUpdatedEvent {
    /// The id of the current user.
    pub user_id: UserId,
    payload: Arc<EventPayload>,
}

impl NotificationChannelMutesUpdatedEvent {
    /// The updated channel mutes, if the server sent them.
    #[must_use]
    pub fn muted_channels(&self) -> Option<&[ChannelMutePayload]> {
        self.payload.current_user.as_ref()?.muted_channels.as_deref()
    }
}

impl FromEventPayload for NotificationChannelMutesUpdatedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            user_id: required(payload.current_user_id().cloned(), "current_user.id")?,
            payload,
        })
    }
}

event_capabilities!(NotificationChannelMutesUpdatedEvent: HasUser(user_id));
