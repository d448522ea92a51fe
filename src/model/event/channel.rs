//! Events about the lifecycle of channels.

use super::FromEventPayload;
use crate::internal::prelude::*;
use crate::model::prelude::*;
use crate::model::utils::required;

/// The data of a channel changed.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ChannelUpdatedEvent {
    pub cid: ChannelId,
    /// The user who updated the channel. Absent for updates made server side.
    pub user_id: Option<UserId>,
    payload: Arc<EventPayload>,
}

impl ChannelUpdatedEvent {
    /// The updated channel.
    #[must_use]
    pub fn channel(&self) -> Option<&ChannelPayload> {
        self.payload.channel.as_ref()
    }
}

impl FromEventPayload for ChannelUpdatedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            cid: required(payload.channel_cid().cloned(), "channel.cid")?,
            user_id: payload.user_id().cloned(),
            payload,
        })
    }
}

event_capabilities!(ChannelUpdatedEvent: HasChannel(cid));

/// A channel was deleted.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ChannelDeletedEvent {
    pub cid: ChannelId,
    pub deleted_at: Timestamp,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for ChannelDeletedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            cid: required(payload.cid.clone(), "cid")?,
            deleted_at: required(payload.created_at, "created_at")?,
            payload,
        })
    }
}

event_capabilities!(ChannelDeletedEvent: HasChannel(cid));

/// The message history of a channel was cleared.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ChannelTruncatedEvent {
    pub cid: ChannelId,
    pub truncated_at: Timestamp,
    /// The user who truncated the channel. Absent for truncations made server side.
    pub user_id: Option<UserId>,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for ChannelTruncatedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            cid: required(payload.cid.clone(), "cid")?,
            truncated_at: required(payload.created_at, "created_at")?,
            user_id: payload.user_id().cloned(),
            payload,
        })
    }
}

event_capabilities!(ChannelTruncatedEvent: HasChannel(cid));

/// A user hid a channel from their channel list.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ChannelHiddenEvent {
    pub cid: ChannelId,
    pub user_id: UserId,
    pub hidden_at: Timestamp,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for ChannelHiddenEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            cid: required(payload.cid.clone(), "cid")?,
            user_id: required(payload.user_id().cloned(), "user.id")?,
            hidden_at: required(payload.created_at, "created_at")?,
            payload,
        })
    }
}

event_capabilities!(ChannelHiddenEvent: HasUser(user_id), HasChannel(cid));

/// A hidden channel was shown again.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ChannelVisibleEvent {
    pub cid: ChannelId,
    pub user_id: UserId,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for ChannelVisibleEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            cid: required(payload.cid.clone(), "cid")?,
            user_id: required(payload.user_id().cloned(), "user.id")?,
            payload,
        })
    }
}

event_capabilities!(ChannelVisibleEvent: HasUser(user_id), HasChannel(cid));
