//! Events about channel membership.

use super::FromEventPayload;
use crate::internal::prelude::*;
use crate::model::prelude::*;
use crate::model::utils::required;

/// A user was added to a channel.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct MemberAddedEvent {
    pub member_user_id: UserId,
    pub cid: ChannelId,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for MemberAddedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            member_user_id: required(
                payload.member_user_id().cloned(),
                "member_container.member.user.id",
            )?,
            cid: required(payload.cid.clone(), "cid")?,
            payload,
        })
    }
}

event_capabilities!(MemberAddedEvent: HasMember(member_user_id), HasChannel(cid));

impl MemberAddedEvent {
    #[must_use]
    pub fn member(&self) -> Option<&MemberPayload> {
        self.payload.member_container.as_ref()?.member.as_ref()
    }
}

/// The membership of a user in a channel changed, such as its role.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct MemberUpdatedEvent {
    pub member_user_id: UserId,
    pub cid: ChannelId,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for MemberUpdatedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            member_user_id: required(
                payload.member_user_id().cloned(),
                "member_container.member.user.id",
            )?,
            cid: required(payload.cid.clone(), "cid")?,
            payload,
        })
    }
}

event_capabilities!(MemberUpdatedEvent: HasMember(member_user_id), HasChannel(cid));

impl MemberUpdatedEvent {
    #[must_use]
    pub fn member(&self) -> Option<&MemberPayload> {
        self.payload.member_container.as_ref()?.member.as_ref()
    }
}

/// A user was removed from a channel.
///
/// The server sends the removed user as the top level `user` of the frame, not within a
/// `member` object as for [`MemberAddedEvent`] and [`MemberUpdatedEvent`].
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct MemberRemovedEvent {
    pub member_user_id: UserId,
    pub cid: ChannelId,
    payload: Arc<EventPayload>,
}

impl FromEventPayload for MemberRemovedEvent {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self> {
        Ok(Self {
            member_user_id: required(payload.user_id().cloned(), "user.id")?,
            cid: required(payload.cid.clone(), "cid")?,
            payload,
        })
    }
}

event_capabilities!(MemberRemovedEvent: HasMember(member_user_id), HasChannel(cid));
