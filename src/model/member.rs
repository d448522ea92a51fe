//! Channel membership and invite objects carried by event payloads.

use super::prelude::*;
use super::utils::{Fields, FromFields};
use crate::internal::prelude::*;

string_enum! {
    /// The role of a member within a channel.
    MemberRole {
        /// A regular member.
        Member = "member",
        /// A moderator of the channel.
        Moderator = "moderator",
        /// An administrator of the channel.
        Admin = "admin",
        /// The creator of the channel.
        Owner = "owner",
    }
}

/// The membership of a user in a channel.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct MemberPayload {
    pub user: Option<UserPayload>,
    pub role: Option<MemberRole>,
    pub is_moderator: Option<bool>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl MemberPayload {
    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl FromFields for MemberPayload {
    fn from_fields(mut fields: Fields) -> Result<Self> {
        Ok(Self {
            user: fields.take_object("user", "user")?,
            role: fields.take("role")?,
            is_moderator: fields.take("is_moderator")?,
            created_at: fields.take("created_at")?,
            updated_at: fields.take("updated_at")?,
        })
    }
}

/// The invite state of a member.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InvitePayload {
    pub is_invited: Option<bool>,
    /// The role the member was invited with.
    pub role: Option<MemberRole>,
    pub invite_accepted_at: Option<Timestamp>,
    pub invite_rejected_at: Option<Timestamp>,
}

impl InvitePayload {
    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl FromFields for InvitePayload {
    fn from_fields(mut fields: Fields) -> Result<Self> {
        Ok(Self {
            is_invited: fields.take_as("invited", "is_invited")?,
            role: fields.take("role")?,
            invite_accepted_at: fields.take("invite_accepted_at")?,
            invite_rejected_at: fields.take("invite_rejected_at")?,
        })
    }
}

/// The `member` object of an event.
///
/// The server sends membership and invite state as one flat object; they are split into two
/// records here, each present only if at least one of its fields is.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct MemberContainerPayload {
    pub member: Option<MemberPayload>,
    pub invite: Option<InvitePayload>,
}

impl FromFields for MemberContainerPayload {
    fn from_fields(fields: Fields) -> Result<Self> {
        let invite = InvitePayload::from_fields(fields.fork("invite"))?;
        let member = MemberPayload::from_fields(fields.fork("member"))?;

        Ok(Self {
            member: (!member.is_empty()).then_some(member),
            invite: (!invite.is_empty()).then_some(invite),
        })
    }
}
