//! User objects carried by event payloads.

use super::prelude::*;
use super::utils::{Fields, FromFields};
use crate::internal::prelude::*;

/// A user, as embedded in an event payload.
///
/// Every field is optional: which of them are populated depends on the event kind and on the
/// server version.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UserPayload {
    pub id: Option<UserId>,
    pub name: Option<String>,
    pub image: Option<String>,
    /// The user's application-wide role, such as `user` or `admin`.
    pub role: Option<String>,
    pub is_online: Option<bool>,
    pub is_banned: Option<bool>,
    pub last_active_at: Option<Timestamp>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    /// Fields of the user object this library does not know about, including custom user data.
    pub extra_data: JsonMap,
}

impl FromFields for UserPayload {
    fn from_fields(mut fields: Fields) -> Result<Self> {
        Ok(Self {
            id: fields.take("id")?,
            name: fields.take("name")?,
            image: fields.take("image")?,
            role: fields.take("role")?,
            is_online: fields.take_as("online", "is_online")?,
            is_banned: fields.take_as("banned", "is_banned")?,
            last_active_at: fields.take_as("last_active", "last_active_at")?,
            created_at: fields.take("created_at")?,
            updated_at: fields.take("updated_at")?,
            extra_data: fields.into_rest(),
        })
    }
}

/// Unread counters of the current user.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct UnreadCount {
    /// The number of channels with unread messages.
    pub channels: u64,
    /// The total number of unread messages.
    pub messages: u64,
}

impl UnreadCount {
    /// Reads the counters, which the server sends as two sibling fields of the containing object.
    ///
    /// Present if either counter is; a missing counter then reads as zero.
    pub(crate) fn take(fields: &mut Fields) -> Result<Option<Self>> {
        let channels = fields.take_as("unread_channels", "unread_count.channels")?;
        let messages = fields.take_as("total_unread_count", "unread_count.messages")?;

        Ok(match (channels, messages) {
            (None, None) => None,
            (channels, messages) => Some(Self {
                channels: channels.unwrap_or(0),
                messages: messages.unwrap_or(0),
            }),
        })
    }
}

/// A user the current user has muted.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UserMutePayload {
    pub target: Option<UserPayload>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl FromFields for UserMutePayload {
    fn from_fields(mut fields: Fields) -> Result<Self> {
        Ok(Self {
            target: fields.take_object("target", "target")?,
            created_at: fields.take("created_at")?,
            updated_at: fields.take("updated_at")?,
        })
    }
}

/// A channel the current user has muted.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChannelMutePayload {
    pub channel: Option<ChannelPayload>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl FromFields for ChannelMutePayload {
    fn from_fields(mut fields: Fields) -> Result<Self> {
        Ok(Self {
            channel: fields.take_object("channel", "channel")?,
            created_at: fields.take("created_at")?,
            updated_at: fields.take("updated_at")?,
        })
    }
}

/// The user the connection is authenticated as, sent as `me`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CurrentUserPayload {
    /// The user's own fields, shared with every other user object.
    pub user: UserPayload,
    pub unread_count: Option<UnreadCount>,
    pub muted_users: Option<Vec<UserMutePayload>>,
    pub muted_channels: Option<Vec<ChannelMutePayload>>,
}

impl CurrentUserPayload {
    #[must_use]
    pub fn id(&self) -> Option<&UserId> {
        self.user.id.as_ref()
    }
}

impl FromFields for CurrentUserPayload {
    fn from_fields(mut fields: Fields) -> Result<Self> {
        let unread_count = UnreadCount::take(&mut fields)?;
        let muted_users = fields.take_list("mutes", "muted_users")?;
        let muted_channels = fields.take_list("channel_mutes", "muted_channels")?;

        Ok(Self {
            user: UserPayload::from_fields(fields)?,
            unread_count,
            muted_users,
            muted_channels,
        })
    }
}
