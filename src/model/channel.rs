//! Channel objects carried by event payloads.

use super::prelude::*;
use super::utils::{Fields, FromFields};
use crate::internal::prelude::*;

/// A channel, as embedded in an event payload.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChannelPayload {
    pub cid: Option<ChannelId>,
    /// The id of the channel within its type; the second half of [`Self::cid`].
    pub id: Option<String>,
    pub kind: Option<ChannelType>,
    pub name: Option<String>,
    pub member_count: Option<u64>,
    pub frozen: Option<bool>,
    pub created_by: Option<UserPayload>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
    /// Fields of the channel object this library does not know about, including custom channel
    /// data.
    pub extra_data: JsonMap,
}

impl FromFields for ChannelPayload {
    fn from_fields(mut fields: Fields) -> Result<Self> {
        Ok(Self {
            cid: fields.take("cid")?,
            id: fields.take("id")?,
            kind: fields.take_as("type", "kind")?,
            name: fields.take("name")?,
            member_count: fields.take("member_count")?,
            frozen: fields.take("frozen")?,
            created_by: fields.take_object("created_by", "created_by")?,
            created_at: fields.take("created_at")?,
            updated_at: fields.take("updated_at")?,
            deleted_at: fields.take("deleted_at")?,
            extra_data: fields.into_rest(),
        })
    }
}
