//! All the events this library handles.
//!
//! Every frame received over the WebSocket connection is a JSON object with a `type` tag. The
//! frame is first decoded into an [`EventPayload`], and the tag then selects which [`Event`]
//! variant is built from it, extracting and validating only the fields that variant needs.

mod channel;
mod connection;
mod kind;
mod member;
mod message;
mod notification;
mod user;

use std::str::FromStr;

#[cfg(feature = "tracing_instrument")]
use tracing::instrument;
use tracing::{debug, trace, warn};

pub use self::channel::*;
pub use self::connection::*;
pub use self::kind::EventType;
pub use self::member::*;
pub use self::message::*;
pub use self::notification::*;
pub use self::user::*;
use super::capability::{
    CapabilityViews,
    EventWithPayload,
    HasChannel,
    HasCurrentUser,
    HasMember,
    HasMessage,
    HasReaction,
    HasTypingState,
    HasUser,
};
use super::prelude::*;
use crate::internal::prelude::*;

/// An event struct built from a shared payload, extracting the fields required by its kind.
pub(crate) trait FromEventPayload: Sized {
    fn from_payload(payload: Arc<EventPayload>) -> Result<Self>;
}

macro_rules! events {
    ($(
        $(#[doc = $doc:literal])*
        $variant:ident($event:ident) <= $($kind:ident)|+,
    )*) => {
        /// Event received over a WebSocket connection.
        ///
        /// Every variant keeps the [`EventPayload`] it was decoded from, available through
        /// [`Event::payload`].
        #[derive(Clone, Debug, PartialEq)]
        #[non_exhaustive]
        pub enum Event {
            $(
                $(#[doc = $doc])*
                $variant($event),
            )*
        }

        impl Event {
            /// Builds the event selected by the kind of the payload.
            ///
            /// # Errors
            ///
            /// - [`DecodeError::UnknownEventType`] if the kind is not known to this library.
            /// - [`DecodeError::MissingRequiredField`] if a field required by the kind is absent.
            /// - [`DecodeError::InvariantViolated`] for invite notifications not flagged as
            ///   invites.
            pub fn from_payload(payload: EventPayload) -> Result<Self> {
                let kind = payload.event_type.clone();
                let payload = Arc::new(payload);

                Ok(match kind {
                    $(
                        $(EventType::$kind)|+ => Self::$variant($event::from_payload(payload)?),
                    )*
                    EventType::Unknown(tag) => return Err(DecodeError::UnknownEventType(tag)),
                })
            }

            /// The payload the event was decoded from.
            #[must_use]
            pub fn payload(&self) -> &Arc<EventPayload> {
                match self {
                    $(Self::$variant(event) => event.payload(),)*
                }
            }

            fn views(&self) -> &dyn CapabilityViews {
                match self {
                    $(Self::$variant(event) => event as &dyn CapabilityViews,)*
                }
            }
        }
    };
}

events! {
    /// A new message was posted.
    MessageNew(MessageNewEvent) <= MessageNew,
    MessageUpdated(MessageUpdatedEvent) <= MessageUpdated,
    MessageDeleted(MessageDeletedEvent) <= MessageDeleted,
    MessageRead(MessageReadEvent) <= MessageRead,
    /// A reaction was added to a message.
    ReactionNew(ReactionEvent) <= ReactionNew,
    ReactionUpdated(ReactionEvent) <= ReactionUpdated,
    /// A reaction was removed from a message.
    ReactionDeleted(ReactionEvent) <= ReactionDeleted,
    NotificationMessageNew(NotificationMessageNewEvent) <= NotificationMessageNew,
    NotificationMarkRead(NotificationMarkReadEvent) <= NotificationMarkRead,
    NotificationMarkAllRead(NotificationMarkAllReadEvent) <= NotificationMarkAllRead,
    NotificationAddedToChannel(NotificationAddedToChannelEvent) <= NotificationAddedToChannel,
    NotificationRemovedFromChannel(NotificationRemovedFromChannelEvent)
        <= NotificationRemovedFromChannel,
    NotificationInvited(NotificationInvitedEvent) <= NotificationInvited,
    NotificationInviteAccepted(NotificationInviteAcceptedEvent) <= NotificationInviteAccepted,
    NotificationInviteRejected(NotificationInviteRejectedEvent) <= NotificationInviteRejected,
    NotificationMutesUpdated(NotificationMutesUpdatedEvent) <= NotificationMutesUpdated,
    NotificationChannelMutesUpdated(NotificationChannelMutesUpdatedEvent)
        <= NotificationChannelMutesUpdated,
    MemberAdded(MemberAddedEvent) <= MemberAdded,
    MemberUpdated(MemberUpdatedEvent) <= MemberUpdated,
    /// A user was removed from a channel.
    ///
    /// Note that the removed user is read from the top level `user` of the frame.
    MemberRemoved(MemberRemovedEvent) <= MemberRemoved,
    UserPresenceChanged(UserPresenceChangedEvent) <= UserPresenceChanged,
    UserUpdated(UserUpdatedEvent) <= UserUpdated,
    /// A user started or stopped watching a channel.
    UserWatching(UserWatchingEvent) <= UserWatchingStart | UserWatchingStop,
    UserBanned(UserBannedEvent) <= UserBanned,
    UserUnbanned(UserUnbannedEvent) <= UserUnbanned,
    UserGloballyBanned(UserGloballyBannedEvent) <= UserGloballyBanned,
    UserGloballyUnbanned(UserGloballyUnbannedEvent) <= UserGloballyUnbanned,
    /// A user started or stopped typing.
    Typing(TypingEvent) <= TypingStart | TypingStop,
    ChannelUpdated(ChannelUpdatedEvent) <= ChannelUpdated,
    ChannelDeleted(ChannelDeletedEvent) <= ChannelDeleted,
    ChannelTruncated(ChannelTruncatedEvent) <= ChannelTruncated,
    ChannelHidden(ChannelHiddenEvent) <= ChannelHidden,
    ChannelVisible(ChannelVisibleEvent) <= ChannelVisible,
    /// The connection is alive.
    HealthCheck(HealthCheckEvent) <= HealthCheck,
}

impl Event {
    /// Decodes an event from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Malformed`] if the bytes are not a JSON object, and otherwise the
    /// errors of [`EventPayload::from_value`] and [`Self::from_payload`].
    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        Self::from_payload(EventPayload::from_slice(raw)?)
    }

    /// Decodes an event from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_slice`].
    pub fn from_value(value: Value) -> Result<Self> {
        Self::from_payload(EventPayload::from_value(value)?)
    }

    /// The kind of the event, as tagged by the server.
    ///
    /// Events sharing a variant, such as [`Event::Typing`], are told apart by their kind.
    #[must_use]
    pub fn kind(&self) -> &EventType {
        &self.payload().event_type
    }

    #[must_use]
    pub fn as_user_event(&self) -> Option<&dyn HasUser> {
        self.views().as_user_event()
    }

    #[must_use]
    pub fn as_channel_event(&self) -> Option<&dyn HasChannel> {
        self.views().as_channel_event()
    }

    #[must_use]
    pub fn as_message_event(&self) -> Option<&dyn HasMessage> {
        self.views().as_message_event()
    }

    #[must_use]
    pub fn as_member_event(&self) -> Option<&dyn HasMember> {
        self.views().as_member_event()
    }

    #[must_use]
    pub fn as_reaction_event(&self) -> Option<&dyn HasReaction> {
        self.views().as_reaction_event()
    }

    #[must_use]
    pub fn as_current_user_event(&self) -> Option<&dyn HasCurrentUser> {
        self.views().as_current_user_event()
    }

    #[must_use]
    pub fn as_typing_event(&self) -> Option<&dyn HasTypingState> {
        self.views().as_typing_event()
    }

    /// The capabilities of the event.
    ///
    /// A capability is set exactly when the matching `as_*_event` view returns `Some`.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        let mut capabilities = Capabilities::empty();

        capabilities.set(Capabilities::USER, self.as_user_event().is_some());
        capabilities.set(Capabilities::CHANNEL, self.as_channel_event().is_some());
        capabilities.set(Capabilities::MESSAGE, self.as_message_event().is_some());
        capabilities.set(Capabilities::MEMBER, self.as_member_event().is_some());
        capabilities.set(Capabilities::REACTION, self.as_reaction_event().is_some());
        capabilities.set(Capabilities::CURRENT_USER, self.as_current_user_event().is_some());
        capabilities.set(Capabilities::TYPING_STATE, self.as_typing_event().is_some());

        capabilities
    }

    /// The user the event relates to, for events with [`HasUser`].
    #[must_use]
    pub fn user_id(&self) -> Option<&UserId> {
        self.as_user_event().map(|event| event.user_id())
    }

    /// The channel the event relates to, for events with [`HasChannel`].
    #[must_use]
    pub fn channel_id(&self) -> Option<&ChannelId> {
        self.as_channel_event().map(|event| event.channel_id())
    }

    #[must_use]
    pub fn message_id(&self) -> Option<&MessageId> {
        self.as_message_event().map(|event| event.message_id())
    }

    #[must_use]
    pub fn member_user_id(&self) -> Option<&UserId> {
        self.as_member_event().map(|event| event.member_user_id())
    }

    #[must_use]
    pub fn current_user_id(&self) -> Option<&UserId> {
        self.as_current_user_event().map(|event| event.current_user_id())
    }

    #[must_use]
    pub fn is_typing(&self) -> Option<bool> {
        self.as_typing_event().map(|event| event.is_typing())
    }
}

impl FromStr for Event {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(s.as_bytes())
    }
}

impl TryFrom<Value> for Event {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

/// Decodes one frame received over the WebSocket connection.
///
/// # Examples
///
/// ```rust
/// use chat_events::model::event::Event;
///
/// let raw = br#"{
///     "type": "typing.start",
///     "cid": "messaging:general",
///     "user": {"id": "luke_skywalker"}
/// }"#;
///
/// let event = chat_events::decode(raw)?;
///
/// assert!(matches!(event, Event::Typing(_)));
/// assert_eq!(event.is_typing(), Some(true));
/// assert_eq!(event.channel_id().map(ToString::to_string).as_deref(), Some("messaging:general"));
/// # Ok::<(), chat_events::DecodeError>(())
/// ```
///
/// # Errors
///
/// Returns a [`DecodeError`] if the frame is not a valid event. The event is either decoded
/// whole or not at all.
#[cfg_attr(feature = "tracing_instrument", instrument(skip(raw)))]
pub fn decode(raw: &[u8]) -> Result<Event> {
    let event = Event::from_slice(raw)?;

    trace!("Decoded {} event", event.kind());

    Ok(event)
}

/// Decodes one frame, skipping events of kinds this library does not know about.
///
/// Servers may send kinds newer than this library; those are logged and yield `Ok(None)`.
///
/// # Errors
///
/// Returns every [`DecodeError`] other than [`DecodeError::UnknownEventType`].
#[cfg_attr(feature = "tracing_instrument", instrument(skip(raw)))]
pub fn try_decode(raw: &[u8]) -> Result<Option<Event>> {
    match decode(raw) {
        Ok(event) => Ok(Some(event)),
        Err(DecodeError::UnknownEventType(kind)) => {
            debug!("Skipping event of unknown type {:?}", kind);

            Ok(None)
        },
        Err(why) => {
            warn!("Err decoding event: {:?}; bytes: {}", why, String::from_utf8_lossy(raw));

            Err(why)
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::json::json;

    #[test]
    fn every_known_kind_is_dispatched() {
        for kind in EventType::KNOWN {
            let err = Event::from_value(json!({"type": kind.as_str()})).err();

            assert!(
                !matches!(err, Some(DecodeError::UnknownEventType(_))),
                "{kind} is not dispatched"
            );
        }
    }

    #[test]
    fn shared_variants_keep_their_kind() {
        let start = Event::from_value(json!({
            "type": "user.watching.start",
            "cid": "messaging:general",
            "user": {"id": "luke_skywalker"},
            "created_at": "2020-07-21T14:47:57Z",
            "watcher_count": 3,
        }))
        .unwrap();
        let stop = Event::from_value(json!({
            "type": "user.watching_stop",
            "cid": "messaging:general",
            "user": {"id": "luke_skywalker"},
            "created_at": "2020-07-21T14:47:57Z",
            "watcher_count": 2,
        }))
        .unwrap();

        assert_eq!(start.kind(), &EventType::UserWatchingStart);
        assert_eq!(stop.kind(), &EventType::UserWatchingStop);

        match (start, stop) {
            (Event::UserWatching(start), Event::UserWatching(stop)) => {
                assert!(start.is_started);
                assert!(!stop.is_started);
                assert_eq!(stop.watcher_count, 2);
            },
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn payload_is_shared() {
        let event = Event::from_value(json!({
            "type": "user.updated",
            "user": {"id": "luke_skywalker", "name": "Luke"},
        }))
        .unwrap();
        let copy = event.clone();

        assert!(Arc::ptr_eq(event.payload(), copy.payload()));
        assert_eq!(event.payload().user.as_ref().and_then(|u| u.name.as_deref()), Some("Luke"));
    }

    #[test]
    fn health_check_has_no_capabilities() {
        let event = Event::from_value(json!({
            "type": "health.check",
            "connection_id": "d6e3b6f4-0a7a-4c22-9b7b-5b9b9b1e7a5c",
        }))
        .unwrap();

        assert_eq!(event.capabilities(), Capabilities::empty());
        assert_eq!(event.user_id(), None);
    }

    #[test]
    fn try_decode_skips_unknown_kinds() {
        assert_eq!(try_decode(br#"{"type": "totally.unknown"}"#).unwrap(), None);
        assert!(matches!(try_decode(b"{}"), Err(DecodeError::MissingEventKind)));
        assert!(try_decode(br#"{"type": "user.updated", "user": {"id": "r2-d2"}}"#)
            .unwrap()
            .is_some());
    }
}
