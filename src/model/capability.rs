//! Capabilities shared by event variants.
//!
//! Each trait is a small structural contract: an event implementing [`HasChannel`] always carries
//! the id of a channel, one implementing [`HasReaction`] always carries reaction data, and so on.
//! Consumers can handle every event with a given capability without matching on the variant:
//!
//! ```rust
//! use chat_events::model::capability::HasChannel;
//! use chat_events::model::event::Event;
//!
//! fn channel_of(event: &Event) -> Option<String> {
//!     event.as_channel_event().map(|e| e.channel_id().to_string())
//! }
//! ```

use bitflags::bitflags;

use super::prelude::*;
use crate::internal::prelude::*;

/// An event built from an [`EventPayload`].
///
/// Implemented by every event variant.
pub trait EventWithPayload {
    /// The payload the event was decoded from, for data beyond the event's typed fields.
    fn payload(&self) -> &Arc<EventPayload>;
}

/// An event related to a user.
pub trait HasUser: EventWithPayload {
    fn user_id(&self) -> &UserId;
}

/// An event related to a channel.
pub trait HasChannel: EventWithPayload {
    fn channel_id(&self) -> &ChannelId;
}

/// An event related to a message.
pub trait HasMessage: EventWithPayload {
    fn message_id(&self) -> &MessageId;
}

/// An event related to a channel member.
pub trait HasMember: EventWithPayload {
    fn member_user_id(&self) -> &UserId;
}

/// An event related to a reaction.
pub trait HasReaction: EventWithPayload {
    fn reaction_type(&self) -> &ReactionType;

    fn reaction_score(&self) -> i64;
}

/// An event related to the current user.
pub trait HasCurrentUser: EventWithPayload {
    fn current_user_id(&self) -> &UserId;
}

/// A typing indicator.
pub trait HasTypingState: EventWithPayload {
    /// Whether the user started typing, as opposed to stopped.
    fn is_typing(&self) -> bool;
}

bitflags! {
    /// The set of capabilities an [`Event`] has, for runtime inspection.
    ///
    /// [`Event`]: super::event::Event
    #[derive(Copy, PartialEq, Eq, Clone, PartialOrd, Ord, Hash, Debug)]
    pub struct Capabilities: u8 {
        /// The event implements [`HasUser`].
        const USER = 1 << 0;
        /// The event implements [`HasChannel`].
        const CHANNEL = 1 << 1;
        /// The event implements [`HasMessage`].
        const MESSAGE = 1 << 2;
        /// The event implements [`HasMember`].
        const MEMBER = 1 << 3;
        /// The event implements [`HasReaction`].
        const REACTION = 1 << 4;
        /// The event implements [`HasCurrentUser`].
        const CURRENT_USER = 1 << 5;
        /// The event implements [`HasTypingState`].
        const TYPING_STATE = 1 << 6;
    }
}

/// Views of an event through each capability it has.
///
/// Every method defaults to `None`; `event_capabilities!` overrides those of the listed
/// capabilities.
pub(crate) trait CapabilityViews: EventWithPayload {
    fn as_user_event(&self) -> Option<&dyn HasUser> {
        None
    }

    fn as_channel_event(&self) -> Option<&dyn HasChannel> {
        None
    }

    fn as_message_event(&self) -> Option<&dyn HasMessage> {
        None
    }

    fn as_member_event(&self) -> Option<&dyn HasMember> {
        None
    }

    fn as_reaction_event(&self) -> Option<&dyn HasReaction> {
        None
    }

    fn as_current_user_event(&self) -> Option<&dyn HasCurrentUser> {
        None
    }

    fn as_typing_event(&self) -> Option<&dyn HasTypingState> {
        None
    }
}

/// Implements [`EventWithPayload`], [`CapabilityViews`] and the listed capability traits for an
/// event struct, each accessor returning the named field.
///
/// `HasReaction(_)` only registers the view; the trait itself is implemented by hand.
macro_rules! event_capabilities {
    ($event:ident $(: $($capability:ident($field:tt)),* $(,)?)?) => {
        impl $crate::model::capability::EventWithPayload for $event {
            fn payload(&self) -> &Arc<EventPayload> {
                &self.payload
            }
        }

        impl $crate::model::capability::CapabilityViews for $event {
            $($(
                event_capabilities!(@view $capability);
            )*)?
        }

        $($(
            event_capabilities!(@impl $event, $capability, $field);
        )*)?
    };
    (@view HasUser) => {
        fn as_user_event(&self) -> Option<&dyn $crate::model::capability::HasUser> {
            Some(self as &dyn $crate::model::capability::HasUser)
        }
    };
    (@view HasChannel) => {
        fn as_channel_event(&self) -> Option<&dyn $crate::model::capability::HasChannel> {
            Some(self as &dyn $crate::model::capability::HasChannel)
        }
    };
    (@view HasMessage) => {
        fn as_message_event(&self) -> Option<&dyn $crate::model::capability::HasMessage> {
            Some(self as &dyn $crate::model::capability::HasMessage)
        }
    };
    (@view HasMember) => {
        fn as_member_event(&self) -> Option<&dyn $crate::model::capability::HasMember> {
            Some(self as &dyn $crate::model::capability::HasMember)
        }
    };
    (@view HasReaction) => {
        fn as_reaction_event(&self) -> Option<&dyn $crate::model::capability::HasReaction> {
            Some(self as &dyn $crate::model::capability::HasReaction)
        }
    };
    (@view HasCurrentUser) => {
        fn as_current_user_event(
            &self,
        ) -> Option<&dyn $crate::model::capability::HasCurrentUser> {
            Some(self as &dyn $crate::model::capability::HasCurrentUser)
        }
    };
    (@view HasTypingState) => {
        fn as_typing_event(&self) -> Option<&dyn $crate::model::capability::HasTypingState> {
            Some(self as &dyn $crate::model::capability::HasTypingState)
        }
    };
    (@impl $event:ident, HasReaction, $field:tt) => {};
    (@impl $event:ident, HasUser, $field:ident) => {
        impl $crate::model::capability::HasUser for $event {
            fn user_id(&self) -> &UserId {
                &self.$field
            }
        }
    };
    (@impl $event:ident, HasChannel, $field:ident) => {
        impl $crate::model::capability::HasChannel for $event {
            fn channel_id(&self) -> &ChannelId {
                &self.$field
            }
        }
    };
    (@impl $event:ident, HasMessage, $field:ident) => {
        impl $crate::model::capability::HasMessage for $event {
            fn message_id(&self) -> &MessageId {
                &self.$field
            }
        }
    };
    (@impl $event:ident, HasMember, $field:ident) => {
        impl $crate::model::capability::HasMember for $event {
            fn member_user_id(&self) -> &UserId {
                &self.$field
            }
        }
    };
    (@impl $event:ident, HasCurrentUser, $field:ident) => {
        impl $crate::model::capability::HasCurrentUser for $event {
            fn current_user_id(&self) -> &UserId {
                &self.$field
            }
        }
    };
    (@impl $event:ident, HasTypingState, $field:ident) => {
        impl $crate::model::capability::HasTypingState for $event {
            fn is_typing(&self) -> bool {
                self.$field
            }
        }
    };
}
