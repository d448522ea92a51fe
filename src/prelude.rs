//! A set of exports which can be helpful to use.
//!
//! Note that the `ChatEventsError` re-export is equivalent to [`chat_events::Error`], although is
//! re-exported as a separate name to remove likely ambiguity with other crate error enums.
//!
//! # Examples
//!
//! Import all of the exports:
//!
//! ```rust
//! use chat_events::prelude::*;
//! ```
//!
//! [`chat_events::Error`]: crate::Error

pub use crate::error::DecodeError as ChatEventsError;
pub use crate::model::capability::{
    EventWithPayload,
    HasChannel,
    HasCurrentUser,
    HasMember,
    HasMessage,
    HasReaction,
    HasTypingState,
    HasUser,
};
pub use crate::model::event::{decode, try_decode, Event, EventType};
