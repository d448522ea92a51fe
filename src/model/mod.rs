//! Mappings of the objects received over the WebSocket connection.
//!
//! Every frame decodes into an [`EventPayload`], a deeply optional mirror of everything any event
//! kind may carry, and from there into one of the typed [`Event`] variants.
//!
//! [`Event`]: event::Event
//! [`EventPayload`]: payload::EventPayload

mod utils;

#[macro_use]
pub mod capability;
pub mod channel;
pub mod event;
pub mod id;
pub mod member;
pub mod message;
pub mod payload;
pub mod prelude;
pub mod timestamp;
pub mod user;

pub use self::timestamp::Timestamp;
