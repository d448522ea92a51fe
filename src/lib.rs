//! chat-events is a Rust library for decoding the real-time events of a chat service.
//!
//! A chat client holds a WebSocket connection open to the server, which pushes a JSON frame for
//! everything happening in the channels the user watches or is a member of: new messages,
//! reactions, typing indicators, membership changes, invites and more. This library turns those
//! frames into a closed set of strongly typed [`Event`]s.
//!
//! The transport is left to the caller: hand [`decode`] the bytes of each text frame.
//!
//! ```rust
//! use chat_events::model::event::Event;
//!
//! let raw = br#"{
//!     "type": "member.added",
//!     "cid": "messaging:new_channel_9125",
//!     "member": {"user": {"id": "steep-moon-9"}, "role": "member"}
//! }"#;
//!
//! match chat_events::decode(raw)? {
//!     Event::MemberAdded(event) => {
//!         assert_eq!(event.member_user_id, "steep-moon-9");
//!         assert_eq!(event.cid.to_string(), "messaging:new_channel_9125");
//!     },
//!     other => panic!("unexpected event: {other:?}"),
//! }
//! # Ok::<(), chat_events::Error>(())
//! ```
//!
//! Events can also be handled by what they carry rather than by variant, through the
//! [capability] traits:
//!
//! ```rust
//! # let raw = br#"{"type": "typing.start", "cid": "messaging:general", "user": {"id": "r2-d2"}}"#;
//! let event = chat_events::decode(raw)?;
//!
//! if let Some(event) = event.as_channel_event() {
//!     println!("event in {}", event.channel_id());
//! }
//! # Ok::<(), chat_events::Error>(())
//! ```
//!
//! Servers may introduce event kinds newer than this library. [`try_decode`] logs and skips those
//! instead of failing.
//!
//! # Installation
//!
//! Add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! chat-events = "0.1"
//! ```
//!
//! [`Event`]: crate::model::event::Event
//! [capability]: crate::model::capability
#![doc(html_root_url = "https://docs.rs/chat-events/*")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(
    unused,
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::clone_on_ref_ptr,
    clippy::non_ascii_literal,
    clippy::fallible_impl_from,
    clippy::let_underscore_must_use,
    clippy::format_push_string,
    clippy::pedantic
)]
#![allow(
    // Allowed as they are too pedantic
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::doc_markdown,
    clippy::missing_panics_doc,
    clippy::doc_link_with_quotes
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[macro_use]
mod internal;

pub mod json;
pub mod model;
pub mod prelude;

mod error;

pub use crate::error::{DecodeError, DecodeError as Error, FieldPath, Result};
pub use crate::model::event::{decode, try_decode, Event};

/// Special module that re-exports most public items from this crate.
///
/// Useful, because you don't have to remember the full paths of chat-events items.
pub mod all {
    #[doc(no_inline)]
    pub use crate::json::*;
    #[doc(no_inline)]
    pub use crate::model::prelude::*;
    #[doc(no_inline)]
    pub use crate::{DecodeError, FieldPath, Result};
}
