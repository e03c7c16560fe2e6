//! # slackline-events
//!
//! Typed decoding of Slack push events, layout blocks, and webhook
//! envelopes. This crate is the pure decode core shared by the
//! streaming (RTM) and webhook delivery surfaces:
//!
//! - **Event catalog**: one registration table covering every `type`,
//!   message `subtype`, and message `channel_type` discriminator,
//!   decoded into the [`Event`] sum type.
//! - **Layout tree**: [`blocks::Block`] containers and
//!   [`elements::BlockElement`] interactive controls, decoded
//!   recursively through their `type` discriminators.
//! - **Wire timestamp**: [`Timestamp`] keeps the verbatim wire text
//!   alongside the derived second count, so re-encoding is lossless.
//! - **Webhook envelope**: [`decode_envelope`] distinguishes the
//!   `url_verification` handshake from wrapped `event_callback`
//!   payloads and routes the inner event through the same catalog.
//!
//! Every decode entry point is a pure function over an input buffer;
//! failures are [`DecodeError`] values, never panics.

#![deny(unsafe_code)]

pub mod blocks;
pub mod composition;
pub mod elements;
pub mod envelope;
mod error;
pub mod events;
pub mod ids;
pub mod objects;
pub mod ts;
pub mod view;

pub use envelope::{Envelope, EventCallbackEvent, UrlVerificationEvent, decode_envelope};
pub use error::{DecodeError, DiscriminatorKind};
pub use events::{Event, decode_event, decode_event_value};
pub use ts::Timestamp;
