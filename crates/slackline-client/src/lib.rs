//! # slackline-client
//!
//! Client surfaces over the [`slackline_events`] decode core:
//!
//! - [`WebClient`]: the HTTP Web API (`auth.test`, `chat.postMessage`,
//!   `reactions.add`, `rtm.connect`), with uniform `ok`/`error`
//!   envelope checking.
//! - [`RtmClient`] / [`RtmConnection`]: the realtime WebSocket, with
//!   catalog-driven inbound decoding and per-connection outbound
//!   message ids.
//! - [`SignatureVerifier`] and [`handle_webhook`]: request signing and
//!   framework-agnostic webhook classification.

#![deny(unsafe_code)]

mod error;
pub mod rtm;
pub mod signature;
pub mod web;
pub mod webhook;

/// The decode core, re-exported for downstream convenience.
pub use slackline_events as events;

pub use error::{ClientError, Result};
pub use rtm::{MessageIdSequence, RtmClient, RtmConnection};
pub use signature::{SignatureError, SignatureVerifier};
pub use web::{PostMessageRequest, WebClient};
pub use webhook::{handle_webhook, WebhookError, WebhookReply, WebhookRequest};
