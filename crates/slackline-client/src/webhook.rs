//! Webhook request handling: verify, decode, and classify.
//!
//! [`handle_webhook`] is framework-agnostic: the HTTP layer extracts
//! the two signature headers and the raw body into a
//! [`WebhookRequest`], and maps the returned [`WebhookReply`] /
//! [`WebhookError`] onto its response types. Unknown event types are
//! deliberately not errors here: the platform adds event types over
//! time, and an unhandled delivery must still be acknowledged with a
//! 200 or the platform retries and eventually disables the
//! subscription.

use thiserror::Error;
use tracing::{debug, warn};

use slackline_events::{decode_envelope, DecodeError, Envelope, EventCallbackEvent};

use crate::signature::{SignatureError, SignatureVerifier};

/// One inbound webhook delivery, as extracted by the HTTP layer.
#[derive(Clone, Debug)]
pub struct WebhookRequest<'a> {
    /// `X-Slack-Request-Timestamp` header.
    pub timestamp: &'a str,
    /// `X-Slack-Signature` header.
    pub signature: &'a str,
    /// Raw request body, exactly as received.
    pub body: &'a [u8],
}

/// What the HTTP layer should do with a verified delivery.
#[derive(Clone, Debug, PartialEq)]
pub enum WebhookReply {
    /// Echo this string back in the response body.
    Challenge(String),
    /// Dispatch this event, then acknowledge with a 200.
    Event(Box<EventCallbackEvent>),
    /// Acknowledge with a 200 and do nothing: the delivery used a
    /// discriminator this build does not know.
    Unhandled {
        /// The unregistered discriminator value.
        discriminator: String,
    },
}

/// Webhook handling failures, each mapped to an HTTP status.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The signature or timestamp header was absent. Constructed by
    /// the HTTP layer, which owns header extraction.
    #[error("missing signature headers")]
    MissingHeaders,

    /// Signature verification failed.
    #[error(transparent)]
    Signature(#[from] SignatureError),

    /// The request body was empty.
    #[error("empty webhook body")]
    EmptyBody,

    /// The request body did not decode.
    #[error(transparent)]
    Malformed(DecodeError),
}

impl WebhookError {
    /// The HTTP status to answer with: 401 for authentication
    /// failures, 400 for structural ones.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::MissingHeaders | Self::Signature(_) => 401,
            Self::EmptyBody | Self::Malformed(_) => 400,
        }
    }
}

/// Verify and decode one webhook delivery.
///
/// `now_secs` is the current Unix time, passed in so callers (and
/// tests) control the replay-window clock.
///
/// # Errors
///
/// [`WebhookError::Signature`] when verification fails — the body must
/// not be parsed in that case; [`WebhookError::EmptyBody`] /
/// [`WebhookError::Malformed`] for undecodable bodies.
pub fn handle_webhook(
    verifier: &SignatureVerifier,
    request: &WebhookRequest<'_>,
    now_secs: i64,
) -> Result<WebhookReply, WebhookError> {
    // Authenticate before touching the body.
    verifier.verify_with_replay_window(
        request.signature,
        request.timestamp,
        request.body,
        now_secs,
    )?;

    match decode_envelope(request.body) {
        Ok(Envelope::UrlVerification(handshake)) => {
            debug!("answering url_verification handshake");
            Ok(WebhookReply::Challenge(handshake.challenge))
        }
        Ok(Envelope::EventCallback(callback)) => {
            debug!(event_type = %callback.event.event_type(), "decoded webhook event");
            Ok(WebhookReply::Event(callback))
        }
        Err(DecodeError::UnknownType { kind, value }) => {
            // Acknowledge unknown discriminators instead of failing.
            warn!(discriminator = %kind, value = %value, "acknowledging unhandled event type");
            Ok(WebhookReply::Unhandled {
                discriminator: value,
            })
        }
        Err(DecodeError::EmptyPayload) => Err(WebhookError::EmptyBody),
        Err(e @ DecodeError::Malformed { .. }) => Err(WebhookError::Malformed(e)),
    }
}
