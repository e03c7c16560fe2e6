//! The RTM (realtime messaging) socket client.
//!
//! [`RtmClient::connect`] obtains a one-shot socket URL via
//! `rtm.connect` and dials it; the resulting [`RtmConnection`] decodes
//! inbound frames through the event catalog and frames outbound
//! messages with a per-connection id sequence. Reconnection policy is
//! the caller's concern: when the socket closes, connect again.

use std::sync::atomic::{AtomicU64, Ordering};

use futures::{SinkExt, StreamExt};
use serde::Serialize;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, trace, warn};

use slackline_events::ids::ChannelId;
use slackline_events::{decode_event, DecodeError, Event, Timestamp};

use crate::error::{ClientError, Result};
use crate::web::WebClient;

/// Per-connection outbound message id sequence.
///
/// Ids are positive, unique, and increasing within one connection.
/// Owned by the connection rather than shared process-wide, so
/// independent connections never interleave sequences.
#[derive(Debug)]
pub struct MessageIdSequence(AtomicU64);

impl MessageIdSequence {
    /// A fresh sequence starting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self(AtomicU64::new(1))
    }

    /// The next id.
    pub fn next_id(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for MessageIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// An outbound realtime frame.
#[derive(Debug, Serialize)]
struct OutgoingMessage<'a> {
    id: u64,
    #[serde(rename = "type")]
    message_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<&'a ChannelId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thread_ts: Option<&'a Timestamp>,
}

/// Entry point for realtime connections.
#[derive(Debug)]
pub struct RtmClient {
    web: WebClient,
}

impl RtmClient {
    /// Build over an existing Web API client.
    #[must_use]
    pub fn new(web: WebClient) -> Self {
        Self { web }
    }

    /// Obtain a socket URL and dial it.
    pub async fn connect(&self) -> Result<RtmConnection> {
        let response = self.web.rtm_connect().await?;
        if response.url.is_empty() {
            return Err(ClientError::Api(
                "rtm.connect returned an empty socket url".to_owned(),
            ));
        }
        debug!(url = %response.url, "dialing realtime socket");
        let (stream, _) = connect_async(response.url.as_str()).await?;
        Ok(RtmConnection {
            stream,
            ids: MessageIdSequence::new(),
        })
    }
}

/// One live realtime connection.
#[derive(Debug)]
pub struct RtmConnection {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    ids: MessageIdSequence,
}

impl RtmConnection {
    /// Receive the next decoded event.
    ///
    /// `Ok(None)` means the server closed the connection. Empty text
    /// frames (keep-alive framing) and protocol ping/pong frames are
    /// skipped silently; an unknown event type is propagated so the
    /// caller decides whether to ignore it.
    pub async fn next_event(&mut self) -> Result<Option<Event>> {
        loop {
            let Some(frame) = self.stream.next().await else {
                return Ok(None);
            };
            match frame? {
                Message::Text(text) => match decode_event(text.as_bytes()) {
                    Ok(event) => {
                        trace!(event_type = %event.event_type(), "received event");
                        return Ok(Some(event));
                    }
                    Err(DecodeError::EmptyPayload) => {}
                    Err(e) => return Err(e.into()),
                },
                Message::Binary(_) => {
                    warn!("ignoring unexpected binary frame");
                }
                Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => {}
                Message::Close(_) => return Ok(None),
            }
        }
    }

    /// Send a message to a conversation. Returns the frame id, which
    /// the server echoes in its acknowledgement.
    pub async fn send_message(
        &mut self,
        channel: &ChannelId,
        text: &str,
        thread_ts: Option<&Timestamp>,
    ) -> Result<u64> {
        let id = self.ids.next_id();
        self.send(&OutgoingMessage {
            id,
            message_type: "message",
            channel: Some(channel),
            text: Some(text),
            thread_ts,
        })
        .await?;
        Ok(id)
    }

    /// Send a typing indicator.
    pub async fn send_typing(&mut self, channel: &ChannelId) -> Result<u64> {
        let id = self.ids.next_id();
        self.send(&OutgoingMessage {
            id,
            message_type: "typing",
            channel: Some(channel),
            text: None,
            thread_ts: None,
        })
        .await?;
        Ok(id)
    }

    /// Send an application-level ping; the server answers with a
    /// `pong` event echoing the id.
    pub async fn ping(&mut self) -> Result<u64> {
        let id = self.ids.next_id();
        self.send(&OutgoingMessage {
            id,
            message_type: "ping",
            channel: None,
            text: None,
            thread_ts: None,
        })
        .await?;
        Ok(id)
    }

    /// Close the connection cleanly.
    pub async fn close(&mut self) -> Result<()> {
        self.stream.close(None).await?;
        Ok(())
    }

    async fn send(&mut self, message: &OutgoingMessage<'_>) -> Result<()> {
        let text = serde_json::to_string(message)?;
        self.stream.send(Message::Text(text.into())).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_sequence_is_increasing_from_one() {
        let ids = MessageIdSequence::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 3);
    }

    #[test]
    fn concurrent_increments_yield_unique_ids() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let ids = Arc::new(MessageIdSequence::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..100).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();
        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(id >= 1);
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 800);
    }

    #[test]
    fn independent_sequences_do_not_interleave() {
        let a = MessageIdSequence::new();
        let b = MessageIdSequence::new();
        assert_eq!(a.next_id(), 1);
        assert_eq!(a.next_id(), 2);
        // A fresh connection starts over regardless of other traffic.
        assert_eq!(b.next_id(), 1);
    }

    #[test]
    fn outgoing_message_frames_carry_only_set_fields() {
        let channel = ChannelId::from("C024BE91L");
        let frame = OutgoingMessage {
            id: 7,
            message_type: "message",
            channel: Some(&channel),
            text: Some("Hello world"),
            thread_ts: None,
        };
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["type"], "message");
        assert_eq!(json["channel"], "C024BE91L");
        assert!(json.get("thread_ts").is_none());

        let ping = OutgoingMessage {
            id: 8,
            message_type: "ping",
            channel: None,
            text: None,
            thread_ts: None,
        };
        let json = serde_json::to_value(&ping).unwrap();
        assert_eq!(json["type"], "ping");
        assert!(json.get("channel").is_none());
    }
}
