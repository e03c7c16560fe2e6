//! Client-side error types.

use thiserror::Error;

/// Errors surfaced by the Web API and RTM clients.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// WebSocket transport failure.
    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// Request/response body (de)serialization failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform answered `ok: false` with this error tag.
    #[error("api error: {0}")]
    Api(String),

    /// Inbound payload decode failure.
    #[error(transparent)]
    Decode(#[from] slackline_events::DecodeError),

    /// Missing or invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Client result alias.
pub type Result<T> = std::result::Result<T, ClientError>;
