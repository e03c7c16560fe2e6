//! Error types for the decode core.
//!
//! [`DecodeError`] is the single error type returned by every decode
//! entry point. Callers distinguish the three failure modes by
//! matching on the variant, never by comparing display strings.

use thiserror::Error;

/// Which discriminator field failed to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiscriminatorKind {
    /// The top-level `type` field.
    Type,
    /// The message-family `subtype` field.
    Subtype,
    /// The message-family `channel_type` field.
    ChannelType,
}

impl DiscriminatorKind {
    /// The wire name of the discriminator field.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Subtype => "subtype",
            Self::ChannelType => "channel_type",
        }
    }
}

impl std::fmt::Display for DiscriminatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Errors returned by the decode entry points.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input buffer was empty or whitespace-only.
    ///
    /// Benign on the streaming connection (keep-alive framing), where
    /// callers skip it silently; abnormal for a webhook body, where
    /// callers report it.
    #[error("empty payload")]
    EmptyPayload,

    /// The input was structurally unusable: invalid JSON syntax, a
    /// required field of the wrong JSON kind, or a nested embedded
    /// decode failure.
    #[error("malformed payload: {message}")]
    Malformed {
        /// Human-readable description, carrying a fragment of the
        /// offending input where feasible.
        message: String,
        /// The underlying serde failure, when one exists.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The payload was structurally sound JSON but its discriminator
    /// value has no registered mapping.
    #[error("unknown {kind} {value:?}")]
    UnknownType {
        /// Which discriminator field was unresolved.
        kind: DiscriminatorKind,
        /// The offending discriminator value, verbatim.
        value: String,
    },
}

impl DecodeError {
    /// A malformed-payload error with no underlying serde failure.
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
            source: None,
        }
    }

    /// A malformed-payload error wrapping a serde failure.
    pub(crate) fn malformed_with(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Malformed {
            message: message.into(),
            source: Some(source),
        }
    }

    /// An unknown-discriminator error.
    pub(crate) fn unknown(kind: DiscriminatorKind, value: impl Into<String>) -> Self {
        Self::UnknownType {
            kind,
            value: value.into(),
        }
    }
}

/// A short printable fragment of the offending input for diagnostics.
pub(crate) fn snippet(raw: &[u8]) -> String {
    const MAX: usize = 120;
    let text = String::from_utf8_lossy(raw);
    if text.len() <= MAX {
        text.into_owned()
    } else {
        let mut cut = MAX;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}…", &text[..cut])
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
