//! Newtype string identifiers.
//!
//! Zero-logic wrappers around the platform's opaque id strings, used
//! purely for type safety in record fields. All are transparent for
//! serde, so the wire format is the bare string.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    (
        $(
            $(#[doc = $doc:literal])+
            $name:ident
        ),+ $(,)?
    ) => {
        $(
            $(#[doc = $doc])+
            #[derive(
                Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
                Serialize, Deserialize,
            )]
            #[serde(transparent)]
            pub struct $name(pub String);

            impl $name {
                /// The identifier as a string slice.
                #[must_use]
                pub fn as_str(&self) -> &str {
                    &self.0
                }

                /// Whether the identifier is empty (absent on the wire).
                #[must_use]
                pub fn is_empty(&self) -> bool {
                    self.0.is_empty()
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<String> for $name {
                fn from(raw: String) -> Self {
                    Self(raw)
                }
            }

            impl From<&str> for $name {
                fn from(raw: &str) -> Self {
                    Self(raw.to_owned())
                }
            }
        )+
    };
}

string_id! {
    /// A user identifier (`U…` or `W…`).
    UserId,
    /// A bot identifier (`B…`).
    BotId,
    /// A channel, group, or IM conversation identifier (`C…`, `G…`, `D…`).
    ChannelId,
    /// A workspace (team) identifier (`T…`).
    TeamId,
    /// A file identifier (`F…`).
    FileId,
    /// A file comment identifier (`Fc…`).
    CommentId,
    /// An app identifier (`A…`).
    AppId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_serde() {
        let id: UserId = serde_json::from_str("\"U024BE7LH\"").unwrap();
        assert_eq!(id.as_str(), "U024BE7LH");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"U024BE7LH\"");
    }

    #[test]
    fn default_is_empty() {
        assert!(ChannelId::default().is_empty());
    }
}
