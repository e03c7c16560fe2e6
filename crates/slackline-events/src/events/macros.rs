/// Declarative macro generating the [`Event`](super::Event) sum type
/// and its dispatch tables from a single source-of-truth listing.
///
/// # Sections
///
/// - **`events`**: the top-level `type` vocabulary, one wire string per
///   variant.
/// - **`message_subtypes`**: the message-family `subtype` vocabulary;
///   an entry may register several wire strings for one shape (the
///   echoed `subtype` field distinguishes them).
/// - **`message_channel_types`**: the message-family `channel_type`
///   vocabulary, consulted only when `subtype` is absent.
///
/// Generated items: the `Event` enum (every payload boxed), the
/// `event_type()` accessor, delegating `Serialize`, the
/// `EVENT_TYPES` / `MESSAGE_SUBTYPES` / `MESSAGE_CHANNEL_TYPES` wire
/// tables, and the three `decode_by_*` dispatch functions. Adding a
/// platform event touches only the macro invocation.
macro_rules! define_events {
    (
        events {
            $(
                $(#[doc = $edoc:literal])*
                $ev:ident => $ewire:literal => $ety:ty
            ),+ $(,)?
        }
        message_subtypes {
            $(
                $(#[doc = $sdoc:literal])*
                $sv:ident => [$($swire:literal),+ $(,)?] => $sty:ty
            ),+ $(,)?
        }
        message_channel_types {
            $(
                $(#[doc = $cdoc:literal])*
                $cv:ident => [$($cwire:literal),+ $(,)?] => $cty:ty
            ),+ $(,)?
        }
    ) => {
        /// One decoded unit of platform activity.
        ///
        /// Variants are constructed only by the decoder and are
        /// immutable value records afterwards. The wire discriminator
        /// is echoed into every payload and retrievable uniformly via
        /// [`event_type()`](Self::event_type).
        #[derive(Clone, Debug, PartialEq)]
        pub enum Event {
            $(
                $(#[doc = $edoc])*
                $ev(Box<$ety>),
            )+
            $(
                $(#[doc = $sdoc])*
                $sv(Box<$sty>),
            )+
            $(
                $(#[doc = $cdoc])*
                $cv(Box<$cty>),
            )+
        }

        /// Every registered top-level `type` discriminator.
        pub const EVENT_TYPES: &[&str] = &[$($ewire),+];

        /// Every registered message `subtype` discriminator.
        pub const MESSAGE_SUBTYPES: &[&str] = &[$($($swire),+),+];

        /// Every registered message `channel_type` discriminator.
        pub const MESSAGE_CHANNEL_TYPES: &[&str] = &[$($($cwire),+),+];

        impl Event {
            /// The wire `type` discriminator this event was decoded
            /// from (`"message"` for the whole message family).
            #[must_use]
            pub fn event_type(&self) -> &str {
                match self {
                    $(Self::$ev(payload) => &payload.event_type,)+
                    $(Self::$sv(payload) => &payload.event_type,)+
                    $(Self::$cv(payload) => &payload.event_type,)+
                }
            }
        }

        impl serde::Serialize for Event {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                match self {
                    $(Self::$ev(payload) => serde::Serialize::serialize(payload, serializer),)+
                    $(Self::$sv(payload) => serde::Serialize::serialize(payload, serializer),)+
                    $(Self::$cv(payload) => serde::Serialize::serialize(payload, serializer),)+
                }
            }
        }

        /// Decode a payload by its top-level `type` discriminator.
        /// `None` when the discriminator has no registered mapping.
        pub(crate) fn decode_by_type(
            kind: &str,
            value: serde_json::Value,
        ) -> Option<serde_json::Result<Event>> {
            match kind {
                $(
                    $ewire => Some(
                        serde_json::from_value::<$ety>(value)
                            .map(|payload| Event::$ev(Box::new(payload))),
                    ),
                )+
                _ => None,
            }
        }

        /// Decode a message payload by its `subtype` discriminator.
        pub(crate) fn decode_by_subtype(
            subtype: &str,
            value: serde_json::Value,
        ) -> Option<serde_json::Result<Event>> {
            match subtype {
                $(
                    $($swire)|+ => Some(
                        serde_json::from_value::<$sty>(value)
                            .map(|payload| Event::$sv(Box::new(payload))),
                    ),
                )+
                _ => None,
            }
        }

        /// Decode a message payload by its `channel_type`
        /// discriminator.
        pub(crate) fn decode_by_channel_type(
            channel_type: &str,
            value: serde_json::Value,
        ) -> Option<serde_json::Result<Event>> {
            match channel_type {
                $(
                    $($cwire)|+ => Some(
                        serde_json::from_value::<$cty>(value)
                            .map(|payload| Event::$cv(Box::new(payload))),
                    ),
                )+
                _ => None,
            }
        }
    };
}
