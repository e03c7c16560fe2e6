//! Event payloads, the generated [`Event`] union, and the decoder.
//!
//! Payload records live in per-family modules; `catalog` registers
//! each of them against its wire discriminator(s); `decoder` owns the
//! dispatch algorithm.

#[macro_use]
mod macros;

mod catalog;
mod decoder;

pub mod apps;
pub mod channels;
pub mod dnd;
pub mod files;
pub mod groups;
pub mod im;
pub mod message;
pub mod misc;
pub mod reactions;
pub mod stars;
pub mod subteams;
pub mod team;
pub mod users;

pub use catalog::{Event, EVENT_TYPES, MESSAGE_CHANNEL_TYPES, MESSAGE_SUBTYPES};
pub use decoder::{decode_event, decode_event_value};
