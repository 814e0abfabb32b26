//! Data models shared across the crate.

mod enums;
mod media;

pub use enums::StreamType;
pub use media::{MediaStream, MediaStreams};
