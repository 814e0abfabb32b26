//! MDT Core - backend logic for the MKV default-track editor.
//!
//! This crate contains all probing and command-construction logic with zero
//! UI dependencies. It wraps the external mkvtoolnix binaries: `mkvinfo`
//! output is parsed into structured stream descriptors, and `mkvpropedit`
//! command lines are built to switch the default audio/subtitle tracks.
//!
//! The crate never mutates files itself - it only constructs commands.

pub mod config;
pub mod logging;
pub mod models;
pub mod probe;
pub mod propedit;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
