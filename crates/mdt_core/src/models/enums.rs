//! Core enums used throughout the crate.

use serde::{Deserialize, Serialize};

/// Type of media stream this tool edits.
///
/// Video and other track types exist in Matroska files but carry no default
/// flag worth toggling here, so they are not represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamType {
    Audio,
    Subtitle,
}

impl StreamType {
    /// Parse the raw `Track type` label as printed by mkvinfo.
    ///
    /// mkvinfo spells the subtitle type `subtitles`; it is normalized to the
    /// singular form. Unrecognized labels (video, buttons, ...) yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "audio" => Some(Self::Audio),
            "subtitles" | "subtitle" => Some(Self::Subtitle),
            _ => None,
        }
    }

    /// Track selector prefix used by mkvpropedit (`track:a1`, `track:s2`).
    pub fn selector_prefix(&self) -> &'static str {
        match self {
            Self::Audio => "a",
            Self::Subtitle => "s",
        }
    }
}

impl std::fmt::Display for StreamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Audio => write!(f, "audio"),
            Self::Subtitle => write!(f, "subtitle"),
        }
    }
}
