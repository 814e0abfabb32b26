//! Stream descriptors derived from an mkvinfo dump.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::enums::StreamType;

/// One audio or subtitle stream inside a Matroska container.
///
/// Stream numbers are type-scoped and positional: the Nth audio stream in
/// the file gets number N among audio streams, independent of how many
/// subtitle or video tracks surround it. This matches the numbering that
/// mkvpropedit track selectors (`track:aN` / `track:sN`) use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaStream {
    /// 1-based position among streams of the same type.
    pub stream_number: u32,
    /// Type of stream (audio or subtitle).
    pub stream_type: StreamType,
    /// Remaining mkvinfo attributes, verbatim after filtering and renaming
    /// (e.g. "Language", "Name", "is_default").
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl MediaStream {
    /// Create a new stream descriptor with no attributes.
    pub fn new(stream_number: u32, stream_type: StreamType) -> Self {
        Self {
            stream_number,
            stream_type,
            attributes: BTreeMap::new(),
        }
    }

    /// Attach an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether this stream carries the default-track flag.
    ///
    /// mkvinfo prints the flag as `1`/`0`; older versions used `yes`/`no`.
    pub fn is_default(&self) -> bool {
        matches!(self.attribute("is_default"), Some("1") | Some("yes") | Some("true"))
    }

    /// Get a display string for this stream.
    pub fn display_name(&self) -> String {
        let lang = self.attribute("Language").unwrap_or("und");
        let name_part = match self.attribute("Name") {
            Some(name) => format!(" - {}", name),
            None => String::new(),
        };
        let default_part = if self.is_default() { " [default]" } else { "" };
        format!(
            "{} stream {} ({}){}{}",
            self.stream_type, self.stream_number, lang, name_part, default_part
        )
    }
}

/// Classification result for one probed file.
///
/// The default value (`is_mkv` false, both lists empty) is the "not a
/// Matroska container" answer. It is a normal negative result, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaStreams {
    /// Whether the probe recognized the file as a Matroska container.
    pub is_mkv: bool,
    /// Audio streams in encounter order.
    pub audio: Vec<MediaStream>,
    /// Subtitle streams in encounter order.
    pub subtitle: Vec<MediaStream>,
}

impl MediaStreams {
    /// Streams of one type, in encounter order.
    pub fn streams_of(&self, stream_type: StreamType) -> &[MediaStream] {
        match stream_type {
            StreamType::Audio => &self.audio,
            StreamType::Subtitle => &self.subtitle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_with_language_and_name() {
        let stream = MediaStream::new(2, StreamType::Audio)
            .with_attribute("Language", "jpn")
            .with_attribute("Name", "Japanese 2.0");
        assert_eq!(stream.display_name(), "audio stream 2 (jpn) - Japanese 2.0");
    }

    #[test]
    fn display_name_marks_default() {
        let stream = MediaStream::new(1, StreamType::Subtitle).with_attribute("is_default", "1");
        assert_eq!(stream.display_name(), "subtitle stream 1 (und) [default]");
    }

    #[test]
    fn is_default_accepts_numeric_and_verbal_flags() {
        let flagged = MediaStream::new(1, StreamType::Audio).with_attribute("is_default", "1");
        let verbal = MediaStream::new(1, StreamType::Audio).with_attribute("is_default", "yes");
        let unflagged = MediaStream::new(2, StreamType::Audio).with_attribute("is_default", "0");
        let absent = MediaStream::new(3, StreamType::Audio);

        assert!(flagged.is_default());
        assert!(verbal.is_default());
        assert!(!unflagged.is_default());
        assert!(!absent.is_default());
    }

    #[test]
    fn media_streams_default_is_not_mkv() {
        let streams = MediaStreams::default();
        assert!(!streams.is_mkv);
        assert!(streams.audio.is_empty());
        assert!(streams.subtitle.is_empty());
    }

    #[test]
    fn media_stream_serializes() {
        let stream = MediaStream::new(1, StreamType::Audio).with_attribute("Language", "eng");
        let json = serde_json::to_string(&stream).unwrap();
        assert!(json.contains("\"stream_number\":1"));
        assert!(json.contains("\"stream_type\":\"audio\""));
        assert!(json.contains("\"Language\":\"eng\""));
    }
}
