//! Track classification over a parsed mkvinfo tree.
//!
//! Walks the fixed `Segment` -> `Tracks` -> `Track` path and derives
//! [`MediaStream`] descriptors for the audio and subtitle tracks. All other
//! track types (video, buttons, ...) are skipped and do not perturb the
//! numbering of recognized types.

use crate::models::{MediaStream, MediaStreams, StreamType};

use super::types::{Entry, Section};

/// The attribute carrying the raw track type label.
const TRACK_TYPE_ATTR: &str = "Track type";

/// Classify a parsed dump into audio/subtitle stream descriptors.
///
/// A missing `Segment`/`Tracks`/`Track` path means the input is not a
/// recognized Matroska container; that is a normal negative result
/// (`MediaStreams::default()`), never an error. A file with exactly one
/// track is normalized to a one-element list before classification.
pub fn classify_tracks(root: &Section) -> MediaStreams {
    let tracks = match track_sections(root) {
        Some(tracks) if !tracks.is_empty() => tracks,
        _ => return MediaStreams::default(),
    };

    let mut streams = MediaStreams {
        is_mkv: true,
        ..Default::default()
    };

    for track in tracks {
        let Some(label) = track.get(TRACK_TYPE_ATTR).and_then(Entry::as_value) else {
            continue;
        };
        let Some(stream_type) = StreamType::from_label(label) else {
            tracing::debug!("Skipping track of type '{}'", label);
            continue;
        };

        let siblings = match stream_type {
            StreamType::Audio => &mut streams.audio,
            StreamType::Subtitle => &mut streams.subtitle,
        };

        // Stream numbering is type-scoped and positional: the Nth audio
        // track encountered is audio stream N, regardless of what other
        // track types sit between.
        let mut stream = MediaStream::new(siblings.len() as u32 + 1, stream_type);
        for (name, entry) in track {
            if name == TRACK_TYPE_ATTR {
                continue;
            }
            if let Entry::Value(value) = entry {
                stream.attributes.insert(name.clone(), value.clone());
            }
        }
        siblings.push(stream);
    }

    streams
}

/// Locate the track list, normalized to an ordered sequence.
fn track_sections(root: &Section) -> Option<Vec<&Section>> {
    root.get("Segment")?
        .as_section()?
        .get("Tracks")?
        .as_section()?
        .get("Track")
        .map(Entry::sections)
}
