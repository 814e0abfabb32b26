//! Indentation parser for mkvinfo dumps.
//!
//! mkvinfo prints a human-readable tree where each line is
//! `<prefix>+<content>` and the nesting level is the number of characters
//! preceding the first `+` (`"|  + ..."` style). Content is either a bare
//! section name or a `name: value` attribute, split on the first `:` only.
//!
//! The parser walks the flat line list with an explicit cursor and the
//! current section's level, so arbitrarily many top-level sections and
//! deeply nested dumps parse without shared-pointer bookkeeping.

use super::types::{Entry, ProbeError, ProbeResult, Section};

/// Administrative/structural attributes irrelevant to default-track
/// editing. Dropped entirely during parsing.
const SKIP_ATTRIBUTES: &[&str] = &[
    "Cluster",
    "\"Lacing\" flag",
    "Edition flag hidden",
    "Edition flag default",
    "Edition UID",
    "Chapter UID",
    "Chapter flag hidden",
    "Chapter flag enabled",
    "Chapter time start",
    "Track UID",
    "Codec ID",
    "Default duration",
    "Written application",
    "Segment UID",
    "EBML version",
    "EBML read version",
    "Maximum EBML ID length",
    "Maximum EBML size length",
    "Document type version",
    "Document type read version",
];

/// Raw mkvinfo attribute labels renamed to normalized keys.
const RENAMED_ATTRIBUTES: &[(&str, &str)] = &[("\"Default track\" flag", "is_default")];

/// Parse a complete mkvinfo dump into a section tree.
///
/// Fatal errors ([`ProbeError::MalformedOutput`]) mean the text is not
/// mkvinfo output at all, or comes from an unsupported tool version:
/// a line with no `+` depth marker, an attribute line at the top of the
/// input where a section must open the dump (mkvinfo always starts with the
/// EBML head section), or a blank line with further content after it (only
/// a trailing blank/sentinel line is part of the protocol).
pub fn parse_dump(text: &str) -> ProbeResult<Section> {
    let all_lines: Vec<&str> = text.lines().collect();
    let Some(last) = all_lines.iter().rposition(|line| !line.trim().is_empty()) else {
        return Ok(Section::new());
    };
    // Only a trailing blank/sentinel line is tolerated. A blank anywhere
    // inside the dump would detach everything after it from its parent, so
    // it is fatal rather than silently producing a mis-nested tree.
    if let Some(blank) = all_lines[..last]
        .iter()
        .position(|line| line.trim().is_empty())
    {
        return Err(ProbeError::malformed(
            blank + 1,
            "blank line inside dump, expected only at the end",
        ));
    }
    let lines = &all_lines[..=last];

    let (_, content) = split_line(lines[0], 0)?;
    if content.contains(':') {
        return Err(ProbeError::malformed(
            1,
            "attribute line at top of input, expected a section",
        ));
    }

    let mut root = Section::new();
    let mut pos = 0;
    while pos < lines.len() {
        pos = parse_section(lines, pos, &mut root)?;
    }

    Ok(root)
}

/// Parse the section opened at `lines[start]` plus all of its children,
/// insert it into `parent`, and return the cursor position of the first
/// line that does not belong to it.
fn parse_section(lines: &[&str], start: usize, parent: &mut Section) -> ProbeResult<usize> {
    let (level, header) = split_line(lines[start], start)?;
    // Newer mkvinfo versions append a size to some section headers
    // ("Segment: size 1234"); only the name matters.
    let name = header.split_once(':').map_or(header, |(name, _)| name).trim();

    let mut children = Section::new();
    let mut pos = start + 1;

    while pos < lines.len() {
        let (depth, content) = split_line(lines[pos], pos)?;
        if depth <= level {
            break;
        }
        match content.split_once(':') {
            Some((raw_name, raw_value)) => {
                insert_attribute(&mut children, raw_name, raw_value);
                pos += 1;
            }
            None => {
                pos = parse_section(lines, pos, &mut children)?;
            }
        }
    }

    insert_section(parent, name, children);
    Ok(pos)
}

/// Split a raw line into (nesting level, trimmed content).
fn split_line(line: &str, pos: usize) -> ProbeResult<(usize, &str)> {
    match line.find('+') {
        Some(idx) => Ok((idx, line[idx + 1..].trim())),
        None => Err(ProbeError::malformed(
            pos + 1,
            format!("missing '+' depth marker in {:?}", line),
        )),
    }
}

/// Insert a leaf attribute, applying the deny-list and rename table.
fn insert_attribute(section: &mut Section, raw_name: &str, raw_value: &str) {
    let name = raw_name.trim();
    if SKIP_ATTRIBUTES.contains(&name) {
        return;
    }
    let name = RENAMED_ATTRIBUTES
        .iter()
        .find(|(raw, _)| *raw == name)
        .map(|(_, renamed)| *renamed)
        .unwrap_or(name);
    section.insert(name.to_string(), Entry::Value(raw_value.trim().to_string()));
}

/// Insert a finished child section, promoting repeated sibling names to an
/// ordered list on the second occurrence.
fn insert_section(parent: &mut Section, name: &str, children: Section) {
    let entry = match parent.remove(name) {
        None => Entry::Section(children),
        Some(Entry::Section(first)) => Entry::Sections(vec![first, children]),
        Some(Entry::Sections(mut sections)) => {
            sections.push(children);
            Entry::Sections(sections)
        }
        // An attribute and a section sharing a name at one level does not
        // occur in mkvinfo output; keep the section.
        Some(Entry::Value(_)) => Entry::Section(children),
    };
    parent.insert(name.to_string(), entry);
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_TRACK_DUMP: &str = "\
+Segment
 +Tracks
  +Track
   +Track type: audio
  +Track
   +Track type: subtitles
";

    fn track_list(root: &Section) -> Vec<&Section> {
        root.get("Segment")
            .and_then(Entry::as_section)
            .and_then(|segment| segment.get("Tracks"))
            .and_then(Entry::as_section)
            .and_then(|tracks| tracks.get("Track"))
            .map(Entry::sections)
            .unwrap_or_default()
    }

    #[test]
    fn parses_two_sibling_tracks_into_ordered_list() {
        let root = parse_dump(TWO_TRACK_DUMP).unwrap();
        let tracks = track_list(&root);
        assert_eq!(tracks.len(), 2);
        assert_eq!(
            tracks[0].get("Track type").and_then(Entry::as_value),
            Some("audio")
        );
        assert_eq!(
            tracks[1].get("Track type").and_then(Entry::as_value),
            Some("subtitles")
        );
    }

    #[test]
    fn lone_sibling_stays_single_section() {
        let dump = "\
+Segment
 +Tracks
  +Track
   +Track type: audio
";
        let root = parse_dump(dump).unwrap();
        let tracks = root
            .get("Segment")
            .and_then(Entry::as_section)
            .and_then(|s| s.get("Tracks"))
            .and_then(Entry::as_section)
            .unwrap();
        assert!(matches!(tracks.get("Track"), Some(Entry::Section(_))));
    }

    #[test]
    fn three_siblings_append_in_encounter_order() {
        let dump = "\
+Segment
 +Tracks
  +Track
   +Track number: 1
  +Track
   +Track number: 2
  +Track
   +Track number: 3
";
        let root = parse_dump(dump).unwrap();
        let tracks = track_list(&root);
        let numbers: Vec<_> = tracks
            .iter()
            .map(|t| t.get("Track number").and_then(Entry::as_value).unwrap())
            .collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);
    }

    #[test]
    fn deny_listed_attributes_never_appear() {
        let dump = "\
+Segment
 +Tracks
  +Track
   +Track UID: 1234567890
   +Codec ID: A_AAC
   +Track type: audio
";
        let root = parse_dump(dump).unwrap();
        let track = track_list(&root)[0];
        assert!(track.get("Track UID").is_none());
        assert!(track.get("Codec ID").is_none());
        assert!(track.get("Track type").is_some());
    }

    #[test]
    fn default_track_flag_renamed() {
        let dump = "\
+Segment
 +Tracks
  +Track
   +Track type: audio
   +\"Default track\" flag: 1
";
        let root = parse_dump(dump).unwrap();
        let track = track_list(&root)[0];
        assert_eq!(track.get("is_default").and_then(Entry::as_value), Some("1"));
        assert!(track.get("\"Default track\" flag").is_none());
    }

    #[test]
    fn attribute_splits_on_first_colon_only() {
        let dump = "\
+Segment
 +Tracks
  +Track
   +Track type: audio
   +Name: Commentary: directors
";
        let root = parse_dump(dump).unwrap();
        let track = track_list(&root)[0];
        assert_eq!(
            track.get("Name").and_then(Entry::as_value),
            Some("Commentary: directors")
        );
    }

    #[test]
    fn reparsing_is_idempotent() {
        let first = parse_dump(TWO_TRACK_DUMP).unwrap();
        let second = parse_dump(TWO_TRACK_DUMP).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn multiple_top_level_sections_parse() {
        let dump = "\
+EBML head
 +Document type: matroska
+Segment: size 109494
 +Tracks
  +Track
   +Track type: audio
";
        let root = parse_dump(dump).unwrap();
        assert!(root.get("EBML head").is_some());
        // Size suffix on the header is stripped from the section name.
        assert!(root.get("Segment").is_some());
        assert_eq!(track_list(&root).len(), 1);
    }

    #[test]
    fn tolerates_trailing_blank_line() {
        let dump = "+Segment\n +Muxing application: libebml\n\n";
        let root = parse_dump(dump).unwrap();
        let segment = root.get("Segment").and_then(Entry::as_section).unwrap();
        assert_eq!(
            segment.get("Muxing application").and_then(Entry::as_value),
            Some("libebml")
        );
    }

    #[test]
    fn interior_blank_line_is_fatal() {
        // A blank line with content after it would detach the rest of the
        // dump from its parent section; that must fail loudly, not parse.
        let dump = "\
+Segment
 +Tracks

  +Track
   +Track type: audio
";
        let err = parse_dump(dump).unwrap_err();
        assert!(matches!(
            err,
            ProbeError::MalformedOutput { line_no: 3, .. }
        ));
    }

    #[test]
    fn leading_blank_line_is_fatal() {
        let err = parse_dump("\n+Segment\n").unwrap_err();
        assert!(matches!(
            err,
            ProbeError::MalformedOutput { line_no: 1, .. }
        ));
    }

    #[test]
    fn line_without_marker_is_fatal() {
        let err = parse_dump("+Segment\n garbage line\n").unwrap_err();
        assert!(matches!(
            err,
            ProbeError::MalformedOutput { line_no: 2, .. }
        ));
    }

    #[test]
    fn attribute_at_top_of_input_is_fatal() {
        let err = parse_dump("+Track type: audio\n").unwrap_err();
        assert!(matches!(
            err,
            ProbeError::MalformedOutput { line_no: 1, .. }
        ));
    }

    #[test]
    fn empty_input_parses_to_empty_tree() {
        assert!(parse_dump("").unwrap().is_empty());
        assert!(parse_dump("\n\n").unwrap().is_empty());
    }
}
