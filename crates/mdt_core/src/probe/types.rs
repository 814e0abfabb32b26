//! Types for probe operations.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Error type for probe operations.
///
/// "Not a Matroska file" is deliberately absent: it is a normal negative
/// result (`MediaStreams::default()`), not an error. Errors here mean the
/// probe itself could not run or its output violated the mkvinfo line
/// protocol.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// External tool missing or could not be launched.
    #[error("{tool} could not be launched: {message}")]
    ToolUnavailable { tool: String, message: String },

    /// Probe output violates the expected indentation/line-marker protocol.
    /// Indicates an unsupported tool version; parsing stops rather than
    /// producing a half-built tree.
    #[error("Malformed mkvinfo output at line {line_no}: {message}")]
    MalformedOutput { line_no: usize, message: String },
}

impl ProbeError {
    /// Create a tool unavailable error.
    pub fn tool_unavailable(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolUnavailable {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a malformed output error. `line_no` is 1-based.
    pub fn malformed(line_no: usize, message: impl Into<String>) -> Self {
        Self::MalformedOutput {
            line_no,
            message: message.into(),
        }
    }
}

/// Result type for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// One nesting level of a parsed mkvinfo dump.
///
/// Names are deduplicated per level; repeated sibling sections are promoted
/// to an ordered list (see [`Entry::Sections`]).
pub type Section = BTreeMap<String, Entry>;

/// A slot in a [`Section`].
///
/// Repeated sibling sections sharing a name (e.g. several "Track" entries
/// under "Tracks") are represented uniformly from the start: a single node
/// on first occurrence, an ordered list from the second occurrence on.
/// Encounter order is the only meaningful order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    /// Leaf attribute value.
    Value(String),
    /// Nested section, single occurrence.
    Section(Section),
    /// Repeated sibling sections, in encounter order.
    Sections(Vec<Section>),
}

impl Entry {
    /// Leaf value, if this slot holds one.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Entry::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Single nested section, if this slot holds one.
    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Entry::Section(section) => Some(section),
            _ => None,
        }
    }

    /// Normalize single-or-many to an ordered list of sections.
    ///
    /// A lone section yields a one-element list; a leaf value yields an
    /// empty one.
    pub fn sections(&self) -> Vec<&Section> {
        match self {
            Entry::Value(_) => Vec::new(),
            Entry::Section(section) => vec![section],
            Entry::Sections(sections) => sections.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_normalizes_to_sections() {
        assert!(Entry::Value("x".into()).sections().is_empty());
        assert_eq!(Entry::Section(Section::new()).sections().len(), 1);
        assert_eq!(
            Entry::Sections(vec![Section::new(), Section::new()])
                .sections()
                .len(),
            2
        );
    }

    #[test]
    fn probe_error_displays_context() {
        let err = ProbeError::malformed(3, "missing '+' depth marker");
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("depth marker"));
    }
}
