//! mkvpropedit command construction.
//!
//! Translates "make audio stream N the default" requests into complete
//! mkvpropedit command descriptions: the target stream is flagged default
//! and every sibling of the same type is explicitly flagged non-default,
//! so exactly one stream per requested type ends up default. Streams of a
//! type with no requested target are left untouched.

mod options_builder;

use std::path::Path;

use thiserror::Error;

use crate::config::ToolSettings;
use crate::models::{MediaStreams, StreamType};
use crate::probe::{self, ProbeError};

pub use options_builder::{format_tokens_pretty, DefaultFlagDirective, MkvPropEditOptionsBuilder};

/// Error type for command construction.
#[derive(Error, Debug)]
pub enum PropEditError {
    /// Probing the file failed.
    #[error(transparent)]
    Probe(#[from] ProbeError),

    /// The file is not a Matroska container, so no mutation is possible.
    #[error("Not a Matroska container: {0}")]
    NotAMatroska(std::path::PathBuf),

    /// The requested stream number does not exist among classified streams.
    /// Flagging only the existing siblings non-default would leave the file
    /// with no default track of that type at all, so this is rejected
    /// instead of silently ignored.
    #[error("No {stream_type} stream with number {stream_number}")]
    TrackNotFound {
        stream_type: StreamType,
        stream_number: u32,
    },
}

/// Result type for command construction.
pub type PropEditResult<T> = Result<T, PropEditError>;

/// A complete, executable command description.
///
/// The core never runs it; execution belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropEditCommand {
    /// Executable name or path.
    pub program: String,
    /// Argument tokens, target file first.
    pub args: Vec<String>,
}

impl PropEditCommand {
    /// Render the command as a single shell-style line for display.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Plan default-flag directives for the requested targets.
///
/// `None` for a type means "no change for this type". For a requested type,
/// the target stream gets `is_default = true` and every sibling of that
/// type `false`, in encounter order.
pub fn plan_default_flags(
    streams: &MediaStreams,
    audio: Option<u32>,
    subtitle: Option<u32>,
) -> PropEditResult<Vec<DefaultFlagDirective>> {
    let mut directives = Vec::new();

    if let Some(target) = audio {
        plan_for_type(streams, StreamType::Audio, target, &mut directives)?;
    }
    if let Some(target) = subtitle {
        plan_for_type(streams, StreamType::Subtitle, target, &mut directives)?;
    }

    Ok(directives)
}

fn plan_for_type(
    streams: &MediaStreams,
    stream_type: StreamType,
    target: u32,
    directives: &mut Vec<DefaultFlagDirective>,
) -> PropEditResult<()> {
    let siblings = streams.streams_of(stream_type);
    if !siblings.iter().any(|s| s.stream_number == target) {
        return Err(PropEditError::TrackNotFound {
            stream_type,
            stream_number: target,
        });
    }

    for stream in siblings {
        directives.push(DefaultFlagDirective {
            stream_number: stream.stream_number,
            stream_type,
            is_default: stream.stream_number == target,
        });
    }
    Ok(())
}

/// Probe a file and build the mkvpropedit command switching its default
/// audio and/or subtitle stream.
pub fn build_default_flag_command(
    path: &Path,
    audio: Option<u32>,
    subtitle: Option<u32>,
    tools: &ToolSettings,
) -> PropEditResult<PropEditCommand> {
    let streams = probe::probe_file(path, tools)?;
    if !streams.is_mkv {
        return Err(PropEditError::NotAMatroska(path.to_path_buf()));
    }

    let directives = plan_default_flags(&streams, audio, subtitle)?;

    let mut builder = MkvPropEditOptionsBuilder::new(path);
    for directive in &directives {
        builder.set_default(
            directive.stream_number,
            directive.stream_type,
            directive.is_default,
        );
    }

    let command = PropEditCommand {
        program: tools.mkvpropedit.clone(),
        args: builder.build(),
    };
    tracing::debug!("Built mutation command: {}", command.command_line());
    Ok(command)
}
