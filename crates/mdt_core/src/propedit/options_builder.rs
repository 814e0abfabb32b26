//! mkvpropedit command options builder.
//!
//! Builds command-line tokens for mkvpropedit from accumulated
//! default-flag directives. The builder only constructs the command; it
//! never executes it.

use std::path::Path;

use crate::models::StreamType;

/// One default-flag mutation for a single stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultFlagDirective {
    /// Type-scoped 1-based stream number.
    pub stream_number: u32,
    /// Stream type the number is scoped to.
    pub stream_type: StreamType,
    /// Desired state of the default flag.
    pub is_default: bool,
}

/// Builder for mkvpropedit command-line options.
///
/// Generates a list of string tokens that form a complete mkvpropedit
/// argument vector (everything after the executable name).
pub struct MkvPropEditOptionsBuilder<'a> {
    file_path: &'a Path,
    directives: Vec<DefaultFlagDirective>,
}

impl<'a> MkvPropEditOptionsBuilder<'a> {
    /// Create a new options builder for the given target file.
    pub fn new(file_path: &'a Path) -> Self {
        Self {
            file_path,
            directives: Vec::new(),
        }
    }

    /// Queue a default-flag mutation for one stream.
    pub fn set_default(
        &mut self,
        stream_number: u32,
        stream_type: StreamType,
        is_default: bool,
    ) -> &mut Self {
        self.directives.push(DefaultFlagDirective {
            stream_number,
            stream_type,
            is_default,
        });
        self
    }

    /// Whether any mutation has been queued.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Build the complete mkvpropedit argument tokens.
    ///
    /// Emits `--edit track:aN --set flag-default=1|0` per directive, in the
    /// order directives were queued.
    pub fn build(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(1 + self.directives.len() * 4);
        tokens.push(self.file_path.to_string_lossy().to_string());

        for directive in &self.directives {
            tokens.push("--edit".to_string());
            tokens.push(format!(
                "track:{}{}",
                directive.stream_type.selector_prefix(),
                directive.stream_number
            ));
            tokens.push("--set".to_string());
            tokens.push(format!(
                "flag-default={}",
                if directive.is_default { "1" } else { "0" }
            ));
        }

        tokens
    }
}

/// Format tokens for pretty display (one option per line).
pub fn format_tokens_pretty(tokens: &[String]) -> String {
    let mut result = String::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];

        if token.starts_with('-') && i + 1 < tokens.len() && !tokens[i + 1].starts_with('-') {
            // Option with value
            result.push_str(&format!("{} {} \\\n", token, tokens[i + 1]));
            i += 2;
        } else {
            result.push_str(&format!("{} \\\n", token));
            i += 1;
        }
    }

    result
}
