//! Trigger literal and the pattern that locates open mention tokens.

use regex::Regex;

use super::span::Span;
use crate::error::{ConfigError, Result};

/// A validated trigger literal with its compiled matching pattern.
///
/// The pattern is equivalent to "start of buffer or whitespace, the
/// trigger literal, then a run of characters that are neither whitespace
/// nor part of the trigger, anchored at the reference offset". The
/// literal is escaped before compilation, so metacharacters like `$` or
/// `(` match literally.
#[derive(Debug, Clone)]
pub struct Trigger {
    /// The trigger literal as configured by the host.
    literal: String,

    /// Compiled pattern applied to the buffer prefix up to the offset.
    pattern: Regex,
}

impl Trigger {
    /// Create a trigger from its literal.
    ///
    /// # Arguments
    /// * `literal` - Trigger literal, e.g. `"@"`; non-empty, no whitespace
    ///
    /// # Returns
    /// * `Result<Self>` - Validated trigger with its compiled pattern
    pub fn new(literal: impl Into<String>) -> Result<Self> {
        let literal = literal.into();
        if literal.is_empty() {
            return Err(ConfigError::EmptyTrigger.into());
        }
        if let Some(c) = literal.chars().find(|c| c.is_whitespace()) {
            return Err(ConfigError::WhitespaceInTrigger(c).into());
        }

        let pattern = Regex::new(&Self::pattern_source(&literal))?;
        Ok(Self { literal, pattern })
    }

    /// Get the trigger literal.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Build the pattern source for a trigger literal.
    ///
    /// The token run excludes whitespace and every character of the
    /// literal itself, so a repeated trigger (`@@name`) terminates the
    /// match attempt instead of being swallowed into the token.
    fn pattern_source(literal: &str) -> String {
        let escaped = regex::escape(literal);
        // Escape per character for use inside the negated character class
        let class: String = literal
            .chars()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        format!(r"(?:^|\s)({escaped}[^{class}\s]*)$")
    }

    /// Locate the open mention token at the reference offset.
    ///
    /// The buffer is truncated at `offset` before matching; the matcher
    /// never scans past it, so a returned span always satisfies
    /// `span.end == offset`. `None` means the offset is not inside an
    /// open trigger token, which is the normal resting state.
    ///
    /// # Arguments
    /// * `buffer` - Full current text content
    /// * `offset` - Reference offset (byte index on a `char` boundary)
    ///
    /// # Returns
    /// * `Option<Span>` - Span of the partial token, or `None`
    ///
    /// # Panics
    /// Panics if `offset` is past the end of the buffer or not on a
    /// `char` boundary; offsets come from the host's cursor tracking and
    /// an invalid one indicates a caller bug.
    pub fn locate(&self, buffer: &str, offset: usize) -> Option<Span> {
        assert!(
            offset <= buffer.len(),
            "reference offset {offset} past end of buffer (len {})",
            buffer.len()
        );
        assert!(
            buffer.is_char_boundary(offset),
            "reference offset {offset} not on a char boundary"
        );

        let prefix = &buffer[..offset];
        let caps = self.pattern.captures(prefix)?;
        let token = caps.get(1)?;
        Some(Span::new(token.start() + self.literal.len(), token.end()))
    }
}
