//! Completion splicing - pure string surgery over the edit buffer.
//!
//! Given the buffer, the span of the open token, and the chosen
//! replacement text, produce the new buffer and the new cursor offset for
//! the host to write back into its input surface. Nothing outside the
//! span is touched and no state is kept.

use crate::matcher::Span;

/// Result of splicing a completion into the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    /// The new buffer contents.
    pub buffer: String,

    /// The new cursor offset, just past the inserted replacement.
    pub cursor: usize,
}

/// Replace `span` in `buffer` with `replacement`.
///
/// # Arguments
/// * `buffer` - Full current text content
/// * `span` - Span of the token to replace
/// * `replacement` - Chosen completion text
///
/// # Returns
/// * `Splice` - New buffer and cursor offset (`span.start + replacement.len()`)
///
/// # Panics
/// Panics if the span does not fit the buffer or does not fall on `char`
/// boundaries. An out-of-range span means the caller spliced with a span
/// derived from an older buffer; clamping here would silently corrupt the
/// host's text, so the contract violation is surfaced immediately.
pub fn apply(buffer: &str, span: Span, replacement: &str) -> Splice {
    assert!(
        span.start <= span.end && span.end <= buffer.len(),
        "span [{}, {}) out of range for buffer of length {}",
        span.start,
        span.end,
        buffer.len()
    );
    assert!(
        buffer.is_char_boundary(span.start) && buffer.is_char_boundary(span.end),
        "span [{}, {}) not on char boundaries",
        span.start,
        span.end
    );

    let mut out = String::with_capacity(buffer.len() - span.len() + replacement.len());
    out.push_str(&buffer[..span.start]);
    out.push_str(replacement);
    out.push_str(&buffer[span.end..]);

    Splice {
        buffer: out,
        cursor: span.start + replacement.len(),
    }
}
