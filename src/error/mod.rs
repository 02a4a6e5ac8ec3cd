//! Error types for the mentions engine.
//!
//! Only configuration is fallible here: building a [`Trigger`] from host
//! input can reject the literal or (in principle) fail pattern
//! compilation. Everything else in the crate is a total function over its
//! inputs — a matcher that finds nothing returns `None` as a normal
//! value, and contract violations (a stale span, navigation over an empty
//! candidate list) panic rather than surfacing as `Err`, since they
//! indicate a caller bug that must not be papered over.
//!
//! [`Trigger`]: crate::matcher::Trigger

use std::fmt;

/// Crate-wide `Result` type using [`MentionsError`] as the error.
pub type Result<T> = std::result::Result<T, MentionsError>;

/// Top-level error type for the mentions engine.
#[derive(Debug)]
pub enum MentionsError {
    /// Configuration errors.
    Config(ConfigError),

    /// Trigger pattern compilation errors.
    Pattern(regex::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The trigger literal is empty.
    EmptyTrigger,

    /// The trigger literal contains a whitespace character.
    WhitespaceInTrigger(char),

    /// Configuration text could not be parsed.
    Parse(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for MentionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MentionsError::Config(e) => write!(f, "Configuration error: {e}"),
            MentionsError::Pattern(e) => write!(f, "Trigger pattern error: {e}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyTrigger => write!(f, "Trigger must not be empty"),
            ConfigError::WhitespaceInTrigger(c) => {
                write!(f, "Trigger must not contain whitespace: {c:?}")
            }
            ConfigError::Parse(msg) => write!(f, "Invalid config format: {msg}"),
        }
    }
}

impl std::error::Error for MentionsError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to MentionsError ========================= */

impl From<ConfigError> for MentionsError {
    fn from(err: ConfigError) -> Self {
        MentionsError::Config(err)
    }
}

impl From<regex::Error> for MentionsError {
    fn from(err: regex::Error) -> Self {
        MentionsError::Pattern(err)
    }
}
