//! Configuration for the mentions engine.
//!
//! The crate is embeddable, so it owns no config files, environment
//! lookups, or search paths — the host decides where configuration text
//! comes from and hands it over as a TOML fragment (or builds the struct
//! directly). Missing fields fall back to defaults; validation runs
//! before the configuration is accepted by an engine.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Configuration for a single mention engine instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MentionsConfig {
    /// Trigger literal that opens a mention token (e.g. `"@"`).
    ///
    /// A single character in the common case, but short multi-character
    /// literals are accepted. Must be non-empty and contain no whitespace.
    #[serde(default = "default_trigger")]
    pub trigger: String,
}

fn default_trigger() -> String {
    "@".to_string()
}

impl Default for MentionsConfig {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
        }
    }
}

impl MentionsConfig {
    /// Create a configuration with the given trigger literal.
    ///
    /// # Arguments
    /// * `trigger` - Trigger literal that opens a mention token
    ///
    /// # Returns
    /// * `Self` - New configuration (not yet validated)
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
        }
    }

    /// Validate the configuration.
    ///
    /// # Returns
    /// * `Result<()>` - `Ok` if the trigger literal is usable
    pub fn validate(&self) -> Result<()> {
        if self.trigger.is_empty() {
            return Err(ConfigError::EmptyTrigger.into());
        }
        if let Some(c) = self.trigger.chars().find(|c| c.is_whitespace()) {
            return Err(ConfigError::WhitespaceInTrigger(c).into());
        }
        Ok(())
    }

    /// Parse and validate a configuration from a TOML fragment.
    ///
    /// # Arguments
    /// * `text` - TOML text, typically a table from the host's own config file
    ///
    /// # Returns
    /// * `Result<Self>` - Parsed configuration, or a config error
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
