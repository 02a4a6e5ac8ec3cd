//! Mentions - embeddable trigger-based autocomplete engine
//!
//! This library implements the logic core of an inline mention
//! autocomplete: detecting when the cursor sits inside an open trigger
//! token (e.g. `@al`), tracking the exact span of that token, and
//! splicing a chosen completion over it while keeping buffer and cursor
//! consistent. It renders nothing and owns no widget: the host forwards
//! text/cursor events and writes the results back into its own input
//! surface.
//!
//! # Modules
//!
//! - `config`: Configuration supplied by the host
//! - `engine`: Per-surface event orchestration
//! - `error`: Error types and handling
//! - `focus`: Focus cycling over the candidate list
//! - `matcher`: Trigger and span location over the edit buffer
//! - `splice`: Completion splicing
//!
//! # Example
//!
//! ```
//! use mentions::{MentionEngine, MentionsConfig};
//!
//! let mut engine = MentionEngine::new(&MentionsConfig::default()).unwrap();
//!
//! // The user has typed "hello @al" with the cursor at the end
//! let span = engine.text_changed("hello @al", 9).unwrap();
//! assert_eq!((span.start, span.end), (7, 9));
//!
//! // The host commits the chosen candidate
//! let result = engine.commit("hello @al", "alice").unwrap();
//! assert_eq!(result.buffer, "hello @alice");
//! assert_eq!(result.cursor, 12);
//! assert!(!engine.is_active());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod focus;
pub mod matcher;
pub mod splice;

// Re-export commonly used types
pub use config::MentionsConfig;
pub use engine::MentionEngine;
pub use error::{ConfigError, MentionsError, Result};
pub use focus::Direction;
pub use matcher::{Span, Trigger};
pub use splice::Splice;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
///
/// # Returns
/// * `&str` - Version string
pub fn version() -> &'static str {
    VERSION
}
