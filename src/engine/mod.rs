//! Mention engine - orchestrates the autocomplete flow.
//!
//! One engine instance belongs to one text-input surface and owns that
//! surface's trigger, active span, and focused candidate index. The host
//! forwards discrete events (text changed, cursor moved, navigation,
//! commit, dismiss) and every event is handled synchronously with a full
//! recomputation of the span from the buffer and offset it carries, so
//! stale or reordered events self-correct on the next one.
//!
//! The engine never renders anything and never touches the host's buffer:
//! it reports spans for the presentation layer and hands back
//! `(new buffer, new cursor)` values on commit for the host to write into
//! its own input widget.

use tracing::debug;

use crate::config::MentionsConfig;
use crate::error::Result;
use crate::focus::{self, Direction};
use crate::matcher::{Span, Trigger};
use crate::splice::{self, Splice};

/// Per-surface mention autocomplete engine.
pub struct MentionEngine {
    /// Configured trigger for this surface.
    trigger: Trigger,

    /// Span of the open mention token, if any.
    span: Option<Span>,

    /// Focused candidate index, if any.
    focused: Option<usize>,
}

impl MentionEngine {
    /// Create an engine from a configuration.
    ///
    /// # Arguments
    /// * `config` - Engine configuration supplied by the host
    ///
    /// # Returns
    /// * `Result<Self>` - New engine, or a config error for a bad trigger
    pub fn new(config: &MentionsConfig) -> Result<Self> {
        Ok(Self::with_trigger(Trigger::new(config.trigger.clone())?))
    }

    /// Create an engine from an already-validated trigger.
    pub fn with_trigger(trigger: Trigger) -> Self {
        Self {
            trigger,
            span: None,
            focused: None,
        }
    }

    /// Get the configured trigger.
    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    /// Span of the open mention token, if any.
    pub fn active_span(&self) -> Option<Span> {
        self.span
    }

    /// Whether a mention token is open (the overlay should be shown).
    pub fn is_active(&self) -> bool {
        self.span.is_some()
    }

    /// Currently focused candidate index, if any.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Handle a "text changed" event.
    ///
    /// # Arguments
    /// * `buffer` - Full current text content
    /// * `cursor` - Cursor offset after the edit (byte index)
    ///
    /// # Returns
    /// * `Option<Span>` - The recomputed span, `None` when no token is open
    pub fn text_changed(&mut self, buffer: &str, cursor: usize) -> Option<Span> {
        self.refresh(buffer, cursor)
    }

    /// Handle a "cursor moved" event (no text change).
    ///
    /// Re-derives the span from the buffer truncated at the new offset;
    /// moving the cursor outside any open token clears the span.
    ///
    /// # Arguments
    /// * `buffer` - Full current text content
    /// * `cursor` - New cursor offset (byte index)
    ///
    /// # Returns
    /// * `Option<Span>` - The recomputed span, `None` when no token is open
    pub fn cursor_moved(&mut self, buffer: &str, cursor: usize) -> Option<Span> {
        self.refresh(buffer, cursor)
    }

    /// Recompute the active span from the current buffer and offset.
    fn refresh(&mut self, buffer: &str, cursor: usize) -> Option<Span> {
        let span = self.trigger.locate(buffer, cursor);

        match (self.span, span) {
            (None, Some(s)) => debug!("Mention span opened: [{}, {})", s.start, s.end),
            (Some(_), None) => debug!("Mention span cleared"),
            _ => {}
        }

        self.span = span;
        span
    }

    /// Handle a dismiss command (e.g. escape key): close the open token.
    ///
    /// The focused index is left untouched; it only ever changes through
    /// [`shift_focus`](Self::shift_focus).
    pub fn dismiss(&mut self) {
        if self.span.take().is_some() {
            debug!("Mention span dismissed");
        }
    }

    /// Handle a navigation command over the current candidate list.
    ///
    /// Guards the degenerate empty-list case by clearing the focus and
    /// ignoring the command; with candidates present this delegates to
    /// [`focus::advance`] and records the result.
    ///
    /// # Arguments
    /// * `direction` - Navigation direction
    /// * `count` - Number of candidates in this rendering pass
    ///
    /// # Returns
    /// * `Option<usize>` - The new focused index, `None` when `count == 0`
    pub fn shift_focus(&mut self, direction: Direction, count: usize) -> Option<usize> {
        if count == 0 {
            self.focused = None;
            return None;
        }

        let index = focus::advance(self.focused, direction, count);
        debug!("Focus moved to candidate {index}");
        self.focused = Some(index);
        self.focused
    }

    /// Handle a commit command: splice `replacement` over the open token.
    ///
    /// Completing always closes the span; the host is expected to write
    /// the returned buffer and cursor back into its input surface and
    /// feed them through [`text_changed`](Self::text_changed) again.
    ///
    /// # Arguments
    /// * `buffer` - Full current text content
    /// * `replacement` - Chosen completion text
    ///
    /// # Returns
    /// * `Option<Splice>` - New buffer and cursor, or `None` with no open token
    pub fn commit(&mut self, buffer: &str, replacement: &str) -> Option<Splice> {
        let span = self.span.take()?;
        let result = splice::apply(buffer, span, replacement);
        debug!("Completion committed, cursor at {}", result.cursor);
        Some(result)
    }

    /// Commit the focused candidate from the host's candidate list.
    ///
    /// # Arguments
    /// * `buffer` - Full current text content
    /// * `candidates` - Candidate list for the current rendering pass
    ///
    /// # Returns
    /// * `Option<Splice>` - `None` when no token is open, nothing is
    ///   focused, or the focused index is out of bounds for `candidates`
    pub fn commit_focused(&mut self, buffer: &str, candidates: &[String]) -> Option<Splice> {
        let index = self.focused?;
        let replacement = candidates.get(index)?;
        self.commit(buffer, replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> MentionEngine {
        MentionEngine::new(&MentionsConfig::default()).unwrap()
    }

    fn candidates(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_rejects_bad_config() {
        assert!(MentionEngine::new(&MentionsConfig::new("")).is_err());
        assert!(MentionEngine::new(&MentionsConfig::new("@ ")).is_err());
    }

    #[test]
    fn test_text_changed_opens_span() {
        let mut engine = engine();
        assert!(!engine.is_active());

        let span = engine.text_changed("hello @wor", 10).unwrap();
        assert_eq!(span, Span::new(7, 10));
        assert!(engine.is_active());
        assert_eq!(engine.active_span(), Some(span));
    }

    #[test]
    fn test_text_changed_clears_span() {
        let mut engine = engine();
        engine.text_changed("hello @wor", 10);
        assert!(engine.is_active());

        // Typing a space closes the token
        assert_eq!(engine.text_changed("hello @wor ", 11), None);
        assert!(!engine.is_active());
    }

    #[test]
    fn test_cursor_moved_outside_token_clears_span() {
        let mut engine = engine();
        engine.text_changed("hello @wor", 10);
        assert!(engine.is_active());

        // Moving the cursor back before the trigger leaves the token
        assert_eq!(engine.cursor_moved("hello @wor", 3), None);
        assert!(!engine.is_active());

        // Moving back inside re-opens it, truncated at the new offset
        let span = engine.cursor_moved("hello @wor", 9).unwrap();
        assert_eq!(span, Span::new(7, 9));
    }

    #[test]
    fn test_dismiss_clears_span_only() {
        let mut engine = engine();
        engine.text_changed("hello @wor", 10);
        engine.shift_focus(Direction::Next, 3);

        engine.dismiss();
        assert!(!engine.is_active());
        // Focus survives a dismissal, matching the reference behavior
        assert_eq!(engine.focused(), Some(2));
    }

    #[test]
    fn test_commit_splices_and_closes_span() {
        let mut engine = engine();
        engine.text_changed("hi @al", 6);

        let result = engine.commit("hi @al", "alice").unwrap();
        assert_eq!(result.buffer, "hi @alice");
        assert_eq!(result.cursor, 9);
        assert!(!engine.is_active());

        // The span is consumed: a second commit has nothing to splice
        // until the host feeds new events through the engine
        assert!(engine.commit("hi @alice", "bob").is_none());
    }

    #[test]
    fn test_commit_without_open_span_is_none() {
        let mut engine = engine();
        assert!(engine.commit("hello world", "alice").is_none());
    }

    #[test]
    fn test_no_stale_span_after_clear() {
        let mut engine = engine();
        engine.text_changed("hi @al", 6);
        // The next event reports no match; the old span must not leak
        // into a subsequent commit
        engine.text_changed("hi al", 5);
        assert!(engine.commit("hi al", "alice").is_none());
    }

    #[test]
    fn test_shift_focus_cycles_with_wraparound() {
        let mut engine = engine();
        assert_eq!(engine.shift_focus(Direction::Next, 4), Some(3));
        assert_eq!(engine.shift_focus(Direction::Next, 4), Some(0));
        assert_eq!(engine.shift_focus(Direction::Previous, 4), Some(3));
    }

    #[test]
    fn test_shift_focus_empty_list_is_guarded() {
        let mut engine = engine();
        engine.shift_focus(Direction::Next, 3);
        assert_eq!(engine.focused(), Some(2));

        // No candidates this pass: command ignored, focus cleared
        assert_eq!(engine.shift_focus(Direction::Next, 0), None);
        assert_eq!(engine.focused(), None);
    }

    #[test]
    fn test_commit_focused_uses_candidate_list() {
        let mut engine = engine();
        let names = candidates(&["alice", "bob", "carol"]);

        engine.text_changed("hi @", 4);
        engine.shift_focus(Direction::Next, names.len()); // carol
        engine.shift_focus(Direction::Next, names.len()); // alice

        let result = engine.commit_focused("hi @", &names).unwrap();
        assert_eq!(result.buffer, "hi @alice");
        assert_eq!(result.cursor, 9);
        assert!(!engine.is_active());
    }

    #[test]
    fn test_commit_focused_requires_focus_and_span() {
        let mut engine = engine();
        let names = candidates(&["alice"]);

        // Span open but nothing focused
        engine.text_changed("hi @", 4);
        assert!(engine.commit_focused("hi @", &names).is_none());
        assert!(engine.is_active());

        // Focus set but the candidate list shrank under it
        engine.shift_focus(Direction::Next, 5);
        assert!(engine.commit_focused("hi @", &names).is_none());
        assert!(engine.is_active());
    }

    #[test]
    fn test_full_typing_session() {
        // A complete flow: type, trigger, narrow, navigate, commit, resume
        let mut engine = engine();
        let names = candidates(&["alice", "bob"]);

        assert_eq!(engine.text_changed("h", 1), None);
        assert_eq!(engine.text_changed("hi", 2), None);
        assert_eq!(engine.text_changed("hi ", 3), None);

        let span = engine.text_changed("hi @", 4).unwrap();
        assert!(span.is_empty());

        let span = engine.text_changed("hi @b", 5).unwrap();
        assert_eq!(span, Span::new(4, 5));

        engine.shift_focus(Direction::Next, names.len()); // bob
        let result = engine.commit_focused("hi @b", &names).unwrap();
        assert_eq!(result.buffer, "hi @bob");
        assert_eq!(result.cursor, 7);

        // Host writes the new buffer back and keeps typing
        assert_eq!(engine.text_changed("hi @bob ", 8), None);
        let span = engine.text_changed("hi @bob @", 9).unwrap();
        assert_eq!(span, Span::new(9, 9));
    }

    #[test]
    fn test_stale_event_self_corrects() {
        // Events processed out of order can restore a stale span, but the
        // next event re-derives everything from its own buffer and offset
        let mut engine = engine();
        engine.text_changed("hi @al", 6);
        engine.text_changed("hi @a", 5); // stale, older buffer
        let span = engine.text_changed("hi @al", 6).unwrap();
        assert_eq!(span, Span::new(4, 6));
    }
}
