//! Event-driven state machine for the console's edit line.
//!
//! The controller consumes a stream of [`InputEvent`]s and owns the edit
//! buffer, the submission history, and the live suggestion state. Hosts
//! render from the read accessors and learn what changed from the returned
//! [`InputReaction`].
//!
//! Suggestion navigation and history recall are mutually exclusive: while
//! the suggestion set is non-empty, Up/Down cycle the selected suggestion
//! and the history cursor is frozen; once it is empty, Up/Down become
//! cyclic history recall.

use hatch_types::input::{InputEvent, Key};

use crate::suggest::suggestions_for;

/// What a consumed event changed, for the host's rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum InputReaction {
    /// Nothing observable changed.
    None,
    /// The controller rewrote the edit buffer (history recall or suggestion
    /// apply). Hosts must not echo this back as a `TextChanged` event.
    BufferChanged,
    /// The suggestion set or the selected suggestion changed.
    SuggestionsChanged,
    /// A non-empty line was submitted. The buffer and the suggestion set are
    /// cleared; the history cursor is left alone.
    Submitted(String),
}

/// State machine driving the edit line.
///
/// `TextChanged` events must describe user edits only (typing, deletion,
/// paste). Buffer rewrites made by the controller itself are reported
/// through [`InputReaction::BufferChanged`] and must not come back in.
pub struct InputController {
    buffer: String,
    history: Vec<String>,
    /// 0 = inactive; k = the k-th most recent submission is recalled.
    history_cursor: usize,
    suggestions: Vec<String>,
    suggestion_cursor: usize,
    source_names: Vec<String>,
    suggestion_cap: usize,
}

impl InputController {
    pub fn new(suggestion_cap: usize) -> Self {
        Self {
            buffer: String::new(),
            history: Vec::new(),
            history_cursor: 0,
            suggestions: Vec::new(),
            suggestion_cursor: 0,
            source_names: Vec::new(),
            suggestion_cap,
        }
    }

    /// Replace the suggestion source (the set of known command names).
    ///
    /// Takes effect on the next `TextChanged` event; the current suggestion
    /// set is left as it stands.
    pub fn set_source_names(&mut self, names: Vec<String>) {
        self.source_names = names;
    }

    pub fn set_suggestion_cap(&mut self, cap: usize) {
        self.suggestion_cap = cap;
    }

    /// Advance the state machine by one event.
    ///
    /// Dispatch is a table over event and mode (suggestions present or not);
    /// each event lands in exactly one cell, so a key can never trigger two
    /// of the transitions.
    pub fn handle_event(&mut self, event: InputEvent) -> InputReaction {
        let suggesting = !self.suggestions.is_empty();
        match (event, suggesting) {
            (InputEvent::TextChanged(text), _) => self.text_changed(text),
            (InputEvent::KeyPress(Key::Enter), _) => self.submit(),
            (InputEvent::KeyPress(Key::Tab), true) => self.apply_suggestion(),
            (InputEvent::KeyPress(Key::Tab), false) => InputReaction::None,
            (InputEvent::KeyPress(Key::Up), true) => self.next_suggestion(),
            (InputEvent::KeyPress(Key::Down), true) => self.prev_suggestion(),
            (InputEvent::KeyPress(Key::Up), false) => self.recall_older(),
            (InputEvent::KeyPress(Key::Down), false) => self.recall_newer(),
            (InputEvent::KeyPress(Key::Other), true) => InputReaction::None,
            (InputEvent::KeyPress(Key::Other), false) => {
                // Typing resumed, so the next recall starts from the most
                // recent entry again.
                self.history_cursor = 0;
                InputReaction::None
            },
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Index of the selected suggestion. Meaningful only while
    /// [`suggestions`](InputController::suggestions) is non-empty.
    pub fn selected_suggestion(&self) -> usize {
        self.suggestion_cursor
    }

    /// All submitted lines, oldest first. Verbatim, duplicates included.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    // -- Transitions ------------------------------------------------------

    fn text_changed(&mut self, text: String) -> InputReaction {
        self.buffer = text;
        let next = suggestions_for(&self.source_names, &self.buffer, self.suggestion_cap);
        let changed = next != self.suggestions || self.suggestion_cursor != 0;
        self.suggestions = next;
        self.suggestion_cursor = 0;
        if changed {
            log::trace!("suggestions for {:?}: {:?}", self.buffer, self.suggestions);
            InputReaction::SuggestionsChanged
        } else {
            InputReaction::None
        }
    }

    fn submit(&mut self) -> InputReaction {
        if self.buffer.is_empty() {
            return InputReaction::None;
        }
        let line = std::mem::take(&mut self.buffer);
        self.history.push(line.clone());
        // The suggestion set is derived from the buffer, which is now empty.
        self.suggestions.clear();
        self.suggestion_cursor = 0;
        InputReaction::Submitted(line)
    }

    fn apply_suggestion(&mut self) -> InputReaction {
        match self.suggestions.get(self.suggestion_cursor) {
            Some(pick) => {
                // The set stays as it is; retyping triggers TextChanged and
                // a recompute.
                self.buffer = pick.clone();
                InputReaction::BufferChanged
            },
            None => InputReaction::None,
        }
    }

    fn next_suggestion(&mut self) -> InputReaction {
        let next = (self.suggestion_cursor + 1) % self.suggestions.len();
        if next == self.suggestion_cursor {
            return InputReaction::None;
        }
        self.suggestion_cursor = next;
        InputReaction::SuggestionsChanged
    }

    fn prev_suggestion(&mut self) -> InputReaction {
        let len = self.suggestions.len();
        let next = (self.suggestion_cursor + len - 1) % len;
        if next == self.suggestion_cursor {
            return InputReaction::None;
        }
        self.suggestion_cursor = next;
        InputReaction::SuggestionsChanged
    }

    fn recall_older(&mut self) -> InputReaction {
        let len = self.history.len();
        if len == 0 {
            return InputReaction::None;
        }
        self.history_cursor = (self.history_cursor % len) + 1;
        self.buffer = self.history[len - self.history_cursor].clone();
        InputReaction::BufferChanged
    }

    fn recall_newer(&mut self) -> InputReaction {
        let len = self.history.len();
        if len == 0 {
            return InputReaction::None;
        }
        self.history_cursor = if self.history_cursor <= 1 {
            len
        } else {
            self.history_cursor - 1
        };
        self.buffer = self.history[len - self.history_cursor].clone();
        InputReaction::BufferChanged
    }
}
