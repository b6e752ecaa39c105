//! Translation from terminal key events to console input events.
//!
//! The session models text edits as whole-buffer [`InputEvent::TextChanged`]
//! notifications, the way a GUI text field reports them. A raw terminal only
//! hands us keystrokes, so printable keys and backspace are expanded here
//! into a key press followed by the resulting buffer state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hatch_types::input::{InputEvent, Key};

/// Result of translating a single terminal key event.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// Console events to feed the session, in order.
    Events(Vec<InputEvent>),
    /// The user asked to leave (Ctrl+C or Escape).
    Quit,
}

/// Map one key press onto console events.
///
/// `buffer` is the session's current input line; edits are reported back
/// as the full post-edit text.
pub fn translate_key(key: &KeyEvent, buffer: &str) -> KeyOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyOutcome::Quit,
            _ => KeyOutcome::Events(vec![InputEvent::KeyPress(Key::Other)]),
        };
    }

    let events = match key.code {
        KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Enter => vec![InputEvent::KeyPress(Key::Enter)],
        KeyCode::Up => vec![InputEvent::KeyPress(Key::Up)],
        KeyCode::Down => vec![InputEvent::KeyPress(Key::Down)],
        KeyCode::Tab => vec![InputEvent::KeyPress(Key::Tab)],
        KeyCode::Char(c) => {
            let mut next = buffer.to_string();
            next.push(c);
            vec![
                InputEvent::KeyPress(Key::Other),
                InputEvent::TextChanged(next),
            ]
        },
        KeyCode::Backspace => {
            if buffer.is_empty() {
                vec![InputEvent::KeyPress(Key::Other)]
            } else {
                let mut next = buffer.to_string();
                next.pop();
                vec![
                    InputEvent::KeyPress(Key::Other),
                    InputEvent::TextChanged(next),
                ]
            }
        },
        _ => vec![InputEvent::KeyPress(Key::Other)],
    };
    KeyOutcome::Events(events)
}
