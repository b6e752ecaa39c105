//! Host-agnostic input event types.
//!
//! Every host maps its native input to these enums. The console core never
//! sees raw terminal or widget input.

use serde::{Deserialize, Serialize};

/// A discrete input event fed to the interaction controller.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The edit buffer's text changed through a user edit (typing, deletion,
    /// paste). Hosts must not send this for buffer changes the controller
    /// itself makes (history recall, suggestion apply, post-submit clear).
    TextChanged(String),
    /// A key was pressed.
    KeyPress(Key),
}

/// Keys the controller distinguishes.
///
/// Anything that is not Enter, Up, Down, or Tab maps to [`Key::Other`],
/// which only signals that some input occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Enter,
    Up,
    Down,
    Tab,
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- InputEvent variant construction and equality --

    #[test]
    fn text_changed_event() {
        let e = InputEvent::TextChanged("tele".into());
        assert_eq!(e, InputEvent::TextChanged("tele".into()));
    }

    #[test]
    fn text_changed_empty_buffer() {
        let e = InputEvent::TextChanged(String::new());
        if let InputEvent::TextChanged(text) = e {
            assert!(text.is_empty());
        } else {
            panic!("wrong variant");
        }
    }

    #[test]
    fn text_changed_unicode() {
        let e = InputEvent::TextChanged("télé \u{1F600}".into());
        assert_eq!(e, InputEvent::TextChanged("télé \u{1F600}".into()));
    }

    #[test]
    fn key_press_all_variants() {
        let keys = [Key::Enter, Key::Up, Key::Down, Key::Tab, Key::Other];
        for key in keys {
            let e = InputEvent::KeyPress(key);
            assert_eq!(e, InputEvent::KeyPress(key));
        }
    }

    #[test]
    fn key_press_differs_from_text_changed() {
        let press = InputEvent::KeyPress(Key::Enter);
        let text = InputEvent::TextChanged("enter".into());
        assert_ne!(press, text);
    }

    #[test]
    fn text_changed_differs_by_content() {
        let a = InputEvent::TextChanged("a".into());
        let b = InputEvent::TextChanged("b".into());
        assert_ne!(a, b);
    }

    // -- Key properties --

    #[test]
    fn key_clone_and_copy() {
        let k = Key::Tab;
        let k2 = k;
        let k3 = k.clone();
        assert_eq!(k, k2);
        assert_eq!(k, k3);
    }

    #[test]
    fn key_debug_format() {
        let dbg = format!("{:?}", Key::Enter);
        assert_eq!(dbg, "Enter");
    }

    #[test]
    fn key_hash_distinct() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Key::Up);
        set.insert(Key::Down);
        set.insert(Key::Up);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn key_serde_roundtrip() {
        let k = Key::Other;
        let json = serde_json::to_string(&k).unwrap();
        let k2: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(k, k2);
    }

    // -- InputEvent clone --

    #[test]
    fn input_event_clone() {
        let e = InputEvent::TextChanged("clone me".into());
        let e2 = e.clone();
        assert_eq!(e, e2);
    }

    // -- All variants are distinguishable --

    #[test]
    fn all_event_variants_distinct() {
        let events: Vec<InputEvent> = vec![
            InputEvent::TextChanged("x".into()),
            InputEvent::KeyPress(Key::Enter),
            InputEvent::KeyPress(Key::Up),
            InputEvent::KeyPress(Key::Down),
            InputEvent::KeyPress(Key::Tab),
            InputEvent::KeyPress(Key::Other),
        ];
        for (i, a) in events.iter().enumerate() {
            for (j, b) in events.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "variants {i} and {j} should differ");
                }
            }
        }
    }
}
