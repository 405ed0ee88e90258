use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollLeft,
    ScrollRight,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    None,
}

/// Handle a key event and return the corresponding action
///
/// `pending_key` carries the first key of a multi-key sequence (e.g. 'gg').
pub fn handle_key_event(key: KeyEvent, pending_key: Option<char>, keymap: &Keymap) -> Action {
    // "gg" sequence takes priority over single-key bindings for 'g'
    if key.code == KeyCode::Char('g')
        && key.modifiers == KeyModifiers::NONE
        && keymap.has_pending_g()
    {
        return if pending_key == Some('g') {
            keymap.pending_g_action()
        } else {
            Action::PendingG
        };
    }

    if let Some(action) = keymap.get(KeyBinding::new(key.code, key.modifiers)) {
        return action;
    }

    // Fallback bindings that always work, regardless of keymap config
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Left, KeyModifiers::NONE) => Action::ScrollLeft,
        (KeyCode::Right, KeyModifiers::NONE) => Action::ScrollRight,
        (KeyCode::PageDown, KeyModifiers::NONE) => Action::ScrollPageDown,
        (KeyCode::PageUp, KeyModifiers::NONE) => Action::ScrollPageUp,
        (KeyCode::Home, KeyModifiers::NONE) => Action::JumpToTop,
        (KeyCode::End, KeyModifiers::NONE) => Action::JumpToBottom,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_configured_bindings() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('j'), KeyModifiers::NONE), None, &keymap),
            Action::ScrollDown
        );
        assert_eq!(
            handle_key_event(press(KeyCode::Char('q'), KeyModifiers::NONE), None, &keymap),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(
                press(KeyCode::Char('G'), KeyModifiers::SHIFT),
                None,
                &keymap
            ),
            Action::JumpToBottom
        );
    }

    #[test]
    fn test_gg_sequence() {
        let keymap = Keymap::default();
        let g = press(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(g, None, &keymap), Action::PendingG);
        assert_eq!(handle_key_event(g, Some('g'), &keymap), Action::JumpToTop);
    }

    #[test]
    fn test_arrow_fallbacks() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Down, KeyModifiers::NONE), None, &keymap),
            Action::ScrollDown
        );
        assert_eq!(
            handle_key_event(press(KeyCode::End, KeyModifiers::NONE), None, &keymap),
            Action::JumpToBottom
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(
                press(KeyCode::Char('c'), KeyModifiers::CONTROL),
                None,
                &keymap
            ),
            Action::Quit
        );
    }

    #[test]
    fn test_unbound_key_is_none() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('z'), KeyModifiers::NONE), None, &keymap),
            Action::None
        );
    }
}
