//! Key mapping from terminal events to raw key codes.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::Key;

/// One polled input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key-down with its raw code.
    Key(Key),
    /// Ctrl+C or SIGINT: stop now, without asking the game.
    Interrupt,
}

/// Map any terminal event. Non-key events (resize, mouse, focus, paste) are dropped.
pub fn event_to_input(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => key_event_to_input(*key),
        _ => None,
    }
}

/// Map a key event to a raw code.
///
/// Release events are ignored; terminals that do not report them behave the same.
pub fn key_event_to_input(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if is_interrupt(key) {
        return Some(InputEvent::Interrupt);
    }

    let code = match key.code {
        KeyCode::Up => Key::UP,
        KeyCode::Down => Key::DOWN,
        KeyCode::Left => Key::LEFT,
        KeyCode::Right => Key::RIGHT,
        KeyCode::Enter => Key::ENTER,
        KeyCode::Esc => Key::ESCAPE,
        KeyCode::Backspace => Key::BACKSPACE,
        KeyCode::Tab => Key::TAB,
        KeyCode::BackTab => Key::BACKTAB,
        KeyCode::Home => Key::HOME,
        KeyCode::End => Key::END,
        KeyCode::PageUp => Key::PAGE_UP,
        KeyCode::PageDown => Key::PAGE_DOWN,
        KeyCode::Delete => Key::DELETE,
        KeyCode::Insert => Key::INSERT,
        KeyCode::F(n) => Key::function(n),
        KeyCode::Char(ch) => Key::from_char(ch),
        _ => return None,
    };
    Some(InputEvent::Key(code))
}

/// Check if a logical key asks the game to quit (`q` or Escape).
pub fn is_quit_key(key: Key) -> bool {
    key == Key::Q || key == Key::ESCAPE
}

fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Option<InputEvent> {
        key_event_to_input(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(press(KeyCode::Up), Some(InputEvent::Key(Key::UP)));
        assert_eq!(press(KeyCode::Down), Some(InputEvent::Key(Key::DOWN)));
        assert_eq!(press(KeyCode::Left), Some(InputEvent::Key(Key::LEFT)));
        assert_eq!(press(KeyCode::Right), Some(InputEvent::Key(Key::RIGHT)));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(press(KeyCode::Enter), Some(InputEvent::Key(Key::ENTER)));
        assert_eq!(press(KeyCode::Esc), Some(InputEvent::Key(Key::ESCAPE)));
        assert_eq!(press(KeyCode::Backspace), Some(InputEvent::Key(Key::BACKSPACE)));
        assert_eq!(press(KeyCode::Tab), Some(InputEvent::Key(Key::TAB)));
        assert_eq!(press(KeyCode::Char(' ')), Some(InputEvent::Key(Key::SPACE)));
        assert_eq!(press(KeyCode::F(2)), Some(InputEvent::Key(Key(266))));
    }

    #[test]
    fn test_chars_keep_case() {
        assert_eq!(press(KeyCode::Char('w')), Some(InputEvent::Key(Key::W)));
        assert_eq!(
            press(KeyCode::Char('W')),
            Some(InputEvent::Key(Key::from_char('W')))
        );
        assert_eq!(press(KeyCode::Char('7')), Some(InputEvent::Key(Key::NUM_7)));
    }

    #[test]
    fn test_ctrl_c_is_interrupt() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(ev), Some(InputEvent::Interrupt));
        // Plain `c` is just a key.
        assert_eq!(press(KeyCode::Char('c')), Some(InputEvent::Key(Key::C)));
    }

    #[test]
    fn test_release_is_ignored() {
        let ev = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(key_event_to_input(ev), None);
    }

    #[test]
    fn test_non_key_events_are_dropped() {
        assert_eq!(event_to_input(&Event::Resize(80, 24)), None);
        assert_eq!(event_to_input(&Event::FocusGained), None);
        assert_eq!(
            event_to_input(&Event::Key(KeyEvent::from(KeyCode::Char('q')))),
            Some(InputEvent::Key(Key::Q))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit_key(Key::Q));
        assert!(is_quit_key(Key::ESCAPE));
        assert!(!is_quit_key(Key::from_char('Q')));
        assert!(!is_quit_key(Key::X));
    }
}
