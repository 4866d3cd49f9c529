//! Keyboard mapping for the form.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    /// The discrete submit trigger. Whether anything happens is the
    /// session's call, not the keyboard's.
    Submit,
    NextField,
    PrevField,
    Insert(char),
    Backspace,
    ClearField,
}

/// Map a key event, ignoring releases and unbound keys.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<AppEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(AppEvent::Quit),
            KeyCode::Char('u') => Some(AppEvent::ClearField),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(AppEvent::Quit),
        KeyCode::Enter => Some(AppEvent::Submit),
        KeyCode::Tab | KeyCode::Down => Some(AppEvent::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(AppEvent::PrevField),
        KeyCode::Backspace => Some(AppEvent::Backspace),
        KeyCode::Char(c) => Some(AppEvent::Insert(c)),
        _ => None,
    }
}
