//! Maps terminal events onto game actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Start a run, or flap during one (Space/Up/Enter or a left click).
    Primary,
    /// Leave the game (q, Esc, Ctrl-C).
    Quit,
    /// Any other key.
    Other,
}

pub fn map_key(key: &KeyEvent) -> Option<InputAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => InputAction::Primary,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
        _ => InputAction::Other,
    };
    Some(action)
}

/// Clicks stand in for taps.
pub fn map_mouse(mouse: &MouseEvent) -> Option<InputAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputAction::Primary),
        _ => None,
    }
}

/// `None` for events the game ignores (focus, paste, resize, mouse motion).
pub fn map_event(event: &Event) -> Option<InputAction> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        _ => None,
    }
}
