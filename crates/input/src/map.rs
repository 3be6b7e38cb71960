//! Key mapping from terminal events to driver input.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Any ordinary key: add a ball.
    Spawn,
    /// Ctrl-C / Ctrl-D. Raw mode delivers these as keys instead of signals.
    Interrupt,
}

/// Map a key event. Only presses count; repeats and releases are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if is_interrupt(key) {
        return Some(KeyInput::Interrupt);
    }
    Some(KeyInput::Spawn)
}

/// Map any terminal event. Resize, focus, mouse and paste events are ignored.
pub fn handle_event(event: Event) -> Option<KeyInput> {
    match event {
        Event::Key(key) => handle_key_event(key),
        _ => None,
    }
}

/// Check if key is the interrupt chord.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(
            key.code,
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('d') | KeyCode::Char('D')
        )
}
