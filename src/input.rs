use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::grid::Heading;

/// Input already mapped from raw key presses into what the game loop
/// consumes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Turn(Heading),
}

/// Maps a raw key event to a game event. Arrow keys and WASD request a
/// turn, Ctrl+C / Esc / q quit, anything else is ignored. Reversal
/// rejection is not applied here; that stays with the snake.
pub fn map_key(ev: &KeyEvent) -> Option<InputEvent> {
    if is_ctrl_c(ev) {
        return Some(InputEvent::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(InputEvent::Turn(Heading::Up)),
        KeyCode::Char('s') | KeyCode::Down => Some(InputEvent::Turn(Heading::Down)),
        KeyCode::Char('a') | KeyCode::Left => Some(InputEvent::Turn(Heading::Left)),
        KeyCode::Char('d') | KeyCode::Right => Some(InputEvent::Turn(Heading::Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
