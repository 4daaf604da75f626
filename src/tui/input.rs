//! Key bindings.

use crossterm::event::KeyCode;

/// A user action requested from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Roll the dice for the active seat.
    Roll,
    /// Move the active seat's piece with this index.
    Move(usize),
    /// Restart the game.
    Reset,
    /// Leave the client.
    Quit,
}

/// Maps a key to its command.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Enter => Some(Command::Roll),
        KeyCode::Char(c @ '1'..='4') => c
            .to_digit(10)
            .map(|digit| Command::Move(digit as usize - 1)),
        KeyCode::Char('n') => Some(Command::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
