use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::controller::InputSource;
use crate::error::GameError;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit step `(dx, dy)`; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level commands consumed by the control loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

/// Maps one terminal key event to a game command.
#[must_use]
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Command::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Command::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Command::Move(Direction::Right),
        KeyCode::Char('r' | 'R') => Command::Restart,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Command::Quit,
        _ => return None,
    };

    Some(command)
}

/// Non-blocking keyboard source backed by crossterm's event queue.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll_commands(&mut self) -> Result<Vec<Command>, GameError> {
        let mut commands = Vec::new();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                commands.extend(command_for_key(key));
            }
        }

        Ok(commands)
    }
}
