//! Key mapping from terminal events to host commands.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Forward a heading change to the engine
    Turn(Direction),
    /// Re-initialize the engine
    Restart,
    /// Stop or resume calling `update()`
    Pause,
    /// Toggle the grid overlay
    ToggleGrid,
}

impl HostCommand {
    /// Direction code for the engine, if this is a turn
    pub fn direction_code(&self) -> Option<u32> {
        match self {
            HostCommand::Turn(dir) => Some(dir.code()),
            _ => None,
        }
    }
}

/// Map keyboard input to host commands.
pub fn handle_key_event(key: KeyEvent) -> Option<HostCommand> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(HostCommand::Turn(Direction::Up))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(HostCommand::Turn(Direction::Right))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(HostCommand::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(HostCommand::Turn(Direction::Left))
        }

        // Host actions
        KeyCode::Char('p') | KeyCode::Char('P') => Some(HostCommand::Pause),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(HostCommand::ToggleGrid),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(HostCommand::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(HostCommand::Turn(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(HostCommand::Turn(Direction::Right))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(HostCommand::Turn(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(HostCommand::Turn(Direction::Left))
        );
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('W'))),
            Some(HostCommand::Turn(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('h'))),
            Some(HostCommand::Turn(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('J'))),
            Some(HostCommand::Turn(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(HostCommand::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_turn_maps_to_engine_code() {
        let cmd = handle_key_event(KeyEvent::from(KeyCode::Left)).unwrap();
        assert_eq!(cmd.direction_code(), Some(3));
        assert_eq!(HostCommand::Pause.direction_code(), None);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(HostCommand::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('g'))),
            Some(HostCommand::ToggleGrid)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(HostCommand::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
