//! Key mapping from terminal events to game commands.

use crate::types::{Command, Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::Turn(Direction::Up)),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::Turn(Direction::Down)),
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::Turn(Direction::Left)),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::Turn(Direction::Right)),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Full decode: quit takes precedence over any action binding.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }
    handle_key_event(key).map(Command::Action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn turn(d: Direction) -> Option<GameAction> {
        Some(GameAction::Turn(d))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), turn(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), turn(Direction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), turn(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), turn(Direction::Right));
    }

    #[test]
    fn test_vi_keys_any_case() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('k'))), turn(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('J'))), turn(Direction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('H'))), turn(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('l'))), turn(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('w'))), turn(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('S'))), turn(Direction::Down));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('a'))), turn(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('D'))), turn(Direction::Right));
    }

    #[test]
    fn test_every_letter_binding_in_both_cases() {
        let bindings = [
            ('k', Direction::Up),
            ('w', Direction::Up),
            ('j', Direction::Down),
            ('s', Direction::Down),
            ('h', Direction::Left),
            ('a', Direction::Left),
            ('l', Direction::Right),
            ('d', Direction::Right),
        ];
        for (ch, d) in bindings {
            for c in [ch, ch.to_ascii_uppercase()] {
                assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(c))), turn(d), "{}", c);
            }
        }
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameAction::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        for code in [KeyCode::Char('x'), KeyCode::Char(' '), KeyCode::Enter, KeyCode::Esc] {
            assert_eq!(handle_key_event(KeyEvent::from(code)), None);
            assert_eq!(command_for_key(KeyEvent::from(code)), None);
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_command_for_key() {
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('q'))),
            Some(Command::Quit)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Left)),
            Some(Command::Action(GameAction::Turn(Direction::Left)))
        );
    }
}
