//! Key mapping from terminal events to clock events.

use crate::types::{ClockAction, ClockEvent};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to clock actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ClockAction> {
    if should_quit(key) {
        return Some(ClockAction::Quit);
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) => ClockAction::from_char(ch),
        _ => None,
    }
}

/// Check if key should quit the clock.
///
/// Raw mode swallows SIGINT, so Ctrl+C is treated like `q`.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') if key.modifiers.is_empty())
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Translate a raw terminal event. Key releases and repeats are dropped.
pub fn map_event(event: Event) -> Option<ClockEvent> {
    match event {
        Event::Key(key) => match key.kind {
            KeyEventKind::Press => handle_key_event(key).map(ClockEvent::Action),
            KeyEventKind::Repeat | KeyEventKind::Release => None,
        },
        Event::Resize(_, _) => Some(ClockEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_clock_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('q'))),
            Some(ClockAction::Quit)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(ClockAction::ToggleDate)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('c'))),
            Some(ClockAction::CycleColor)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(ClockAction::Redraw)
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('D'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_resize_maps_to_resize() {
        assert_eq!(map_event(Event::Resize(120, 40)), Some(ClockEvent::Resize));
    }

    #[test]
    fn test_release_is_dropped() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_event(Event::Key(release)), None);
        assert_eq!(
            map_event(Event::Key(KeyEvent::from(KeyCode::Char('q')))),
            Some(ClockEvent::Action(ClockAction::Quit))
        );
    }

    #[test]
    fn test_focus_events_are_ignored() {
        assert_eq!(map_event(Event::FocusGained), None);
    }
}
