//! Mapping from terminal events to board commands.

use crate::types::GameCommand;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Two presses on the same target within this window form a double click.
pub const DOUBLE_CLICK_MS: u64 = 400;

/// Map keyboard input to board commands.
pub fn handle_key_event(key: KeyEvent) -> Option<GameCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // History
        KeyCode::Char('z') | KeyCode::Char('Z') if ctrl => Some(GameCommand::Undo),
        KeyCode::Char('y') | KeyCode::Char('Y') if ctrl => Some(GameCommand::Redo),
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => Some(GameCommand::Quit),

        KeyCode::Char(' ') => Some(GameCommand::Reset),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameCommand::Quit),

        // Scrolling
        KeyCode::Left | KeyCode::Char('h') => Some(GameCommand::Pan { dx: -1, dy: 0 }),
        KeyCode::Right | KeyCode::Char('l') => Some(GameCommand::Pan { dx: 1, dy: 0 }),
        KeyCode::Up | KeyCode::Char('k') => Some(GameCommand::Pan { dx: 0, dy: -1 }),
        KeyCode::Down | KeyCode::Char('j') => Some(GameCommand::Pan { dx: 0, dy: 1 }),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    handle_key_event(key) == Some(GameCommand::Quit)
}

/// What a mouse event means for the board, in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// The pointer is now over `(column, row)`.
    Hover { column: u16, row: u16 },
    /// Left button pressed at `(column, row)`.
    Press { column: u16, row: u16 },
}

/// Map mouse input to pointer actions. Other buttons and scrolling are ignored.
pub fn handle_mouse_event(event: MouseEvent) -> Option<PointerAction> {
    let (column, row) = (event.column, event.row);
    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            Some(PointerAction::Hover { column, row })
        }
        MouseEventKind::Down(MouseButton::Left) => Some(PointerAction::Press { column, row }),
        _ => None,
    }
}

/// Detects double clicks from a stream of timed presses.
///
/// Terminals report single presses only, so two presses on the same target
/// within the window are folded into one double click.
#[derive(Debug, Clone)]
pub struct ClickTracker<T> {
    window_ms: u64,
    last: Option<(T, u64)>,
}

impl<T: Copy + PartialEq> ClickTracker<T> {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last: None,
        }
    }

    /// Record a press on `target` at `now_ms`; returns true if it completes a
    /// double click. A completed double click does not start another one.
    pub fn press(&mut self, target: T, now_ms: u64) -> bool {
        let double = matches!(
            self.last,
            Some((prev, at)) if prev == target && now_ms.saturating_sub(at) <= self.window_ms
        );
        self.last = if double { None } else { Some((target, now_ms)) };
        double
    }
}

impl<T: Copy + PartialEq> Default for ClickTracker<T> {
    fn default() -> Self {
        Self::new(DOUBLE_CLICK_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_history_keys_need_control() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            Some(GameCommand::Undo)
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL)),
            Some(GameCommand::Redo)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('z'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('y'))), None);
    }

    #[test]
    fn test_pan_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameCommand::Pan { dx: -1, dy: 0 })
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(GameCommand::Pan { dx: 0, dy: 1 })
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('k'))),
            Some(GameCommand::Pan { dx: 0, dy: -1 })
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameCommand::Pan { dx: 1, dy: 0 })
        );
    }

    #[test]
    fn test_reset_and_quit_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameCommand::Reset)
        );
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = KeyEvent::from(KeyCode::Char(' '));
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_key_event(key), None);
    }

    #[test]
    fn test_mouse_mapping() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Moved, 3, 4)),
            Some(PointerAction::Hover { column: 3, row: 4 })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 1, 2)),
            Some(PointerAction::Hover { column: 1, row: 2 })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 6)),
            Some(PointerAction::Press { column: 5, row: 6 })
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 5, 6)),
            None
        );
        assert_eq!(handle_mouse_event(mouse(MouseEventKind::ScrollUp, 0, 0)), None);
    }

    #[test]
    fn test_double_click_window() {
        let mut clicks = ClickTracker::new(400);
        assert!(!clicks.press((1, 1), 0));
        assert!(clicks.press((1, 1), 400));
        // A third press starts over.
        assert!(!clicks.press((1, 1), 500));
        assert!(!clicks.press((1, 1), 1_000));
    }

    #[test]
    fn test_double_click_needs_same_target() {
        let mut clicks = ClickTracker::default();
        assert!(!clicks.press((0, 0), 0));
        assert!(!clicks.press((0, 1), 100));
        assert!(clicks.press((0, 1), 200));
    }
}
