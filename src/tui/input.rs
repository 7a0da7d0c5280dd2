use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::session::Session;

/// Things a key press can ask the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Swap the focused entry with the one above.
    MoveUp,
    /// Swap the focused entry with the one below.
    MoveDown,
    /// Focus the entry above.
    FocusPrevious,
    /// Focus the entry below.
    FocusNext,
    /// Start a merge.
    Merge,
    /// Save the list file.
    SaveList,
    /// Load the list file.
    LoadList,
    /// Leave the UI.
    Quit,
}

/// Map a key press to its binding, if it has one.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let action = match key.code {
        KeyCode::Up if shift => Action::MoveUp,
        KeyCode::Down if shift => Action::MoveDown,
        KeyCode::Up => Action::FocusPrevious,
        KeyCode::Down => Action::FocusNext,
        KeyCode::Char('m') => Action::Merge,
        KeyCode::Char('s') => Action::SaveList,
        KeyCode::Char('l') => Action::LoadList,
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Run `action` against the session. Returns false when the UI should exit.
pub fn apply(session: &mut Session, action: Action) -> bool {
    match action {
        Action::MoveUp => session.move_up(),
        Action::MoveDown => session.move_down(),
        Action::FocusPrevious => session.focus_previous(),
        Action::FocusNext => session.focus_next(),
        Action::Merge => session.merge(),
        Action::SaveList => session.save_list(),
        Action::LoadList => session.load_list(),
        Action::Quit => return false,
    }
    true
}
