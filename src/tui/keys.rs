//! Keyboard and mouse event to action mapping
//!
//! This module handles converting crossterm events into Actions. Which keys
//! mean what depends on the current screen and on the loading overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, trace};

use super::action::{Action, CalendarAction, LoginAction};
use super::layout::WHEEL_LINES;
use super::state::{AppState, LoadingPhase, LoginField, Screen};

/// Ctrl-C quits from any screen
fn handle_global_keys(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    None
}

fn handle_login_keys(key: &KeyEvent, state: &AppState) -> Option<Action> {
    if key.code == KeyCode::Esc {
        return Some(Action::Quit);
    }
    if state.login.pending {
        trace!("KEY: Ignoring {:?} while sign-in is pending", key.code);
        return None;
    }

    let login_action = match key.code {
        KeyCode::Tab | KeyCode::Down => LoginAction::FocusNext,
        KeyCode::BackTab | KeyCode::Up => LoginAction::FocusPrevious,
        KeyCode::Enter => match state.login.focus {
            LoginField::Email => LoginAction::FocusNext,
            LoginField::Password => LoginAction::Submit,
        },
        KeyCode::Backspace => LoginAction::DeleteChar,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            LoginAction::Input(c)
        }
        _ => return None,
    };
    Some(Action::LoginAction(login_action))
}

fn handle_calendar_keys(key: &KeyEvent, state: &AppState) -> Option<Action> {
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Some(Action::Quit);
    }
    if state.calendar.loading != LoadingPhase::Hidden {
        trace!("KEY: Ignoring {:?} while loading", key.code);
        return None;
    }

    let calendar_action = match key.code {
        KeyCode::Char('j') | KeyCode::Down => CalendarAction::ScrollBy(1),
        KeyCode::Char('k') | KeyCode::Up => CalendarAction::ScrollBy(-1),
        KeyCode::PageDown => CalendarAction::ScrollPage(1),
        KeyCode::PageUp => CalendarAction::ScrollPage(-1),
        KeyCode::Char('c') => CalendarAction::ClearSelection,
        KeyCode::Char('L') if state.system.config.auth.login_required() => {
            debug!("KEY: Logout requested");
            return Some(Action::Logout);
        }
        _ => return None,
    };
    Some(Action::CalendarAction(calendar_action))
}

/// Convert a KeyEvent into an Action based on current application state
///
/// - Ctrl-C quits everywhere
/// - Login screen: text entry, field focus, Enter to advance or submit, Esc quits
/// - Calendar screen: scrolling, clearing the selection, logout, q quits
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?} (screen={:?})", key.code, state.screen);

    if let Some(action) = handle_global_keys(&key) {
        return Some(action);
    }

    match state.screen {
        Screen::Login => handle_login_keys(&key, state),
        Screen::Calendar => handle_calendar_keys(&key, state),
    }
}

/// Convert a MouseEvent into an Action: left click selects a day, the wheel scrolls
pub fn mouse_to_action(mouse: MouseEvent, state: &AppState) -> Option<Action> {
    if state.screen != Screen::Calendar || state.calendar.loading != LoadingPhase::Hidden {
        return None;
    }

    let calendar_action = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let day = state.calendar.day_at_position(mouse.column, mouse.row)?;
            CalendarAction::ClickDay(day)
        }
        MouseEventKind::ScrollDown => CalendarAction::ScrollBy(WHEEL_LINES),
        MouseEventKind::ScrollUp => CalendarAction::ScrollBy(-WHEEL_LINES),
        _ => return None,
    };
    Some(Action::CalendarAction(calendar_action))
}
