use std::fmt;

use crate::auth::Session;
use crate::calendar::Day;

use super::layout::GridViewport;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key and mouse events)
/// - The main loop (mount, date change, layout)
/// - Effects (sign-in results, loading timers)
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Show the calendar screen with a fresh window and selection
    Mount { today: Day },
    /// Wall-clock date changed
    SetToday(Day),
    /// Leave the calendar and return to the login screen
    Logout,

    LoginAction(LoginAction),
    /// Result of a sign-in attempt; the error is the provider's cause, for logging
    LoginFinished(Result<Session, String>),

    CalendarAction(CalendarAction),
    LoadingFadeOut { mount_id: u64 },
    LoadingDismissed { mount_id: u64 },

    // System actions
    Quit,
}

/// Login form actions
#[derive(Clone, PartialEq)]
pub enum LoginAction {
    Input(char),
    DeleteChar,
    FocusNext,
    FocusPrevious,
    Submit,
}

// Keystrokes may be password characters; keep them out of the logs
impl fmt::Debug for LoginAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(_) => write!(f, "Input(*)"),
            Self::DeleteChar => write!(f, "DeleteChar"),
            Self::FocusNext => write!(f, "FocusNext"),
            Self::FocusPrevious => write!(f, "FocusPrevious"),
            Self::Submit => write!(f, "Submit"),
        }
    }
}

/// Calendar screen actions
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarAction {
    /// Grid viewport measured after layout
    GridResized(GridViewport),
    /// Scroll by a number of lines (negative = up)
    ScrollBy(i32),
    /// Scroll by a number of viewport heights (negative = up)
    ScrollPage(i32),
    ClickDay(Day),
    ClearSelection,
}
