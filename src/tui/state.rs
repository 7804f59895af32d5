use std::fmt;

use crate::auth::Session;
use crate::calendar::{Day, ScrollProbe, Selection, WindowManager, DAYS_PER_WEEK};
use crate::config::Config;

use super::layout::{GridViewport, LINE_UNITS, ROW_HEIGHT};

/// Root application state - single source of truth
///
/// This is the entire application state in one place.
/// All state changes happen through the reducer.
/// Components receive slices of this state as props.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Which screen is shown
    pub screen: Screen,

    /// Login form
    pub login: LoginState,

    /// Calendar screen: day window, selection, scroll position, loading overlay
    pub calendar: CalendarState,

    /// System state
    pub system: SystemState,
}

impl AppState {
    /// Initial state for a config; the login screen is skipped when no accounts exist
    pub fn new(config: Config) -> Self {
        let screen = if config.auth.login_required() {
            Screen::Login
        } else {
            Screen::Calendar
        };
        let mut system = SystemState {
            config,
            ..SystemState::default()
        };
        system.reset_status_message(screen);

        Self {
            screen,
            login: LoginState::default(),
            calendar: CalendarState::new(system.config.calendar.edge_threshold),
            system,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Calendar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn toggle(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Email,
        }
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    /// A sign-in request is in flight; the form ignores input
    pub pending: bool,
    /// Message shown under the form after a failed sign-in
    pub error: Option<String>,
}

impl fmt::Debug for LoginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginState")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("focus", &self.focus)
            .field("pending", &self.pending)
            .field("error", &self.error)
            .finish()
    }
}

/// Loading overlay lifecycle on the calendar screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingPhase {
    Visible,
    FadingOut,
    #[default]
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalendarState {
    pub window: WindowManager,
    pub selection: Selection,
    /// Lines scrolled from the top of the grid content
    pub scroll_offset: u32,
    /// Grid area, known after the first layout
    pub viewport: Option<GridViewport>,
    pub loading: LoadingPhase,
    /// Initial centering on today's month has been done
    pub centered: bool,
    /// Incremented on every mount; timers from older mounts are ignored
    pub mount_id: u64,
}

impl CalendarState {
    pub fn new(edge_threshold: u32) -> Self {
        Self {
            window: WindowManager::new(edge_threshold),
            ..Self::default()
        }
    }

    /// Height of the whole grid in lines
    pub fn content_lines(&self) -> u32 {
        self.window.window().row_count() as u32 * ROW_HEIGHT as u32
    }

    pub fn max_scroll_offset(&self) -> u32 {
        let visible = self.viewport.map(|v| v.height as u32).unwrap_or(0);
        self.content_lines().saturating_sub(visible)
    }

    /// Grid row at the top of the viewport
    pub fn top_row(&self) -> usize {
        (self.scroll_offset / ROW_HEIGHT as u32) as usize
    }

    /// First day in the top visible week row
    pub fn top_visible_day(&self) -> Option<Day> {
        let window = self.window.window();
        let row = self.top_row();
        (0..DAYS_PER_WEEK).find_map(|column| window.day_at(row, column))
    }

    /// Day under a screen position, None for blanks and positions outside the grid
    pub fn day_at_position(&self, column: u16, row: u16) -> Option<Day> {
        let viewport = self.viewport?;
        let (week_row, day_column) = viewport.cell_at(column, row, self.scroll_offset)?;
        self.window.window().day_at(week_row, day_column)
    }

    /// Scroll geometry in scroll units, for edge detection
    pub fn scroll_probe(&self) -> ScrollProbe {
        let client_lines = self.viewport.map(|v| v.height as u32).unwrap_or(0);
        ScrollProbe {
            offset: self.scroll_offset * LINE_UNITS,
            client_height: client_lines * LINE_UNITS,
            scroll_height: self.content_lines() * LINE_UNITS,
        }
    }
}

pub const CALENDAR_STATUS_MESSAGE: &str =
    "Keys: j/k scroll | PgUp/PgDn page | click select | c clear | q quit";

pub const LOGIN_STATUS_MESSAGE: &str = "Keys: Tab switch field | Enter submit | Esc quit";

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub today: Day,
    pub session: Option<Session>,
    pub status_message: Option<String>,
}

impl SystemState {
    /// Restore the key help for a screen
    pub fn reset_status_message(&mut self, screen: Screen) {
        let message = match screen {
            Screen::Login => LOGIN_STATUS_MESSAGE.to_string(),
            Screen::Calendar if self.config.auth.login_required() => {
                format!("{} | L logout", CALENDAR_STATUS_MESSAGE)
            }
            Screen::Calendar => CALENDAR_STATUS_MESSAGE.to_string(),
        };
        self.status_message = Some(message);
    }
}
