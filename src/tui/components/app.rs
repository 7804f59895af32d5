use crate::tui::component::{vertical, Component, Constraint, Element};
use crate::tui::layout::{MENU_HEIGHT, STATUS_BAR_HEIGHT, WEEK_HEADER_HEIGHT};
use crate::tui::state::{AppState, Screen};

use super::{
    CalendarGrid, CalendarGridProps, CalendarMenu, CalendarMenuProps, LoadingOverlay,
    LoginScreen, StatusBar, WeekHeader,
};

/// Root App component
///
/// This is the top-level component that renders the entire application.
/// It uses the global AppState as props and delegates rendering to child components.
pub struct App;

impl Component for App {
    type Props = AppState;

    fn view(&self, props: &Self::Props) -> Element {
        tracing::trace!("APP: App.view() called for {:?}", props.screen);
        match props.screen {
            Screen::Login => self.render_login(props),
            Screen::Calendar => self.render_calendar(props),
        }
    }
}

impl App {
    fn render_login(&self, state: &AppState) -> Element {
        vertical(
            [
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ],
            vec![LoginScreen.view(&state.login), StatusBar.view(&state.system)],
        )
    }

    /// Menu, weekday header, grid and status bar; mirrors `layout::calendar_layout`
    fn render_calendar(&self, state: &AppState) -> Element {
        let calendar = &state.calendar;
        let menu = CalendarMenuProps {
            summary: calendar.selection.summary(&state.system.config.date_format),
            span_days: calendar.selection.span_days(),
        };
        let grid = CalendarGridProps {
            window: calendar.window.window().clone(),
            selection: calendar.selection,
            today: state.system.today,
            scroll_offset: calendar.scroll_offset,
        };

        let screen = vertical(
            [
                Constraint::Length(MENU_HEIGHT),
                Constraint::Length(WEEK_HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ],
            vec![
                CalendarMenu.view(&menu),
                WeekHeader.view(&()),
                CalendarGrid.view(&grid),
                StatusBar.view(&state.system),
            ],
        );

        match LoadingOverlay.view(&calendar.loading) {
            Element::None => screen,
            overlay => Element::Overlay {
                base: Box::new(screen),
                overlay: Box::new(overlay),
            },
        }
    }
}
