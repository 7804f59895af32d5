//! Screen geometry shared by the renderer and mouse hit-testing

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::calendar::DAYS_PER_WEEK;

/// Scroll units per terminal line
pub const LINE_UNITS: u32 = 16;

/// Terminal lines per week row (label line + spacer)
pub const ROW_HEIGHT: u16 = 2;

/// Selected-dates summary (2 lines) + separator
pub const MENU_HEIGHT: u16 = 3;

pub const WEEK_HEADER_HEIGHT: u16 = 1;

/// Separator + message line
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Lines scrolled per mouse wheel notch
pub const WHEEL_LINES: i32 = 3;

/// Screen areas of the calendar screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarLayout {
    pub menu: Rect,
    pub header: Rect,
    pub grid: Rect,
    pub status: Rect,
}

pub fn calendar_layout(area: Rect) -> CalendarLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MENU_HEIGHT),
            Constraint::Length(WEEK_HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    CalendarLayout {
        menu: chunks[0],
        header: chunks[1],
        grid: chunks[2],
        status: chunks[3],
    }
}

/// Position and size of the scrollable day grid on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridViewport {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl GridViewport {
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }

    /// Width of one day column
    pub fn cell_width(&self) -> u16 {
        (self.width / DAYS_PER_WEEK as u16).max(1)
    }

    /// Grid (week row, column) under a screen position, given the scroll offset in lines
    pub fn cell_at(&self, column: u16, row: u16, scroll_offset: u32) -> Option<(usize, usize)> {
        if column < self.x || row < self.y || row >= self.y + self.height {
            return None;
        }
        let day_column = ((column - self.x) / self.cell_width()) as usize;
        if day_column >= DAYS_PER_WEEK {
            return None;
        }
        let line = scroll_offset + (row - self.y) as u32;
        Some(((line / ROW_HEIGHT as u32) as usize, day_column))
    }
}
