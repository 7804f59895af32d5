use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::calendar::{present_cell, CellFlags, Day, DayWindow, Selection, DAYS_PER_WEEK};
use crate::config::ThemeConfig;
use crate::tui::component::{Component, Element, ElementWidget};
use crate::tui::layout::ROW_HEIGHT;

const WEEKDAY_NAMES: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weekday names above the grid columns
pub struct WeekHeader;

impl Component for WeekHeader {
    type Props = ();

    fn view(&self, _props: &Self::Props) -> Element {
        Element::Widget(Box::new(WeekHeaderWidget))
    }
}

#[derive(Clone)]
struct WeekHeaderWidget;

impl ElementWidget for WeekHeaderWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, _theme: &ThemeConfig) {
        if area.height == 0 {
            return;
        }
        let cell_width = (area.width / DAYS_PER_WEEK as u16).max(1);
        let style = Style::default().add_modifier(Modifier::BOLD);
        for (column, name) in WEEKDAY_NAMES.iter().enumerate() {
            let x = area.x + column as u16 * cell_width + 1;
            if x >= area.right() {
                break;
            }
            let room = (area.right() - x).min(cell_width.saturating_sub(1)) as usize;
            buf.set_stringn(x, area.y, name, room, style);
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGridProps {
    pub window: DayWindow,
    pub selection: Selection,
    pub today: Day,
    /// Lines scrolled from the top of the grid
    pub scroll_offset: u32,
}

/// Scrollable week grid of the materialized day window
///
/// Each week row is `ROW_HEIGHT` lines: the day labels, then a spacer that
/// keeps the selection highlight of the row.
pub struct CalendarGrid;

impl Component for CalendarGrid {
    type Props = CalendarGridProps;

    fn view(&self, props: &Self::Props) -> Element {
        Element::Widget(Box::new(CalendarGridWidget { props: props.clone() }))
    }
}

#[derive(Clone)]
struct CalendarGridWidget {
    props: CalendarGridProps,
}

impl ElementWidget for CalendarGridWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        let cell_width = (area.width / DAYS_PER_WEEK as u16).max(1);
        let props = &self.props;

        for y in 0..area.height {
            let line = props.scroll_offset + y as u32;
            let row = (line / ROW_HEIGHT as u32) as usize;
            let is_label_line = line % ROW_HEIGHT as u32 == 0;

            for column in 0..DAYS_PER_WEEK {
                let x = area.x + column as u16 * cell_width;
                if x >= area.right() {
                    break;
                }
                let cell = present_cell(
                    props.window.day_at(row, column),
                    props.today,
                    &props.selection,
                );
                if cell.day.is_none() {
                    continue;
                }

                let width = cell_width.min(area.right() - x);
                let style = cell_style(&cell.flags, theme);
                buf.set_style(Rect::new(x, area.y + y, width, 1), style);
                if is_label_line && width > 1 {
                    buf.set_stringn(x + 1, area.y + y, &cell.label, (width - 1) as usize, style);
                }
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

/// Cell colors: endpoints are solid, days between get the range background,
/// today is highlighted in either case
pub fn cell_style(flags: &CellFlags, theme: &ThemeConfig) -> Style {
    if flags.is_endpoint() {
        return Style::default()
            .fg(theme.endpoint_fg)
            .bg(theme.endpoint_bg)
            .add_modifier(Modifier::BOLD);
    }

    let mut style = Style::default();
    if flags.is_between {
        style = style.bg(theme.between_bg);
    }
    if flags.is_today || flags.is_today_between {
        style = style.fg(theme.today_fg).add_modifier(Modifier::BOLD);
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WindowManager;
    use crate::tui::testing::buffer_lines;

    fn day(s: &str) -> Day {
        s.parse().unwrap()
    }

    fn props(selection: Selection, scroll_offset: u32) -> CalendarGridProps {
        let mut manager = WindowManager::default();
        manager.initialize(day("2024-06-15"));
        CalendarGridProps {
            window: manager.window().clone(),
            selection,
            today: day("2024-06-15"),
            scroll_offset,
        }
    }

    fn render(props: &CalendarGridProps, height: u16) -> Buffer {
        let area = Rect::new(0, 0, 77, height);
        let mut buf = Buffer::empty(area);
        if let Element::Widget(widget) = CalendarGrid.view(props) {
            widget.render(area, &mut buf, &ThemeConfig::default());
        }
        buf
    }

    #[test]
    fn test_week_header() {
        let area = Rect::new(0, 0, 77, 1);
        let mut buf = Buffer::empty(area);
        if let Element::Widget(widget) = WeekHeader.view(&()) {
            widget.render(area, &mut buf, &ThemeConfig::default());
        }
        assert_eq!(
            buffer_lines(&buf)[0].split_whitespace().collect::<Vec<_>>(),
            vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );
    }

    #[test]
    fn test_grid_lays_out_weeks() {
        let buf = render(&props(Selection::Empty, 0), 4);
        let lines = buffer_lines(&buf);

        // May 1 2024 is a Wednesday, the 4th column
        assert_eq!(&lines[0][34..39], "May 1");
        assert_eq!(
            lines[0].split_whitespace().collect::<Vec<_>>(),
            vec!["May", "1", "2", "3", "4"]
        );
        assert_eq!(lines[1].trim(), "");
        assert_eq!(
            lines[2].split_whitespace().collect::<Vec<_>>(),
            vec!["5", "6", "7", "8", "9", "10", "11"]
        );
    }

    #[test]
    fn test_grid_follows_scroll_offset() {
        // June 1 (Saturday) sits in row 4
        let buf = render(&props(Selection::Empty, 8), 2);
        let lines = buffer_lines(&buf);
        assert_eq!(
            lines[0].split_whitespace().collect::<Vec<_>>(),
            vec!["26", "27", "28", "29", "30", "31", "June", "1"]
        );
    }

    #[test]
    fn test_grid_highlights_selection() {
        let theme = ThemeConfig::default();
        let selection = Selection::Two(day("2024-05-02"), day("2024-05-04"));
        let buf = render(&props(selection, 0), 2);

        // May 2 (Thursday) and May 4 (Saturday) are endpoints, May 3 is between
        assert_eq!(buf[(45, 0)].bg, theme.endpoint_bg);
        assert_eq!(buf[(56, 0)].bg, theme.between_bg);
        assert_eq!(buf[(56, 1)].bg, theme.between_bg);
        assert_eq!(buf[(67, 0)].bg, theme.endpoint_bg);
        assert_eq!(buf[(34, 0)].bg, ratatui::style::Color::Reset);
    }

    #[test]
    fn test_cell_style_today_between() {
        let theme = ThemeConfig::default();
        let flags = CellFlags {
            is_today: true,
            is_between: true,
            is_today_between: true,
            ..CellFlags::default()
        };
        let style = cell_style(&flags, &theme);
        assert_eq!(style.bg, Some(theme.between_bg));
        assert_eq!(style.fg, Some(theme.today_fg));

        assert_eq!(cell_style(&CellFlags::default(), &theme), Style::default());
    }
}
