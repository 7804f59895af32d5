use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::calendar::SelectionSummary;
use crate::config::ThemeConfig;
use crate::tui::component::{Component, Element, ElementWidget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMenuProps {
    pub summary: SelectionSummary,
    /// Days covered by a complete range, endpoints included
    pub span_days: usize,
}

/// Selected endpoints above the grid, followed by a separator line
pub struct CalendarMenu;

impl Component for CalendarMenu {
    type Props = CalendarMenuProps;

    fn view(&self, props: &Self::Props) -> Element {
        Element::Widget(Box::new(CalendarMenuWidget { props: props.clone() }))
    }
}

#[derive(Clone)]
struct CalendarMenuWidget {
    props: CalendarMenuProps,
}

impl CalendarMenuWidget {
    fn endpoint_line<'a>(label: &'a str, value: Option<&'a str>) -> Line<'a> {
        Line::from(vec![
            Span::raw(label),
            Span::styled(value.unwrap_or("None"), Style::default().add_modifier(Modifier::BOLD)),
        ])
    }
}

impl ElementWidget for CalendarMenuWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, _theme: &ThemeConfig) {
        let summary = &self.props.summary;
        let mut second = Self::endpoint_line("Second date selected: ", summary.second.as_deref());
        if summary.second.is_some() {
            second.push_span(Span::raw(format!(" ({} days)", self.props.span_days)));
        }

        let lines = vec![
            Self::endpoint_line("First date selected: ", summary.first.as_deref()),
            second,
            Line::raw("─".repeat(area.width as usize)),
        ];
        ratatui::widgets::Widget::render(Paragraph::new(lines), area, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
