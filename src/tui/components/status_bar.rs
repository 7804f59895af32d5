use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::config::ThemeConfig;
use crate::tui::component::{Component, Element, ElementWidget};
use crate::tui::state::SystemState;

/// StatusBar component - renders key help and the signed-in account
///
/// Left side: key help for the current screen
/// Right side: signed-in email, when there is a session
pub struct StatusBar;

impl Component for StatusBar {
    type Props = SystemState;

    fn view(&self, props: &Self::Props) -> Element {
        Element::Widget(Box::new(StatusBarWidget {
            message: props.status_message.clone(),
            account: props.session.as_ref().map(|session| session.email.clone()),
        }))
    }
}

/// Renderable widget for StatusBar
#[derive(Clone)]
struct StatusBarWidget {
    message: Option<String>,
    account: Option<String>,
}

impl ElementWidget for StatusBarWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, _theme: &ThemeConfig) {
        let mut lines = Vec::new();

        // Where the vertical bar goes, if there is an account to show
        let right_text = self.account.as_ref().map(|email| format!(" {} ", email));
        let bar_position = right_text
            .as_ref()
            .map(|text| area.width.saturating_sub(text.width() as u16 + 1));

        // First line: horizontal separator with connector
        let line1 = match bar_position {
            Some(position) => format!(
                "{}┬{}",
                "─".repeat(position as usize),
                "─".repeat(area.width.saturating_sub(position + 1) as usize)
            ),
            None => "─".repeat(area.width as usize),
        };
        lines.push(Line::raw(line1));

        // Second line: message on the left, account on the right
        let mut line2_spans = Vec::new();
        let left_text = self.message.clone().unwrap_or_default();
        line2_spans.push(Span::raw(" "));
        line2_spans.push(Span::raw(left_text.clone()));

        if let (Some(position), Some(text)) = (bar_position, right_text) {
            let used = left_text.width() + 1;
            let padding_len = (position as usize).saturating_sub(used);
            line2_spans.push(Span::raw(" ".repeat(padding_len)));
            line2_spans.push(Span::raw("│"));
            line2_spans.push(Span::raw(text));
        }

        lines.push(Line::from(line2_spans));

        let status_bar = Paragraph::new(lines);
        ratatui::widgets::Widget::render(status_bar, area, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
