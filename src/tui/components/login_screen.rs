use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::ThemeConfig;
use crate::tui::component::{Component, Element, ElementWidget};
use crate::tui::state::{LoginField, LoginState};

const FORM_WIDTH: u16 = 48;
const FORM_HEIGHT: u16 = 7;
const LABEL_WIDTH: usize = 10;
const PENDING_TEXT: &str = "Logging in...";

/// Email and password form, centered on screen
pub struct LoginScreen;

impl Component for LoginScreen {
    type Props = LoginState;

    fn view(&self, props: &Self::Props) -> Element {
        // Only the length of the password leaves this component
        Element::Widget(Box::new(LoginScreenWidget {
            email: props.email.clone(),
            password_len: props.password.chars().count(),
            focus: props.focus,
            pending: props.pending,
            error: props.error.clone(),
        }))
    }
}

#[derive(Clone)]
struct LoginScreenWidget {
    email: String,
    password_len: usize,
    focus: LoginField,
    pending: bool,
    error: Option<String>,
}

impl LoginScreenWidget {
    fn field_line(&self, field: LoginField, label: &str, value: String, room: usize) -> Line<'static> {
        let focused = self.focus == field && !self.pending;
        let marker = if focused { "> " } else { "  " };
        let value_style = if focused {
            Style::default().add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::raw(marker),
            Span::raw(format!("{:<width$}", label, width = LABEL_WIDTH)),
            Span::styled(fit_tail(&value, room), value_style),
        ])
    }
}

impl ElementWidget for LoginScreenWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, _theme: &ThemeConfig) {
        let width = FORM_WIDTH.min(area.width);
        let height = FORM_HEIGHT.min(area.height);
        let form = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        let block = Block::bordered().title(" Sign in ");
        let inner = block.inner(form);
        block.render(form, buf);

        let room = (inner.width as usize).saturating_sub(2 + LABEL_WIDTH);
        let status = if self.pending {
            Line::styled(PENDING_TEXT, Style::default().add_modifier(Modifier::ITALIC))
        } else if let Some(error) = &self.error {
            Line::styled(error.clone(), Style::default().fg(Color::Red))
        } else {
            Line::default()
        };

        let lines = vec![
            Line::default(),
            self.field_line(LoginField::Email, "Email:", self.email.clone(), room),
            self.field_line(LoginField::Password, "Password:", "*".repeat(self.password_len), room),
            Line::default(),
            status,
        ];
        Paragraph::new(lines).render(inner, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}

/// The end of `text` that fits in `width` columns, so the cursor side stays visible
fn fit_tail(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut used = 0;
    let mut tail: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        tail.push(c);
    }
    tail.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::buffer_lines;

    fn render(state: &LoginState) -> Vec<String> {
        let area = Rect::new(0, 0, 60, 11);
        let mut buf = Buffer::empty(area);
        if let Element::Widget(widget) = LoginScreen.view(state) {
            widget.render(area, &mut buf, &ThemeConfig::default());
        }
        buffer_lines(&buf)
    }

    fn filled() -> LoginState {
        LoginState {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
            ..LoginState::default()
        }
    }

    fn contains(lines: &[String], text: &str) -> bool {
        lines.iter().any(|line| line.contains(text))
    }

    #[test]
    fn test_form_shows_fields_and_masks_password() {
        let lines = render(&filled());
        assert!(contains(&lines, "Sign in"));
        assert!(contains(&lines, "> Email:    ada@example.com"));
        assert!(contains(&lines, "  Password: *******"));
        assert!(!contains(&lines, "hunter2"));
    }

    #[test]
    fn test_focus_marker_follows_field() {
        let state = LoginState {
            focus: LoginField::Password,
            ..filled()
        };
        let lines = render(&state);
        assert!(contains(&lines, "  Email:    ada@example.com"));
        assert!(contains(&lines, "> Password: *******"));
    }

    #[test]
    fn test_pending_indicator() {
        let state = LoginState {
            pending: true,
            ..filled()
        };
        let lines = render(&state);
        assert!(contains(&lines, "Logging in..."));
        assert!(!contains(&lines, "> "));
    }

    #[test]
    fn test_error_message() {
        let state = LoginState {
            error: Some("Email or password incorrect".to_string()),
            ..filled()
        };
        assert!(contains(&render(&state), "Email or password incorrect"));
    }

    #[test]
    fn test_fit_tail_keeps_end() {
        assert_eq!(fit_tail("short", 10), "short");
        assert_eq!(fit_tail("averylongemail@example.com", 11), "example.com");
        assert_eq!(fit_tail("日本語", 4), "本語");
    }
}
