use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Clear, Paragraph, Widget},
};

use crate::config::ThemeConfig;
use crate::tui::component::{Component, Element, ElementWidget};
use crate::tui::state::LoadingPhase;

const LOADING_TEXT: &str = "Loading...";

/// Full-screen loading overlay shown while the calendar mounts
pub struct LoadingOverlay;

impl Component for LoadingOverlay {
    type Props = LoadingPhase;

    fn view(&self, props: &Self::Props) -> Element {
        match props {
            LoadingPhase::Hidden => Element::None,
            phase => Element::Widget(Box::new(LoadingOverlayWidget {
                fading: *phase == LoadingPhase::FadingOut,
            })),
        }
    }
}

#[derive(Clone)]
struct LoadingOverlayWidget {
    fading: bool,
}

impl ElementWidget for LoadingOverlayWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, _theme: &ThemeConfig) {
        Clear.render(area, buf);

        let style = if self.fading {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        Block::default().style(style).render(area, buf);

        if area.height == 0 {
            return;
        }
        let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        Paragraph::new(LOADING_TEXT)
            .style(style)
            .alignment(Alignment::Center)
            .render(middle, buf);
    }

    fn clone_box(&self) -> Box<dyn ElementWidget> {
        Box::new(self.clone())
    }
}
