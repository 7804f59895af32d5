use ratatui::{
    buffer::Buffer,
    layout::{Constraint as RatatuiConstraint, Direction, Layout as RatatuiLayout, Rect},
};

use super::component::{Constraint, ContainerLayout, Element};
use crate::config::ThemeConfig;

/// Renders virtual element tree to ratatui buffer
///
/// The Renderer takes a virtual Element tree produced by components
/// and renders it to the terminal using ratatui.
#[derive(Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Render an element tree to the given area in the buffer
    pub fn render(&self, element: &Element, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        match element {
            Element::Widget(widget) => widget.render(area, buf, theme),

            Element::Container { children, layout } => {
                let chunks = self.calculate_layout(layout, area);
                for (child, chunk) in children.iter().zip(chunks) {
                    self.render(child, chunk, buf, theme);
                }
            }

            Element::Overlay { base, overlay } => {
                self.render(base, area, buf, theme);
                self.render(overlay, area, buf, theme);
            }

            Element::None => {}
        }
    }

    /// Calculate layout constraints and split the area
    fn calculate_layout(&self, layout: &ContainerLayout, area: Rect) -> Vec<Rect> {
        let (direction, constraints) = match layout {
            ContainerLayout::Vertical(constraints) => (Direction::Vertical, constraints),
            ContainerLayout::Horizontal(constraints) => (Direction::Horizontal, constraints),
        };

        RatatuiLayout::default()
            .direction(direction)
            .constraints(constraints.iter().map(|c| self.convert_constraint(*c)))
            .split(area)
            .to_vec()
    }

    /// Convert our Constraint type to ratatui's Constraint
    fn convert_constraint(&self, constraint: Constraint) -> RatatuiConstraint {
        match constraint {
            Constraint::Length(n) => RatatuiConstraint::Length(n),
            Constraint::Min(n) => RatatuiConstraint::Min(n),
            Constraint::Percentage(n) => RatatuiConstraint::Percentage(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::component::{horizontal, vertical, ElementWidget};
    use crate::tui::testing::buffer_lines;

    /// Fills its whole area with one character
    #[derive(Clone)]
    struct FillWidget(char);

    impl ElementWidget for FillWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _theme: &ThemeConfig) {
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    buf[(x, y)].set_char(self.0);
                }
            }
        }

        fn clone_box(&self) -> Box<dyn ElementWidget> {
            Box::new(self.clone())
        }
    }

    fn fill(c: char) -> Element {
        Element::Widget(Box::new(FillWidget(c)))
    }

    #[test]
    fn test_render_vertical_container() {
        let element = vertical(
            [Constraint::Length(1), Constraint::Min(0)],
            vec![fill('a'), fill('b')],
        );
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 3));
        Renderer::new().render(&element, buf.area, &mut buf, &ThemeConfig::default());

        assert_eq!(buffer_lines(&buf), vec!["aaa", "bbb", "bbb"]);
    }

    #[test]
    fn test_render_horizontal_container() {
        let element = horizontal(
            [Constraint::Length(1), Constraint::Min(0)],
            vec![fill('x'), fill('y')],
        );
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        Renderer::new().render(&element, buf.area, &mut buf, &ThemeConfig::default());

        assert_eq!(buffer_lines(&buf), vec!["xyy"]);
    }

    #[test]
    fn test_overlay_renders_on_top() {
        let element = Element::Overlay {
            base: Box::new(fill('a')),
            overlay: Box::new(fill('z')),
        };
        let mut buf = Buffer::empty(Rect::new(0, 0, 2, 1));
        Renderer::new().render(&element, buf.area, &mut buf, &ThemeConfig::default());

        assert_eq!(buffer_lines(&buf), vec!["zz"]);
    }

    #[test]
    fn test_none_renders_nothing() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 2, 1));
        Renderer::new().render(&Element::None, buf.area, &mut buf, &ThemeConfig::default());
        assert_eq!(buffer_lines(&buf), vec!["  "]);
    }
}
