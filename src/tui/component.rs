use ratatui::{buffer::Buffer, layout::Rect};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use super::action::Action;
use crate::auth::Credentials;
use crate::config::ThemeConfig;

/// Core component trait - like React.Component
///
/// Components turn props (a slice of the application state) into an
/// Element tree. They hold no state of their own: everything they show
/// comes from `AppState`.
pub trait Component {
    /// Props type for this component
    type Props;

    /// Render component given props (pure function)
    fn view(&self, props: &Self::Props) -> Element;
}

/// Element in virtual component tree
#[derive(Clone)]
pub enum Element {
    /// A widget that can be directly rendered to ratatui buffer
    Widget(Box<dyn ElementWidget>),

    /// A container with layout and children
    Container {
        children: Vec<Element>,
        layout: ContainerLayout,
    },

    /// An overlay that renders on top of base content (loading screen)
    Overlay {
        base: Box<Element>,
        overlay: Box<Element>,
    },

    /// Nothing to render
    None,
}

/// Layout for container elements
#[derive(Clone)]
pub enum ContainerLayout {
    Vertical(Vec<Constraint>),
    Horizontal(Vec<Constraint>),
}

/// Constraint for layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    Length(u16),
    Min(u16),
    Percentage(u16),
}

/// Side effects returned by the reducer
///
/// `SignIn` and `Delay` are turned into async work by the runtime, which
/// owns the identity provider; the reducer never touches it.
pub enum Effect {
    None,
    Action(Action),
    Batch(Vec<Effect>),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    SignIn(Credentials),
    Delay { after: Duration, action: Box<Action> },
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Action(action) => write!(f, "Action({:?})", action),
            Self::Batch(effects) => f.debug_tuple("Batch").field(effects).finish(),
            Self::Async(_) => write!(f, "Async(..)"),
            Self::SignIn(credentials) => write!(f, "SignIn({:?})", credentials),
            Self::Delay { after, action } => write!(f, "Delay({:?}, {:?})", after, action),
        }
    }
}

/// Trait for widgets that can be wrapped in the Element tree
pub trait ElementWidget: Send + Sync {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig);

    /// Clone this widget into a boxed trait object
    fn clone_box(&self) -> Box<dyn ElementWidget>;
}

impl Clone for Box<dyn ElementWidget> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Helper to create a container with vertical layout
pub fn vertical<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Vertical(constraints.to_vec()),
    }
}

/// Helper to create a container with horizontal layout
pub fn horizontal<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Horizontal(constraints.to_vec()),
    }
}
