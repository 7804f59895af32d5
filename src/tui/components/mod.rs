// Component library exports

pub mod app;
pub mod calendar_grid;
pub mod calendar_menu;
pub mod loading_overlay;
pub mod login_screen;
pub mod status_bar;

pub use app::App;
pub use calendar_grid::{CalendarGrid, CalendarGridProps, WeekHeader};
pub use calendar_menu::{CalendarMenu, CalendarMenuProps};
pub use loading_overlay::LoadingOverlay;
pub use login_screen::LoginScreen;
pub use status_bar::StatusBar;
