pub mod components;

// Core modules
pub mod action;
pub mod component;
pub mod effects;
pub mod keys;
pub mod layout;
pub mod reducer;
pub mod reducers;
pub mod renderer;
pub mod runtime;
pub mod state;

#[cfg(test)]
pub mod testing;


pub use action::{Action, CalendarAction, LoginAction};
pub use component::{Component, Effect, Element};
pub use effects::AppEffects;
pub use keys::{key_to_action, mouse_to_action};
pub use reducer::reduce;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use state::AppState;

use std::io;
use std::sync::Arc;
use std::time::Duration;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};

use crate::auth::IdentityProvider;
use crate::calendar::Day;
use crate::config::Config;
use layout::{calendar_layout, GridViewport};
use state::Screen;

/// Main entry point for TUI mode
pub async fn run(config: Config, provider: Arc<dyn IdentityProvider>) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config, provider).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
    provider: Arc<dyn IdentityProvider>,
) -> Result<(), io::Error> {
    let app_effects = Arc::new(AppEffects::new(provider));
    let login_required = config.auth.login_required();

    let today = Day::today();
    let mut initial_state = AppState::new(config);
    initial_state.system.today = today;

    // Dropping the runtime at the end of this function aborts pending timers
    let mut runtime = Runtime::new(initial_state, app_effects);

    if login_required {
        runtime.dispatch(Action::SetToday(today));
    } else {
        runtime.dispatch(Action::Mount { today });
    }

    // Main loop
    loop {
        // Process any actions from effects FIRST (so sign-in results and timers re-render)
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        // Midnight rollover
        let now = Day::today();
        if now != runtime.state().system.today {
            runtime.dispatch(Action::SetToday(now));
        }

        // Render
        terminal.draw(|f| {
            let area = f.area();

            // Keep the grid viewport in sync with the layout before painting
            if runtime.state().screen == Screen::Calendar {
                let viewport = GridViewport::from_rect(calendar_layout(area).grid);
                let calendar = &runtime.state().calendar;
                if calendar.viewport != Some(viewport) || !calendar.centered {
                    tracing::debug!("DRAW: Grid viewport {:?}", viewport);
                    runtime.dispatch(Action::CalendarAction(CalendarAction::GridResized(viewport)));
                }
            }

            // Build virtual tree from current state
            let element = runtime.build();

            // Render virtual tree to ratatui buffer
            let theme = &runtime.state().system.config.theme;
            Renderer::new().render(&element, area, f.buffer_mut(), theme);
        })?;

        // If actions were processed, continue loop immediately to check for more
        if actions_processed > 0 {
            continue;
        }

        // Poll for input events
        if event::poll(Duration::from_millis(100))? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    key_to_action(key, runtime.state())
                }
                Event::Mouse(mouse) => mouse_to_action(mouse, runtime.state()),
                _ => None,
            };

            match action {
                Some(Action::Quit) => {
                    tracing::debug!("ACTION: Quitting application");
                    break;
                }
                Some(act) => runtime.dispatch(act),
                None => {}
            }
        }
    }

    Ok(())
}
