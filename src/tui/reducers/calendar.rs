use std::time::Duration;

use tracing::{debug, trace};

use crate::calendar::{Day, WindowCommand};
use crate::tui::action::{Action, CalendarAction};
use crate::tui::component::Effect;
use crate::tui::layout::{GridViewport, ROW_HEIGHT};
use crate::tui::state::{AppState, CalendarState, LoadingPhase, Screen};

/// Handle calendar mount, loading timers and calendar screen actions
pub fn reduce_calendar(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::Mount { today } => Ok(mount(state, *today)),
        Action::LoadingFadeOut { mount_id } => Ok(fade_out(state, *mount_id)),
        Action::LoadingDismissed { mount_id } => Ok(dismiss(state, *mount_id)),
        Action::CalendarAction(calendar_action) => {
            if state.screen != Screen::Calendar {
                return Ok((state, Effect::None));
            }
            Ok(reduce_calendar_action(state, calendar_action))
        }
        _ => Err(state),
    }
}

fn reduce_calendar_action(state: AppState, action: &CalendarAction) -> (AppState, Effect) {
    match action {
        CalendarAction::GridResized(viewport) => (resize(state, *viewport), Effect::None),
        CalendarAction::ScrollBy(lines) => (scroll_by(state, *lines), Effect::None),
        CalendarAction::ScrollPage(pages) => {
            let page = state.calendar.viewport.map(|v| v.height as i32).unwrap_or(0);
            (scroll_by(state, pages.saturating_mul(page)), Effect::None)
        }
        CalendarAction::ClickDay(day) => (click(state, *day), Effect::None),
        CalendarAction::ClearSelection => {
            debug!("SELECTION: Cleared");
            let mut new_state = state;
            new_state.calendar.selection = Default::default();
            (new_state, Effect::None)
        }
    }
}

/// Fresh window and empty selection around `today`, loading overlay shown
fn mount(state: AppState, today: Day) -> (AppState, Effect) {
    let mut new_state = state;
    let mount_id = new_state.calendar.mount_id + 1;
    let settings = new_state.system.config.calendar.clone();

    let mut calendar = CalendarState::new(settings.edge_threshold);
    calendar.window.initialize(today);
    calendar.loading = LoadingPhase::Visible;
    calendar.mount_id = mount_id;

    debug!("CALENDAR: Mounted for {} (mount {})", today, mount_id);
    new_state.calendar = calendar;
    new_state.screen = Screen::Calendar;
    new_state.system.today = today;
    new_state.system.reset_status_message(Screen::Calendar);

    let effect = Effect::Delay {
        after: Duration::from_millis(settings.loading_delay_ms),
        action: Box::new(Action::LoadingFadeOut { mount_id }),
    };
    (new_state, effect)
}

fn fade_out(state: AppState, mount_id: u64) -> (AppState, Effect) {
    if mount_id != state.calendar.mount_id || state.calendar.loading != LoadingPhase::Visible {
        debug!("CALENDAR: Ignoring stale fade-out timer (mount {})", mount_id);
        return (state, Effect::None);
    }

    let mut new_state = state;
    new_state.calendar.loading = LoadingPhase::FadingOut;
    let effect = Effect::Delay {
        after: Duration::from_millis(new_state.system.config.calendar.fade_out_ms),
        action: Box::new(Action::LoadingDismissed { mount_id }),
    };
    (new_state, effect)
}

fn dismiss(state: AppState, mount_id: u64) -> (AppState, Effect) {
    if mount_id != state.calendar.mount_id || state.calendar.loading != LoadingPhase::FadingOut {
        debug!("CALENDAR: Ignoring stale dismiss timer (mount {})", mount_id);
        return (state, Effect::None);
    }

    let mut new_state = state;
    new_state.calendar.loading = LoadingPhase::Hidden;
    (new_state, Effect::None)
}

/// Record the grid viewport; the first layout after mount centers today's month
fn resize(state: AppState, viewport: GridViewport) -> AppState {
    let mut new_state = state;
    let calendar = &mut new_state.calendar;
    calendar.viewport = Some(viewport);

    if !calendar.centered && !calendar.window.window().is_empty() {
        calendar.scroll_offset = calendar.window.center_offset(
            new_state.system.today,
            ROW_HEIGHT as u32,
            viewport.height as u32,
        );
        calendar.centered = true;
        debug!("CALENDAR: Centered on today's month at line {}", calendar.scroll_offset);
    }

    calendar.scroll_offset = calendar.scroll_offset.min(calendar.max_scroll_offset());
    new_state
}

/// Scroll by `lines`, then let the window manager expand near either edge
///
/// The window is only probed when the offset moved, or when it is pinned
/// against the edge it is scrolling toward. When the content is too short
/// to leave either edge, the scroll direction picks the expansion.
///
/// After an expansion the offset is moved so the week that was at the top of
/// the viewport stays there. If that week was pruned, the offset is clamped.
fn scroll_by(state: AppState, lines: i32) -> AppState {
    if state.calendar.viewport.is_none() {
        return state;
    }

    let mut new_state = state;
    let calendar = &mut new_state.calendar;
    let previous = calendar.scroll_offset;
    let target = (previous as i64 + lines as i64).max(0);
    calendar.scroll_offset = target.min(calendar.max_scroll_offset() as i64) as u32;
    trace!("SCROLL: offset {} lines", calendar.scroll_offset);

    let toward = match lines.signum() {
        1 => WindowCommand::ExpandForward,
        -1 => WindowCommand::ExpandBackward,
        _ => WindowCommand::None,
    };
    let probe = calendar.scroll_probe();
    let command = if calendar.window.reaches_both_edges(probe) {
        toward
    } else {
        match calendar.window.on_scroll(probe) {
            command if calendar.scroll_offset != previous => command,
            command if command == toward => command,
            _ => WindowCommand::None,
        }
    };
    if command == WindowCommand::None {
        return new_state;
    }

    let anchor = calendar.top_visible_day();
    let within_row = calendar.scroll_offset % ROW_HEIGHT as u32;
    let change = calendar.window.apply(command);
    debug!("SCROLL: {:?} -> {:?}", command, change);

    let anchored = anchor
        .and_then(|day| calendar.window.window().row_of(day))
        .map(|row| row as u32 * ROW_HEIGHT as u32 + within_row);
    calendar.scroll_offset = anchored
        .unwrap_or(calendar.scroll_offset)
        .min(calendar.max_scroll_offset());
    new_state
}

fn click(state: AppState, day: Day) -> AppState {
    let mut new_state = state;
    let selection = new_state.calendar.selection.click(day);
    debug!("SELECTION: Clicked {} -> {:?}", day, selection);
    new_state.calendar.selection = selection;
    new_state
}
