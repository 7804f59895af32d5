use tracing::debug;

use super::action::Action;
use super::component::Effect;
use super::state::AppState;

use crate::tui::reducers::{reduce_calendar, reduce_login};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and optional effect.
/// This function is PURE - no side effects, no I/O, no async.
/// All side effects are returned as `Effect` to be executed separately.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    // Login form, sign-in results, logout
    let state = match reduce_login(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    // Calendar mount, loading timers, scroll and selection
    let state = match reduce_calendar(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::SetToday(today) => {
            let mut new_state = state;
            if new_state.system.today != today {
                debug!("CLOCK: Today is now {}", today);
                new_state.system.today = today;
            }
            (new_state, Effect::None)
        }

        Action::Quit => (state, Effect::None),

        _ => (state, Effect::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Day;
    use crate::config::Config;
    use crate::tui::action::{CalendarAction, LoginAction};
    use crate::tui::state::Screen;

    fn day(s: &str) -> Day {
        s.parse().unwrap()
    }

    #[test]
    fn test_login_actions_are_handled() {
        let mut state = AppState::new(Config::default());
        state.screen = Screen::Login;
        let (new_state, _) = reduce(state, Action::LoginAction(LoginAction::Input('a')));
        assert_eq!(new_state.login.email, "a");
    }

    #[test]
    fn test_calendar_actions_are_handled() {
        let state = AppState::new(Config::default());
        let (state, _) = reduce(state, Action::Mount { today: day("2024-06-15") });
        let (state, _) = reduce(
            state,
            Action::CalendarAction(CalendarAction::ClickDay(day("2024-06-20"))),
        );
        assert_eq!(state.calendar.selection.first(), Some(day("2024-06-20")));
    }

    #[test]
    fn test_set_today_updates_system_state() {
        let state = AppState::new(Config::default());
        let (state, effect) = reduce(state, Action::SetToday(day("2024-06-16")));
        assert_eq!(state.system.today, day("2024-06-16"));
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn test_quit_action_does_nothing_to_state() {
        let state = AppState::new(Config::default());
        let (new_state, effect) = reduce(state.clone(), Action::Quit);
        assert_eq!(new_state.screen, state.screen);
        assert_eq!(new_state.calendar, state.calendar);
        assert!(matches!(effect, Effect::None));
    }
}
