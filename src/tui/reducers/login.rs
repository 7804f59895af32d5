use tracing::{debug, info, warn};

use crate::auth::{Credentials, Session, LOGIN_FAILED_MESSAGE};
use crate::tui::action::{Action, LoginAction};
use crate::tui::component::Effect;
use crate::tui::state::{AppState, CalendarState, LoginField, LoginState, Screen};

/// Handle login form, sign-in results and logout
///
/// Returns Err(state) for actions it does not own.
pub fn reduce_login(state: AppState, action: &Action) -> Result<(AppState, Effect), AppState> {
    match action {
        Action::LoginAction(login_action) => Ok(reduce_form(state, login_action)),
        Action::LoginFinished(result) => Ok(finish_sign_in(state, result.clone())),
        Action::Logout => Ok(logout(state)),
        _ => Err(state),
    }
}

fn reduce_form(state: AppState, action: &LoginAction) -> (AppState, Effect) {
    if state.screen != Screen::Login || state.login.pending {
        return (state, Effect::None);
    }

    let mut new_state = state;
    let login = &mut new_state.login;
    match action {
        LoginAction::Input(c) => focused_field(login).push(*c),
        LoginAction::DeleteChar => {
            focused_field(login).pop();
        }
        LoginAction::FocusNext | LoginAction::FocusPrevious => {
            login.focus = login.focus.toggle();
        }
        LoginAction::Submit => {
            debug!("LOGIN: Submitting credentials for {}", login.email);
            login.pending = true;
            login.error = None;
            let credentials = Credentials::new(login.email.clone(), login.password.clone());
            return (new_state, Effect::SignIn(credentials));
        }
    }
    (new_state, Effect::None)
}

fn focused_field(login: &mut LoginState) -> &mut String {
    match login.focus {
        LoginField::Email => &mut login.email,
        LoginField::Password => &mut login.password,
    }
}

fn finish_sign_in(state: AppState, result: Result<Session, String>) -> (AppState, Effect) {
    if !state.login.pending {
        debug!("LOGIN: Ignoring sign-in result with no request in flight");
        return (state, Effect::None);
    }

    let mut new_state = state;
    new_state.login.pending = false;
    match result {
        Ok(session) => {
            info!("LOGIN: Signed in as {}", session.email);
            new_state.system.session = Some(session);
            new_state.login = LoginState::default();
            let today = new_state.system.today;
            (new_state, Effect::Action(Action::Mount { today }))
        }
        Err(cause) => {
            warn!("LOGIN: Sign-in failed: {}", cause);
            new_state.login.error = Some(LOGIN_FAILED_MESSAGE.to_string());
            (new_state, Effect::None)
        }
    }
}

/// Return to the login screen, discarding the calendar and its selection
fn logout(state: AppState) -> (AppState, Effect) {
    if !state.system.config.auth.login_required() || state.screen != Screen::Calendar {
        return (state, Effect::None);
    }

    info!("LOGIN: Logged out");
    let mut new_state = state;
    let mount_id = new_state.calendar.mount_id + 1;
    new_state.calendar = CalendarState {
        mount_id,
        ..CalendarState::new(new_state.system.config.calendar.edge_threshold)
    };
    new_state.screen = Screen::Login;
    new_state.login = LoginState::default();
    new_state.system.session = None;
    new_state.system.reset_status_message(Screen::Login);
    (new_state, Effect::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Selection;
    use crate::config::{Account, Config};

    fn login_state() -> AppState {
        let mut config = Config::default();
        config.auth.accounts.push(Account {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        });
        let mut state = AppState::new(config);
        state.system.today = "2024-06-15".parse().unwrap();
        state
    }

    fn apply(state: AppState, action: Action) -> (AppState, Effect) {
        match reduce_login(state, &action) {
            Ok(result) => result,
            Err(_) => panic!("action not handled: {:?}", action),
        }
    }

    fn type_text(mut state: AppState, text: &str) -> AppState {
        for c in text.chars() {
            state = apply(state, Action::LoginAction(LoginAction::Input(c))).0;
        }
        state
    }

    #[test]
    fn test_input_goes_to_focused_field() {
        let state = type_text(login_state(), "ada");
        let state = apply(state, Action::LoginAction(LoginAction::FocusNext)).0;
        let state = type_text(state, "pw");
        assert_eq!(state.login.email, "ada");
        assert_eq!(state.login.password, "pw");

        let state = apply(state, Action::LoginAction(LoginAction::DeleteChar)).0;
        assert_eq!(state.login.password, "p");
    }

    #[test]
    fn test_focus_toggles_between_fields() {
        let state = apply(login_state(), Action::LoginAction(LoginAction::FocusPrevious)).0;
        assert_eq!(state.login.focus, LoginField::Password);
        let state = apply(state, Action::LoginAction(LoginAction::FocusNext)).0;
        assert_eq!(state.login.focus, LoginField::Email);
    }

    #[test]
    fn test_submit_sets_pending_and_requests_sign_in() {
        let state = type_text(login_state(), "ada@example.com");
        let (state, effect) = apply(state, Action::LoginAction(LoginAction::Submit));
        assert!(state.login.pending);
        match effect {
            Effect::SignIn(credentials) => assert_eq!(credentials.email, "ada@example.com"),
            other => panic!("Expected SignIn effect, got {:?}", other),
        }
    }

    #[test]
    fn test_input_ignored_while_pending() {
        let (state, _) = apply(login_state(), Action::LoginAction(LoginAction::Submit));
        let state = type_text(state, "x");
        assert_eq!(state.login.email, "");
        let (_, effect) = apply(state, Action::LoginAction(LoginAction::Submit));
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn test_failed_sign_in_shows_generic_message() {
        let (state, _) = apply(login_state(), Action::LoginAction(LoginAction::Submit));
        let (state, effect) = apply(
            state,
            Action::LoginFinished(Err("Wrong password for ada@example.com".to_string())),
        );
        assert!(!state.login.pending);
        assert_eq!(state.login.error.as_deref(), Some("Email or password incorrect"));
        assert_eq!(state.screen, Screen::Login);
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn test_successful_sign_in_mounts_calendar() {
        let state = type_text(login_state(), "ada@example.com");
        let (state, _) = apply(state, Action::LoginAction(LoginAction::Submit));
        let session = Session { email: "ada@example.com".to_string() };
        let (state, effect) = apply(state, Action::LoginFinished(Ok(session.clone())));

        assert_eq!(state.system.session, Some(session));
        assert_eq!(state.login, LoginState::default());
        match effect {
            Effect::Action(Action::Mount { today }) => assert_eq!(today.to_string(), "2024-06-15"),
            other => panic!("Expected Mount, got {:?}", other),
        }
    }

    #[test]
    fn test_result_without_pending_request_is_ignored() {
        let session = Session { email: "ada@example.com".to_string() };
        let (state, effect) = apply(login_state(), Action::LoginFinished(Ok(session)));
        assert!(state.system.session.is_none());
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn test_logout_discards_selection() {
        let mut state = login_state();
        state.screen = Screen::Calendar;
        state.calendar.selection = Selection::One("2024-06-03".parse().unwrap());
        state.calendar.mount_id = 3;

        let (state, _) = apply(state, Action::Logout);
        assert_eq!(state.screen, Screen::Login);
        assert_eq!(state.calendar.selection, Selection::Empty);
        assert!(state.calendar.window.window().is_empty());
        assert_eq!(state.calendar.mount_id, 4);
        assert!(state.system.session.is_none());
    }

    #[test]
    fn test_logout_ignored_without_login() {
        let mut state = AppState::new(Config::default());
        state.calendar.selection = Selection::One("2024-06-03".parse().unwrap());
        let (state, _) = apply(state, Action::Logout);
        assert_eq!(state.screen, Screen::Calendar);
        assert!(!state.calendar.selection.is_empty());
    }

    #[test]
    fn test_unrelated_action_passes_through() {
        assert!(reduce_login(login_state(), &Action::Quit).is_err());
    }
}
