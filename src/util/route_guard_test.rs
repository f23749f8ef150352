use super::*;

fn session(role: Role) -> Session {
    let user_id = match role {
        Role::Client => "c1",
        Role::Therapist => "t1",
    };
    Session { role, user_id: user_id.to_owned(), user_name: "Someone".to_owned() }
}

// =============================================================
// AppRoute
// =============================================================

#[test]
fn paths_round_trip() {
    for route in [AppRoute::Login, AppRoute::Client, AppRoute::Therapist] {
        assert_eq!(AppRoute::from_path(route.path()), Some(route));
    }
}

#[test]
fn from_path_tolerates_trailing_slash_and_rejects_unknown() {
    assert_eq!(AppRoute::from_path("/client/"), Some(AppRoute::Client));
    assert_eq!(AppRoute::from_path("/admin"), None);
    assert_eq!(AppRoute::from_path("/"), None);
}

#[test]
fn home_for_role() {
    assert_eq!(AppRoute::home_for(Role::Client), AppRoute::Client);
    assert_eq!(AppRoute::home_for(Role::Therapist), AppRoute::Therapist);
}

// =============================================================
// redirect_for
// =============================================================

#[test]
fn login_is_always_reachable() {
    assert_eq!(redirect_for(None, AppRoute::Login), None);
    assert_eq!(redirect_for(Some(&session(Role::Client)), AppRoute::Login), None);
}

#[test]
fn missing_session_redirects_to_login() {
    assert_eq!(redirect_for(None, AppRoute::Client), Some(AppRoute::Login));
    assert_eq!(redirect_for(None, AppRoute::Therapist), Some(AppRoute::Login));
}

#[test]
fn wrong_role_redirects_to_login() {
    assert_eq!(redirect_for(Some(&session(Role::Therapist)), AppRoute::Client), Some(AppRoute::Login));
    assert_eq!(redirect_for(Some(&session(Role::Client)), AppRoute::Therapist), Some(AppRoute::Login));
}

#[test]
fn matching_role_stays() {
    assert_eq!(redirect_for(Some(&session(Role::Client)), AppRoute::Client), None);
    assert_eq!(redirect_for(Some(&session(Role::Therapist)), AppRoute::Therapist), None);
}

// =============================================================
// guard_target
// =============================================================

fn loaded(session: Option<Session>) -> SessionState {
    SessionState { session, loading: false }
}

#[test]
fn should_not_redirect_while_loading() {
    assert_eq!(guard_target(&SessionState::pending(), AppRoute::Client), None);
    assert_eq!(guard_target(&SessionState::pending(), AppRoute::Therapist), None);
}

#[test]
fn loaded_without_session_redirects_to_login() {
    assert_eq!(guard_target(&loaded(None), AppRoute::Client), Some(AppRoute::Login));
}

#[test]
fn loaded_with_wrong_role_redirects_to_login() {
    let state = loaded(Some(session(Role::Client)));
    assert_eq!(guard_target(&state, AppRoute::Therapist), Some(AppRoute::Login));
}

#[test]
fn loaded_with_matching_role_stays() {
    let state = loaded(Some(session(Role::Therapist)));
    assert_eq!(guard_target(&state, AppRoute::Therapist), None);
}
