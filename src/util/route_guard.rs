//! Role-gated client routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/client` and `/therapist` each require a session of the matching role.
//! Anything else (no session, wrong role) is sent to `/login`. Pages install
//! the guard once; it re-runs whenever the session signal changes.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;
use crate::types::{Role, Session};

/// Client-side navigation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Client,
    Therapist,
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Client => "/client",
            Self::Therapist => "/therapist",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "/login" => Some(Self::Login),
            "/client" => Some(Self::Client),
            "/therapist" => Some(Self::Therapist),
            _ => None,
        }
    }

    /// Role a session must have to view this route; `None` for public routes.
    pub fn required_role(self) -> Option<Role> {
        match self {
            Self::Login => None,
            Self::Client => Some(Role::Client),
            Self::Therapist => Some(Role::Therapist),
        }
    }

    /// Landing page after logging in as `role`.
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Client => Self::Client,
            Role::Therapist => Self::Therapist,
        }
    }
}

/// Where to send a visitor of `route`, or `None` if they may stay.
pub fn redirect_for(session: Option<&Session>, route: AppRoute) -> Option<AppRoute> {
    let required = route.required_role()?;
    match session {
        Some(s) if s.role == required => None,
        _ => Some(AppRoute::Login),
    }
}

/// Redirect for `route` once the session has loaded; `None` while still loading.
pub fn guard_target(state: &SessionState, route: AppRoute) -> Option<AppRoute> {
    if state.loading {
        return None;
    }
    redirect_for(state.session.as_ref(), route)
}

/// Navigate away from `route` whenever the loaded session may not view it.
pub fn install_route_guard<F>(session: RwSignal<SessionState>, route: AppRoute, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if let Some(target) = guard_target(&session.get(), route) {
            navigate(target.path(), NavigateOptions::default());
        }
    });
}
