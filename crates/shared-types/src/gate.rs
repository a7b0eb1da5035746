//! Layout gate: decides, once per mount, whether the authenticated shell may
//! render for the current session.

use crate::markers::SessionMarkers;
use crate::role::Role;

pub const LOGIN_PATH: &str = "/";
pub const SELECT_PROJECT_PATH: &str = "/select-project";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Result of one session check. Every verifier failure collapses into
/// `NoSession`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    NoSession,
    Session { role: Role },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Loading,
    Unauthenticated,
    NeedsProjectSelection,
    AuthenticatedPrivileged { role: Role },
    AuthenticatedMember { role: Role },
}

/// What the layout renders for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    ShowLoading,
    Redirect(&'static str),
    RenderShell,
}

impl GateState {
    pub fn decision(&self) -> GateDecision {
        match self {
            GateState::Loading => GateDecision::ShowLoading,
            GateState::Unauthenticated => GateDecision::Redirect(LOGIN_PATH),
            GateState::NeedsProjectSelection => GateDecision::Redirect(SELECT_PROJECT_PATH),
            GateState::AuthenticatedPrivileged { .. } | GateState::AuthenticatedMember { .. } => {
                GateDecision::RenderShell
            }
        }
    }

    pub fn role(&self) -> Option<&Role> {
        match self {
            GateState::AuthenticatedPrivileged { role } | GateState::AuthenticatedMember { role } => {
                Some(role)
            }
            _ => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, GateState::Loading)
    }
}

fn is_selector_location(location: &str) -> bool {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    path.trim_end_matches('/') == SELECT_PROJECT_PATH
}

/// Advance the gate with the verifier's outcome.
///
/// Only `Loading` moves; every settled state is returned unchanged, so a
/// late or duplicate outcome can never flip an already-rendered decision.
pub fn transition(
    state: &GateState,
    outcome: &VerifyOutcome,
    markers: &SessionMarkers,
    location: &str,
) -> GateState {
    if state.is_settled() {
        return state.clone();
    }

    match outcome {
        VerifyOutcome::NoSession => GateState::Unauthenticated,
        VerifyOutcome::Session { role } if role.is_privileged() => {
            GateState::AuthenticatedPrivileged { role: role.clone() }
        }
        VerifyOutcome::Session { role } => {
            if markers.has_project_context() || is_selector_location(location) {
                GateState::AuthenticatedMember { role: role.clone() }
            } else {
                GateState::NeedsProjectSelection
            }
        }
    }
}
