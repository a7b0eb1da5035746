use shared_types::{
    transition, AppError, GateState, MarkerKey, MarkerStore, VerifyOutcome, DASHBOARD_PATH,
    LOGIN_PATH, SELECT_PROJECT_PATH,
};

use crate::Backend;

/// Ask the backend whether a session is live. Every failure, including a
/// reply without a role, counts as no session; there is no retry.
pub async fn verify<B: Backend>(backend: &B) -> VerifyOutcome {
    match backend.verify_session().await {
        Ok(info) => match info.role() {
            Some(role) => VerifyOutcome::Session { role },
            None => {
                tracing::warn!("Session check returned no role");
                VerifyOutcome::NoSession
            }
        },
        Err(e) => {
            tracing::debug!(error = %e, "Session check failed");
            VerifyOutcome::NoSession
        }
    }
}

/// Login page probe: where to go when a session is already live.
///
/// Right after a local sign-out the probe is skipped, so a logout call the
/// backend failed to honour cannot bounce the user back into the console.
pub async fn resume_session<B: Backend>(
    backend: &B,
    just_signed_out: bool,
) -> Option<&'static str> {
    if just_signed_out {
        tracing::debug!("Signed out here; not resuming the session");
        return None;
    }
    match verify(backend).await {
        VerifyOutcome::Session { .. } => Some(DASHBOARD_PATH),
        VerifyOutcome::NoSession => None,
    }
}

/// Apply a verifier outcome: refresh the `userRole` marker and settle the gate.
pub fn settle_gate<S: MarkerStore>(
    outcome: &VerifyOutcome,
    store: &mut S,
    location: &str,
) -> GateState {
    if let VerifyOutcome::Session { role } = outcome {
        store.set(MarkerKey::UserRole, role.as_label());
    }
    let state = transition(&GateState::Loading, outcome, &store.snapshot(), location);
    tracing::debug!(?state, location, "Layout gate settled");
    state
}

/// Full gate check for one mount of the authenticated layout.
pub async fn check_gate<B: Backend, S: MarkerStore>(
    backend: &B,
    store: &mut S,
    location: &str,
) -> GateState {
    let outcome = verify(backend).await;
    settle_gate(&outcome, store, location)
}

/// End the session. Markers are cleared whatever the backend says; the
/// caller always navigates to the returned login path. A failed call is
/// returned so it can be logged.
pub async fn logout<B: Backend, S: MarkerStore>(
    backend: &B,
    store: &mut S,
) -> (&'static str, Result<(), AppError>) {
    let result = backend.logout().await;
    if let Err(e) = &result {
        tracing::warn!(error = %e, "Logout call failed; clearing local markers anyway");
    }
    store.clear_all();
    (LOGIN_PATH, result)
}

/// Drop the member's project context and send them back to the selector.
pub fn change_project<S: MarkerStore>(store: &mut S) -> &'static str {
    store.clear_project_context();
    tracing::info!("Project context cleared");
    SELECT_PROJECT_PATH
}
