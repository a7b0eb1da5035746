//! Project selector flow: what happens on mount and on each choice.

use shared_types::{
    AppError, Committee, MarkerKey, MarkerStore, ProjectAssignment, ProjectQuery, SelectorState,
    TeamRole, UserProfile, VerifyOutcome, DASHBOARD_PATH, LOGIN_PATH,
};

use crate::session::verify;
use crate::Backend;

/// The three membership listings, each fetched independently.
#[derive(Debug)]
pub struct Memberships {
    pub team_roles: Result<Vec<TeamRole>, AppError>,
    pub committees: Result<Vec<Committee>, AppError>,
    pub profile: Result<UserProfile, AppError>,
}

impl Memberships {
    pub fn apply(self, state: &mut SelectorState) {
        for err in [
            self.team_roles.as_ref().err(),
            self.committees.as_ref().err(),
            self.profile.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        {
            tracing::error!(error = %err, "Failed to load project memberships");
        }
        state.memberships_loaded(self.team_roles, self.committees, self.profile);
    }
}

#[derive(Debug)]
pub enum SelectorMount {
    /// Leave the selector without rendering it.
    Redirect(&'static str),
    Ready(Memberships),
}

/// Fetch the three listings concurrently; one failing does not stop the others.
pub async fn load_memberships<B: Backend>(backend: &B) -> Memberships {
    let (team_roles, committees, profile) =
        tokio::join!(backend.team_roles(), backend.committees(), backend.profile());
    Memberships {
        team_roles,
        committees,
        profile,
    }
}

/// Mount sequence.
///
/// 1. A stored project short-circuits to the dashboard with no fetches.
/// 2. Otherwise the session is verified; no session goes to login.
/// 3. The membership listings are fetched.
pub async fn mount<B: Backend, S: MarkerStore>(backend: &B, store: &mut S) -> SelectorMount {
    if store.get(MarkerKey::SelectedProject).is_some() {
        tracing::debug!("Project already selected; skipping selector");
        return SelectorMount::Redirect(DASHBOARD_PATH);
    }

    match verify(backend).await {
        VerifyOutcome::NoSession => SelectorMount::Redirect(LOGIN_PATH),
        VerifyOutcome::Session { role } => {
            store.set(MarkerKey::UserRole, role.as_label());
            SelectorMount::Ready(load_memberships(backend).await)
        }
    }
}

/// Choose a team role: remember its label and forget any committee.
pub fn choose_team_role<S: MarkerStore>(
    store: &mut S,
    state: &mut SelectorState,
    role: &TeamRole,
) -> ProjectQuery {
    store.set(MarkerKey::TeamRole, &role.name);
    store.remove(MarkerKey::CommitteeId);
    state.select_team_role(role)
}

/// Choose a committee: remember its id and forget any team role.
pub fn choose_committee<S: MarkerStore>(
    store: &mut S,
    state: &mut SelectorState,
    committee: &Committee,
) -> ProjectQuery {
    store.set(MarkerKey::CommitteeId, &committee.id);
    store.remove(MarkerKey::TeamRole);
    state.select_committee(committee)
}

pub async fn fetch_projects<B: Backend>(
    backend: &B,
    query: &ProjectQuery,
) -> Result<Vec<ProjectAssignment>, AppError> {
    let result = backend.projects(&query.source).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, ticket = query.ticket, "Failed to load projects");
    }
    result
}

/// Persist the chosen project and return where to go next.
pub fn choose_project<S: MarkerStore>(store: &mut S, project_id: &str) -> &'static str {
    store.set(MarkerKey::SelectedProject, project_id);
    tracing::info!(project_id, "Project selected");
    DASHBOARD_PATH
}
