//! Project selector state for non-privileged members.
//!
//! The state is a plain reducer: the UI feeds it user choices and backend
//! results, and it hands back the project query to issue. Each query carries
//! a ticket; results for an older ticket are dropped.

use crate::error::AppError;
use crate::models::{Committee, ProjectAssignment, TeamRole, UserProfile};

/// The one active membership filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectorFilter {
    #[default]
    None,
    TeamRole { id: String, label: String },
    Committee { id: String },
}

impl SelectorFilter {
    pub fn team_role_id(&self) -> Option<&str> {
        match self {
            SelectorFilter::TeamRole { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn committee_id(&self) -> Option<&str> {
        match self {
            SelectorFilter::Committee { id } => Some(id),
            _ => None,
        }
    }
}

/// Where a project listing comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSource {
    TeamRole { id: String },
    Committee { id: String },
}

/// A project listing request issued by the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectQuery {
    pub ticket: u64,
    pub source: ProjectSource,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectorState {
    pub team_roles: Vec<TeamRole>,
    pub committees: Vec<Committee>,
    pub profile: Option<UserProfile>,
    pub memberships_loading: bool,
    pub filter: SelectorFilter,
    pub projects: Vec<ProjectAssignment>,
    pub projects_loading: bool,
    /// Transient data-fetch notice; the user stays on the page.
    pub notice: Option<String>,
    ticket: u64,
}

impl SelectorState {
    pub fn new() -> Self {
        Self {
            memberships_loading: true,
            ..Self::default()
        }
    }

    /// Record the three independent membership listings. A failed listing
    /// leaves its section empty and raises the notice.
    pub fn memberships_loaded(
        &mut self,
        team_roles: Result<Vec<TeamRole>, AppError>,
        committees: Result<Vec<Committee>, AppError>,
        profile: Result<UserProfile, AppError>,
    ) {
        self.memberships_loading = false;
        let mut failure = None;

        match team_roles {
            Ok(roles) => self.team_roles = roles,
            Err(e) => failure = Some(e),
        }
        match committees {
            Ok(list) => self.committees = list,
            Err(e) => failure = failure.or(Some(e)),
        }
        match profile {
            Ok(p) => self.profile = Some(p),
            Err(e) => failure = failure.or(Some(e)),
        }

        self.notice = failure.map(|e| e.friendly_message());
    }

    /// Prepare for a retry of the membership listings.
    pub fn reload_memberships(&mut self) {
        self.memberships_loading = true;
        self.notice = None;
    }

    fn next_query(&mut self, source: ProjectSource) -> ProjectQuery {
        self.ticket += 1;
        self.projects.clear();
        self.projects_loading = true;
        self.notice = None;
        ProjectQuery {
            ticket: self.ticket,
            source,
        }
    }

    /// Switch the filter to a team role, dropping any committee selection.
    pub fn select_team_role(&mut self, role: &TeamRole) -> ProjectQuery {
        self.filter = SelectorFilter::TeamRole {
            id: role.id.clone(),
            label: role.name.clone(),
        };
        self.next_query(ProjectSource::TeamRole {
            id: role.id.clone(),
        })
    }

    /// Switch the filter to a committee, dropping any team-role selection.
    pub fn select_committee(&mut self, committee: &Committee) -> ProjectQuery {
        self.filter = SelectorFilter::Committee {
            id: committee.id.clone(),
        };
        self.next_query(ProjectSource::Committee {
            id: committee.id.clone(),
        })
    }

    /// Re-issue the query for the current filter, if any.
    pub fn retry_projects(&mut self) -> Option<ProjectQuery> {
        let source = match &self.filter {
            SelectorFilter::None => return None,
            SelectorFilter::TeamRole { id, .. } => ProjectSource::TeamRole { id: id.clone() },
            SelectorFilter::Committee { id } => ProjectSource::Committee { id: id.clone() },
        };
        Some(self.next_query(source))
    }

    /// Apply a project listing. Returns `false` when the result belongs to a
    /// superseded query and was discarded.
    pub fn projects_loaded(
        &mut self,
        ticket: u64,
        result: Result<Vec<ProjectAssignment>, AppError>,
    ) -> bool {
        if ticket != self.ticket {
            return false;
        }
        self.projects_loading = false;
        match result {
            Ok(projects) => self.projects = projects,
            Err(e) => {
                self.projects.clear();
                self.notice = Some(e.friendly_message());
            }
        }
        true
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
