//! Persisted session markers: small client-side entries remembering the
//! selected project, how it was reached, and a denormalised copy of the role.

use serde::{Deserialize, Serialize};

/// Names of the persisted markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKey {
    SelectedProject,
    CommitteeId,
    TeamRole,
    UserRole,
}

impl MarkerKey {
    pub const ALL: [MarkerKey; 4] = [
        MarkerKey::SelectedProject,
        MarkerKey::CommitteeId,
        MarkerKey::TeamRole,
        MarkerKey::UserRole,
    ];

    /// Markers describing the member's project context.
    pub const PROJECT_CONTEXT: [MarkerKey; 3] = [
        MarkerKey::SelectedProject,
        MarkerKey::CommitteeId,
        MarkerKey::TeamRole,
    ];

    /// Storage name (cookie name in the browser).
    pub fn storage_name(&self) -> &'static str {
        match self {
            MarkerKey::SelectedProject => "selectedProject",
            MarkerKey::CommitteeId => "committeeId",
            MarkerKey::TeamRole => "teamRole",
            MarkerKey::UserRole => "userRole",
        }
    }

    pub fn from_storage_name(name: &str) -> Option<Self> {
        MarkerKey::ALL
            .into_iter()
            .find(|key| key.storage_name() == name)
    }
}

/// Snapshot of every marker. Blank values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMarkers {
    pub selected_project: Option<String>,
    pub committee_id: Option<String>,
    pub team_role: Option<String>,
    pub user_role: Option<String>,
}

impl SessionMarkers {
    fn slot(&self, key: MarkerKey) -> &Option<String> {
        match key {
            MarkerKey::SelectedProject => &self.selected_project,
            MarkerKey::CommitteeId => &self.committee_id,
            MarkerKey::TeamRole => &self.team_role,
            MarkerKey::UserRole => &self.user_role,
        }
    }

    fn slot_mut(&mut self, key: MarkerKey) -> &mut Option<String> {
        match key {
            MarkerKey::SelectedProject => &mut self.selected_project,
            MarkerKey::CommitteeId => &mut self.committee_id,
            MarkerKey::TeamRole => &mut self.team_role,
            MarkerKey::UserRole => &mut self.user_role,
        }
    }

    pub fn value(&self, key: MarkerKey) -> Option<&str> {
        self.slot(key).as_deref()
    }

    /// True when a member has enough context to enter the dashboard:
    /// a selected project, or both a committee and a team role.
    pub fn has_project_context(&self) -> bool {
        self.selected_project.is_some() || (self.committee_id.is_some() && self.team_role.is_some())
    }

    pub fn is_empty(&self) -> bool {
        MarkerKey::ALL.iter().all(|key| self.slot(*key).is_none())
    }
}

/// Read/write access to the persisted markers.
///
/// The browser implementation writes cookies; [`SessionMarkers`] itself is the
/// in-memory implementation used by tests and non-browser targets.
pub trait MarkerStore {
    fn snapshot(&self) -> SessionMarkers;

    fn set(&mut self, key: MarkerKey, value: &str);

    fn remove(&mut self, key: MarkerKey);

    fn get(&self, key: MarkerKey) -> Option<String> {
        self.snapshot().value(key).map(str::to_owned)
    }

    /// Forget the selected project and how it was reached.
    fn clear_project_context(&mut self) {
        for key in MarkerKey::PROJECT_CONTEXT {
            self.remove(key);
        }
    }

    fn clear_all(&mut self) {
        for key in MarkerKey::ALL {
            self.remove(key);
        }
    }
}

impl MarkerStore for SessionMarkers {
    fn snapshot(&self) -> SessionMarkers {
        self.clone()
    }

    fn set(&mut self, key: MarkerKey, value: &str) {
        let value = value.trim();
        *self.slot_mut(key) = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    fn remove(&mut self, key: MarkerKey) {
        *self.slot_mut(key) = None;
    }
}
