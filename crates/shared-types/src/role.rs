use serde::{Deserialize, Serialize};

/// Backend label for the project-lead role.
pub const PROJECT_LEAD_LABEL: &str = "jefe proyecto";

/// Role assigned to the signed-in user by the backend.
///
/// - `Admin` and `ProjectLead` are privileged: they bypass project selection
///   and see the maintenance menu.
/// - `Member` carries any other label verbatim (e.g. `"user"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Admin,
    ProjectLead,
    Member(String),
}

impl Role {
    /// Parse a backend role label. Blank labels carry no role at all.
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return None;
        }
        let role = match trimmed.to_lowercase().as_str() {
            "admin" => Role::Admin,
            PROJECT_LEAD_LABEL | "jefe_proyecto" | "project-lead" | "project_lead" => {
                Role::ProjectLead
            }
            _ => Role::Member(trimmed.to_string()),
        };
        Some(role)
    }

    /// Label as the backend spells it; used for the `userRole` marker.
    pub fn as_label(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::ProjectLead => PROJECT_LEAD_LABEL,
            Role::Member(label) => label,
        }
    }

    /// The one predicate deciding privileged navigation.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::Admin | Role::ProjectLead)
    }

    pub fn display_name(&self) -> &str {
        match self {
            Role::Admin => "Administrator",
            Role::ProjectLead => "Project lead",
            Role::Member(_) => "Member",
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Role::from_label(&value).ok_or_else(|| "role label is empty".to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_label().to_string()
    }
}

/// Which sidebar sections a role may see.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuVisibility {
    /// User, course, device and student management.
    pub maintenance: bool,
    /// Attendance and class management.
    pub attendance_control: bool,
    /// The "Change project" action.
    pub change_project: bool,
}

impl MenuVisibility {
    pub fn for_role(role: &Role) -> Self {
        if role.is_privileged() {
            MenuVisibility {
                maintenance: true,
                attendance_control: true,
                change_project: false,
            }
        } else {
            MenuVisibility {
                maintenance: false,
                attendance_control: true,
                change_project: true,
            }
        }
    }
}
