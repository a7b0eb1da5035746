//! Entity screens share one list pattern; `ResourceKind` describes each
//! entity's endpoint, route and table layout.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::date_label;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const PAGE_SIZES: [u32; 3] = [5, 10, 15];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Users,
    Courses,
    Students,
    Devices,
    Classes,
    Attendance,
}

/// How a column renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFormat {
    Text,
    Date,
    /// The `active` flag rendered as Active / Inactive.
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    /// Dotted path into the record, e.g. `student_id.name`.
    pub field: &'static str,
    pub format: ColumnFormat,
}

const fn text(label: &'static str, field: &'static str) -> Column {
    Column {
        label,
        field,
        format: ColumnFormat::Text,
    }
}

const fn date(label: &'static str, field: &'static str) -> Column {
    Column {
        label,
        field,
        format: ColumnFormat::Date,
    }
}

const STATUS: Column = Column {
    label: "Status",
    field: "active",
    format: ColumnFormat::Status,
};

const USER_COLUMNS: &[Column] = &[
    text("Name", "name"),
    text("Email", "email"),
    STATUS,
    date("Created", "createdAt"),
    date("Updated", "updatedAt"),
];
const COURSE_COLUMNS: &[Column] = &[text("Name", "name"), STATUS];
const STUDENT_COLUMNS: &[Column] = &[text("Name", "name"), text("Code", "code"), STATUS];
const DEVICE_COLUMNS: &[Column] = &[
    text("Name", "name"),
    text("Device status", "status"),
    text("Last active", "last_active"),
    STATUS,
];
const CLASS_COLUMNS: &[Column] = &[text("Name", "name"), STATUS];
const ATTENDANCE_COLUMNS: &[Column] = &[
    text("Student", "student_id.name"),
    text("Class", "class_id.name"),
    text("Result", "status"),
    date("Recorded", "createdAt"),
];

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Users,
        ResourceKind::Courses,
        ResourceKind::Devices,
        ResourceKind::Students,
        ResourceKind::Attendance,
        ResourceKind::Classes,
    ];

    /// Path segment under `/dashboard`.
    pub fn route_segment(&self) -> &'static str {
        match self {
            ResourceKind::Users => "user-management",
            ResourceKind::Courses => "course-management",
            ResourceKind::Students => "student-management",
            ResourceKind::Devices => "device-management",
            ResourceKind::Classes => "class-management",
            ResourceKind::Attendance => "attendance-management",
        }
    }

    pub fn from_route_segment(segment: &str) -> Option<Self> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.route_segment() == segment)
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::Users => "Users",
            ResourceKind::Courses => "Courses",
            ResourceKind::Students => "Students",
            ResourceKind::Devices => "Devices",
            ResourceKind::Classes => "Classes",
            ResourceKind::Attendance => "Attendance",
        }
    }

    /// Collection endpoint; item routes hang off it.
    pub fn api_base(&self) -> &'static str {
        match self {
            ResourceKind::Users => "/usuario",
            ResourceKind::Courses => "/curso",
            ResourceKind::Students => "/estudiante",
            ResourceKind::Devices => "/dispositivo",
            ResourceKind::Classes => "/clase",
            ResourceKind::Attendance => "/asistencia",
        }
    }

    pub fn list_path(&self) -> &'static str {
        match self {
            ResourceKind::Users => "/usuario/obtenerUsuarios",
            other => other.api_base(),
        }
    }

    /// Maintenance entities are reachable from the menu only by privileged roles.
    pub fn privileged_only(&self) -> bool {
        matches!(
            self,
            ResourceKind::Users | ResourceKind::Courses | ResourceKind::Students | ResourceKind::Devices
        )
    }

    pub fn columns(&self) -> &'static [Column] {
        match self {
            ResourceKind::Users => USER_COLUMNS,
            ResourceKind::Courses => COURSE_COLUMNS,
            ResourceKind::Students => STUDENT_COLUMNS,
            ResourceKind::Devices => DEVICE_COLUMNS,
            ResourceKind::Classes => CLASS_COLUMNS,
            ResourceKind::Attendance => ATTENDANCE_COLUMNS,
        }
    }

    pub fn supports_activation(&self) -> bool {
        !matches!(self, ResourceKind::Attendance)
    }

    /// Whether members are restricted to active records on this list.
    pub fn filters_inactive_for_members(&self) -> bool {
        matches!(
            self,
            ResourceKind::Courses | ResourceKind::Students | ResourceKind::Devices
        )
    }

    /// Extra fields matched by the search box besides `name`.
    fn extra_search_fields(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::Users => &["email"],
            _ => &[],
        }
    }

    pub fn sort_fields(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            ResourceKind::Users => &[
                ("createdAt", "Created"),
                ("name", "Name"),
                ("email", "Email"),
                ("active", "Status"),
            ],
            _ => &[("createdAt", "Created"), ("name", "Name")],
        }
    }
}

/// Paging, sorting and search for a list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub sort: String,
    pub search: String,
    /// Hide inactive records (members only).
    pub active_only: bool,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            sort: "createdAt".to_string(),
            search: String::new(),
            active_only: false,
        }
    }
}

impl ListQuery {
    /// Query string pairs for `kind`'s list endpoint.
    pub fn to_params(&self, kind: ResourceKind) -> Vec<(String, String)> {
        let mut params = vec![
            ("limit".to_string(), self.limit.max(1).to_string()),
            ("page".to_string(), self.page.max(1).to_string()),
            ("sort".to_string(), self.sort.clone()),
        ];

        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("or[0][0][name][regex]".to_string(), search.to_string()));
            for (i, field) in kind.extra_search_fields().iter().enumerate() {
                params.push((format!("or[0][{}][{}][regex]", i + 1, field), search.to_string()));
            }
        }

        if self.active_only && kind.filters_inactive_for_members() {
            params.push(("active".to_string(), "true".to_string()));
        }
        params
    }
}

/// One row of any resource list, kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRecord(pub Value);

impl ResourceRecord {
    fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.0, |value, key| value.get(key))
    }

    pub fn id(&self) -> Option<String> {
        match self.lookup("_id").or_else(|| self.lookup("id"))? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.lookup("active").and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn cell_text(&self, column: &Column) -> String {
        match column.format {
            ColumnFormat::Status => {
                if self.is_active() {
                    "Active".to_string()
                } else {
                    "Inactive".to_string()
                }
            }
            ColumnFormat::Date => date_label(self.lookup(column.field).and_then(Value::as_str)),
            ColumnFormat::Text => match self.lookup(column.field) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            },
        }
    }
}

/// Activation toggle, mapped onto `PATCH {base}/:id/activar|desactivar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Activate,
    Deactivate,
}

impl Activation {
    pub fn for_record(record: &ResourceRecord) -> Self {
        if record.is_active() {
            Activation::Deactivate
        } else {
            Activation::Activate
        }
    }

    pub fn path_suffix(&self) -> &'static str {
        match self {
            Activation::Activate => "activar",
            Activation::Deactivate => "desactivar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Activation::Activate => "Activate",
            Activation::Deactivate => "Deactivate",
        }
    }
}

// ── Class roster ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleBlock {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub day_of_week: String,
    #[serde(default)]
    pub time: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "studen_id")]
    pub student: StudentRef,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassDetail {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub general_schedule: Vec<ScheduleBlock>,
    #[serde(default)]
    pub students: Vec<RosterEntry>,
}

impl ClassDetail {
    pub fn has_student(&self, student_id: &str) -> bool {
        self.students.iter().any(|entry| entry.student.id == student_id)
    }
}

/// Body of the roster add/remove calls. The backend spells the key
/// `studen_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterChange {
    #[serde(rename = "studen_id")]
    pub student_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterAction {
    Add,
    Remove,
}

impl RosterAction {
    pub fn path_suffix(&self) -> &'static str {
        match self {
            RosterAction::Add => "agregar-estudiante",
            RosterAction::Remove => "quitar-estudiante",
        }
    }
}
