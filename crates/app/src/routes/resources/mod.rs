mod list;
mod roster;

pub use list::ResourceListPage;
pub use roster::ClassRoster;

use dioxus::prelude::*;
use shared_types::ResourceKind;

#[component]
pub fn UserManagement() -> Element {
    rsx! { ResourceListPage { kind: ResourceKind::Users } }
}

#[component]
pub fn CourseManagement() -> Element {
    rsx! { ResourceListPage { kind: ResourceKind::Courses } }
}

#[component]
pub fn StudentManagement() -> Element {
    rsx! { ResourceListPage { kind: ResourceKind::Students } }
}

#[component]
pub fn DeviceManagement() -> Element {
    rsx! { ResourceListPage { kind: ResourceKind::Devices } }
}

#[component]
pub fn AttendanceManagement() -> Element {
    rsx! { ResourceListPage { kind: ResourceKind::Attendance } }
}

#[component]
pub fn ClassManagement() -> Element {
    rsx! { ResourceListPage { kind: ResourceKind::Classes } }
}
