use super::{route_for, Route};
use crate::session::{use_is_privileged, use_session};
use dioxus::prelude::*;
use shared_types::{ResourceKind, SessionMarkers};
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, PageHeader};

#[component]
pub fn Dashboard() -> Element {
    if use_is_privileged() {
        rsx! { AdminOverview {} }
    } else {
        rsx! { MemberOverview {} }
    }
}

/// Entry points to every management section.
#[component]
fn AdminOverview() -> Element {
    let sections = [
        (ResourceKind::Users, Route::UserManagement {}),
        (ResourceKind::Courses, Route::CourseManagement {}),
        (ResourceKind::Students, Route::StudentManagement {}),
        (ResourceKind::Devices, Route::DeviceManagement {}),
        (ResourceKind::Attendance, Route::AttendanceManagement {}),
        (ResourceKind::Classes, Route::ClassManagement {}),
    ];

    rsx! {
        PageHeader { title: "Administration" }
        div { class: "dashboard-grid",
            for (kind, route) in sections {
                Link { key: "{kind.route_segment()}", to: route,
                    Card {
                        CardHeader {
                            title: kind.title().to_string(),
                            subtitle: format!("Manage {}", kind.title().to_lowercase()),
                        }
                    }
                }
            }
        }
    }
}

/// The member's current project context.
#[component]
fn MemberOverview() -> Element {
    let mut session = use_session();
    let nav = navigator();
    let markers: SessionMarkers = session.markers.read().clone();
    let project = markers.selected_project.clone().unwrap_or_else(|| "-".to_string());

    rsx! {
        PageHeader { title: "My project" }
        Card {
            CardHeader { title: "Current context" }
            CardContent {
                dl { class: "context-list",
                    dt { "Project" }
                    dd { "{project}" }
                    if let Some(role) = &markers.team_role {
                        dt { "Team role" }
                        dd { "{role}" }
                    }
                    if let Some(committee) = &markers.committee_id {
                        dt { "Committee" }
                        dd { "{committee}" }
                    }
                }
            }
            CardFooter {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        let path = client::session::change_project(&mut session.store());
                        nav.push(route_for(path));
                    },
                    "Change project"
                }
            }
        }
    }
}
