pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod resources;
pub mod select_project;

use crate::session::{use_api, use_menu_visibility, use_session};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdCalendar, LdClipboardCheck, LdCpu, LdGraduationCap, LdLayoutDashboard, LdLogOut,
    LdMenu, LdRepeat, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{GateDecision, GateState, DASHBOARD_PATH, SELECT_PROJECT_PATH};
use shared_ui::{
    InitialsAvatar, LoadingIndicator, Sidebar, SidebarContent, SidebarFooter, SidebarHeader,
    SidebarInset, SidebarItem, SidebarProvider, SidebarSection, SidebarTrigger,
};

use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;
use resources::{
    AttendanceManagement, ClassManagement, ClassRoster, CourseManagement, DeviceManagement,
    StudentManagement, UserManagement,
};
use select_project::SelectProject;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Login {},
    #[route("/select-project")]
    SelectProject {},
    #[layout(RoleGate)]
    #[layout(Shell)]
    #[route("/dashboard")]
    Dashboard {},
    // ── Maintenance ──
    #[route("/dashboard/user-management")]
    UserManagement {},
    #[route("/dashboard/course-management")]
    CourseManagement {},
    #[route("/dashboard/student-management")]
    StudentManagement {},
    #[route("/dashboard/device-management")]
    DeviceManagement {},
    // ── Attendance control ──
    #[route("/dashboard/attendance-management")]
    AttendanceManagement {},
    #[route("/dashboard/class-management")]
    ClassManagement {},
    #[route("/dashboard/class-management/:id")]
    ClassRoster { id: String },
    #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Route for one of the fixed navigation targets; anything else is login.
pub fn route_for(path: &str) -> Route {
    match path {
        DASHBOARD_PATH => Route::Dashboard {},
        SELECT_PROJECT_PATH => Route::SelectProject {},
        _ => Route::Login {},
    }
}

/// Gate in front of every authenticated page.
///
/// Verifies the session once per mount, then either renders the shell or
/// replaces the location with login or the project selector. Nothing below
/// the gate renders while the check is in flight.
#[component]
fn RoleGate() -> Element {
    let api = use_api();
    let mut session = use_session();
    let route: Route = use_route();
    let nav = navigator();
    let mut gate = use_signal(GateState::default);

    use_hook(move || {
        let location = route.to_string();
        spawn(async move {
            let outcome = client::session::verify(&api).await;
            let state = client::session::settle_gate(&outcome, &mut session.store(), &location);
            session.set_role(state.role().cloned());
            if let GateDecision::Redirect(path) = state.decision() {
                nav.replace(route_for(path));
            }
            gate.set(state);
        });
    });

    let decision = gate.read().decision();
    match decision {
        GateDecision::ShowLoading => rsx! {
            div { class: "centered-page",
                LoadingIndicator { label: "Checking your session..." }
            }
        },
        GateDecision::Redirect(_) => rsx! {
            div { class: "centered-page",
                LoadingIndicator { label: "Redirecting..." }
            }
        },
        GateDecision::RenderShell => rsx! { Outlet::<Route> {} },
    }
}

/// Sidebar navigation, profile card and the page outlet.
#[component]
fn Shell() -> Element {
    let route: Route = use_route();
    let api = use_api();
    let mut session = use_session();
    let vis = use_menu_visibility();
    let nav = navigator();
    let mut leaving = use_signal(|| false);

    let profile_api = api.clone();
    let profile = use_resource(move || {
        let api = profile_api.clone();
        async move {
            api.profile()
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Profile unavailable"))
                .ok()
        }
    });

    let page_title = match &route {
        Route::Dashboard {} => "Dashboard",
        Route::UserManagement {} => "Users",
        Route::CourseManagement {} => "Courses",
        Route::StudentManagement {} => "Students",
        Route::DeviceManagement {} => "Devices",
        Route::AttendanceManagement {} => "Attendance",
        Route::ClassManagement {} | Route::ClassRoster { .. } => "Classes",
        _ => "",
    };

    let on_logout = move |_| {
        if leaving() {
            return;
        }
        leaving.set(true);
        let api = api.clone();
        spawn(async move {
            let (path, _) = client::session::logout(&api, &mut session.store()).await;
            session.mark_signed_out();
            nav.replace(route_for(path));
        });
    };

    let on_change_project = move |_| {
        let path = client::session::change_project(&mut session.store());
        nav.push(route_for(path));
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "GPDI" }
                    }
                }

                SidebarContent {
                    ul { class: "sidebar-menu",
                        NavLink { to: Route::Dashboard {}, label: "Dashboard",
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                        }
                    }

                    if vis.maintenance {
                        SidebarSection { title: "Maintenance",
                            NavLink { to: Route::UserManagement {}, label: "Users",
                                Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                            }
                            NavLink { to: Route::CourseManagement {}, label: "Courses",
                                Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
                            }
                            NavLink { to: Route::DeviceManagement {}, label: "Devices",
                                Icon::<LdCpu> { icon: LdCpu, width: 18, height: 18 }
                            }
                            NavLink { to: Route::StudentManagement {}, label: "Students",
                                Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 18, height: 18 }
                            }
                        }
                    }

                    if vis.attendance_control {
                        SidebarSection { title: "Attendance control",
                            NavLink { to: Route::AttendanceManagement {}, label: "Attendance",
                                Icon::<LdClipboardCheck> { icon: LdClipboardCheck, width: 18, height: 18 }
                            }
                            NavLink { to: Route::ClassManagement {}, label: "Classes",
                                Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                            }
                        }
                    }
                }

                SidebarFooter {
                    if let Some(Some(user)) = profile.read().as_ref() {
                        div { class: "profile-card",
                            InitialsAvatar { initials: user.initials() }
                            div { class: "profile-card-text",
                                strong { "{user.name}" }
                                span { "{user.email}" }
                                if let Some(role) = user.role() {
                                    span { "{role.display_name()}" }
                                }
                            }
                        }
                    }
                    ul { class: "sidebar-menu",
                        if vis.change_project {
                            SidebarItem { onclick: on_change_project,
                                Icon::<LdRepeat> { icon: LdRepeat, width: 18, height: 18 }
                                span { "Change project" }
                            }
                        }
                        SidebarItem { onclick: on_logout,
                            Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                            span { if leaving() { "Signing out..." } else { "Logout" } }
                        }
                    }
                }
            }

            SidebarInset {
                header { class: "app-bar",
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    span { "{page_title}" }
                }
                div { class: "page-body",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Sidebar entry that navigates to `to` and highlights itself while there.
#[component]
fn NavLink(to: Route, label: String, children: Element) -> Element {
    let current: Route = use_route();
    let nav = navigator();
    let active = current == to
        || matches!(
            (&current, &to),
            (Route::ClassRoster { .. }, Route::ClassManagement {})
        );

    rsx! {
        SidebarItem {
            active,
            onclick: move |_| {
                nav.push(to.clone());
            },
            {children}
            span { "{label}" }
        }
    }
}
