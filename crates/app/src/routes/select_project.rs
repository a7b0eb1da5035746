use super::route_for;
use crate::session::{use_api, use_session};
use crate::PRODUCT_NAME;
use client::selector::{self as flow, SelectorMount};
use dioxus::prelude::*;
use shared_types::{avatar_letter, ProjectQuery, SelectorFilter, SelectorState};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, InitialsAvatar, LoadingIndicator, Notice,
};

/// Project selector for members: pick a team role or committee, then one of
/// the projects reachable through it.
#[component]
pub fn SelectProject() -> Element {
    let api = use_api();
    let mut session = use_session();
    let nav = navigator();
    let mut state = use_signal(SelectorState::new);
    let mut leaving = use_signal(|| false);

    let mount_api = api.clone();
    use_hook(move || {
        spawn(async move {
            match flow::mount(&mount_api, &mut session.store()).await {
                SelectorMount::Redirect(path) => {
                    nav.replace(route_for(path));
                }
                SelectorMount::Ready(memberships) => memberships.apply(&mut state.write()),
            }
        });
    });

    let query_api = api.clone();
    let run_query = use_callback(move |query: ProjectQuery| {
        let api = query_api.clone();
        spawn(async move {
            let result = flow::fetch_projects(&api, &query).await;
            if !state.write().projects_loaded(query.ticket, result) {
                tracing::debug!(ticket = query.ticket, "Discarded stale project listing");
            }
        });
    });

    let retry_api = api.clone();
    let on_retry = move |_| {
        let query = state.write().retry_projects();
        match query {
            Some(query) => run_query.call(query),
            None => {
                state.write().reload_memberships();
                let api = retry_api.clone();
                spawn(async move {
                    let memberships = flow::load_memberships(&api).await;
                    memberships.apply(&mut state.write());
                });
            }
        }
    };

    let on_sign_out = move |_| {
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

    let snapshot = state.read().clone();
    let selected_role = snapshot.filter.team_role_id().map(str::to_owned);
    let selected_committee = snapshot.filter.committee_id().map(str::to_owned);

    rsx! {
        header { class: "app-bar",
            span { "{PRODUCT_NAME}" }
            span { style: "flex: 1" }
            Button { variant: ButtonVariant::Ghost, busy: leaving(), onclick: on_sign_out,
                "Sign out"
            }
        }

        div { class: "selector-page",
            if let Some(profile) = &snapshot.profile {
                div { class: "selector-greeting",
                    InitialsAvatar { initials: profile.initials() }
                    div {
                        strong { "Welcome, {profile.name}" }
                        div { class: "muted", "Choose the project you want to work on." }
                    }
                }
            }

            if let Some(message) = &snapshot.notice {
                Notice {
                    message: message.clone(),
                    on_retry: on_retry,
                    on_dismiss: move |_| state.write().dismiss_notice(),
                }
            }

            if snapshot.memberships_loading {
                LoadingIndicator { label: "Loading your memberships..." }
            } else {
                section { class: "selector-section",
                    h2 { "Team roles" }
                    if snapshot.team_roles.is_empty() {
                        p { class: "muted", "You have no team roles." }
                    }
                    div { class: "membership-list",
                        for role in snapshot.team_roles.clone() {
                            button {
                                key: "{role.id}",
                                class: "membership-chip",
                                r#type: "button",
                                "data-selected": if selected_role.as_deref() == Some(role.id.as_str()) { "true" } else { "false" },
                                onclick: {
                                    let role = role.clone();
                                    move |_| {
                                        let query = flow::choose_team_role(
                                            &mut session.store(),
                                            &mut state.write(),
                                            &role,
                                        );
                                        run_query.call(query);
                                    }
                                },
                                InitialsAvatar { initials: avatar_letter(&role.name) }
                                "{role.name}"
                            }
                        }
                    }
                }

                section { class: "selector-section",
                    h2 { "Committees" }
                    if snapshot.committees.is_empty() {
                        p { class: "muted", "You are not on any committee." }
                    }
                    div { class: "membership-list",
                        for committee in snapshot.committees.clone() {
                            button {
                                key: "{committee.id}",
                                class: "membership-chip",
                                r#type: "button",
                                "data-selected": if selected_committee.as_deref() == Some(committee.id.as_str()) { "true" } else { "false" },
                                onclick: {
                                    let committee = committee.clone();
                                    move |_| {
                                        let query = flow::choose_committee(
                                            &mut session.store(),
                                            &mut state.write(),
                                            &committee,
                                        );
                                        run_query.call(query);
                                    }
                                },
                                InitialsAvatar { initials: avatar_letter(&committee.name) }
                                "{committee.name}"
                            }
                        }
                    }
                }

                section { class: "selector-section",
                    h2 { "Projects" }
                    if snapshot.projects_loading {
                        LoadingIndicator { label: "Loading projects..." }
                    } else if snapshot.projects.is_empty() {
                        p { class: "muted",
                            if snapshot.filter == SelectorFilter::None {
                                "Select a team role or committee to see its projects."
                            } else {
                                "No projects found."
                            }
                        }
                    } else {
                        div { class: "project-grid",
                            for assignment in snapshot.projects.clone() {
                                div {
                                    key: "{assignment.project.id}",
                                    class: "project-card",
                                    role: "button",
                                    onclick: {
                                        let id = assignment.project.id.clone();
                                        move |_| {
                                            let path = flow::choose_project(&mut session.store(), &id);
                                            nav.push(route_for(path));
                                        }
                                    },
                                    Card {
                                        CardHeader { title: assignment.project.name.clone() }
                                        CardContent {
                                            p { "{assignment.project.description()}" }
                                            p { class: "project-dates",
                                                "{assignment.project.start_label()} – {assignment.project.end_label()}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
