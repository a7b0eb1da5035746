use dioxus::prelude::*;
use shared_types::{ListQuery, ResourceKind, ResourceRecord, RosterAction};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, LoadingIndicator, Notice,
    PageHeader, StatusBadge,
};

use crate::feedback::{report_failure, report_success};
use crate::routes::Route;
use crate::session::{use_api, use_is_privileged};

/// Students that can be offered for enrolment on one screen.
const CANDIDATE_LIMIT: u32 = 100;

/// One class with its schedule and enrolled students.
#[component]
pub fn ClassRoster(id: String) -> Element {
    let api = use_api();
    let toast = use_toast();
    let privileged = use_is_privileged();
    let nav = navigator();
    let mut pending = use_signal(|| Option::<String>::None);

    let class_id = id.clone();
    let detail_api = api.clone();
    let mut detail = use_resource(move || {
        let api = detail_api.clone();
        let id = class_id.clone();
        async move {
            api.class_detail(&id)
                .await
                .inspect_err(|e| tracing::error!(class_id = %id, error = %e, "Failed to load class"))
        }
    });

    let candidates_api = api.clone();
    let candidates = use_resource(move || {
        let api = candidates_api.clone();
        let query = ListQuery {
            limit: CANDIDATE_LIMIT,
            active_only: !privileged,
            ..ListQuery::default()
        };
        async move {
            api.list_resources(ResourceKind::Students, &query)
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "Failed to load students"))
        }
    });

    let change_roster = use_callback(move |(student_id, action): (String, RosterAction)| {
        let api = api.clone();
        let class_id = id.clone();
        pending.set(Some(student_id.clone()));
        spawn(async move {
            match api.change_roster(&class_id, &student_id, action).await {
                Ok(()) => {
                    tracing::info!(class_id = %class_id, student_id = %student_id, ?action, "Roster changed");
                    let message = match action {
                        RosterAction::Add => "Student added to the class",
                        RosterAction::Remove => "Student removed from the class",
                    };
                    report_success(toast, message);
                    detail.restart();
                }
                Err(e) => report_failure(toast, "roster change", &e),
            }
            pending.set(None);
        });
    });

    let busy = pending.read().is_some();

    rsx! {
        PageHeader {
            title: "Class roster",
            actions: rsx! {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        nav.push(Route::ClassManagement {});
                    },
                    "Back to classes"
                }
            },
        }

        match &*detail.read() {
            None => rsx! { LoadingIndicator {} },
            Some(Err(e)) => rsx! {
                Notice {
                    message: e.friendly_message(),
                    on_retry: move |_| detail.restart(),
                }
            },
            Some(Ok(class)) => rsx! {
                div { class: "roster-layout",
                    Card {
                        CardHeader {
                            title: class.name.clone(),
                            subtitle: format!("{} enrolled", class.students.len()),
                        }
                        CardContent {
                            StatusBadge { active: class.active }
                            if class.students.is_empty() {
                                p { class: "muted", "No students enrolled yet." }
                            }
                            ul { class: "roster-list",
                                for entry in class.students.iter() {
                                    li { key: "{entry.student.id}",
                                        span { "{entry.student.name} ({entry.student.code})" }
                                        Button {
                                            variant: ButtonVariant::Danger,
                                            busy: pending.read().as_deref() == Some(entry.student.id.as_str()),
                                            disabled: busy,
                                            onclick: {
                                                let student_id = entry.student.id.clone();
                                                move |_| change_roster.call((student_id.clone(), RosterAction::Remove))
                                            },
                                            "Remove"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        Card {
                            CardHeader { title: "Schedule" }
                            CardContent {
                                if class.general_schedule.is_empty() {
                                    p { class: "muted", "No schedule defined." }
                                }
                                for block in class.general_schedule.iter() {
                                    div { key: "{block.id}", class: "schedule-block",
                                        strong { "{block.name} · {block.day_of_week}" }
                                        for (i, slot) in block.time.iter().enumerate() {
                                            p { key: "{i}", "{slot.start_time} - {slot.end_time}" }
                                        }
                                    }
                                }
                            }
                        }

                        Card {
                            CardHeader { title: "Add students" }
                            CardContent {
                                match &*candidates.read() {
                                    None => rsx! { LoadingIndicator { label: "Loading students..." } },
                                    Some(Err(e)) => rsx! { p { class: "form-error", "{e.friendly_message()}" } },
                                    Some(Ok(students)) => {
                                        let available: Vec<&ResourceRecord> = students
                                            .iter()
                                            .filter(|s| s.id().is_some_and(|sid| !class.has_student(&sid)))
                                            .collect();
                                        rsx! {
                                            if available.is_empty() {
                                                p { class: "muted", "Every student is already enrolled." }
                                            }
                                            ul { class: "roster-list",
                                                for student in available {
                                                    if let Some(student_id) = student.id() {
                                                        li { key: "{student_id}",
                                                            span { {student_label(student)} }
                                                            Button {
                                                                variant: ButtonVariant::Outline,
                                                                busy: pending.read().as_deref() == Some(student_id.as_str()),
                                                                disabled: busy,
                                                                onclick: {
                                                                    let student_id = student_id.clone();
                                                                    move |_| change_roster.call((student_id.clone(), RosterAction::Add))
                                                                },
                                                                "Add"
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
            },
        }
    }
}

fn student_label(student: &ResourceRecord) -> String {
    let name = student.0.get("name").and_then(|v| v.as_str()).unwrap_or_default();
    match student.0.get("code").and_then(|v| v.as_str()) {
        Some(code) if !code.is_empty() => format!("{name} ({code})"),
        _ => name.to_string(),
    }
}
