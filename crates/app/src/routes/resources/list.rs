use dioxus::prelude::*;
use shared_types::{
    Activation, ColumnFormat, ListQuery, ResourceKind, DEFAULT_PAGE_SIZE, PAGE_SIZES,
};
use shared_ui::{
    use_toast, AccessNotice, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, FormSelect, Input,
    LoadingIndicator, Notice, PageHeader, Pagination, StatusBadge, Toolbar,
};

use crate::feedback::{report_failure, report_success};
use crate::routes::Route;
use crate::session::{use_api, use_is_privileged};

/// Paginated, searchable list shared by every entity screen.
///
/// Members only see active records and get no activation controls; kinds
/// reserved for privileged roles show an access notice instead.
#[component]
pub fn ResourceListPage(kind: ResourceKind) -> Element {
    let api = use_api();
    let toast = use_toast();
    let privileged = use_is_privileged();
    let nav = navigator();
    let blocked = kind.privileged_only() && !privileged;

    let mut page = use_signal(|| 1u32);
    let mut limit = use_signal(|| DEFAULT_PAGE_SIZE);
    let mut sort = use_signal(|| "createdAt".to_string());
    let mut search_input = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut pending = use_signal(|| Option::<String>::None);

    let list_api = api.clone();
    let mut rows = use_resource(move || {
        let api = list_api.clone();
        let query = ListQuery {
            page: page(),
            limit: limit(),
            sort: sort(),
            search: search(),
            active_only: !privileged,
        };
        async move {
            if blocked {
                return Ok(Vec::new());
            }
            api.list_resources(kind, &query).await.inspect_err(|e| {
                tracing::error!(resource = kind.title(), error = %e, "Failed to load list")
            })
        }
    });

    let set_activation = use_callback(move |(id, activation): (String, Activation)| {
        let api = api.clone();
        pending.set(Some(id.clone()));
        spawn(async move {
            match api.set_activation(kind, &id, activation).await {
                Ok(()) => {
                    tracing::info!(resource = kind.title(), id = %id, ?activation, "Activation changed");
                    report_success(toast, format!("{} updated", kind.title()));
                    rows.restart();
                }
                Err(e) => report_failure(toast, activation.label(), &e),
            }
            pending.set(None);
        });
    });

    if blocked {
        return rsx! {
            PageHeader { title: kind.title().to_string() }
            AccessNotice { title: "Not available",
                p { "Your role does not have access to {kind.title().to_lowercase()}." }
            }
        };
    }

    let show_activation = privileged && kind.supports_activation();
    let show_roster = kind == ResourceKind::Classes;
    let has_actions = show_activation || show_roster;
    let columns = kind.columns();
    let colspan = columns.len() + usize::from(has_actions);
    let current_limit = limit();

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        search.set(search_input().trim().to_string());
        page.set(1);
    };

    rsx! {
        PageHeader { title: kind.title().to_string() }

        Toolbar {
            form { class: "toolbar-search", onsubmit: handle_search,
                Input {
                    placeholder: "Search by name",
                    value: search_input(),
                    on_input: move |e: FormEvent| search_input.set(e.value()),
                }
                Button { button_type: "submit", variant: ButtonVariant::Outline, "Search" }
            }
            FormSelect {
                label: "Sort by",
                value: sort(),
                onchange: move |e: FormEvent| {
                    sort.set(e.value());
                    page.set(1);
                },
                for (field, label) in kind.sort_fields() {
                    option { key: "{field}", value: "{field}", "{label}" }
                }
            }
            FormSelect {
                label: "Rows",
                value: current_limit.to_string(),
                onchange: move |e: FormEvent| {
                    if let Ok(size) = e.value().parse::<u32>() {
                        limit.set(size);
                        page.set(1);
                    }
                },
                for size in PAGE_SIZES {
                    option { key: "{size}", value: "{size}", "{size}" }
                }
            }
        }

        match &*rows.read() {
            None => rsx! { LoadingIndicator {} },
            Some(Err(e)) => rsx! {
                Notice {
                    message: e.friendly_message(),
                    on_retry: move |_| rows.restart(),
                }
            },
            Some(Ok(records)) => {
                let has_more = records.len() as u32 >= current_limit;
                rsx! {
                    DataTable {
                        DataTableHeader {
                            for column in columns {
                                DataTableColumn { key: "{column.field}", "{column.label}" }
                            }
                            if has_actions {
                                DataTableColumn { "Actions" }
                            }
                        }
                        DataTableBody {
                            if records.is_empty() {
                                DataTableEmpty { colspan, message: "No records found." }
                            }
                            for (index, record) in records.iter().enumerate() {
                                DataTableRow {
                                    key: "{record.id().unwrap_or_else(|| index.to_string())}",
                                    dimmed: !record.is_active() && kind.supports_activation(),
                                    for column in columns {
                                        DataTableCell { key: "{column.field}",
                                            if column.format == ColumnFormat::Status {
                                                StatusBadge { active: record.is_active() }
                                            } else {
                                                "{record.cell_text(column)}"
                                            }
                                        }
                                    }
                                    if has_actions {
                                        DataTableCell {
                                            div { class: "row-actions",
                                                if let Some(id) = record.id() {
                                                    if show_roster {
                                                        Button {
                                                            variant: ButtonVariant::Ghost,
                                                            onclick: {
                                                                let id = id.clone();
                                                                move |_| {
                                                                    nav.push(Route::ClassRoster { id: id.clone() });
                                                                }
                                                            },
                                                            "Students"
                                                        }
                                                    }
                                                    if show_activation {
                                                        {
                                                            let activation = Activation::for_record(record);
                                                            let busy = pending.read().as_deref() == Some(id.as_str());
                                                            let row_id = id.clone();
                                                            rsx! {
                                                                Button {
                                                                    variant: if activation == Activation::Deactivate { ButtonVariant::Danger } else { ButtonVariant::Outline },
                                                                    busy,
                                                                    disabled: pending.read().is_some(),
                                                                    onclick: move |_| set_activation.call((row_id.clone(), activation)),
                                                                    "{activation.label()}"
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
                    Pagination { page, has_more }
                }
            }
        }
    }
}
