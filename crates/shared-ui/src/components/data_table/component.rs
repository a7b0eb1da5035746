use dioxus::prelude::*;

/// Horizontally scrollable table with the console's list styling.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table { {children} }
        }
    }
}

/// `thead > tr`; children are [`DataTableColumn`]s.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { scope: "col", {children} }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// A body row. Rows with a handler are highlighted on hover.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(default = false)] dimmed: bool,
    children: Element,
) -> Element {
    let clickable = onclick.is_some();
    rsx! {
        tr {
            class: "data-table-row",
            "data-clickable": if clickable { "true" } else { "false" },
            "data-dimmed": if dimmed { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Full-width row shown when a list has nothing to display.
#[component]
pub fn DataTableEmpty(colspan: usize, message: String) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}", "{message}" }
        }
    }
}
