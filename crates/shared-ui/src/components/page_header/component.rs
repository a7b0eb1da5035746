use dioxus::prelude::*;

/// Title row at the top of a screen, with an optional action slot.
#[component]
pub fn PageHeader(title: String, #[props(default)] actions: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            h1 { class: "page-title", "{title}" }
            div { class: "page-actions", {actions} }
        }
    }
}

/// Row of filters (search, sort, page size) above a list.
#[component]
pub fn Toolbar(children: Element) -> Element {
    rsx! {
        div { class: "toolbar", {children} }
    }
}
