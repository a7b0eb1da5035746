use dioxus::prelude::*;

/// Bordered panel used for forms, profile summaries and empty states.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(title: String, #[props(default)] subtitle: Option<String>) -> Element {
    rsx! {
        header { class: "card-header",
            h3 { class: "card-title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "card-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Bottom row of a card, right-aligned; usually holds actions.
#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        footer { class: "card-footer", {children} }
    }
}
