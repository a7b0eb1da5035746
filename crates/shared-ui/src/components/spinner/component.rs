use dioxus::prelude::*;

/// Centered spinner with a caption. The layout gate renders this, and only
/// this, while the session check is pending.
#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loading-indicator", role: "status", "aria-live": "polite",
            span { class: "spinner", "aria-hidden": "true" }
            span { class: "loading-label", "{label}" }
        }
    }
}
