use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Muted,
    Info,
}

impl BadgeTone {
    fn data_tone(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Success => "success",
            BadgeTone::Muted => "muted",
            BadgeTone::Info => "info",
        }
    }
}

/// Small inline label.
#[component]
pub fn Badge(#[props(default)] tone: BadgeTone, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "badge", "data-tone": tone.data_tone(), {children} }
    }
}

/// Active / Inactive record state.
#[component]
pub fn StatusBadge(active: bool) -> Element {
    rsx! {
        if active {
            Badge { tone: BadgeTone::Success, "Active" }
        } else {
            Badge { tone: BadgeTone::Muted, "Inactive" }
        }
    }
}
