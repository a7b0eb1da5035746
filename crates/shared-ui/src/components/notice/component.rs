use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Inline message for data that failed to load. The page stays usable and
/// the optional retry handler re-issues the request.
#[component]
pub fn Notice(
    message: String,
    #[props(default)] on_retry: Option<EventHandler<()>>,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "notice", role: "status",
            span { class: "notice-message", "{message}" }
            div { class: "notice-actions",
                if let Some(retry) = on_retry {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| retry.call(()),
                        "Retry"
                    }
                }
                if let Some(dismiss) = on_dismiss {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| dismiss.call(()),
                        "Dismiss"
                    }
                }
            }
        }
    }
}

/// Static informational panel, e.g. for screens a role cannot use.
#[component]
pub fn AccessNotice(title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "access-notice",
            h2 { "{title}" }
            {children}
        }
    }
}
