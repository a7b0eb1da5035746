use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Previous/Next controls for page-numbered lists whose total is unknown.
///
/// `has_more` should be true when the current page came back full.
#[component]
pub fn Pagination(page: Signal<u32>, has_more: bool) -> Element {
    let mut page = page;
    let current = page();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", "aria-label": "Pagination",
            Button {
                variant: ButtonVariant::Outline,
                disabled: current <= 1,
                onclick: move |_| {
                    let p = page();
                    page.set(p.saturating_sub(1).max(1));
                },
                "Previous"
            }
            span { class: "pagination-info", "Page {current}" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: !has_more,
                onclick: move |_| {
                    let p = page();
                    page.set(p + 1);
                },
                "Next"
            }
        }
    }
}
