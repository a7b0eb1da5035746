use super::Route;
use dioxus::prelude::*;
use shared_ui::LoadingIndicator;

/// Unknown locations fall back to the login page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = navigator();
    use_hook(move || {
        tracing::debug!(path = %segments.join("/"), "Unknown route; returning to login");
        nav.replace(Route::Login {});
    });

    rsx! {
        div { class: "centered-page",
            LoadingIndicator { label: "Redirecting..." }
        }
    }
}
