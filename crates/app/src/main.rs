use client::ApiClient;
use dioxus::prelude::*;
use shared_types::SessionMarkers;
use shared_ui::LoadingIndicator;

mod feedback;
mod routes;
mod session;
use routes::Route;
use session::SessionContext;

const MAIN_CSS: Asset = asset!("/assets/main.css");

pub const PRODUCT_NAME: &str = "GPDI : Project Management System";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = client::load_config();
    let api = use_hook(|| ApiClient::new(config));

    rsx! {
        document::Title { "{PRODUCT_NAME}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        match &api {
            Ok(api) => rsx! {
                Console { api: api.clone(), marker_max_age_days: config.marker_max_age_days }
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialise the API client");
                rsx! { p { class: "form-error", "{e.friendly_message()}" } }
            }
        }
    }
}

/// Everything below the client: session context, toasts and the router.
#[component]
fn Console(api: ApiClient, marker_max_age_days: i64) -> Element {
    use_context_provider(|| api.clone());
    let markers = use_signal(SessionMarkers::default);
    use_context_provider(|| SessionContext::new(markers, marker_max_age_days));

    // Markers live in cookies; load them before any route reads them.
    let seeded = use_resource(move || async move {
        let mut markers = markers;
        markers.set(session::read_browser_markers().await);
    });

    rsx! {
        shared_ui::ToastProvider {
            if seeded.read().is_some() {
                Router::<Route> {}
            } else {
                LoadingIndicator {}
            }
        }
    }
}
