use crate::routes::{route_for, Route};
use crate::session::{use_api, use_session};
use crate::PRODUCT_NAME;
use dioxus::prelude::*;
use shared_types::{login_failure_message, AppError, LoginRequest};
use shared_ui::{Button, Card, CardContent, CardHeader, Input};
use std::collections::HashMap;
use validator::Validate;

/// Sign-in page. A live session skips straight to the dashboard, where the
/// gate decides what the user may see.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let nav = navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let mut session = use_session();
    let probe_api = api.clone();
    use_hook(move || {
        let just_signed_out = session.take_signed_out();
        spawn(async move {
            if let Some(path) = client::session::resume_session(&probe_api, just_signed_out).await {
                nav.replace(route_for(path));
            }
        });
    });

    let handle_login = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let request = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            if let Err(errors) = request.validate() {
                field_errors.set(AppError::from(errors).field_errors);
                return;
            }

            loading.set(true);
            match api.login(&request).await {
                Ok(()) => {
                    tracing::info!(email = %request.email, "Signed in");
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Sign-in rejected");
                    error_msg.set(Some(login_failure_message(&e)));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        header { class: "app-bar", "{PRODUCT_NAME}" }

        div { class: "centered-page",
            Card { class: "login-card",
                CardHeader {
                    title: "Sign in",
                    subtitle: "Enter your credentials to access the console",
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        p { class: "form-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            placeholder: "name@example.com",
                            value: email(),
                            error: field_errors.read().get("email").cloned(),
                            disabled: loading(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            error: field_errors.read().get("password").cloned(),
                            disabled: loading(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button { button_type: "submit", busy: loading(),
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                    }
                }
            }
        }
    }
}
