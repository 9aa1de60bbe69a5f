use client::ApiClient;
use dioxus::prelude::*;
use shared_types::LoginRequest;
use shared_ui::{
    Banner, Button, ButtonType, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, FormField, Input,
};

use crate::auth::use_session;
use crate::routes::Route;

const LOGIN_ERROR: &str = "Invalid email or password";

/// Email/password sign-in. On success the token and role are stored
/// and the visitor lands on the dashboard.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let api: ApiClient = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            loading.set(true);
            error_msg.set(None);

            let request = LoginRequest {
                email: email(),
                password: password(),
            };
            match api.sign_in(&request).await {
                Ok((token, role)) => {
                    session.login(&token, &role);
                    navigator().push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Login failed");
                    error_msg.set(Some(LOGIN_ERROR.to_string()));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access your account" }
                }

                CardContent {
                    Banner { message: error_msg() }

                    form { onsubmit: handle_login,
                        FormField { html_for: "email", label: "Email",
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "user@example.com",
                                required: true,
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        FormField { html_for: "password", label: "Password",
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        Button {
                            class: "auth-submit",
                            button_type: ButtonType::Submit,
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Create one" }
                    }
                }
            }
        }
    }
}
