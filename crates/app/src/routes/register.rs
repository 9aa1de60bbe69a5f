use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{AppError, RegisterRequest, UserProfile};
use shared_ui::{
    acknowledge, use_toast, Banner, Button, ButtonType, Card, CardContent, CardDescription,
    CardFooter, CardHeader, CardTitle, FormField, Input,
};

use crate::routes::Route;

const REGISTER_ERROR: &str = "Registration failed";
const REGISTERED: &str = "Account created. Please sign in.";

/// Account creation. A new account does not sign in; the visitor is sent
/// to /login afterwards.
#[component]
pub fn Register() -> Element {
    let api: ApiClient = use_context();
    let toasts = use_toast();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            loading.set(true);
            error_msg.set(None);

            let request = RegisterRequest {
                email: email(),
                password: password(),
                full_name: full_name(),
                confirm_password: confirm_password(),
            };
            match registration_outcome(api.register(&request).await) {
                Ok(ack) => {
                    acknowledge(toasts, ack);
                    navigator().push(Route::Login {});
                }
                Err(banner) => error_msg.set(Some(banner.to_string())),
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Create Account" }
                    CardDescription { "Register to manage your profile" }
                }

                CardContent {
                    Banner { message: error_msg() }

                    form { onsubmit: handle_register,
                        FormField { html_for: "full_name", label: "Full Name",
                            Input {
                                id: "full_name",
                                placeholder: "Jane Doe",
                                required: true,
                                value: full_name(),
                                on_input: move |e: FormEvent| full_name.set(e.value()),
                            }
                        }
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
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        FormField { html_for: "confirm_password", label: "Confirm Password",
                            Input {
                                input_type: "password",
                                id: "confirm_password",
                                required: true,
                                value: confirm_password(),
                                on_input: move |e: FormEvent| confirm_password.set(e.value()),
                            }
                        }
                        Button {
                            class: "auth-submit",
                            button_type: ButtonType::Submit,
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}

/// Acknowledgement on success, banner text on any failure. Confirmation
/// mismatches are the backend's call and surface here like any other 400.
fn registration_outcome(
    result: Result<UserProfile, AppError>,
) -> Result<&'static str, &'static str> {
    match result {
        Ok(user) => {
            tracing::info!(email = %user.email, "Registered account");
            Ok(REGISTERED)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Registration failed");
            Err(REGISTER_ERROR)
        }
    }
}
