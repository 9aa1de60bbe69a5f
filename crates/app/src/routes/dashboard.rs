use client::forms::{PROFILE_LOAD_ERROR, PROFILE_UPDATED, PROFILE_UPDATE_ERROR};
use client::{ApiClient, PasswordChangeForm, ProfileEditForm};
use dioxus::prelude::*;
use shared_types::UserProfile;
use shared_ui::{
    acknowledge, use_toast, Banner, Button, ButtonType, Card, CardContent, CardDescription,
    CardHeader, CardTitle, FormField, Input, Loading, PageHeader, StatusBadge,
};

use crate::auth::use_session;
use crate::components::LogoutButton;
use crate::routes::Route;

/// Signed-in user's profile, profile edit and password change.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session().current();
    let api: ApiClient = use_context();
    let toasts = use_toast();
    let token = session.token().unwrap_or_default().to_string();

    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut password_form = use_signal(PasswordChangeForm::default);
    let mut edit_form = use_signal(ProfileEditForm::default);
    let mut saving = use_signal(|| false);

    // Owned by this scope: unmounting drops the request.
    let mut profile = use_resource({
        let api = api.clone();
        let token = token.clone();
        move || {
            let api = api.clone();
            let token = token.clone();
            async move {
                let result = api.current_user(&token).await;
                match &result {
                    Ok(p) => edit_form.set(ProfileEditForm::from_profile(p)),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to load profile");
                        error_msg.set(Some(PROFILE_LOAD_ERROR.to_string()));
                    }
                }
                result
            }
        }
    });

    let submit_password = {
        let api = api.clone();
        let token = token.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            let token = token.clone();
            async move {
                let request = password_form.read().request();
                let result = api.change_password(&token, &request).await;
                match password_form.write().finish(result) {
                    Ok(ack) => {
                        error_msg.set(None);
                        acknowledge(toasts, ack);
                    }
                    Err(banner) => error_msg.set(Some(banner.to_string())),
                }
            }
        }
    };

    let submit_profile = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let token = token.clone();
        async move {
            let current = profile.read().as_ref().and_then(|r| r.as_ref().ok()).cloned();
            let Some(current) = current else {
                return;
            };
            let Some(request) = edit_form.read().changes_from(&current) else {
                return;
            };

            saving.set(true);
            match api.update_profile(&token, &request).await {
                Ok(_) => {
                    error_msg.set(None);
                    acknowledge(toasts, PROFILE_UPDATED);
                    profile.restart();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Profile update failed");
                    error_msg.set(Some(PROFILE_UPDATE_ERROR.to_string()));
                }
            }
            saving.set(false);
        }
    };

    let loaded: Option<Option<UserProfile>> = profile
        .read()
        .as_ref()
        .map(|result| result.as_ref().ok().cloned());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            PageHeader { title: "Dashboard",
                if session.is_admin() {
                    Link { to: Route::AdminPanel {}, class: "dashboard-admin-link", "Admin Panel" }
                }
                LogoutButton {}
            }

            Banner { message: error_msg() }

            match loaded {
                None => rsx! { Loading { message: "Loading profile..." } },
                Some(None) => rsx! {},
                Some(Some(user)) => rsx! {
                    div { class: "dashboard-grid",
                        Card {
                            CardHeader {
                                CardTitle { "Profile" }
                            }
                            CardContent {
                                dl { class: "profile-details",
                                    dt { "Name" }
                                    dd { "{user.full_name}" }
                                    dt { "Email" }
                                    dd { "{user.email}" }
                                    dt { "Role" }
                                    dd { "{user.role}" }
                                    dt { "Status" }
                                    dd { StatusBadge { value: user.status.clone() } }
                                }
                            }
                        }

                        Card {
                            CardHeader {
                                CardTitle { "Edit Profile" }
                                CardDescription { "Only changed fields are sent" }
                            }
                            CardContent {
                                form { onsubmit: submit_profile,
                                    FormField { html_for: "full_name", label: "Full Name",
                                        Input {
                                            id: "full_name",
                                            value: edit_form.read().full_name.clone(),
                                            on_input: move |e: FormEvent| edit_form.write().full_name = e.value(),
                                        }
                                    }
                                    FormField { html_for: "profile_email", label: "Email",
                                        Input {
                                            input_type: "email",
                                            id: "profile_email",
                                            value: edit_form.read().email.clone(),
                                            on_input: move |e: FormEvent| edit_form.write().email = e.value(),
                                        }
                                    }
                                    Button {
                                        button_type: ButtonType::Submit,
                                        disabled: saving(),
                                        if saving() { "Saving..." } else { "Save Profile" }
                                    }
                                }
                            }
                        }

                        Card {
                            CardHeader {
                                CardTitle { "Change Password" }
                            }
                            CardContent {
                                form { onsubmit: submit_password,
                                    FormField { html_for: "current_password", label: "Current Password",
                                        Input {
                                            input_type: "password",
                                            id: "current_password",
                                            required: true,
                                            value: password_form.read().current_password.clone(),
                                            on_input: move |e: FormEvent| password_form.write().current_password = e.value(),
                                        }
                                    }
                                    FormField { html_for: "new_password", label: "New Password",
                                        Input {
                                            input_type: "password",
                                            id: "new_password",
                                            required: true,
                                            value: password_form.read().new_password.clone(),
                                            on_input: move |e: FormEvent| password_form.write().new_password = e.value(),
                                        }
                                    }
                                    Button { button_type: ButtonType::Submit, "Change Password" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
