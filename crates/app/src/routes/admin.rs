use client::directory::{PageRequest, UserDirectory};
use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{UpdateUserRequest, UserStatus, UserSummary};
use shared_ui::{
    acknowledge, use_toast, Banner, Button, ButtonVariant, ConfirmDialog, DataTable,
    DataTableCell, DataTableEmpty, DataTableRow, Loading, PageHeader, Pagination, StatusBadge,
};

use crate::auth::use_session;
use crate::components::LogoutButton;
use crate::config;
use crate::routes::Route;

const USER_DELETED: &str = "User deleted successfully";
const USER_UPDATED: &str = "User updated";
const COLUMNS: [&str; 6] = ["ID", "Email", "Name", "Role", "Status", "Actions"];

/// Paged user listing for administrators, with delete and status toggle.
#[component]
pub fn AdminPanel() -> Element {
    let session = use_session().current();
    let api: ApiClient = use_context();
    let toasts = use_toast();
    let token = session.token().unwrap_or_default().to_string();
    let page_size = config::get().api.page_size;

    let mut directory = use_signal(|| UserDirectory::new(page_size));
    let mut pending_delete = use_signal(|| Option::<UserSummary>::None);
    let mut confirm_open = use_signal(|| false);

    // Spawned on this scope, so a response that lands after unmount is dropped
    // with the task. Out-of-order responses are rejected by the epoch check.
    let fetch_page = use_callback({
        let api = api.clone();
        let token = token.clone();
        move |request: PageRequest| {
            let api = api.clone();
            let token = token.clone();
            spawn(async move {
                let mut request = request;
                loop {
                    let result = api.list_users(&token, request.page, request.limit).await;
                    let mut dir = directory.write();
                    if !dir.apply(&request, result) {
                        break;
                    }
                    match dir.clamp_page() {
                        Some(previous_page) => request = previous_page,
                        None => break,
                    }
                }
            });
        }
    });

    use_effect(move || {
        let request = directory.write().refresh();
        fetch_page.call(request);
    });

    let confirm_delete = {
        let api = api.clone();
        let token = token.clone();
        move |_: ()| {
            let Some(user) = pending_delete.take() else {
                return;
            };
            let api = api.clone();
            let token = token.clone();
            spawn(async move {
                let result = api.delete_user(&token, user.id).await;
                if let Some(request) = directory.write().delete_finished(result) {
                    tracing::info!(user_id = user.id, "Deleted user");
                    acknowledge(toasts, USER_DELETED);
                    fetch_page.call(request);
                }
            });
        }
    };

    let toggle_status = use_callback(move |user: UserSummary| {
        let api = api.clone();
        let token = token.clone();
        spawn(async move {
            let request = UpdateUserRequest {
                status: Some(user.status().toggled()),
                ..Default::default()
            };
            let result = api.update_user(&token, user.id, &request).await;
            if let Some(request) = directory.write().update_finished(result) {
                acknowledge(toasts, USER_UPDATED);
                fetch_page.call(request);
            }
        });
    });

    let dir = directory.read();
    let total = dir.total();
    let delete_description = pending_delete
        .read()
        .as_ref()
        .map(|u| format!("Delete {}? This cannot be undone.", u.email))
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-panel",
            PageHeader { title: "User Management",
                Link { to: Route::Dashboard {}, class: "admin-back-link", "Dashboard" }
                LogoutButton {}
            }

            Banner { message: dir.error().map(str::to_string) }

            if dir.is_loading() {
                Loading { message: "Loading users..." }
            } else {
                p { class: "admin-total", "{total} users" }

                DataTable { columns: COLUMNS.to_vec(),
                    if dir.users().is_empty() {
                        DataTableEmpty { colspan: COLUMNS.len(), "No users found" }
                    }
                    for user in dir.users().iter().cloned() {
                        DataTableRow { key: "{user.id}",
                            DataTableCell { "{user.id}" }
                            DataTableCell { "{user.email}" }
                            DataTableCell { "{user.full_name}" }
                            DataTableCell { "{user.role}" }
                            DataTableCell { StatusBadge { value: user.status.clone() } }
                            DataTableCell {
                                div { class: "admin-actions",
                                    Button {
                                        variant: ButtonVariant::Secondary,
                                        onclick: {
                                            let user = user.clone();
                                            move |_| toggle_status.call(user.clone())
                                        },
                                        {status_action(user.status())}
                                    }
                                    Button {
                                        variant: ButtonVariant::Destructive,
                                        onclick: {
                                            let user = user.clone();
                                            move |_| {
                                                pending_delete.set(Some(user.clone()));
                                                confirm_open.set(true);
                                            }
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }

                Pagination {
                    controls: dir.controls(),
                    on_previous: move |_| {
                        let request = directory.write().previous();
                        if let Some(request) = request {
                            fetch_page.call(request);
                        }
                    },
                    on_next: move |_| {
                        let request = directory.write().next();
                        if let Some(request) = request {
                            fetch_page.call(request);
                        }
                    },
                }
            }

            ConfirmDialog {
                open: confirm_open,
                title: "Delete user",
                description: delete_description,
                confirm_label: "Delete",
                on_confirm: confirm_delete,
            }
        }
    }
}

fn status_action(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "Deactivate",
        UserStatus::Inactive => "Activate",
    }
}
