use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogOut;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant};

use crate::auth::use_session;
use crate::routes::Route;

/// Clears the stored session and returns to the login page.
#[component]
pub fn LogoutButton() -> Element {
    let mut session = use_session();

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            onclick: move |_| {
                session.logout();
                navigator().push(Route::Login {});
            },
            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
            "Logout"
        }
    }
}
