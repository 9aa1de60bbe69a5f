pub mod admin;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod register;

use dioxus::prelude::*;
use shared_types::Session;
use shared_ui::Loading;

use crate::auth::use_session;
use admin::AdminPanel;
use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(AuthGuard)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/admin")]
        AdminPanel {},
    #[end_layout]
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Where `route` must send the visitor instead, given `session`.
///
/// `/dashboard` needs any token, `/admin` needs the admin role, and `/`
/// forwards to whichever of `/dashboard` or `/login` applies. Every other
/// route is public.
pub fn redirect_for(route: &Route, session: &Session) -> Option<Route> {
    match route {
        Route::Dashboard {} if !session.is_authenticated() => Some(Route::Login {}),
        Route::AdminPanel {} if !session.is_admin() => Some(Route::Login {}),
        Route::Home {} if session.is_authenticated() => Some(Route::Dashboard {}),
        Route::Home {} => Some(Route::Login {}),
        _ => None,
    }
}

/// Guard layout for the protected routes.
///
/// Reads the session on every render, so logging out anywhere below the
/// guard bounces the visitor to /login.
#[component]
fn AuthGuard() -> Element {
    let session = use_session().current();
    let route: Route = use_route();

    match redirect_for(&route, &session) {
        Some(target) => {
            tracing::debug!(from = %route, to = %target, "Redirecting");
            navigator().replace(target);
            rsx! {
                Loading { message: "Redirecting to login..." }
            }
        }
        None => rsx! { Outlet::<Route> {} },
    }
}

/// `/` has no view of its own.
#[component]
fn Home() -> Element {
    let session = use_session().current();
    let target = redirect_for(&Route::Home {}, &session).unwrap_or(Route::Login {});
    navigator().replace(target);

    rsx! {
        Loading {}
    }
}
