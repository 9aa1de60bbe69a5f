use client::{ApiClient, SessionStore};
use dioxus::prelude::*;

mod auth;
mod browser_store;
mod components;
mod config;
mod routes;
use auth::SessionContext;
use browser_store::LocalStorage;
use routes::Route;

const BASE_CSS: Asset = asset!("/assets/base.css");

fn main() {
    let config = config::load();
    if let Err(e) = dioxus::logger::init(config::log_level(config)) {
        eprintln!("Failed to initialise logger: {e}");
    }
    tracing::info!(base_url = %config.api.base_url, "Starting account portal");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = config::get();

    let api = use_context_provider(|| ApiClient::new(config.api.base_url.clone()));
    let mut session = use_context_provider(SessionContext::new);

    // Routing waits until the stored session has been read back, so a
    // returning user is never bounced to /login on first paint.
    let mut restored = use_signal(|| false);
    use_future(move || async move {
        let store = SessionStore::new(LocalStorage::load().await);
        session.restore(store);
        restored.set(true);
    });

    use_future(move || {
        let api = api.clone();
        async move {
            match api.health().await {
                Ok(health) => tracing::info!(status = %health.status, "Backend reachable"),
                Err(e) => tracing::warn!(error = %e, "Backend health check failed"),
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BASE_CSS }
        div { class: "app",
            if restored() {
                shared_ui::ToastProvider {
                    Router::<Route> {}
                }
            } else {
                shared_ui::Loading {}
            }
        }
    }
}
