use dioxus::prelude::*;

/// Placeholder shown while a view waits for its first response.
#[component]
pub fn Loading(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loading", role: "status",
            div { class: "loading-pulse" }
            p { "{message}" }
        }
    }
}
