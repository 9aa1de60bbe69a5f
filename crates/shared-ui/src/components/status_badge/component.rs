use dioxus::prelude::*;

/// Small pill for role and status strings. The text is shown verbatim;
/// `data-value` lets the stylesheet color known values.
#[component]
pub fn StatusBadge(value: String) -> Element {
    let key = value.to_lowercase();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "status-badge", "data-value": "{key}", "{value}" }
    }
}
