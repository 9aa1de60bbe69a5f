use dioxus::prelude::*;

/// Top bar of a signed-in view: title on the left, actions on the right.
#[component]
pub fn PageHeader(title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            h1 { class: "page-title", "{title}" }
            div { class: "page-actions", {children} }
        }
    }
}
