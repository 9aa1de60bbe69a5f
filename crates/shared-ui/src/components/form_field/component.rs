use dioxus::prelude::*;

/// Labelled form row: a `label` tied to `html_for` above its control.
#[component]
pub fn FormField(html_for: String, label: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-field",
            label { class: "form-label", r#for: "{html_for}", "{label}" }
            {children}
        }
    }
}
