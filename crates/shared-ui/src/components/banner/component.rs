use dioxus::prelude::*;

/// Tone of an inline banner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BannerKind {
    #[default]
    Error,
    Success,
}

impl BannerKind {
    fn class(&self) -> &'static str {
        match self {
            BannerKind::Error => "banner banner-error",
            BannerKind::Success => "banner banner-success",
        }
    }
}

/// Inline message shown above a view's content. Renders nothing when
/// `message` is `None`.
#[component]
pub fn Banner(#[props(default)] kind: BannerKind, message: Option<String>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: kind.class(), role: "alert", "{message}" }
    }
}
