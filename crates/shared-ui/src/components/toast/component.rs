use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

/// Hosts the toast stack. Wrap the router in this once, at the root.
#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}

/// Show the acknowledgement that follows a successful action.
pub fn acknowledge(toasts: Toasts, message: impl Into<String>) {
    toasts.success(message.into(), ToastOptions::new());
}
